use crate::calculus::Monomial;
use smol_str::SmolStr;
use std::ops::Range;
use thiserror::Error;

/// Strip every bit of whitespace from an expression.
///
/// Spans in a [`ParseError`] refer to this normalized form.
pub(crate) fn normalize(src: &str) -> String {
    src.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a whitespace-free expression into its terms, in order.
///
/// The grammar is deliberately small:
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := [coefficient] ["x" ["^" power]]
/// ```
///
/// A `-` always starts a new (negated) term, so something like `x^-2` is
/// read as the terms `x^` and `-2`.
pub(crate) fn parse_terms(
    src: &str,
) -> impl Iterator<Item = Result<Monomial, ParseError>> + '_ {
    Terms::new(src).map(|term| term.parse())
}

/// Read a whitespace-free expression without rejecting anything.
///
/// Numbers are read the forgiving way: a coefficient is whatever number
/// its text starts with (`3y` is `3`), an exponent is truncated to its
/// leading digits (`^2.5` is `2`), and text after the `x` which doesn't
/// start with `^` leaves the power at `1`. Only text with no number to
/// read at all comes out as `NaN`.
pub(crate) fn read_terms(src: &str) -> impl Iterator<Item = LooseTerm> + '_ {
    Terms::new(src).map(|term| {
        let loose = term.read();

        if let Err(e) = term.parse() {
            log::warn!("Read \"{}\" as {:?} ({})", term.text, loose, e);
        }

        loose
    })
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("\"{text}\" isn't a valid coefficient (at {}..{})", .span.start, .span.end)]
    InvalidCoefficient {
        text: SmolStr,
        span: Range<usize>,
        /// The power of the term the coefficient belongs to.
        power: u32,
    },
    #[error("\"{text}\" isn't a valid exponent (at {}..{})", .span.start, .span.end)]
    InvalidExponent { text: SmolStr, span: Range<usize> },
}

/// Splits an expression into the text for each of its terms.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Terms<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Terms<'a> {
    pub(crate) fn new(src: &'a str) -> Self { Terms { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn skip_until_delimiter(&mut self) {
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }

            self.advance();
        }
    }
}

impl<'a> Iterator for Terms<'a> {
    type Item = Term<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.cursor;

            match self.peek()? {
                // a "+" only separates terms, and repeated ones are ignored
                '+' => {
                    self.advance();
                    continue;
                },
                // while a "-" belongs to the term it starts
                '-' => {
                    self.advance();
                },
                _ => {},
            }

            self.skip_until_delimiter();

            let span = start..self.cursor;
            log::trace!("Found term {:?} at {:?}", &self.src[span.clone()], span);

            return Some(Term {
                text: &self.src[span.clone()],
                span,
            });
        }
    }
}

fn is_delimiter(c: char) -> bool { c == '+' || c == '-' }

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Term<'a> {
    pub(crate) text: &'a str,
    pub(crate) span: Range<usize>,
}

impl<'a> Term<'a> {
    pub(crate) fn parse(&self) -> Result<Monomial, ParseError> {
        match self.text.find('x') {
            Some(index) => {
                let power = self.power(index + 1)?;
                let coefficient = self.coefficient(index, power)?;
                Ok(Monomial::new(coefficient, power))
            },
            None => self.constant().map(Monomial::constant),
        }
    }

    /// A term without an `x` must be a number on its own, so a lone `-`
    /// isn't accepted.
    fn constant(&self) -> Result<f64, ParseError> {
        self.text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidCoefficient {
                text: self.text.into(),
                span: self.span.clone(),
                power: 0,
            })
    }

    /// Parse everything before `end` as a coefficient, where a missing
    /// number means `1`.
    fn coefficient(&self, end: usize, power: u32) -> Result<f64, ParseError> {
        let text = &self.text[..end];

        let value = match text {
            "" | "+" => Some(1.0),
            "-" => Some(-1.0),
            _ => text.parse::<f64>().ok().filter(|v| v.is_finite()),
        };

        value.ok_or_else(|| ParseError::InvalidCoefficient {
            text: text.into(),
            span: self.span.start..self.span.start + end,
            power,
        })
    }

    /// Parse everything from `start` onwards as `"^" power`, where a missing
    /// power means `1`.
    fn power(&self, start: usize) -> Result<u32, ParseError> {
        let text = &self.text[start..];

        if text.is_empty() {
            return Ok(1);
        }

        text.strip_prefix('^')
            .filter(|digits| digits.chars().all(|c| c.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| ParseError::InvalidExponent {
                text: text.into(),
                span: self.span.start + start..self.span.end,
            })
    }

    pub(crate) fn read(&self) -> LooseTerm {
        let index = match self.text.find('x') {
            Some(index) => index,
            None => {
                return LooseTerm {
                    coefficient: float_prefix(self.text),
                    power: Some(0),
                }
            },
        };

        let coefficient = match &self.text[..index] {
            "" | "+" => 1.0,
            "-" => -1.0,
            other => float_prefix(other),
        };

        // anything from a second "x" onwards is ignored
        let after = &self.text[index + 1..];
        let after = after.find('x').map_or(after, |end| &after[..end]);

        let power = match after.strip_prefix('^') {
            Some(digits) => integer_prefix(digits),
            None => Some(1),
        };

        LooseTerm { coefficient, power }
    }
}

/// A term as read by [`read_terms()`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LooseTerm {
    pub(crate) coefficient: f64,
    /// `None` when there were no digits after the `^`.
    pub(crate) power: Option<u32>,
}

impl LooseTerm {
    /// The derivative, written the same way a [`Monomial`] would be.
    pub(crate) fn derivative(&self) -> Option<String> {
        match self.power {
            Some(power) => Monomial::new(self.coefficient, power)
                .derivative()
                .map(|d| d.to_string()),
            None => Some(String::from("NaNx^NaN")),
        }
    }
}

fn count_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// The number at the start of `text`, or `NaN` if it doesn't start with one.
fn float_prefix(text: &str) -> f64 {
    let sign = match text.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };

    if text[sign..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut end = sign + count_digits(&text[sign..]);
    let mut seen_digits = end > sign;

    if text[end..].starts_with('.') {
        let fraction = count_digits(&text[end + 1..]);
        if seen_digits || fraction > 0 {
            end += 1 + fraction;
            seen_digits = true;
        }
    }

    if !seen_digits {
        return f64::NAN;
    }

    let exponent = text[end..].strip_prefix(|c: char| c == 'e' || c == 'E');

    if let Some(exponent) = exponent {
        let exponent_sign = match exponent.as_bytes().first() {
            Some(b'+') | Some(b'-') => 1,
            _ => 0,
        };
        let digits = count_digits(&exponent[exponent_sign..]);

        if digits > 0 {
            end += 1 + exponent_sign + digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// The leading digits of `text`, if there are any (and they fit).
fn integer_prefix(text: &str) -> Option<u32> {
    text[..count_digits(text)].parse().ok()
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    macro_rules! tokenize_test {
        ($name:ident, $src:expr, [$($should_be:expr),* $(,)?]) => {
            #[test]
            fn $name() {
                let got: Vec<&str> =
                    Terms::new($src).map(|term| term.text).collect();

                let should_be: Vec<&str> = vec![$($should_be),*];
                assert_eq!(got, should_be);
            }
        };
    }

    tokenize_test!(empty, "", []);
    tokenize_test!(single_constant, "5", ["5"]);
    tokenize_test!(single_term, "3x^2", ["3x^2"]);
    tokenize_test!(sum, "2x^3+4x", ["2x^3", "4x"]);
    tokenize_test!(difference, "2x^3+4x-7", ["2x^3", "4x", "-7"]);
    tokenize_test!(leading_minus, "-3x^2", ["-3x^2"]);
    tokenize_test!(leading_plus, "+x", ["x"]);
    tokenize_test!(plus_minus, "x+-1", ["x", "-1"]);
    tokenize_test!(repeated_plus, "x++1", ["x", "1"]);
    tokenize_test!(double_minus, "--3", ["-", "-3"]);
    tokenize_test!(negative_exponent, "x^-2", ["x^", "-2"]);
    tokenize_test!(trailing_delimiter, "x+", ["x"]);

    #[test]
    fn spans_point_into_the_source() {
        let src = "2x^3+4x-7";

        let spans: Vec<_> = Terms::new(src).map(|term| term.span).collect();

        assert_eq!(spans, vec![0..4, 5..7, 7..9]);
    }

    #[test]
    fn whitespace_is_removed() {
        assert_eq!(normalize(" 2x ^ 3 +\t4x - 7 "), "2x^3+4x-7");
    }
}
