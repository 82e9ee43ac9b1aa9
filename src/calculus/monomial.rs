use crate::{
    calculus::{parse, ParseError},
    number::format_number,
};
use std::{
    fmt::{self, Display, Formatter},
    iter::FromIterator,
    str::FromStr,
};

/// A single `c·x^n` term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monomial {
    pub coefficient: f64,
    pub power: u32,
}

impl Monomial {
    pub const fn new(coefficient: f64, power: u32) -> Self {
        Monomial { coefficient, power }
    }

    pub const fn constant(value: f64) -> Self { Monomial::new(value, 0) }

    pub fn is_constant(&self) -> bool { self.power == 0 }

    /// Apply the power rule, `d/dx c·x^n = c·n·x^(n-1)`.
    ///
    /// Constants have no derivative, so they return `None`.
    pub fn derivative(&self) -> Option<Monomial> {
        if self.is_constant() {
            return None;
        }

        Some(Monomial::new(
            self.coefficient * f64::from(self.power),
            self.power - 1,
        ))
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let coefficient = format_number(self.coefficient);

        match self.power {
            0 => write!(f, "{}", coefficient),
            1 => write!(f, "{}x", coefficient),
            power => write!(f, "{}x^{}", coefficient, power),
        }
    }
}

/// A sum of [`Monomial`]s, kept in the order they were written.
///
/// Terms are never combined or simplified, so `x + x` stays as two terms.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polynomial {
    terms: Vec<Monomial>,
}

impl Polynomial {
    pub fn new(terms: Vec<Monomial>) -> Self { Polynomial { terms } }

    pub fn terms(&self) -> &[Monomial] { &self.terms }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Differentiate term by term, dropping any constants.
    pub fn derivative(&self) -> Polynomial {
        self.terms.iter().filter_map(Monomial::derivative).collect()
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        Polynomial {
            terms: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = parse::normalize(s);
        parse::parse_terms(&normalized).collect()
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_terms(self.terms.iter().map(ToString::to_string)))
    }
}

/// Join rendered terms with `" + "`, turning `"+ -"` into `"- "` so negative
/// terms read naturally. No terms at all is written as `0`.
pub(crate) fn join_terms<I>(terms: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let terms: Vec<String> = terms.into_iter().collect();

    if terms.is_empty() {
        String::from("0")
    } else {
        terms.join(" + ").replace("+ -", "- ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let inputs = vec![
            (Monomial::constant(4.0), "4"),
            (Monomial::constant(-7.5), "-7.5"),
            (Monomial::new(6.0, 1), "6x"),
            (Monomial::new(1.0, 1), "1x"),
            (Monomial::new(-6.0, 2), "-6x^2"),
            (Monomial::new(-0.0, 3), "0x^3"),
        ];

        for (term, should_be) in inputs {
            let got = term.to_string();
            assert_eq!(got, should_be);
        }
    }

    #[test]
    fn power_rule() {
        let inputs = vec![
            (Monomial::new(3.0, 2), Some(Monomial::new(6.0, 1))),
            (Monomial::new(2.0, 3), Some(Monomial::new(6.0, 2))),
            (Monomial::new(4.0, 1), Some(Monomial::constant(4.0))),
            (Monomial::new(2.5, 1), Some(Monomial::constant(2.5))),
            (Monomial::constant(7.0), None),
        ];

        for (term, should_be) in inputs {
            let got = term.derivative();
            assert_eq!(got, should_be);
        }
    }

    #[test]
    fn polynomial_derivative_drops_constants() {
        let poly = Polynomial::new(vec![
            Monomial::new(2.0, 3),
            Monomial::new(4.0, 1),
            Monomial::constant(-7.0),
        ]);

        let got = poly.derivative();

        assert_eq!(
            got,
            Polynomial::new(vec![Monomial::new(6.0, 2), Monomial::constant(4.0)])
        );
        assert_eq!(got.to_string(), "6x^2 + 4");
    }

    #[test]
    fn negative_terms_read_naturally() {
        let poly = Polynomial::new(vec![
            Monomial::new(-1.0, 2),
            Monomial::new(-3.0, 1),
            Monomial::constant(-2.0),
        ]);

        assert_eq!(poly.to_string(), "-1x^2 - 3x - 2");
    }

    #[test]
    fn empty_polynomial_is_zero() {
        assert_eq!(Polynomial::default().to_string(), "0");
    }

    #[test]
    fn parse_from_str() {
        let got: Polynomial = "3x^2 - x + 1".parse().unwrap();

        assert_eq!(
            got.terms(),
            &[
                Monomial::new(3.0, 2),
                Monomial::new(-1.0, 1),
                Monomial::constant(1.0),
            ]
        );
    }

    #[test]
    fn parse_errors_are_reported() {
        let got = "3x^2 + 2y".parse::<Polynomial>();

        assert!(got.is_err());
    }
}
