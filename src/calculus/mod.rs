//! Derivatives of single-variable polynomials written as a sum of monomials,
//! e.g. `2x^3 + 4x - 7`.
//!
//! This is a small textual differentiator, not a computer algebra system.
//! There is no operator precedence, no parentheses, no other variables, and
//! `-` always starts a new term (so negative exponents can't be written).

mod monomial;
mod parse;

pub use monomial::{Monomial, Polynomial};
pub use parse::ParseError;

use crate::{
    config::CalculusConfig,
    random::{random_int, RandomSource},
};
use log::debug;

/// Differentiate an expression, reporting any term that can't be parsed.
pub fn try_differentiate(src: &str) -> Result<Polynomial, ParseError> {
    src.parse::<Polynomial>().map(|poly| poly.derivative())
}

/// Differentiate an expression, always producing *something* to show.
///
/// Malformed terms don't abort the whole expression. Each term is read for
/// whatever numbers it starts with, so `3yx^2` is treated as `3x^2` and
/// `x^2.5` as `x^2`, while text after the `x` that isn't an exponent is
/// ignored (`2xy` is `2x`). A coefficient with no number at all is `NaN`,
/// which still makes a malformed constant disappear, and an `^` without
/// digits is written as `NaNx^NaN`. Use [`try_differentiate()`] to get an
/// error instead.
///
/// Empty input, or input which only contains constants, differentiates to
/// `"0"`.
pub fn differentiate(src: &str) -> String {
    let normalized = parse::normalize(src);
    let derived =
        parse::read_terms(&normalized).filter_map(|term| term.derivative());

    monomial::join_terms(derived)
}

/// The (single line) solution for differentiating an expression.
pub fn solve_calculus(src: &str) -> Vec<String> {
    vec![format!("d/dx ({}) = {}", src, differentiate(src))]
}

/// Differentiate `c·x^n`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculusProblem {
    pub expression: String,
    pub answer: String,
}

impl CalculusProblem {
    pub fn new(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let answer = differentiate(&expression);

        CalculusProblem { expression, answer }
    }

    pub fn generate<R>(rng: &mut R, config: &CalculusConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let coefficient =
            random_int(rng, config.coefficient.lo, config.coefficient.hi);
        let power = random_int(rng, config.power.lo, config.power.hi);

        let problem =
            CalculusProblem::new(format!("{}x^{}", coefficient, power));
        debug!("Generated a calculus problem, \"{}\"", problem.expression);

        problem
    }

    pub fn solve(&self) -> Vec<String> { solve_calculus(&self.expression) }

    /// Answers are compared ignoring whitespace and case, so `12X^3` and
    /// `12x ^ 3` are both accepted.
    pub fn check(&self, answer: &str) -> bool {
        fn normalize(s: &str) -> String {
            parse::normalize(s).to_lowercase()
        }

        normalize(answer) == normalize(&self.answer)
    }
}
