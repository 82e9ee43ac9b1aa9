//! Equations with guaranteed integer solutions, and the worked steps for
//! solving them.

mod linear;
mod quadratic;

pub use linear::{generate_linear_equation, solve_linear, LinearEquation};
pub use quadratic::{
    generate_quadratic_equation, solve_quadratic, QuadraticEquation,
};

/// Parse an integer answer the way a learner would type it.
pub(crate) fn parse_integer(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}
