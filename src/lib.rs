//! Randomly generated practice problems with worked, step-by-step
//! solutions.
//!
//! Every generator takes a [`RandomSource`] and its section of a
//! [`GeneratorConfig`], so problems can be reproduced by seeding the source
//! (see [`random::seeded()`]). Each also has a no-argument form using the
//! thread-local RNG and the default ranges. Solutions are returned as a list
//! of lines, meant to be displayed one per line.
//!
//! ```rust
//! use mathgen::{random, LinearEquation, GeneratorConfig};
//!
//! let mut rng = random::seeded(42);
//! let config = GeneratorConfig::default();
//!
//! let equation = LinearEquation::generate(&mut rng, &config.linear);
//! let steps = equation.solve();
//!
//! assert_eq!(steps.last().unwrap(), &format!("Resultado: x = {}", equation.x()));
//! assert!(equation.check(&equation.x().to_string()));
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod arithmetic;
pub mod calculus;
pub mod config;
pub mod equations;
pub mod geometry;
mod number;
pub mod problem;
pub mod random;

pub use arithmetic::{solve_arithmetic, ArithmeticProblem, Operator};
pub use calculus::{
    differentiate, solve_calculus, try_differentiate, CalculusProblem,
    Monomial, ParseError, Polynomial,
};
pub use config::{Bounds, ConfigError, GeneratorConfig};
pub use equations::{
    generate_linear_equation, generate_quadratic_equation, solve_linear,
    solve_quadratic, LinearEquation, QuadraticEquation,
};
pub use geometry::{
    circle_area, generate_circle_problem, solve_circle_area,
    solve_rectangle_area, CircleProblem, RectangleProblem,
    CIRCLE_AREA_TOLERANCE,
};
pub use problem::{Problem, ProblemError, Topic};
pub use random::{random_int, RandomSource};
