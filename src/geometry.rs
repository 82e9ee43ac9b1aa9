//! Area problems for rectangles and circles.

use crate::{
    config::GeometryConfig,
    random::{random_int, RandomSource},
};
use euclid::default::Size2D;
use log::debug;
use std::f64::consts::PI;

/// How far an answer to a [`CircleProblem`] may be from the exact area.
///
/// Learners are taught to use `π ≈ 3.14`, so answers are compared with a
/// tolerance instead of exactly. This is the only inexact comparison made
/// when checking answers.
pub const CIRCLE_AREA_TOLERANCE: f64 = 0.1;

/// The exact area of a circle, `π·r²`.
pub fn circle_area(radius: i64) -> f64 {
    let radius = radius as f64;
    PI * radius * radius
}

/// Find the area of a circle with a whole-number radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleProblem {
    pub radius: i64,
    /// The exact area, calculated with full precision π.
    pub area: f64,
}

impl CircleProblem {
    pub fn new(radius: i64) -> Self {
        CircleProblem {
            radius,
            area: circle_area(radius),
        }
    }

    pub fn generate<R>(rng: &mut R, config: &GeometryConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let radius = random_int(rng, config.radius.lo, config.radius.hi);
        let problem = CircleProblem::new(radius);
        debug!("Generated a circle problem with radius {}", problem.radius);

        problem
    }

    pub fn solve(&self) -> Vec<String> { solve_circle_area(self.radius) }

    /// Check an answer using the default [`CIRCLE_AREA_TOLERANCE`].
    pub fn check(&self, answer: &str) -> bool {
        self.check_within(answer, CIRCLE_AREA_TOLERANCE)
    }

    pub fn check_within(&self, answer: &str, tolerance: f64) -> bool {
        match answer.trim().parse::<f64>() {
            Ok(value) => (value - self.area).abs() < tolerance,
            Err(_) => false,
        }
    }
}

/// Find the area of a rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectangleProblem {
    pub size: Size2D<i64>,
}

impl RectangleProblem {
    pub fn new(base: i64, height: i64) -> Self {
        RectangleProblem {
            size: Size2D::new(base, height),
        }
    }

    pub fn generate<R>(rng: &mut R, config: &GeometryConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let side = config.rectangle_side;
        let base = random_int(rng, side.lo, side.hi);
        let height = random_int(rng, side.lo, side.hi);

        let problem = RectangleProblem::new(base, height);
        debug!("Generated a {}x{} rectangle problem", base, height);

        problem
    }

    pub fn base(&self) -> i64 { self.size.width }

    pub fn height(&self) -> i64 { self.size.height }

    pub fn answer(&self) -> i64 { self.size.area() }

    pub fn solve(&self) -> Vec<String> {
        solve_rectangle_area(self.base(), self.height())
    }

    pub fn check(&self, answer: &str) -> bool {
        crate::equations::parse_integer(answer) == Some(self.answer())
    }
}

/// Generate a random [`CircleProblem`] using the thread-local RNG.
pub fn generate_circle_problem() -> CircleProblem {
    CircleProblem::generate(&mut rand::thread_rng(), &GeometryConfig::default())
}

/// The worked solution for the area of a circle.
///
/// The area is recalculated from the radius rather than passed in.
pub fn solve_circle_area(radius: i64) -> Vec<String> {
    let area = circle_area(radius);

    vec![
        String::from("Fórmula: A = π * r²"),
        format!("1. Substitua o raio (r): A = π * {}²", radius),
        format!("2. Calcule o resultado: A ≈ {:.2}", area),
    ]
}

/// The worked solution for the area of a rectangle.
pub fn solve_rectangle_area(base: i64, height: i64) -> Vec<String> {
    let area = Size2D::new(base, height).area();

    vec![
        String::from("Área = base * altura"),
        format!("Área = {} * {} = {}", base, height, area),
    ]
}
