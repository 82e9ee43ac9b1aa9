//! Tunable ranges and probabilities used by the problem generators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An inclusive range of integers, `[lo, hi]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub lo: i64,
    pub hi: i64,
}

impl Bounds {
    pub const fn new(lo: i64, hi: i64) -> Self { Bounds { lo, hi } }

    pub fn contains(self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    fn is_inverted(self) -> bool { self.lo > self.hi }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    /// The range `a` is drawn from. Must never include zero.
    pub coefficient: Bounds,
    pub offset: Bounds,
    pub solution: Bounds,
}

impl Default for LinearConfig {
    fn default() -> Self {
        LinearConfig {
            coefficient: Bounds::new(1, 10),
            offset: Bounds::new(-10, 10),
            solution: Bounds::new(-10, 10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadraticConfig {
    /// The range `a` is drawn from. Must never include zero.
    pub leading: Bounds,
    pub roots: Bounds,
    /// How far the second root gets pushed when both roots collide.
    pub root_bump: Bounds,
    /// How often a collision between the two roots gets pushed apart.
    ///
    /// Anything left over is the chance of keeping a repeated root.
    pub distinct_root_probability: f64,
}

impl Default for QuadraticConfig {
    fn default() -> Self {
        QuadraticConfig {
            leading: Bounds::new(1, 3),
            roots: Bounds::new(-5, 5),
            root_bump: Bounds::new(1, 3),
            distinct_root_probability: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub radius: Bounds,
    pub rectangle_side: Bounds,
    /// How far a circle's area may be from the exact value and still be
    /// accepted. Learners are taught `π ≈ 3.14`.
    pub circle_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            radius: Bounds::new(2, 15),
            rectangle_side: Bounds::new(2, 20),
            circle_tolerance: crate::geometry::CIRCLE_AREA_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub operand: Bounds,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        ArithmeticConfig {
            operand: Bounds::new(10, 100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculusConfig {
    pub coefficient: Bounds,
    pub power: Bounds,
}

impl Default for CalculusConfig {
    fn default() -> Self {
        CalculusConfig {
            coefficient: Bounds::new(2, 9),
            power: Bounds::new(2, 5),
        }
    }
}

/// Every knob the generators expose.
///
/// Missing keys fall back to their defaults when deserializing, so a config
/// file only needs to mention the values it wants to change.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub linear: LinearConfig,
    pub quadratic: QuadraticConfig,
    pub geometry: GeometryConfig,
    pub arithmetic: ArithmeticConfig,
    pub calculus: CalculusConfig,
}

impl GeneratorConfig {
    /// The settings used by the lesson screens, which ask for slightly
    /// bigger rectangles than the quick generator.
    pub fn lesson() -> Self {
        let mut config = GeneratorConfig::default();
        config.geometry.rectangle_side = Bounds::new(5, 20);
        config
    }

    /// Parse a [`GeneratorConfig`] from JSON and make sure it is usable.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("linear.coefficient", self.linear.coefficient),
            ("linear.offset", self.linear.offset),
            ("linear.solution", self.linear.solution),
            ("quadratic.leading", self.quadratic.leading),
            ("quadratic.roots", self.quadratic.roots),
            ("quadratic.root_bump", self.quadratic.root_bump),
            ("geometry.radius", self.geometry.radius),
            ("geometry.rectangle_side", self.geometry.rectangle_side),
            ("arithmetic.operand", self.arithmetic.operand),
            ("calculus.coefficient", self.calculus.coefficient),
            ("calculus.power", self.calculus.power),
        ];

        for &(name, bounds) in &ranges {
            if bounds.is_inverted() {
                return Err(ConfigError::InvalidBounds {
                    name,
                    bounds,
                    reason: "lower bound is greater than the upper bound",
                });
            }
        }

        let nonzero = [
            ("linear.coefficient", self.linear.coefficient),
            ("quadratic.leading", self.quadratic.leading),
        ];

        for &(name, bounds) in &nonzero {
            if bounds.contains(0) {
                return Err(ConfigError::InvalidBounds {
                    name,
                    bounds,
                    reason: "a leading coefficient can't be zero",
                });
            }
        }

        if self.calculus.power.lo < 0 {
            return Err(ConfigError::InvalidBounds {
                name: "calculus.power",
                bounds: self.calculus.power,
                reason: "powers can't be negative",
            });
        }

        let probability = self.quadratic.distinct_root_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability {
                name: "quadratic.distinct_root_probability",
                value: probability,
            });
        }

        let tolerance = self.geometry.circle_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance { value: tolerance });
        }

        Ok(())
    }
}

/// Errors that may occur while loading a [`GeneratorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to parse the config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid range for {name} ({}..={}): {reason}", .bounds.lo, .bounds.hi)]
    InvalidBounds {
        name: &'static str,
        bounds: Bounds,
        reason: &'static str,
    },
    #[error("{name} must be between 0 and 1, found {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("the circle tolerance must be a non-negative number, found {value}")]
    InvalidTolerance { value: f64 },
}
