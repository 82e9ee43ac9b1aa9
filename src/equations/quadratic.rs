use crate::{
    config::QuadraticConfig,
    number::format_number,
    random::{chance, random_int, RandomSource},
};
use arrayvec::ArrayVec;
use log::debug;
use std::fmt::{self, Display, Formatter};

/// An equation of the form `ax² + bx + c = 0`, built from its two integer
/// roots.
///
/// The constructor guarantees `b == -a*(r1 + r2)` and `c == a*r1*r2`, with
/// the roots stored in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticEquation {
    a: i64,
    b: i64,
    c: i64,
    roots: [i64; 2],
    text: String,
}

impl QuadraticEquation {
    /// Create the equation `a(x - first)(x - second) = 0`.
    pub fn from_roots(a: i64, first: i64, second: i64) -> Self {
        debug_assert_ne!(a, 0, "A quadratic needs an x² term");

        let b = -a * (first + second);
        let c = a * first * second;
        let roots = if first <= second {
            [first, second]
        } else {
            [second, first]
        };
        let text = format_quadratic(a, b, c);

        QuadraticEquation {
            a,
            b,
            c,
            roots,
            text,
        }
    }

    /// Generate a random equation using the ranges from a
    /// [`QuadraticConfig`].
    ///
    /// When both roots land on the same value the second one gets nudged
    /// upwards, unless [`QuadraticConfig::distinct_root_probability`] says
    /// to keep the repeated root.
    pub fn generate<R>(rng: &mut R, config: &QuadraticConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let a = random_int(rng, config.leading.lo, config.leading.hi);
        let first = random_int(rng, config.roots.lo, config.roots.hi);
        let mut second = random_int(rng, config.roots.lo, config.roots.hi);

        if first == second && chance(rng, config.distinct_root_probability) {
            second =
                first + random_int(rng, config.root_bump.lo, config.root_bump.hi);
        }

        let equation = QuadraticEquation::from_roots(a, first, second);
        debug!(
            "Generated a quadratic equation, \"{}\", with roots {:?}",
            equation, equation.roots
        );

        equation
    }

    pub fn a(&self) -> i64 { self.a }

    pub fn b(&self) -> i64 { self.b }

    pub fn c(&self) -> i64 { self.c }

    /// Both roots in ascending order. A repeated root appears twice.
    pub fn roots(&self) -> [i64; 2] { self.roots }

    /// The roots with any duplicates removed.
    pub fn distinct_roots(&self) -> ArrayVec<[i64; 2]> {
        let mut roots = ArrayVec::new();
        roots.push(self.roots[0]);

        if self.roots[1] != self.roots[0] {
            roots.push(self.roots[1]);
        }

        roots
    }

    pub fn text(&self) -> &str { &self.text }

    /// `Δ = b² - 4ac`, calculated from the coefficients.
    pub fn discriminant(&self) -> i64 { self.b * self.b - 4 * self.a * self.c }

    /// The worked solution (using Bhaskara's formula), one line per step.
    ///
    /// A repeated root (`Δ = 0`) gets a single `x = -b / 2a` line and a
    /// one-element result, rather than identical `x'` and `x''` branches
    /// and `Resultado: {r, r}`.
    pub fn solve(&self) -> Vec<String> {
        let QuadraticEquation { a, b, c, .. } = *self;
        let delta = self.discriminant();
        let sqrt_delta = format_number((delta as f64).sqrt());
        let two_a = 2 * a;

        let mut steps = vec![
            format!("Equação: {}", self.text),
            format!("1. Identifique os coeficientes: a={}, b={}, c={}", a, b, c),
            String::from("2. Calcule o delta: Δ = b² - 4ac"),
            format!("   Δ = ({})² - 4 * {} * {} = {}", b, a, c, delta),
            String::from("3. Aplique a fórmula: x = (-b ± √Δ) / 2a"),
            format!("   x = (-({}) ± √{}) / (2 * {})", b, delta, a),
            format!("   x = ({} ± {}) / {}", -b, sqrt_delta, two_a),
        ];

        match self.distinct_roots().as_slice() {
            &[low, high] => {
                // adding √Δ moves towards +∞ only when 2a is positive
                let (plus, minus) = if a > 0 { (high, low) } else { (low, high) };
                steps.push(format!(
                    "x' = ({} + {}) / {} = {}",
                    -b, sqrt_delta, two_a, plus
                ));
                steps.push(format!(
                    "x'' = ({} - {}) / {} = {}",
                    -b, sqrt_delta, two_a, minus
                ));
                steps.push(format!("Resultado: {{{}, {}}}", low, high));
            },
            &[root] => {
                steps.push(format!("x = {} / {} = {}", -b, two_a, root));
                steps.push(format!("Resultado: {{{}}}", root));
            },
            _ => unreachable!("There is always at least one root"),
        }

        steps
    }

    /// Did the learner find every root?
    ///
    /// The answer is a comma-separated list of integers in any order. A
    /// repeated root may be given once or twice.
    pub fn check(&self, answer: &str) -> bool {
        let parsed: Option<Vec<i64>> =
            answer.split(',').map(super::parse_integer).collect();

        match parsed {
            Some(mut roots) => {
                roots.sort_unstable();
                roots.dedup();
                roots.as_slice() == self.distinct_roots().as_slice()
            },
            None => false,
        }
    }
}

impl Display for QuadraticEquation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Render `ax² + bx + c = 0`, skipping any terms with a zero coefficient and
/// leaving out the `1` in `1x²` or `-1x`.
fn format_quadratic(a: i64, b: i64, c: i64) -> String {
    let mut lhs = String::new();

    for &(coefficient, power) in &[(a, "x²"), (b, "x"), (c, "")] {
        if coefficient == 0 {
            continue;
        }

        let sign = if coefficient > 0 { '+' } else { '-' };
        lhs.push(' ');
        lhs.push(sign);
        lhs.push(' ');

        if coefficient.abs() != 1 || power.is_empty() {
            lhs.push_str(&coefficient.abs().to_string());
        }
        lhs.push_str(power);
    }

    let lhs = lhs.trim_start();
    let lhs = if let Some(rest) = lhs.strip_prefix("+ ") {
        rest.to_string()
    } else if let Some(rest) = lhs.strip_prefix("- ") {
        format!("-{}", rest)
    } else {
        String::from("0")
    };

    format!("{} = 0", lhs)
}

/// Generate a random [`QuadraticEquation`] using the thread-local RNG.
pub fn generate_quadratic_equation() -> QuadraticEquation {
    QuadraticEquation::generate(
        &mut rand::thread_rng(),
        &QuadraticConfig::default(),
    )
}

/// The worked solution for a [`QuadraticEquation`].
pub fn solve_quadratic(equation: &QuadraticEquation) -> Vec<String> {
    equation.solve()
}
