use crate::{
    config::LinearConfig,
    random::{random_int, RandomSource},
};
use log::debug;
use std::fmt::{self, Display, Formatter};

/// An equation of the form `ax + b = c`.
///
/// The constructor guarantees `c == a*x + b`, so `x` is always the (integer)
/// solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearEquation {
    a: i64,
    b: i64,
    c: i64,
    x: i64,
    text: String,
}

impl LinearEquation {
    /// Create the equation whose solution is `x`.
    pub fn new(a: i64, b: i64, x: i64) -> Self {
        debug_assert_ne!(a, 0, "The coefficient of x can't be zero");

        let c = a * x + b;
        let sign = if b >= 0 { '+' } else { '-' };
        let text = format!("{}x {} {} = {}", a, sign, b.abs(), c);

        LinearEquation { a, b, c, x, text }
    }

    /// Generate a random equation using the ranges from a [`LinearConfig`].
    pub fn generate<R>(rng: &mut R, config: &LinearConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let a = random_int(rng, config.coefficient.lo, config.coefficient.hi);
        let b = random_int(rng, config.offset.lo, config.offset.hi);
        let x = random_int(rng, config.solution.lo, config.solution.hi);

        let equation = LinearEquation::new(a, b, x);
        debug!("Generated a linear equation, \"{}\"", equation);

        equation
    }

    pub fn a(&self) -> i64 { self.a }

    pub fn b(&self) -> i64 { self.b }

    pub fn c(&self) -> i64 { self.c }

    /// The solution.
    pub fn x(&self) -> i64 { self.x }

    pub fn text(&self) -> &str { &self.text }

    /// The worked solution, one line per step.
    pub fn solve(&self) -> Vec<String> {
        let LinearEquation { a, b, c, x, .. } = *self;
        let mut steps = vec![format!("Equação: {}", self.text)];

        if b != 0 {
            let sign = if b > 0 { '-' } else { '+' };
            steps.push(format!(
                "1. Mova a constante: {}x = {} {} {}",
                a,
                c,
                sign,
                b.abs()
            ));
            steps.push(format!("   {}x = {}", a, c - b));
        }

        if a != 1 {
            steps.push(format!("2. Isole 'x': x = {} / {}", c - b, a));
        }

        steps.push(format!("Resultado: x = {}", x));

        steps
    }

    /// Did the learner find the solution?
    pub fn check(&self, answer: &str) -> bool {
        super::parse_integer(answer) == Some(self.x)
    }
}

impl Display for LinearEquation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Generate a random [`LinearEquation`] using the thread-local RNG.
pub fn generate_linear_equation() -> LinearEquation {
    LinearEquation::generate(&mut rand::thread_rng(), &LinearConfig::default())
}

/// The worked solution for a [`LinearEquation`].
pub fn solve_linear(equation: &LinearEquation) -> Vec<String> {
    equation.solve()
}
