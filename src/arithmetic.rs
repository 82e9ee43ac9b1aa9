//! Addition and subtraction drills.

use crate::{
    config::ArithmeticConfig,
    random::{random_int, RandomSource},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Operator {
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Plus => left + right,
            Operator::Minus => left - right,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Plus),
            '-' => Ok(Operator::Minus),
            other => Err(other),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Work out `a op b`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArithmeticProblem {
    pub a: i64,
    pub b: i64,
    pub op: Operator,
}

impl ArithmeticProblem {
    pub fn new(a: i64, b: i64, op: Operator) -> Self {
        ArithmeticProblem { a, b, op }
    }

    /// Pick two operands and, with even odds, an operator.
    pub fn generate<R>(rng: &mut R, config: &ArithmeticConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let a = random_int(rng, config.operand.lo, config.operand.hi);
        let b = random_int(rng, config.operand.lo, config.operand.hi);
        let op = if rng.next_f64() > 0.5 {
            Operator::Plus
        } else {
            Operator::Minus
        };

        let problem = ArithmeticProblem::new(a, b, op);
        debug!("Generated an arithmetic problem, \"{} {} {}\"", a, op, b);

        problem
    }

    pub fn answer(&self) -> i64 { self.op.apply(self.a, self.b) }

    pub fn solve(&self) -> Vec<String> {
        solve_arithmetic(self.a, self.b, self.op)
    }

    pub fn check(&self, answer: &str) -> bool {
        crate::equations::parse_integer(answer) == Some(self.answer())
    }
}

/// The (single line) solution for `a op b`.
pub fn solve_arithmetic(a: i64, b: i64, op: Operator) -> Vec<String> {
    vec![format!("{} {} {} = {}", a, op, b, op.apply(a, b))]
}
