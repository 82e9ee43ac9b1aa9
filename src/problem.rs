//! A single entry point for generating, presenting, and marking a problem
//! from any topic.

use crate::{
    arithmetic::ArithmeticProblem,
    calculus::CalculusProblem,
    config::GeneratorConfig,
    equations::{LinearEquation, QuadraticEquation},
    geometry::{CircleProblem, RectangleProblem},
    random::RandomSource,
};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// The kinds of problem that can be generated.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Arithmetic,
    LinearEquation,
    QuadraticEquation,
    RectangleArea,
    CircleArea,
    Calculus,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Arithmetic,
        Topic::LinearEquation,
        Topic::QuadraticEquation,
        Topic::RectangleArea,
        Topic::CircleArea,
        Topic::Calculus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Arithmetic => "arithmetic",
            Topic::LinearEquation => "linear_equation",
            Topic::QuadraticEquation => "quadratic_equation",
            Topic::RectangleArea => "rectangle_area",
            Topic::CircleArea => "circle_area",
            Topic::Calculus => "calculus",
        }
    }

    /// How much experience a correct answer is worth.
    pub fn reward(self) -> u32 {
        match self {
            Topic::Arithmetic => 5,
            Topic::LinearEquation => 8,
            Topic::QuadraticEquation => 12,
            Topic::RectangleArea => 7,
            Topic::CircleArea => 9,
            Topic::Calculus => 15,
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Topic {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.name() == s)
            .ok_or_else(|| ProblemError::UnknownTopic { name: s.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    #[error("\"{name}\" isn't a known topic")]
    UnknownTopic { name: SmolStr },
}

/// A generated problem, ready to be shown to a learner.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Arithmetic(ArithmeticProblem),
    Linear(LinearEquation),
    Quadratic(QuadraticEquation),
    Rectangle(RectangleProblem),
    Circle(CircleProblem),
    Calculus(CalculusProblem),
}

impl Problem {
    pub fn generate<R>(topic: Topic, rng: &mut R, config: &GeneratorConfig) -> Self
    where
        R: RandomSource + ?Sized,
    {
        match topic {
            Topic::Arithmetic => Problem::Arithmetic(
                ArithmeticProblem::generate(rng, &config.arithmetic),
            ),
            Topic::LinearEquation => {
                Problem::Linear(LinearEquation::generate(rng, &config.linear))
            },
            Topic::QuadraticEquation => Problem::Quadratic(
                QuadraticEquation::generate(rng, &config.quadratic),
            ),
            Topic::RectangleArea => Problem::Rectangle(
                RectangleProblem::generate(rng, &config.geometry),
            ),
            Topic::CircleArea => {
                Problem::Circle(CircleProblem::generate(rng, &config.geometry))
            },
            Topic::Calculus => {
                Problem::Calculus(CalculusProblem::generate(rng, &config.calculus))
            },
        }
    }

    pub fn topic(&self) -> Topic {
        match self {
            Problem::Arithmetic(_) => Topic::Arithmetic,
            Problem::Linear(_) => Topic::LinearEquation,
            Problem::Quadratic(_) => Topic::QuadraticEquation,
            Problem::Rectangle(_) => Topic::RectangleArea,
            Problem::Circle(_) => Topic::CircleArea,
            Problem::Calculus(_) => Topic::Calculus,
        }
    }

    /// The question, as it should be shown to the learner.
    pub fn prompt(&self) -> String {
        match self {
            Problem::Arithmetic(p) => format!("{} {} {} = ?", p.a, p.op, p.b),
            Problem::Linear(eq) => format!("Resolva: {}", eq),
            Problem::Quadratic(eq) => format!("Encontre as raízes de: {}", eq),
            Problem::Rectangle(p) => format!(
                "Área de um retângulo com base {} e altura {}:",
                p.base(),
                p.height()
            ),
            Problem::Circle(p) => format!(
                "Área de um círculo com raio {} (use π ≈ 3.14):",
                p.radius
            ),
            Problem::Calculus(p) => format!("d/dx ({}) = ?", p.expression),
        }
    }

    /// The worked solution, one line per step.
    pub fn solution(&self) -> Vec<String> {
        match self {
            Problem::Arithmetic(p) => p.solve(),
            Problem::Linear(eq) => eq.solve(),
            Problem::Quadratic(eq) => eq.solve(),
            Problem::Rectangle(p) => p.solve(),
            Problem::Circle(p) => p.solve(),
            Problem::Calculus(p) => p.solve(),
        }
    }

    /// The expected answer, formatted for display.
    pub fn answer(&self) -> String {
        match self {
            Problem::Arithmetic(p) => p.answer().to_string(),
            Problem::Linear(eq) => eq.x().to_string(),
            Problem::Quadratic(eq) => {
                let [low, high] = eq.roots();
                format!("{}, {}", low, high)
            },
            Problem::Rectangle(p) => p.answer().to_string(),
            Problem::Circle(p) => format!("~{:.2}", p.area),
            Problem::Calculus(p) => p.answer.clone(),
        }
    }

    /// Mark an answer using the default tolerances.
    pub fn check(&self, answer: &str) -> bool {
        self.check_with(answer, &GeneratorConfig::default())
    }

    pub fn check_with(&self, answer: &str, config: &GeneratorConfig) -> bool {
        match self {
            Problem::Arithmetic(p) => p.check(answer),
            Problem::Linear(eq) => eq.check(answer),
            Problem::Quadratic(eq) => eq.check(answer),
            Problem::Rectangle(p) => p.check(answer),
            Problem::Circle(p) => {
                p.check_within(answer, config.geometry.circle_tolerance)
            },
            Problem::Calculus(p) => p.check(answer),
        }
    }

    pub fn reward(&self) -> u32 { self.topic().reward() }

    /// The message shown after an answer has been marked.
    pub fn feedback(&self, correct: bool) -> String {
        match (correct, self) {
            (true, _) => format!("Correto! +{} XP", self.reward()),
            (false, Problem::Quadratic(_)) => {
                format!("Errado. As raízes são {}", self.answer())
            },
            (false, _) => format!("Errado. A resposta é {}", self.answer()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arithmetic::Operator, random::seeded};

    #[test]
    fn topic_names_round_trip() {
        for &topic in &Topic::ALL {
            let got: Topic = topic.name().parse().unwrap();
            assert_eq!(got, topic);
            assert_eq!(topic.to_string(), topic.name());
        }
    }

    #[test]
    fn unknown_topics_are_an_error() {
        let got = "logic".parse::<Topic>().unwrap_err();

        assert_eq!(
            got,
            ProblemError::UnknownTopic {
                name: "logic".into()
            }
        );
        assert_eq!(got.to_string(), "\"logic\" isn't a known topic");
    }

    #[test]
    fn topics_serialize_with_snake_case_names() {
        let got = serde_json::to_string(&Topic::QuadraticEquation).unwrap();

        assert_eq!(got, "\"quadratic_equation\"");
    }

    #[test]
    fn generated_problems_have_the_requested_topic() {
        let mut rng = seeded(2024);
        let config = GeneratorConfig::default();

        for &topic in &Topic::ALL {
            let problem = Problem::generate(topic, &mut rng, &config);

            assert_eq!(problem.topic(), topic);
            assert!(!problem.solution().is_empty());
            assert!(!problem.prompt().is_empty());
        }
    }

    #[test]
    fn every_problem_accepts_its_own_answer() {
        let mut rng = seeded(17);
        let config = GeneratorConfig::default();

        for _ in 0..50 {
            for &topic in &Topic::ALL {
                let problem = Problem::generate(topic, &mut rng, &config);
                let answer = problem.answer();
                let answer = answer.trim_start_matches('~');

                assert!(problem.check(answer), "{:?} {:?}", problem, answer);
            }
        }
    }

    #[test]
    fn prompts() {
        let arithmetic =
            Problem::Arithmetic(ArithmeticProblem::new(12, 7, Operator::Minus));
        let linear = Problem::Linear(LinearEquation::new(2, 3, 4));
        let circle = Problem::Circle(CircleProblem::new(5));

        assert_eq!(arithmetic.prompt(), "12 - 7 = ?");
        assert_eq!(linear.prompt(), "Resolva: 2x + 3 = 11");
        assert_eq!(
            circle.prompt(),
            "Área de um círculo com raio 5 (use π ≈ 3.14):"
        );
    }

    #[test]
    fn feedback() {
        let linear = Problem::Linear(LinearEquation::new(2, 3, 4));
        let quadratic =
            Problem::Quadratic(QuadraticEquation::from_roots(1, 5, -2));
        let circle = Problem::Circle(CircleProblem::new(1));

        assert_eq!(linear.feedback(true), "Correto! +8 XP");
        assert_eq!(linear.feedback(false), "Errado. A resposta é 4");
        assert_eq!(quadratic.feedback(false), "Errado. As raízes são -2, 5");
        assert_eq!(circle.feedback(false), "Errado. A resposta é ~3.14");
    }

    #[test]
    fn configured_tolerance_is_used() {
        let circle = Problem::Circle(CircleProblem::new(10));
        let mut config = GeneratorConfig::default();
        config.geometry.circle_tolerance = 0.5;

        assert!(!circle.check("314"));
        assert!(circle.check_with("314", &config));
    }
}
