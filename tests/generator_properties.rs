//! Property-based tests for the problem generators.
//!
//! Every generator is driven by a seeded RNG, so each property holds for
//! whatever equations, shapes, or drills the seed happens to produce.

use approx::assert_relative_eq;
use mathgen::{
    circle_area, differentiate, random, solve_circle_area, solve_rectangle_area,
    CircleProblem, GeneratorConfig, LinearEquation, Monomial, Polynomial, Problem,
    QuadraticEquation, Topic,
};
use proptest::prelude::*;

fn arb_topic() -> impl Strategy<Value = Topic> {
    (0..Topic::ALL.len()).prop_map(|i| Topic::ALL[i])
}

fn arb_monomial() -> impl Strategy<Value = Monomial> {
    (-20i32..=20, 0u32..=6)
        .prop_map(|(coefficient, power)| Monomial::new(f64::from(coefficient), power))
}

proptest! {
    #[test]
    fn linear_equations_are_consistent(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let eq = LinearEquation::generate(&mut random::seeded(seed), &config.linear);

        prop_assert_ne!(eq.a(), 0);
        prop_assert_eq!(eq.c(), eq.a() * eq.x() + eq.b());

        let steps = eq.solve();
        let expected = format!("x = {}", eq.x());
        prop_assert!(steps.last().unwrap().ends_with(&expected));
        prop_assert_eq!(steps, eq.solve());
    }

    #[test]
    fn quadratic_discriminant_agrees_with_the_roots(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let eq = QuadraticEquation::generate(&mut random::seeded(seed), &config.quadratic);
        let [low, high] = eq.roots();

        prop_assert_ne!(eq.a(), 0);
        prop_assert!(low <= high);
        prop_assert_eq!(eq.discriminant(), eq.a() * eq.a() * (high - low) * (high - low));

        let sqrt = (eq.discriminant() as f64).sqrt();
        prop_assert_eq!(sqrt, (eq.a() * (high - low)) as f64);
    }

    #[test]
    fn quadratic_solution_prints_the_roots(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let eq = QuadraticEquation::generate(&mut random::seeded(seed), &config.quadratic);
        let [low, high] = eq.roots();

        let steps = eq.solve();
        let result = steps.last().unwrap();

        if low == high {
            prop_assert_eq!(result, &format!("Resultado: {{{}}}", low));
        } else {
            prop_assert_eq!(result, &format!("Resultado: {{{}, {}}}", low, high));
            let plus = &steps[steps.len() - 3];
            let minus = &steps[steps.len() - 2];
            let expected_plus = format!("= {}", high);
            let expected_minus = format!("= {}", low);
            prop_assert!(plus.ends_with(&expected_plus));
            prop_assert!(minus.ends_with(&expected_minus));
        }
    }

    #[test]
    fn circle_solutions_match_the_generated_area(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let problem = CircleProblem::generate(&mut random::seeded(seed), &config.geometry);

        prop_assert_eq!(problem.area, std::f64::consts::PI * problem.radius as f64 * problem.radius as f64);
        prop_assert_eq!(problem.area, circle_area(problem.radius));

        let steps = solve_circle_area(problem.radius);
        let expected = format!("{:.2}", problem.area);
        prop_assert!(steps[2].ends_with(&expected));
    }

    #[test]
    fn rectangle_solution(base in 1i64..100, height in 1i64..100) {
        let steps = solve_rectangle_area(base, height);

        prop_assert_eq!(steps.len(), 2);
        prop_assert_eq!(&steps[1], &format!("Área = {} * {} = {}", base, height, base * height));
    }

    #[test]
    fn random_int_of_a_single_value(seed in any::<u64>(), value in -1000i64..1000) {
        prop_assert_eq!(random::random_int(&mut random::seeded(seed), value, value), value);
    }

    #[test]
    fn problems_accept_their_own_answers(seed in any::<u64>(), topic in arb_topic()) {
        let problem = Problem::generate(topic, &mut random::seeded(seed), &GeneratorConfig::default());
        let answer = problem.answer();

        prop_assert!(problem.check(answer.trim_start_matches('~')));
        prop_assert_eq!(problem.solution(), problem.solution());
    }

    #[test]
    fn string_and_typed_differentiation_agree(terms in proptest::collection::vec(arb_monomial(), 1..6)) {
        let poly = Polynomial::new(terms);
        let src = poly.to_string();

        let typed: Polynomial = src.parse().unwrap();
        prop_assert_eq!(&typed, &poly);
        prop_assert_eq!(differentiate(&src), poly.derivative().to_string());
    }
}

#[test]
fn circle_areas_round_like_the_learners_expect() {
    for radius in 2..=15 {
        let steps = solve_circle_area(radius);
        let shown: f64 = steps[2].rsplit(' ').next().unwrap().parse().unwrap();

        assert_relative_eq!(shown, circle_area(radius), epsilon = 0.0051);
    }
}

#[test]
fn no_arg_generators_use_the_default_ranges() {
    for _ in 0..100 {
        let linear = mathgen::generate_linear_equation();
        let quadratic = mathgen::generate_quadratic_equation();
        let circle = mathgen::generate_circle_problem();

        assert!((1..=10).contains(&linear.a()));
        assert!((1..=3).contains(&quadratic.a()));
        assert!((2..=15).contains(&circle.radius));
    }
}
