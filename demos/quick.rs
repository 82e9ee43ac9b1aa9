use mathgen::{random, GeneratorConfig, Problem, Topic};
use std::io::{BufRead, BufReader};

/// Reads lines of the form `<topic> [answer]` from stdin and prints a
/// freshly generated problem for each, marking the answer if one was given.
///
/// Pass a number as the first argument to get reproducible problems.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(seed) => seed.parse()?,
        None => rand::random(),
    };
    let mut rng = random::seeded(seed);
    let config = GeneratorConfig::default();

    let stdin = std::io::stdin();

    for line in BufReader::new(stdin.lock()).lines() {
        let line = line?;
        let mut words = line.splitn(2, char::is_whitespace);

        let topic: Topic = match words.next().unwrap_or_default().parse() {
            Ok(topic) => topic,
            Err(e) => {
                eprintln!("Unable to parse \"{}\": {}", line, e);
                continue;
            },
        };

        let problem = Problem::generate(topic, &mut rng, &config);
        println!("{}", problem.prompt());

        if let Some(answer) = words.next() {
            println!("  {}", problem.feedback(problem.check(answer)));
        }

        for step in problem.solution() {
            println!("  {}", step);
        }
    }

    Ok(())
}
