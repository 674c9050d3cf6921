// Integration tests for the exercises

use primer::errors::{ExerciseError, PromptError};
use primer::exercises::forest::Region;
use primer::exercises::pig_latin::{ArtifactPolicy, Translator};
use primer::exercises::Exercise;
use primer::prompt::Prompter;
use primer::transcript::Transcript;
use std::io::Cursor;

fn run(exercise: &Exercise, input: &str) -> (Result<(), ExerciseError>, Vec<String>) {
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Transcript::new());
    let result = exercise.run(&mut prompter);
    (result, prompter.into_writer().get_output())
}

#[test]
fn test_sum_of_sequence() {
    let (result, output) = run(&Exercise::Sum { sentinel: -1 }, "5\n3\n-1\n");
    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(output.last().map(String::as_str), Some("The total is 8."));
}

#[test]
fn test_sum_with_malformed_number() {
    let (result, _) = run(&Exercise::Sum { sentinel: -1 }, "5\nfive\n-1\n");
    assert!(matches!(
        result,
        Err(ExerciseError::Prompt(PromptError::Parse { .. }))
    ));
}

#[test]
fn test_add_two_numbers() {
    let (result, output) = run(&Exercise::AddTwo, "1.5 2\n");
    assert!(result.is_ok());
    assert_eq!(output[0], "This program adds 2 numbers");
    assert!(output[1].ends_with("The total is 3.5."));
}

#[test]
fn test_prime_and_composite() {
    let (_, output) = run(&Exercise::Prime, "7919\n");
    assert!(output[0].ends_with("Primacy of 7919: true"));

    let (_, output) = run(&Exercise::Prime, "7917\n");
    assert!(output[0].ends_with("Primacy of 7917: false"));
}

#[test]
fn test_temperature() {
    let exercise = Exercise::catalog()
        .into_iter()
        .find(|e| e.name() == "temp")
        .expect("temp in catalog");
    let (result, output) = run(&exercise, "100\n");
    assert!(result.is_ok());
    assert!(output[0].ends_with("100.0°C is 212.0°F."));
}

#[test]
fn test_forest_percentage() {
    let (result, output) = run(&Exercise::Forest, "Ohio\n100\n25\n");
    assert!(result.is_ok());
    assert!(output[0].ends_with("Ohio is 25.0% forested."));

    let region = Region::new("Ohio", 100.0, 25.0).unwrap();
    assert_eq!(region.forest_percent().unwrap(), 25.0);
}

#[test]
fn test_forest_zero_area() {
    let (result, _) = run(&Exercise::Forest, "Atlantis\n0\n10\n");
    assert!(matches!(result, Err(ExerciseError::ZeroArea)));
}

#[test]
fn test_direction_lookup() {
    let (result, output) = run(&Exercise::Direction, "south\n");
    assert!(result.is_ok());
    assert!(output[0].ends_with("The opposite of south is north."));

    let (result, _) = run(&Exercise::Direction, "7\n");
    assert!(matches!(result, Err(ExerciseError::IllegalDirection(_))));
}

#[test]
fn test_random_is_bounded_and_reproducible() {
    let exercise = Exercise::Random { seed: Some(2024) };
    let (result, first) = run(&exercise, "10 20 8\n");
    assert!(result.is_ok());
    let (_, second) = run(&exercise, "10 20 8\n");
    assert_eq!(first, second);

    // The first line holds the prompts and the first draw
    let draws: Vec<i64> = first
        .iter()
        .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(draws.len(), 8);
    assert!(draws.iter().all(|k| (10..=20).contains(k)));
}

#[test]
fn test_random_empty_range() {
    let (result, _) = run(&Exercise::Random { seed: Some(1) }, "5 1 3\n");
    assert!(matches!(
        result,
        Err(ExerciseError::EmptyRange { low: 5, high: 1 })
    ));
}

#[test]
fn test_pig_latin_sentence() {
    let (result, output) = run(
        &Exercise::PigLatin(Translator::default()),
        "the quick fox eats an apple\n",
    );
    assert!(result.is_ok());
    assert!(output[0].ends_with("ethay ickquay oxfay eatsway anway appleway"));
}

#[test]
fn test_pig_latin_legacy_artifact() {
    let translator = Translator::new(ArtifactPolicy::TrailingChar, true);
    let (_, output) = run(&Exercise::PigLatin(translator), "fox. apple.\n");
    assert!(output[0].ends_with("oxfay appleway"));
}

#[test]
fn test_end_of_input() {
    for exercise in Exercise::catalog() {
        let (result, _) = run(&exercise, "");
        assert!(
            matches!(result, Err(ExerciseError::Prompt(PromptError::EndOfInput))),
            "{} should fail on empty input, got {:?}",
            exercise.name(),
            result
        );
    }
}
