//! The exercises
//!
//! Each submodule exposes its logic as plain functions plus a `run_*`
//! procedure that prompts for input through a [`Prompter`] and prints the
//! result. [`Exercise`] names every exercise together with its options so the
//! CLI and the workbench can run them the same way.
//!
//! - [`sum`]: sentinel-terminated accumulator and the two-number adder
//! - [`prime`]: trial-division primality
//! - [`temperature`]: Celsius / Fahrenheit conversion
//! - [`forest`]: forestation percentage of a region record
//! - [`direction`]: compass direction opposites
//! - [`random`]: bounded random integers
//! - [`pig_latin`]: pig latin line translation

pub mod direction;
pub mod forest;
pub mod pig_latin;
pub mod prime;
pub mod random;
pub mod sum;
pub mod temperature;

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use pig_latin::Translator;
use std::io::{BufRead, Write};
use temperature::Scale;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum Exercise {
    Sum { sentinel: i64 },
    AddTwo,
    Prime,
    Temperature { from: Scale },
    Forest,
    Direction,
    Random { seed: Option<u64> },
    PigLatin(Translator),
}

impl Exercise {
    /// Every exercise with default options, in menu order
    pub fn catalog() -> Vec<Exercise> {
        vec![
            Exercise::Sum {
                sentinel: sum::DEFAULT_SENTINEL,
            },
            Exercise::AddTwo,
            Exercise::Prime,
            Exercise::Temperature {
                from: Scale::Celsius,
            },
            Exercise::Forest,
            Exercise::Direction,
            Exercise::Random { seed: None },
            Exercise::PigLatin(Translator::default()),
        ]
    }

    /// Subcommand name
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Sum { .. } => "sum",
            Exercise::AddTwo => "add",
            Exercise::Prime => "prime",
            Exercise::Temperature { .. } => "temp",
            Exercise::Forest => "forest",
            Exercise::Direction => "direction",
            Exercise::Random { .. } => "random",
            Exercise::PigLatin(_) => "pig-latin",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Exercise::Sum { .. } => "Add numbers until the sentinel value",
            Exercise::AddTwo => "Add a real number and an integer",
            Exercise::Prime => "Check whether a number is prime",
            Exercise::Temperature { .. } => "Convert between Celsius and Fahrenheit",
            Exercise::Forest => "Forestation percentage of a region",
            Exercise::Direction => "Opposite of a compass direction",
            Exercise::Random { .. } => "Draw random integers in a range",
            Exercise::PigLatin(_) => "Translate a line into pig latin",
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), ExerciseError> {
        info!(exercise = self.name(), "running exercise");
        match self {
            Exercise::Sum { sentinel } => sum::run_sum(prompter, *sentinel),
            Exercise::AddTwo => sum::run_add_two(prompter),
            Exercise::Prime => prime::run_check_prime(prompter),
            Exercise::Temperature { from } => temperature::run_temperature(prompter, *from),
            Exercise::Forest => forest::run_forest(prompter),
            Exercise::Direction => direction::run_direction(prompter),
            Exercise::Random { seed } => random::run_random(prompter, *seed),
            Exercise::PigLatin(translator) => pig_latin::run_pig_latin(prompter, translator),
        }
    }
}
