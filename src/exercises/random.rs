//! Bounded random integers

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use tracing::debug;

/// Uniform integer in `low..=high`
pub fn random_integer<G: Rng>(
    rng: &mut G,
    low: i64,
    high: i64,
) -> Result<i64, ExerciseError> {
    if low > high {
        return Err(ExerciseError::EmptyRange { low, high });
    }
    Ok(rng.gen_range(low..=high))
}

/// Seeded when `seed` is given, otherwise drawn from the OS
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run_random<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    seed: Option<u64>,
) -> Result<(), ExerciseError> {
    let low = prompter.get_int("Low? ")?;
    let high = prompter.get_int("High? ")?;
    let count = prompter.get_int("How many? ")?;
    if low > high {
        return Err(ExerciseError::EmptyRange { low, high });
    }
    debug!(low, high, count, seeded = seed.is_some(), "drawing integers");
    let mut rng = make_rng(seed);
    for _ in 0..count.max(0) {
        let k = random_integer(&mut rng, low, high)?;
        writeln!(prompter.writer(), "{}", k)?;
    }
    Ok(())
}
