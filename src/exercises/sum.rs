//! Running totals: a sentinel-terminated accumulator and a two-number adder

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

pub const DEFAULT_SENTINEL: i64 = -1;

/// Read integers until `sentinel` and return their total.
///
/// The sentinel itself is not added.
pub fn sum_until_sentinel<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    sentinel: i64,
) -> Result<i64, ExerciseError> {
    let mut total: i64 = 0;
    let mut count = 0usize;
    loop {
        let value = prompter.get_int("Next number?\n")?;
        if value == sentinel {
            break;
        }
        total = total.checked_add(value).ok_or(ExerciseError::Overflow)?;
        count += 1;
        trace!(value, total, "accumulated");
    }
    debug!(count, total, "reached sentinel");
    Ok(total)
}

pub fn run_sum<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    sentinel: i64,
) -> Result<(), ExerciseError> {
    let total = sum_until_sentinel(prompter, sentinel)?;
    writeln!(prompter.writer(), "The total is {}.", total)?;
    Ok(())
}

/// Read a real and an integer and return their sum
pub fn add_two<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<f64, ExerciseError> {
    writeln!(prompter.writer(), "This program adds 2 numbers")?;
    let first = prompter.get_real("First num? ")?;
    let second = prompter.get_int("Second num? ")?;
    Ok(first + second as f64)
}

pub fn run_add_two<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), ExerciseError> {
    let total = add_two(prompter)?;
    writeln!(prompter.writer(), "The total is {}.", total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PromptError;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_sentinel_is_excluded() {
        let mut p = prompter("5\n3\n-1\n");
        assert_eq!(sum_until_sentinel(&mut p, DEFAULT_SENTINEL).unwrap(), 8);
    }

    #[test]
    fn test_immediate_sentinel() {
        let mut p = prompter("-1\n");
        assert_eq!(sum_until_sentinel(&mut p, DEFAULT_SENTINEL).unwrap(), 0);
    }

    #[test]
    fn test_custom_sentinel() {
        let mut p = prompter("4 -1 10 0\n");
        assert_eq!(sum_until_sentinel(&mut p, 0).unwrap(), 13);
    }

    #[test]
    fn test_missing_sentinel() {
        let mut p = prompter("1\n2\n");
        assert!(matches!(
            sum_until_sentinel(&mut p, DEFAULT_SENTINEL),
            Err(ExerciseError::Prompt(PromptError::EndOfInput))
        ));
    }

    #[test]
    fn test_overflow() {
        let input = format!("{} 1 -1\n", i64::MAX);
        let mut p = prompter(&input);
        assert!(matches!(
            sum_until_sentinel(&mut p, DEFAULT_SENTINEL),
            Err(ExerciseError::Overflow)
        ));
    }

    #[test]
    fn test_run_sum_output() {
        let mut p = prompter("5 3 -1\n");
        run_sum(&mut p, DEFAULT_SENTINEL).unwrap();
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(out.matches("Next number?\n").count(), 3);
        assert!(out.ends_with("The total is 8.\n"));
    }

    #[test]
    fn test_add_two() {
        let mut p = prompter("2.5\n4\n");
        assert_eq!(add_two(&mut p).unwrap(), 6.5);
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(out, "This program adds 2 numbers\nFirst num? Second num? ");
    }
}
