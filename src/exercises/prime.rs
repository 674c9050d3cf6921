//! Trial-division primality

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "Input number to check primacy: ";

/// Primality by trial division with odd divisors up to the square root
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // i <= n / i is i * i <= n without overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Call `f` with the argument 3
pub fn apply_to_three<T>(f: fn(i64) -> T) -> T {
    f(3)
}

pub fn run_check_prime<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), ExerciseError> {
    let n = prompter.get_int(PROMPT)?;
    let prime = is_prime(n);
    debug!(n, prime, "checked primality");
    writeln!(prompter.writer(), "Primacy of {}: {}", n, prime)?;
    Ok(())
}
