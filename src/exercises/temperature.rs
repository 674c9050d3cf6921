//! Celsius / Fahrenheit conversion

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use clap::ValueEnum;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Scale {
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
        }
    }

    pub fn other(self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }

    /// Convert a reading on this scale to the other one
    pub fn convert(self, degrees: f64) -> f64 {
        match self {
            Scale::Celsius => celsius_to_fahrenheit(degrees),
            Scale::Fahrenheit => fahrenheit_to_celsius(degrees),
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    9.0 / 5.0 * c + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn run_temperature<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    from: Scale,
) -> Result<(), ExerciseError> {
    let degrees = prompter.get_real(&format!("Temperature in {}? ", from.symbol()))?;
    let to = from.other();
    writeln!(
        prompter.writer(),
        "{:.1}{} is {:.1}{}.",
        degrees,
        from.symbol(),
        from.convert(degrees),
        to.symbol()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fixed_points() {
        assert!(approx(celsius_to_fahrenheit(0.0), 32.0));
        assert!(approx(celsius_to_fahrenheit(100.0), 212.0));
        assert!(approx(celsius_to_fahrenheit(-40.0), -40.0));
        assert!(approx(fahrenheit_to_celsius(212.0), 100.0));
    }

    #[test]
    fn test_conversions_invert() {
        for c in [-273.15, -12.5, 0.0, 37.0, 451.0] {
            assert!(approx(fahrenheit_to_celsius(celsius_to_fahrenheit(c)), c));
        }
    }

    #[test]
    fn test_run_from_fahrenheit() {
        let mut p = Prompter::new("98.6\n".as_bytes(), Vec::new());
        run_temperature(&mut p, Scale::Fahrenheit).unwrap();
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(out, "Temperature in °F? 98.6°F is 37.0°C.\n");
    }
}
