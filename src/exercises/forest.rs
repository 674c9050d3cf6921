//! Forestation percentage of a region

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::debug;

/// Longest region name the record holds
pub const MAX_NAME_LEN: usize = 9;

/// A region with its total and forested area. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    name: String,
    area: f64,
    forest: f64,
}

impl Region {
    pub fn new(name: impl Into<String>, area: f64, forest: f64) -> Result<Self, ExerciseError> {
        let name = name.into();
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ExerciseError::NameTooLong {
                name,
                max: MAX_NAME_LEN,
            });
        }
        Ok(Region { name, area, forest })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn forest(&self) -> f64 {
        self.forest
    }

    /// Forested area as a percentage of total area
    pub fn forest_percent(&self) -> Result<f64, ExerciseError> {
        if self.area == 0.0 {
            return Err(ExerciseError::ZeroArea);
        }
        Ok(100.0 * (self.forest / self.area))
    }
}

/// Prompt for a region and print its forestation percentage.
///
/// The name is read as a whole line, so it must be entered on its own line;
/// the two areas may follow on one line.
pub fn run_forest<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), ExerciseError> {
    let name = prompter.get_line("Region name? ")?;
    let area = prompter.get_real("Total area? ")?;
    let forest = prompter.get_real("Forested area? ")?;
    let region = Region::new(name.trim(), area, forest)?;
    debug!(
        name = region.name(),
        area = region.area(),
        forest = region.forest(),
        "read region"
    );
    let percent = region.forest_percent()?;
    writeln!(
        prompter.writer(),
        "{} is {:.1}% forested.",
        region.name(),
        percent
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_forested() {
        let region = Region::new("Vermont", 100.0, 25.0).unwrap();
        assert_eq!(region.forest_percent().unwrap(), 25.0);
    }

    #[test]
    fn test_fields_are_kept() {
        let region = Region::new("Oregon", 98_381.0, 47_000.0).unwrap();
        assert_eq!(region.name(), "Oregon");
        assert_eq!(region.area(), 98_381.0);
        assert_eq!(region.forest(), 47_000.0);
    }

    #[test]
    fn test_name_takes_the_whole_line() {
        let mut p = Prompter::new("Maine 100 25\n".as_bytes(), Vec::new());
        assert!(matches!(
            run_forest(&mut p),
            Err(ExerciseError::Prompt(crate::errors::PromptError::EndOfInput))
        ));
    }

    #[test]
    fn test_zero_area() {
        let region = Region::new("Nowhere", 0.0, 10.0).unwrap();
        assert!(matches!(region.forest_percent(), Err(ExerciseError::ZeroArea)));
    }

    #[test]
    fn test_name_limit() {
        assert!(Region::new("Wisconsin", 1.0, 1.0).is_ok());
        assert!(matches!(
            Region::new("Washington", 1.0, 1.0),
            Err(ExerciseError::NameTooLong { max: 9, .. })
        ));
    }

    #[test]
    fn test_run_forest() {
        let mut p = Prompter::new("Maine\n35385 17600\n".as_bytes(), Vec::new());
        run_forest(&mut p).unwrap();
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert!(out.ends_with("Maine is 49.7% forested.\n"), "got {:?}", out);
    }
}
