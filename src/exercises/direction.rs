//! Compass directions and their opposites

use crate::errors::ExerciseError;
use crate::prompt::Prompter;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::error;

/// The four cardinal directions, numbered 0 to 3 in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    West,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::South,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::West => "west",
            Direction::South => "south",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Direction {
    type Error = ExerciseError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::West),
            3 => Ok(Direction::South),
            _ => Err(illegal(raw.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = ExerciseError;

    /// Accepts a name, its initial, or a raw value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<i64>() {
            return Direction::try_from(raw);
        }
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            "south" | "s" => Ok(Direction::South),
            _ => Err(illegal(s.to_string())),
        }
    }
}

fn illegal(value: String) -> ExerciseError {
    error!(value = %value, "illegal direction value");
    ExerciseError::IllegalDirection(value)
}

/// Opposite of the direction with raw value `raw`
pub fn opposite_of_raw(raw: i64) -> Result<Direction, ExerciseError> {
    Direction::try_from(raw).map(Direction::opposite)
}

pub fn run_direction<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), ExerciseError> {
    let input = prompter.get_line("Direction (north, east, west, south or 0-3)? ")?;
    let dir: Direction = input.parse()?;
    writeln!(
        prompter.writer(),
        "The opposite of {} is {}.",
        dir,
        dir.opposite()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_opposites() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
        assert_eq!(Direction::South.opposite(), Direction::North);
    }

    #[test]
    fn test_no_direction_is_its_own_opposite() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(opposite_of_raw(0).unwrap(), Direction::South);
        assert_eq!(opposite_of_raw(2).unwrap(), Direction::East);
        assert!(matches!(
            opposite_of_raw(4),
            Err(ExerciseError::IllegalDirection(v)) if v == "4"
        ));
        assert!(opposite_of_raw(-1).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" w ".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("3".parse::<Direction>().unwrap(), Direction::South);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_run_direction() {
        let mut p = Prompter::new("east\n".as_bytes(), Vec::new());
        run_direction(&mut p).unwrap();
        let out = String::from_utf8(p.into_writer()).unwrap();
        assert!(out.ends_with("The opposite of east is west.\n"));
    }

    proptest! {
        #[test]
        fn opposite_is_an_involution(index in 0usize..4) {
            let dir = Direction::ALL[index];
            prop_assert_eq!(dir.opposite().opposite(), dir);
        }

        #[test]
        fn raw_values_outside_range_are_rejected(raw in prop_oneof![i64::MIN..0, 4..i64::MAX]) {
            prop_assert!(Direction::try_from(raw).is_err());
        }
    }
}
