use crate::exercises::pig_latin::{ArtifactPolicy, Translator};
use crate::exercises::sum::DEFAULT_SENTINEL;
use crate::exercises::temperature::Scale;
use crate::exercises::Exercise;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "primer", version, about = "Introductory programming exercises")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log level (error, warn, info, debug, trace); overrides RUST_LOG"
    )]
    pub log_level: Option<String>,
    #[arg(long, global = true, help = "Append logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add numbers until the sentinel value
    Sum {
        #[arg(long, default_value_t = DEFAULT_SENTINEL, allow_hyphen_values = true)]
        sentinel: i64,
    },
    /// Add a real number and an integer
    Add,
    /// Check whether a number is prime
    Prime,
    /// Convert between Celsius and Fahrenheit
    Temp {
        #[arg(long, value_enum, default_value_t = Scale::Celsius)]
        from: Scale,
    },
    /// Forestation percentage of a region
    Forest,
    /// Opposite of a compass direction
    Direction,
    /// Draw random integers in a range
    Random {
        #[arg(long, help = "Seed for a reproducible sequence")]
        seed: Option<u64>,
    },
    /// Translate a line into pig latin
    PigLatin {
        #[arg(long, default_value_t = false, help = "Drop the final character of every word")]
        legacy_artifact: bool,
        #[arg(long, default_value_t = false, help = "Count the u in qu as a vowel")]
        no_qu_cluster: bool,
    },
    /// List the exercises
    List,
    /// Open the interactive workbench
    Tui,
}

impl Commands {
    /// The exercise this command runs, if it runs one
    pub fn exercise(&self) -> Option<Exercise> {
        let exercise = match self {
            Commands::Sum { sentinel } => Exercise::Sum {
                sentinel: *sentinel,
            },
            Commands::Add => Exercise::AddTwo,
            Commands::Prime => Exercise::Prime,
            Commands::Temp { from } => Exercise::Temperature { from: *from },
            Commands::Forest => Exercise::Forest,
            Commands::Direction => Exercise::Direction,
            Commands::Random { seed } => Exercise::Random { seed: *seed },
            Commands::PigLatin {
                legacy_artifact,
                no_qu_cluster,
            } => {
                let artifact = if *legacy_artifact {
                    ArtifactPolicy::TrailingChar
                } else {
                    ArtifactPolicy::None
                };
                Exercise::PigLatin(Translator::new(artifact, !*no_qu_cluster))
            }
            Commands::List | Commands::Tui => return None,
        };
        Some(exercise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pig_latin_flags() {
        let cli = Cli::parse_from(["primer", "pig-latin", "--legacy-artifact"]);
        assert_eq!(
            cli.command.exercise(),
            Some(Exercise::PigLatin(Translator::new(
                ArtifactPolicy::TrailingChar,
                true
            )))
        );
    }

    #[test]
    fn test_negative_sentinel() {
        let cli = Cli::parse_from(["primer", "sum", "--sentinel", "-5"]);
        assert_eq!(cli.command.exercise(), Some(Exercise::Sum { sentinel: -5 }));
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::parse_from(["primer", "prime", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(Cli::parse_from(["primer", "list"]).command.exercise().is_none());
    }

    #[test]
    fn test_command_parsing_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
