//! # Introduction
//!
//! `primer` is a set of introductory programming exercises. Each one prompts
//! for input, computes something small and prints the result:
//!
//! | exercise    | does                                             |
//! |-------------|--------------------------------------------------|
//! | `sum`       | adds integers until a sentinel value             |
//! | `add`       | adds a real number and an integer                |
//! | `prime`     | trial-division primality check                   |
//! | `temp`      | Celsius / Fahrenheit conversion                  |
//! | `forest`    | forestation percentage of a region record        |
//! | `direction` | opposite of a compass direction                  |
//! | `random`    | bounded random integers                          |
//! | `pig-latin` | pig latin translation of a line                  |
//!
//! ## Layout
//!
//! 1. [`prompt`] — the shared prompt-and-read helpers ([`prompt::Prompter`]).
//! 2. [`exercises`] — one module per exercise plus the [`exercises::Exercise`]
//!    registry used by both front ends.
//! 3. [`transcript`] — an in-memory terminal that captures what an exercise
//!    prints.
//! 4. [`ui`] — ratatui workbench that runs exercises against typed input.
//! 5. [`cli`], [`config`], [`logger`], [`errors`] — argument parsing, settings,
//!    tracing setup and error types for the `primer` binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod exercises;
pub mod logger;
pub mod prompt;
pub mod transcript;
pub mod ui;
