// primer: introductory programming exercises

use std::io;

use clap::Parser;
use tracing::debug;

use primer::cli::{Cli, Commands};
use primer::config::Settings;
use primer::errors::AppError;
use primer::exercises::Exercise;
use primer::logger;
use primer::prompt::Prompter;
use primer::ui::{self, App};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    logger::init(&settings.log_level, settings.prefer_level, &settings.log_target)?;
    debug!(?settings, "settings resolved");

    match &cli.command {
        Commands::List => {
            for exercise in Exercise::catalog() {
                println!("{:<10} {}", exercise.name(), exercise.summary());
            }
        }
        Commands::Tui => {
            ui::run_workbench(App::new(Exercise::catalog()))?;
        }
        command => {
            if let Some(exercise) = command.exercise() {
                let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
                exercise.run(&mut prompter)?;
            }
        }
    }

    Ok(())
}
