/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of torque-sim.
 *
 * torque-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * torque-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with torque-sim. If not, see <https://www.gnu.org/licenses/>.
 */

mod error;
mod report;
mod run_file;
mod settings;
mod templates;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::error::CliError;
use crate::run_file::RunFile;
use crate::settings::{GlobalSettings, OutputFormat};
use crate::templates::{template_for, TemplateKind};

const LOG_FILENAME: &'static str = "torque_sim.log";

#[derive(Parser, Debug)]
#[command(name = "torque-sim")]
#[command(version, about = "Engine force, torque, horsepower and road speed calculator", long_about = None)]
struct Cli {
    /// Mirror debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the outputs for a run file
    Run {
        file: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(short, long)]
        decimals: Option<u32>,
    },
    /// Tabulate torque, power and first gear speed across an RPM range
    Sweep {
        file: PathBuf,
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
        #[arg(long, default_value = "500")]
        step: f64,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print an example run file
    Template {
        #[arg(value_enum)]
        engine: TemplateKind,
    },
    /// Show or persist the effective settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Show,
    Write,
}

fn init_logging(settings: &GlobalSettings, verbose: bool) {
    let log_dir = settings.log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to init logging. Couldn't create {}. {}", log_dir.display(), e.to_string());
        return;
    }
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILENAME);
    let result = match verbose {
        true => {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender.and(std::io::stderr))
                .with_max_level(Level::DEBUG)
                .with_ansi(false)
                .compact()
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        false => {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };
    match result {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
        }
    }
}

fn execute(command: Command, settings: &GlobalSettings) -> Result<(), CliError> {
    match command {
        Command::Run { file, format, decimals } => {
            let run = RunFile::load_from_path(&file)?;
            let result = powertrain::compute(run.engine, run.gears, run.vehicle)?;
            match format.unwrap_or(settings.output_format()) {
                OutputFormat::Text => {
                    print!("{}", report::render_text(&result, decimals.unwrap_or(settings.decimal_places())))
                }
                OutputFormat::Json => println!("{}", report::render_json(&result)?),
            }
        }
        Command::Sweep { file, from, to, step, format } => {
            let run = RunFile::load_from_path(&file)?;
            let results = powertrain::sweep(&run.engine, &run.gears, &run.vehicle, from, to, step)?;
            info!("Swept {} points from {} to {} rpm", results.len(), from, to);
            match format.unwrap_or(settings.output_format()) {
                OutputFormat::Text => print!("{}", report::render_sweep(&results, settings.decimal_places())),
                OutputFormat::Json => println!("{}", report::render_json(&results)?),
            }
        }
        Command::Template { engine } => {
            print!("{}", template_for(engine.into()));
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => print!("{}", settings.to_toml()?),
            SettingsAction::Write => {
                let path = settings.write()?;
                info!("Settings written to {}", path.display());
                println!("Settings written to {}", path.display());
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match GlobalSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings, using defaults. {}", e.to_string());
            GlobalSettings::default()
        }
    };
    init_logging(&settings, cli.verbose);

    match execute(cli.command, &settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
