//! Fretwork - guitar scale generator.
//!
//! This binary computes scale note sequences for a tonic key and scale type,
//! either as a one-shot command or served over a minimal HTTP interface.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use fretwork_cli::commands;

/// Fretwork - Guitar Scale Generator
#[derive(Parser)]
#[command(name = "fretwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a scale for a tonic key and scale type
    Scale {
        /// Tonic key, sharp spellings only (e.g. C, F#, A#)
        #[arg(short, long)]
        key: String,

        /// Scale type (major, minor, pentatonic_major, pentatonic_minor, blues)
        #[arg(short = 't', long = "type")]
        scale_type: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP scale service
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = commands::serve::DEFAULT_PORT)]
        port: u16,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scale {
            key,
            scale_type,
            json,
        } => commands::scale::run(&key, &scale_type, json),
        Commands::Serve { port } => commands::serve::run(port),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
