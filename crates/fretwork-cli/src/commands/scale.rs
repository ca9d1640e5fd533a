//! Scale command implementation
//!
//! Computes a single scale and prints it human-readable or as wire JSON.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use fretwork_scale::Scale;

/// Run the scale command
///
/// # Arguments
/// * `key` - Tonic key (sharp spellings only)
/// * `scale_type` - Scale type identifier
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on validation failure
pub fn run(key: &str, scale_type: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(key, scale_type)
    } else {
        run_human(key, scale_type)
    }
}

/// Run scale with machine-readable JSON output (the HTTP wire shape).
fn run_json(key: &str, scale_type: &str) -> Result<ExitCode> {
    match Scale::from_request(key, scale_type) {
        Ok(scale) => {
            println!("{}", serde_json::to_string(&scale)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let body = serde_json::json!({ "error": e.to_string() });
            println!("{}", serde_json::to_string(&body)?);
            Ok(ExitCode::from(1))
        }
    }
}

/// Run scale with human-readable (colored) output.
fn run_human(key: &str, scale_type: &str) -> Result<ExitCode> {
    let scale = match Scale::from_request(key, scale_type) {
        Ok(scale) => scale,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
    };

    println!(
        "{} {} {}",
        "Scale:".cyan().bold(),
        scale.tonic,
        scale_type.dimmed()
    );
    println!("{} {}", "Notes:".dimmed(), scale.scale_notes.join(" "));
    if let Some(blue) = &scale.blue_note {
        println!("{} {}", "Blue note:".dimmed(), blue);
    }

    Ok(ExitCode::SUCCESS)
}
