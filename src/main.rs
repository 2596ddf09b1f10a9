use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{self, BufRead};
use std::path::Path;

use keycase::cli::{Cli, Commands};
use keycase::config::Config;
use keycase::pipeline::{convert, convert_str};
use keycase::render::CaseStyle;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Convert {
            style,
            config,
            json,
            verbose,
            values,
        } => {
            run_convert(style.as_deref(), &config, json, verbose, values)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Run the convert command
fn run_convert(
    style: Option<&str>,
    config_path: &Path,
    json: bool,
    verbose: bool,
    values: Vec<String>,
) -> Result<()> {
    // Load configuration; a missing file just means defaults
    let config = Config::load_or_default(config_path)?;

    if verbose && config_path.exists() {
        println!("Loaded configuration from: {}", config_path.display());
    }

    // --style wins over the config file
    let style = match style {
        Some(name) => CaseStyle::parse(name)
            .with_context(|| format!("Unknown style: {name} (expected camel, kebab or dot)"))?,
        None => config.naming.style,
    };

    if verbose {
        println!("Target style: {}", style.name());
    }

    // Fall back to stdin when no values were given on the command line
    let values = if values.is_empty() {
        read_stdin_values()?
    } else {
        values
    };

    let mut converted_count = 0;

    for raw in &values {
        let converted = if json {
            let value: Value = serde_json::from_str(raw)
                .with_context(|| format!("Failed to parse JSON value: {raw}"))?;
            convert(&value, style)?
        } else {
            convert_str(raw, style)
        };

        println!(
            "{}{}{}",
            config.naming.prefix, converted, config.naming.suffix
        );
        converted_count += 1;
    }

    if verbose {
        println!("Converted {} values", converted_count);
    }

    Ok(())
}

/// Read newline-separated values from stdin
fn read_stdin_values() -> Result<Vec<String>> {
    let mut values = Vec::new();

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        values.push(line);
    }

    Ok(values)
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    // Check if file already exists
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    // Create default configuration
    let config = Config::default_config();

    // Save to file
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - style: default target style (camel, kebab or dot)");
    println!("  - prefix: literal text prepended to each converted value");
    println!("  - suffix: literal text appended to each converted value");

    Ok(())
}
