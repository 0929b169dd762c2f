//! headline CLI - document outline inference tool
//!
//! Consumes page-dump JSON files produced by an extraction front end (page
//! geometry plus positioned word fragments) and writes outline JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use headline::{outline_json_str, to_json, JsonFormat};

#[derive(Parser)]
#[command(name = "headline")]
#[command(version)]
#[command(about = "Infer document outlines from positioned-text dumps", long_about = None)]
struct Cli {
    /// Input page-dump JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every page-dump JSON file in a directory
    Batch {
        /// Directory containing page-dump JSON files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory for outline JSON files
        #[arg(short, long, value_name = "DIR", default_value = "outline")]
        output: PathBuf,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            input,
            output,
            compact,
        }) => cmd_batch(&input, &output, format_for(compact)),
        None => {
            if let Some(input) = cli.input {
                cmd_single(&input, cli.output.as_deref(), format_for(cli.compact))
            } else {
                println!("{}", "Usage: headline <FILE> [-o OUTPUT]".yellow());
                println!("       headline batch <DIR> [-o DIR]");
                println!("       headline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn format_for(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

/// Outline one page dump, writing to a file or stdout.
fn cmd_single(
    input: &Path,
    output: Option<&Path>,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let json = outline_file(input, format)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            println!(
                "{} {} -> {} ({:.2}s)",
                "Done:".green().bold(),
                input.display(),
                path.display(),
                started.elapsed().as_secs_f64()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Outline every `.json` page dump in a directory, in parallel.
///
/// Individual failures are reported and skipped; the run only fails as a
/// whole when the directories cannot be read or created.
fn cmd_batch(
    input_dir: &Path,
    output_dir: &Path,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        println!(
            "{} no .json files found in {}",
            "Warning:".yellow().bold(),
            input_dir.display()
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    log::info!("found {} page dump(s) in {}", files.len(), input_dir.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Documents are independent; process them in parallel.
    let failures: Vec<(PathBuf, String)> = files
        .par_iter()
        .filter_map(|path| {
            let outcome = process_into_dir(path, output_dir, format);
            pb.inc(1);
            match outcome {
                Ok(()) => None,
                Err(e) => Some((path.clone(), e.to_string())),
            }
        })
        .collect();

    pb.finish_and_clear();

    let processed = files.len() - failures.len();
    println!(
        "{} {} of {} file(s) -> {}",
        "Done:".green().bold(),
        processed,
        files.len(),
        output_dir.display()
    );
    for (path, message) in &failures {
        eprintln!(
            "{} {}: {}",
            "Failed:".red().bold(),
            path.display(),
            message
        );
    }

    Ok(())
}

/// Outline one dump into `<output_dir>/<stem>.json`.
fn process_into_dir(
    input: &Path,
    output_dir: &Path,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let json = outline_file(input, format)?;

    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let output = output_dir.join(format!("{}.json", stem));
    fs::write(&output, &json)?;

    log::info!(
        "processed {} in {:.2}s",
        input.display(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn outline_file(input: &Path, format: JsonFormat) -> Result<String, Box<dyn std::error::Error>> {
    let pages = fs::read_to_string(input)?;
    let result = outline_json_str(&pages)?;
    Ok(to_json(&result, format)?)
}
