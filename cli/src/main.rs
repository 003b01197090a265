//! Renders inline SVG icons from the command line.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(unused_mut)]
#![warn(clippy::missing_docs_in_private_items)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::if_not_else)]
#![allow(clippy::ignored_unit_patterns)]
#![allow(clippy::needless_borrows_for_generic_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

mod logger;

use crate::logger::*;
use clap::{Parser, Subcommand, ValueEnum};
use inline_svg::*;
use std::path::{Path, PathBuf};
use std::process::exit;

/// Renders inline SVG icons from the command line.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// Icon subcommands.
    #[command(subcommand)]
    command: Commands,
}

/// Icon subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Renders the check mark icon used to denote a completed section.
    CheckMark {
        /// Class name to attach to the outer svg element. An empty string
        /// produces an empty class attribute. If neither this nor a request
        /// file is provided, no class attribute is emitted.
        #[arg(short, long, conflicts_with = "request")]
        class: Option<String>,
        /// Path to a JSON icon request, e.g. `{"class_name": "icon-done"}`.
        #[arg(short, long, value_parser = validate_file)]
        request: Option<PathBuf>,
        /// Output path of the icon. If not provided, the icon will be
        /// printed to standard output.
        #[arg(short, long, value_parser = validate_output_path)]
        output_path: Option<PathBuf>,
        /// Format to write the icon in.
        #[arg(short, long, value_enum, default_value_t = Format::Markup)]
        format: Format,
        /// Debug mode.
        #[arg(short, long, value_parser, default_value_t = false)]
        debug: bool,
    },
}

/// Icon output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Standalone SVG markup.
    Markup,
    /// The icon descriptor as JSON.
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markup => Self::Markup,
            Format::Json => Self::Json,
        }
    }
}

/// Validates that a provided path exists and is a file.
fn validate_file(path_str: &str) -> Result<PathBuf, String> {
    let path = Path::new(path_str);

    if !path.exists() {
        Err(format!("Path does not exist: {path_str}"))
    } else if !path.is_file() {
        Err(format!("Path is not a file: {path_str}"))
    } else {
        Ok(path.to_owned())
    }
}

/// Validates that a provided output path does not yet exist and has a valid
/// parent directory.
fn validate_output_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    match path.parent() {
        Some(parent) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };

            if parent.exists() {
                if !path.exists() {
                    Ok(path)
                } else {
                    Err(format!("Path already exists: {}", path.display()))
                }
            } else {
                Err(format!("Parent path does not exist: {}", path.display()))
            }
        }
        None => Err(format!("Could not get parent path: {}", path.display())),
    }
}

/// Builds the icon request from either a class name or a request file.
fn get_request(class: Option<String>, request: Option<&Path>) -> Result<IconRequest, String> {
    match request {
        Some(path) => load_request(path)
            .map_err(|e| format!("Failed to load icon request {}: {e}", path.display())),
        None => Ok(IconRequest { class_name: class }),
    }
}

/// Attempt to render an icon. On success, returns the text to print.
fn render_icon(command: Commands) -> Result<String, String> {
    match command {
        Commands::CheckMark {
            class,
            request,
            output_path,
            format,
            debug: _,
        } => {
            let request = get_request(class, request.as_deref())?;
            let svg = check_mark(&request);

            match output_path {
                Some(path) => match write_icon(path, &svg, format.into()) {
                    Ok(path) => Ok(format!("Successfully wrote icon to {}", path.display())),
                    Err(e) => Err(format!("Failed to write icon: {e}")),
                },
                None => OutputFormat::from(format)
                    .encode(&svg)
                    .map_err(|e| format!("Failed to encode icon: {e}")),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let Commands::CheckMark { debug, .. } = cli.command;

    if let Err(e) = init_logger(debug) {
        eprintln!("Failed to initialize logging: {e}");
        exit(1);
    }

    match render_icon(cli.command) {
        Ok(msg) => println!("{msg}"),
        Err(msg) => {
            eprintln!("{msg}");
            exit(1);
        }
    }
}
