//! Command-line interface for dirtree
//! Reads a saved recursive directory listing and prints the folder tree it describes.
//!
//! Usage:
//!   dirtree `<path>` [--format `<format>`] [--config `<file>`]   - Print the tree of a listing
//!   dirtree formats                                         - List all available formats
//!
//! Without `--config`, a `dirtree.toml` in the working directory is layered over the
//! built-in defaults when present. Logging goes to stderr. `RUST_LOG` wins over the
//! `logging.filter` config key.

use clap::{Arg, ArgMatches, Command};
use dirtree::dirtree::config::{DirtreeConfig, Loader, LOCAL_CONFIG_FILE};
use dirtree::dirtree::processor::{available_formats, process_file, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("dirtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rebuild a folder tree from a recursive Windows directory listing")
        .subcommand_required(false)
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the saved listing")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help("Output format (treeviz, json, yaml)")
                .long("format")
                .short('f'),
        )
        .arg(
            Arg::new("config")
                .help("TOML file layered over the built-in defaults")
                .long("config")
                .short('c'),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .try_get_matches()
        .unwrap_or_else(|e| e.exit());

    match matches.subcommand() {
        Some(("formats", _)) => handle_formats_command(),
        None => match matches.get_one::<String>("path") {
            Some(path) => handle_process_command(path, &matches),
            None => {
                eprintln!("Error: missing listing path");
                std::process::exit(1);
            }
        },
        _ => unreachable!(),
    }
}

/// Handle the default command
fn handle_process_command(path: &str, matches: &ArgMatches) {
    let config = load_config(matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    match process_file(path, &config.processing_spec()) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<DirtreeConfig, String> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(config_path) => Loader::new().with_file(config_path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG_FILE),
    };
    if let Some(format_str) = matches.get_one::<String>("format") {
        let format = OutputFormat::from_string(format_str).map_err(|e| e.to_string())?;
        loader = loader
            .with_output_format(format)
            .map_err(|e| e.to_string())?;
    }
    loader
        .build()
        .map_err(|e| format!("Invalid configuration: {}", e))
}

fn init_logging(config: &DirtreeConfig) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
