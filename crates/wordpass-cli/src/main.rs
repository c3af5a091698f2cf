//! wordpass: derive a password from a text snippet
//!
//! Reads free text (stdin or a file), validates it against the configured
//! limits and prints the derived password on stdout.
//!
//! # Usage
//!
//! ```bash
//! echo "$TEXT" | wordpass --length 12 --special '$#@!'
//! wordpass --config wordpass.toml --file notes.txt
//! wordpass --config wordpass.toml --validate
//! ```

mod config;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use wordpass_core::{PasswordRequest, WordGenerator};

/// Command-line options; unset values fall back to the config
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    text_path: Option<PathBuf>,
    length: Option<usize>,
    special_chars: Option<String>,
    validate_only: bool,
}

fn main() -> Result<()> {
    // Parse CLI args by hand, the option set is small
    let args: Vec<String> = std::env::args().collect();

    let mut parsed = Args::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(next_value(&args, &mut i)?));
            }
            "--file" | "-f" => {
                parsed.text_path = Some(PathBuf::from(next_value(&args, &mut i)?));
            }
            "--length" | "-l" => {
                let value = next_value(&args, &mut i)?;
                parsed.length = Some(
                    value
                        .parse::<usize>()
                        .with_context(|| format!("Invalid length: {}", value))?,
                );
            }
            "--special" | "-s" => {
                parsed.special_chars = Some(next_value(&args, &mut i)?.to_string());
            }
            "--validate" => {
                parsed.validate_only = true;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("wordpass {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => {
                anyhow::bail!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    // Load config
    let mut cli_config = match &parsed.config_path {
        Some(path) => config::CliConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::CliConfig::default(),
    };

    // Apply env overrides
    cli_config.apply_env_overrides();

    // Validate
    cli_config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli_config.cli.log_level.as_str()),
    )
    .init();

    if parsed.validate_only {
        let limits = &cli_config.limits;
        println!("✅ Configuration is valid.");
        println!(
            "  Length:         {} ({}–{})",
            cli_config.defaults.length, limits.min_password_length, limits.max_password_length
        );
        println!("  Specials:       {}", cli_config.defaults.special_chars);
        println!("  Palette:        {}", limits.special_palette);
        println!("  Min word len:   {}", limits.min_word_length);
        println!("  Max text chars: {}", limits.max_text_chars);
        return Ok(());
    }

    let text = read_text(parsed.text_path.as_ref())?;
    let request = PasswordRequest::new(
        parsed.length.unwrap_or(cli_config.defaults.length),
        parsed
            .special_chars
            .as_deref()
            .unwrap_or(&cli_config.defaults.special_chars)
            .chars()
            .collect::<Vec<_>>(),
        text,
    );
    log::debug!(
        "Request: length {}, {} special chars, {} text chars",
        request.length,
        request.special_chars.len(),
        request.text.chars().count()
    );

    let password = request
        .generate(&cli_config.limits, &WordGenerator)
        .context("Could not generate a password")?;
    println!("{}", password.as_str());

    Ok(())
}

/// Value following the option at `args[*i]`; advances `i` past it
fn next_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let option = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", option))
}

/// Read the text from a file, or stdin when no path is given
fn read_text(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

fn print_help() {
    println!(
        r#"wordpass: derive a password from a text snippet

USAGE:
    wordpass [OPTIONS] < text.txt

OPTIONS:
    -c, --config <PATH>     Config file path (optional, built-in defaults otherwise)
    -l, --length <N>        Password length (default: 12)
    -s, --special <CHARS>   Special characters to include, e.g. '$#@!'
    -f, --file <PATH>       Read the text from a file instead of stdin
    --validate              Validate configuration and exit
    -h, --help              Show this help message
    -V, --version           Show version

ENVIRONMENT VARIABLES (override config file):
    WORDPASS_LOG_LEVEL        Log level (error/warn/info/debug/trace)
    WORDPASS_LENGTH           Default password length
    WORDPASS_SPECIAL_CHARS    Default special characters
    WORDPASS_MIN_WORD_LENGTH  Shortest word taken from the text

EXAMPLES:
    # Password from a file, 16 characters
    wordpass --file notes.txt --length 16

    # Pipe text in, custom special characters
    cat notes.txt | wordpass --special '@!%-'

    # Validate configuration
    wordpass --config wordpass.toml --validate
"#
    );
}
