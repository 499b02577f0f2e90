//! `sslp` command-line tool
//!
//! Parses one line of command arguments against a list of declared option
//! names and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! sslp -o name -o age 'option1 --age=10 --flag'
//! # {
//! #   "age": "10",
//! #   "flag": true,
//! #   "name": "option1"
//! # }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sslp_core::{OptionSchema, ParserOptions};
use sslp_runtime::config::LogLevel;
use sslp_runtime::{ConfigLoader, logging};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sslp", version, about = "Parse chat command arguments into options")]
struct Cli {
    /// Configuration file (default: search for sslp.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Declared option name, in positional order
    #[arg(short = 'o', long = "option", value_name = "NAME")]
    options: Vec<String>,

    /// Option prefix marker, replacing the configured ones
    #[arg(long = "prefix", value_name = "MARKER")]
    prefixes: Vec<String>,

    /// Key/value separator marker, replacing the configured ones
    #[arg(long = "separator", value_name = "MARKER")]
    separators: Vec<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Print the classified tokens instead of the option mapping
    #[arg(long)]
    classify: bool,

    /// The argument text; several words are joined with spaces
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    content: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut overrides = ParserOptions::new();
    if !cli.prefixes.is_empty() {
        overrides = overrides.prefixes(cli.prefixes.iter().cloned());
    }
    if !cli.separators.is_empty() {
        overrides = overrides.separators(cli.separators.iter().cloned());
    }

    let mut loader = ConfigLoader::new().merge_parser(overrides);
    if let Some(path) = &cli.config {
        loader = loader.file(path);
    }
    let (mut config, parser) = loader
        .load_parser()
        .context("failed to load parser configuration")?;

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init_from_config(&config.logging);

    let content = cli.content.join(" ");
    debug!(content = %content, options = cli.options.len(), "Parsing content");

    let output = if cli.classify {
        serde_json::to_string_pretty(&parser.parse_content(&content))?
    } else {
        let schema: Vec<OptionSchema> = cli.options.into_iter().map(OptionSchema::from).collect();
        serde_json::to_string_pretty(&parser.run(&content, &schema))?
    };
    println!("{output}");

    Ok(())
}
