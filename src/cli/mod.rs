//! Command-line interface module

use clap::Parser;
use std::convert::Infallible;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExtractError, ExtractResult};
use crate::extract::{extract_level, LevelDescriptor};
use crate::output::PathWriter;
use crate::parser::{release, JsonSource};

/// Main CLI arguments
///
/// Every argument is positional: `jsonls <LEVELS> [FILES]...`. There are no
/// options, so descriptors and file names may start with `-`.
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonls")]
#[command(about = "Print file paths stored in JSON documents")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Fields holding paths, '+'-separated (no output when omitted)
    #[arg(value_name = "LEVELS", allow_hyphen_values = true)]
    pub levels: Option<String>,

    /// Input JSON files (default: standard input)
    #[arg(
        value_name = "FILES",
        value_parser = parse_input_path,
        allow_hyphen_values = true
    )]
    pub files: Vec<PathBuf>,
}

// Empty arguments are kept; they stand for standard input
fn parse_input_path(raw: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(raw))
}

/// Everything a run needs, resolved from the arguments
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub levels: Vec<LevelDescriptor>,
    pub inputs: Vec<JsonSource>,
}

impl RunConfig {
    /// Create run configuration from CLI arguments
    pub fn from_args(args: Args) -> Self {
        let levels = args
            .levels
            .as_deref()
            .map(LevelDescriptor::parse_list)
            .unwrap_or_default();

        Self {
            levels,
            inputs: JsonSource::from_args(&args.files),
        }
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        self.inputs
            .iter()
            .map(JsonSource::description)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Run against standard output
pub fn run(config: &RunConfig) -> ExtractResult<usize> {
    let stdout = io::stdout();
    execute(config, BufWriter::new(stdout.lock()))
}

/// Process every input in order, writing matches to `out`.
///
/// Returns the number of paths written. Output produced before a failing
/// input is flushed before the error is returned.
pub fn execute<W: Write>(config: &RunConfig, out: W) -> ExtractResult<usize> {
    let mut writer = PathWriter::new(out);

    let result = process_inputs(config, &mut writer);
    let flushed = writer.flush().map_err(ExtractError::output);

    let printed = result?;
    flushed?;
    Ok(printed)
}

fn process_inputs<W: Write>(
    config: &RunConfig,
    writer: &mut PathWriter<W>,
) -> ExtractResult<usize> {
    if config.levels.is_empty() {
        tracing::debug!("no levels given, nothing will be printed");
    }

    for source in &config.inputs {
        tracing::debug!(source = %source.description(), "processing input");

        let document = source.load()?;
        let base_dir = source.base_dir();

        for level in &config.levels {
            let count = writer
                .emit_all(extract_level(&document, level, base_dir.as_deref()))
                .map_err(ExtractError::output)?;
            tracing::trace!(descriptor = %level, count, "level matched");
        }

        release(document);
    }

    Ok(writer.printed())
}

/// Show an error message
pub fn show_error(message: &str) {
    eprintln!("✗ {}", message);
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ExtractError) {
    show_error(&error.user_message());
}
