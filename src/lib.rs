//! JSON path lister
//!
//! A Rust CLI tool for printing the file paths stored in JSON documents,
//! for computing makefile dependencies and building cache manifests.

pub mod cli;
pub mod error;
pub mod extract;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use error::{ExtractError, ExtractResult, ParseError};
pub use extract::{extract, extract_level, list_paths, LevelDescriptor, Matches};
pub use output::PathWriter;
pub use parser::JsonSource;

/// List the paths selected by a `+`-separated level argument in a JSON string
pub fn list_paths_in_str(json: &str, levels: &str) -> Result<Vec<String>, ParseError> {
    let document = parser::parse_json(json, "string input")?;
    let levels = LevelDescriptor::parse_list(levels);
    let paths = list_paths(&document, &levels, None);
    parser::release(document);
    Ok(paths)
}
