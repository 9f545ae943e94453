//! JSON input sources and parsing

use crate::error::{ExtractError, ExtractResult, ParseError, ParseResult};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Where a JSON document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonSource {
    /// Single JSON file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Build the source list for the given file arguments.
    ///
    /// No files means one document on standard input. An empty argument
    /// also stands for standard input.
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }

        files
            .iter()
            .map(|path| {
                if path.as_os_str().is_empty() {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::File(path) => path.display().to_string(),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Directory that relative paths in this document are resolved against.
    ///
    /// A bare file name resolves against `.`; standard input has no
    /// directory.
    pub fn base_dir(&self) -> Option<PathBuf> {
        match self {
            JsonSource::File(path) => Some(match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                Some(_) => PathBuf::from("."),
                // `/` and similar roots have no parent
                None => path.clone(),
            }),
            JsonSource::Stdin => None,
        }
    }

    /// Read content as a UTF-8 string
    pub fn read_content(&self) -> ExtractResult<String> {
        match self {
            JsonSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| ExtractError::io(Some(path.clone()), e))
            }
            JsonSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| ExtractError::io(None, e))?;
                Ok(buffer)
            }
        }
    }

    /// Read and parse the JSON document behind this source
    pub fn load(&self) -> ExtractResult<Value> {
        let content = self.read_content()?;
        tracing::debug!(source = %self.description(), bytes = content.len(), "read input");

        let value = parse_json(&content, &self.description())?;
        tracing::debug!(source = %self.description(), kind = value_kind(&value), "parsed input");
        Ok(value)
    }
}

/// Parse a JSON document, naming `source_name` in any error.
///
/// There is no nesting limit; the stack grows on demand instead.
pub fn parse_json(content: &str, source_name: &str) -> ParseResult<Value> {
    let to_parse_error = |e: serde_json::Error| ParseError::from_json(&e, source_name.to_string());

    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(to_parse_error)?;

    if let Err(e) = deserializer.end() {
        release(value);
        return Err(to_parse_error(e));
    }
    Ok(value)
}

/// Drop a document without recursing into it.
///
/// The default `Drop` of a deeply nested value can exhaust the stack.
pub fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(fields) => pending.extend(fields.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
