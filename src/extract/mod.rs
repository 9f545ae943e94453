//! Path extraction from parsed JSON documents
//!
//! Walks a document down a level descriptor's field path and yields every
//! string found at the end of it. Arrays are flattened wherever they appear
//! along the way, and anything that does not fit the path (missing fields,
//! numbers, nulls, objects at the leaf) is skipped silently.

pub mod level;
pub mod paths;

pub use level::LevelDescriptor;
pub use paths::join_relative;

use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

/// Lazy iterator over the strings matched by a field path.
///
/// Cloning the iterator before it is advanced gives an independent walk
/// over the same matches.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    segments: &'a [String],
    base_dir: Option<&'a Path>,
    /// Pending values and how many segments they have consumed
    stack: Vec<(&'a Value, usize)>,
}

impl<'a> Matches<'a> {
    fn new(value: &'a Value, segments: &'a [String], base_dir: Option<&'a Path>) -> Self {
        let base_dir = base_dir.filter(|dir| !dir.as_os_str().is_empty());
        Self {
            segments,
            base_dir,
            stack: vec![(value, 0)],
        }
    }

    fn resolve(&self, path: &'a str) -> Cow<'a, str> {
        match self.base_dir {
            Some(dir) => Cow::Owned(join_relative(dir, path)),
            None => Cow::Borrowed(path),
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((value, depth)) = self.stack.pop() {
            match value {
                // reversed so the first element is popped first
                Value::Array(items) => {
                    self.stack.extend(items.iter().rev().map(|item| (item, depth)));
                }
                _ if depth < self.segments.len() => {
                    if let Value::Object(fields) = value {
                        if let Some(child) = fields.get(self.segments[depth].as_str()) {
                            self.stack.push((child, depth + 1));
                        }
                    }
                }
                Value::String(path) => return Some(self.resolve(path)),
                _ => {}
            }
        }
        None
    }
}

/// Walk `value` along `segments`, joining matches onto `base_dir` when given
pub fn extract<'a>(
    value: &'a Value,
    segments: &'a [String],
    base_dir: Option<&'a Path>,
) -> Matches<'a> {
    Matches::new(value, segments, base_dir)
}

/// Walk `value` with a parsed descriptor.
///
/// `base_dir` is only used when the descriptor asks for relative resolution.
pub fn extract_level<'a>(
    value: &'a Value,
    level: &'a LevelDescriptor,
    base_dir: Option<&'a Path>,
) -> Matches<'a> {
    let base_dir = if level.resolve_relative() { base_dir } else { None };
    extract(value, level.segments(), base_dir)
}

/// Collect the matches of every descriptor in order
pub fn list_paths(
    value: &Value,
    levels: &[LevelDescriptor],
    base_dir: Option<&Path>,
) -> Vec<String> {
    levels
        .iter()
        .flat_map(|level| extract_level(value, level, base_dir))
        .map(Cow::into_owned)
        .collect()
}
