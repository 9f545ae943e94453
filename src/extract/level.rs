//! Level descriptors: which fields of a document hold paths

use std::fmt;

/// Separator between independent descriptors on the command line
pub const LEVEL_SEPARATOR: char = '+';

/// Separator between field names inside one descriptor
pub const SEGMENT_SEPARATOR: char = '.';

/// Prefix asking for matches to be resolved against the input's directory
pub const RELATIVE_PREFIX: char = '/';

/// A parsed field path, e.g. `/attachments` or `tabcat.icon`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelDescriptor {
    segments: Vec<String>,
    resolve_relative: bool,
}

impl LevelDescriptor {
    pub fn new(segments: Vec<String>, resolve_relative: bool) -> Self {
        Self {
            segments,
            resolve_relative,
        }
    }

    /// Parse a single descriptor.
    ///
    /// An empty descriptor, or a bare `/`, has no segments and matches only
    /// strings at the document root (or inside root-level arrays).
    pub fn parse(raw: &str) -> Self {
        let (path, resolve_relative) = match raw.strip_prefix(RELATIVE_PREFIX) {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        let segments = if path.is_empty() {
            Vec::new()
        } else {
            path.split(SEGMENT_SEPARATOR).map(str::to_string).collect()
        };

        tracing::debug!(
            descriptor = raw,
            segments = segments.len(),
            resolve_relative,
            "parsed level descriptor"
        );
        Self::new(segments, resolve_relative)
    }

    /// Parse a `+`-separated list of descriptors, keeping their order
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(LEVEL_SEPARATOR).map(Self::parse).collect()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn resolve_relative(&self) -> bool {
        self.resolve_relative
    }
}

impl fmt::Display for LevelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resolve_relative {
            write!(f, "{}", RELATIVE_PREFIX)?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEGMENT_SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
