use std::path::{Path, MAIN_SEPARATOR};

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Join `value` onto `dir` and normalise the result lexically.
///
/// `value` is always taken relative to `dir`, even when it starts with a
/// separator. `.` segments and repeated separators are dropped and `..`
/// removes the preceding segment. A trailing separator on the input is kept.
pub fn join_relative(dir: &Path, value: &str) -> String {
    let dir = dir.to_string_lossy();
    let joined = match (dir.is_empty(), value.is_empty()) {
        (true, true) => return ".".to_string(),
        (true, false) => value.to_string(),
        (false, true) => dir.into_owned(),
        (false, false) => format!("{}{}{}", dir, MAIN_SEPARATOR, value),
    };
    normalize(&joined)
}

/// Lexically normalise a path string without touching the filesystem
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with(is_separator);
    let trailing = path.ends_with(is_separator);

    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(&last) if last != "..") {
                    parts.pop();
                } else if !absolute {
                    // nothing above the root of an absolute path
                    parts.push("..");
                }
            }
            normal => parts.push(normal),
        }
    }

    let sep = MAIN_SEPARATOR.to_string();
    let mut out = parts.join(&sep);
    if out.is_empty() && !absolute {
        out.push('.');
    }
    if trailing && !out.is_empty() {
        out.push(MAIN_SEPARATOR);
    }
    if absolute {
        out.insert(0, MAIN_SEPARATOR);
    }
    out
}
