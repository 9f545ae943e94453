//! Newline-separated output of matched paths

use std::io::{self, Write};

/// Writes paths separated by single newlines, with no trailing newline.
///
/// The separator is decided by whether anything has been written through
/// this writer before, so one writer must be shared by every input and
/// every level of a run.
#[derive(Debug)]
pub struct PathWriter<W: Write> {
    inner: W,
    printed: usize,
}

impl<W: Write> PathWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, printed: 0 }
    }

    /// Write one path, preceded by a newline unless it is the first
    pub fn emit(&mut self, path: &str) -> io::Result<()> {
        if self.printed > 0 {
            self.inner.write_all(b"\n")?;
        }
        self.inner.write_all(path.as_bytes())?;
        self.printed += 1;
        Ok(())
    }

    /// Write every path from an iterator, returning how many were written
    pub fn emit_all<I, S>(&mut self, paths: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for path in paths {
            self.emit(path.as_ref())?;
            count += 1;
        }
        Ok(count)
    }

    /// Number of paths written so far
    pub fn printed(&self) -> usize {
        self.printed
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
