//! Sink adapter for `std::io::Write` targets.
//!
//! The writer core is no_std and emits through [`core::fmt::Write`]. This
//! adapter lets it target files, sockets, or any other byte sink. Because
//! `fmt::Error` carries no detail, the adapter retains the first
//! `std::io::Error` it hits so callers can recover it after the failed
//! operation.

use core::fmt;
use std::io;

/// Adapts a [`std::io::Write`] into the [`core::fmt::Write`] a
/// [`JsonWriter`](crate::JsonWriter) needs.
///
/// # Examples
///
/// ```rust
/// use jsonemit::{IoSink, JsonWriter, WriterOptions};
///
/// let mut writer = JsonWriter::with_options(
///     IoSink::new(Vec::new()),
///     WriterOptions { pretty: false },
/// );
/// writer.begin_array()?.value("a")?.end_array()?;
/// let bytes = writer.finish().into_inner()?;
/// assert_eq!(bytes, br#"["a"]"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Flushes and returns the underlying writer, or the first I/O error
    /// encountered while writing.
    pub fn into_inner(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// The first I/O error encountered, if any. Once set, all further
    /// writes through this sink fail.
    pub fn last_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.error = Some(err);
                Err(fmt::Error)
            }
        }
    }
}
