//! The streaming JSON writer implementation.
//!
//! This module provides [`JsonWriter`], which emits well-formed JSON text
//! incrementally to a [`core::fmt::Write`] sink. The caller drives it one
//! primitive operation at a time with no lookahead; the writer's state
//! machine (the container stack plus the expected-next-token tracker)
//! guarantees that every byte sequence it emits is syntactically valid JSON,
//! or the offending call fails before emitting anything structural.
//!
//! # Examples
//!
//! ```rust
//! use jsonemit::{JsonWriter, WriterOptions};
//!
//! let mut writer = JsonWriter::with_options(String::new(), WriterOptions { pretty: false });
//! writer
//!     .begin_object()?
//!     .name("intValue")?
//!     .value(42)?
//!     .name("flag")?
//!     .value(false)?
//!     .end_object()?;
//! assert_eq!(writer.finish(), r#"{"intValue":42,"flag":false}"#);
//! # Ok::<(), jsonemit::WriteError>(())
//! ```

use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::{
    error::{InvalidArgument, StructuralError, WriteError},
    options::WriterOptions,
    scalar::{Scalar, write_quoted},
};

/// One indentation unit in pretty mode.
const INDENT: &str = "    ";

/// The kind of container open at a given depth of the writer's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The synthetic bottom of the stack. Always present, never closed; a
    /// document consists of exactly one node written at root level.
    Root,
    /// A JSON object (`{…}`).
    Object,
    /// A JSON array (`[…]`).
    Array,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerKind::Root => "root",
            ContainerKind::Object => "object",
            ContainerKind::Array => "array",
        })
    }
}

/// What the next call is permitted to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    /// Inside an object, at member boundary: only a name (or the matching
    /// close) is legal.
    Name,
    /// A value or container must follow: after a name, or inside an array.
    Value,
    /// At root before the first node: any value or container is legal.
    Node,
    /// Terminal: the top-level node is complete, nothing more is legal.
    Nothing,
}

/// A streaming, forward-only JSON writer over a text sink.
///
/// A writer is bound to one sink and produces exactly one document; call
/// [`finish`](Self::finish) to take the sink back. Every structural operation
/// checks its legality first and fails with a [`WriteError`] on violation.
/// After an error the writer is poisoned: its state (and the text emitted so
/// far) is unspecified, and continued use is unsupported.
///
/// Stopping early is permitted but leaves exactly as much of the document as
/// was written; nothing closes open containers on your behalf.
#[derive(Debug)]
pub struct JsonWriter<W: Write> {
    sink: W,
    options: WriterOptions,
    containers: Vec<ContainerKind>,
    expected: Expected,
    indent: usize,
    pending_separator: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Creates a writer over `sink` with default options (pretty printing
    /// enabled).
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Creates a writer over `sink` with the given options.
    ///
    /// The options are fixed for the writer's lifetime.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self {
            sink,
            options,
            containers: alloc::vec![ContainerKind::Root],
            expected: Expected::Node,
            indent: 0,
            pending_separator: false,
        }
    }

    /// Returns `true` once the single top-level node has been fully written
    /// and closed (the terminal state).
    pub fn is_complete(&self) -> bool {
        self.expected == Expected::Nothing
    }

    /// Consumes the writer and returns the sink.
    ///
    /// Legal at any time. If the terminal state has not been reached the
    /// sink holds a truncated, invalid document.
    pub fn finish(self) -> W {
        self.sink
    }

    /// Opens a JSON object.
    ///
    /// Fails with [`StructuralError::ExpectingName`] where a member name is
    /// required, or [`StructuralError::DocumentComplete`] after the terminal
    /// state.
    pub fn begin_object(&mut self) -> Result<&mut Self, WriteError> {
        self.begin_node(ContainerKind::Object)?;
        self.expected = Expected::Name;
        Ok(self)
    }

    /// Opens a JSON array.
    ///
    /// Fails with [`StructuralError::ExpectingName`] where a member name is
    /// required, or [`StructuralError::DocumentComplete`] after the terminal
    /// state.
    pub fn begin_array(&mut self) -> Result<&mut Self, WriteError> {
        self.begin_node(ContainerKind::Array)?;
        self.expected = Expected::Value;
        Ok(self)
    }

    /// Closes the innermost container, which must be an object at member
    /// boundary; otherwise fails with [`StructuralError::MismatchedEnd`].
    pub fn end_object(&mut self) -> Result<&mut Self, WriteError> {
        if self.expected != Expected::Name {
            return Err(StructuralError::MismatchedEnd(ContainerKind::Object).into());
        }
        self.end_node(ContainerKind::Object)?;
        Ok(self)
    }

    /// Closes the innermost container, which must be an array; otherwise
    /// fails with [`StructuralError::MismatchedEnd`].
    pub fn end_array(&mut self) -> Result<&mut Self, WriteError> {
        if self.expected != Expected::Value {
            return Err(StructuralError::MismatchedEnd(ContainerKind::Array).into());
        }
        self.end_node(ContainerKind::Array)?;
        Ok(self)
    }

    /// Writes a member name inside an object.
    ///
    /// Fails with [`InvalidArgument::EmptyName`] if `name` is empty, or with
    /// [`StructuralError::UnexpectedName`] outside object-member position
    /// (inside an array, twice in a row, at root).
    pub fn name(&mut self, name: &str) -> Result<&mut Self, WriteError> {
        if name.is_empty() {
            return Err(InvalidArgument::EmptyName.into());
        }
        if self.expected != Expected::Name {
            return Err(StructuralError::UnexpectedName.into());
        }

        self.separator()?;
        write_quoted(&mut self.sink, name)?;
        self.sink
            .write_str(if self.options.pretty { " : " } else { ":" })?;

        self.expected = Expected::Value;
        Ok(self)
    }

    /// Writes a scalar value: a string, a boolean, or a number.
    ///
    /// Fails with [`StructuralError::DocumentComplete`] after the terminal
    /// state, [`StructuralError::ExpectingName`] where a member name is
    /// required, or [`InvalidArgument::UnsupportedValueType`] for non-finite
    /// floats.
    pub fn value<'v>(&mut self, value: impl Into<Scalar<'v>>) -> Result<&mut Self, WriteError> {
        self.check_not_complete()?;
        if self.expected == Expected::Name {
            return Err(StructuralError::ExpectingName.into());
        }

        // Array elements separate themselves; an object value sits right
        // after the delimiter its name wrote, and a root scalar follows
        // nothing at all.
        let top = self.top();
        if top == ContainerKind::Array {
            self.separator()?;
        }
        value.into().write_text(&mut self.sink)?;

        self.pending_separator = true;
        self.expected = Self::resting_state(top);
        Ok(self)
    }

    /// Opens a container: legality checks, separator, opening symbol, stack
    /// push. The caller sets `expected` for the new container's inside.
    fn begin_node(&mut self, kind: ContainerKind) -> Result<(), WriteError> {
        self.check_not_complete()?;
        if self.expected == Expected::Name {
            return Err(StructuralError::ExpectingName.into());
        }

        // A container opening inside an object follows the " : " its name
        // wrote; anywhere else (root, or as an array element) it must
        // separate and indent itself. At the very first node nothing is
        // pending, so this is a no-op in compact mode.
        if matches!(self.top(), ContainerKind::Root | ContainerKind::Array) {
            self.separator()?;
        }

        let symbol = if kind == ContainerKind::Array { '[' } else { '{' };
        self.sink.write_char(symbol)?;
        if self.options.pretty {
            self.sink.write_char('\n')?;
            self.indent += 1;
        }
        self.containers.push(kind);
        self.pending_separator = false;
        Ok(())
    }

    /// Closes a container: closing symbol on its own de-indented line in
    /// pretty mode, stack pop, expectation recomputed from the new top.
    fn end_node(&mut self, kind: ContainerKind) -> Result<(), WriteError> {
        if self.top() != kind {
            // Reachable for `end_array` right after a name: expectation says
            // a value is due, but the innermost container is the object.
            return Err(StructuralError::MismatchedEnd(kind).into());
        }

        if self.options.pretty {
            self.indent -= 1;
            // Right after an open nothing is pending and the opening newline
            // already ended the line; an empty container closes without a
            // blank line in between.
            if self.pending_separator {
                self.sink.write_char('\n')?;
            }
            self.write_indent()?;
        }
        self.sink
            .write_char(if kind == ContainerKind::Array { ']' } else { '}' })?;

        self.containers.pop();
        self.expected = Self::resting_state(self.top());
        self.pending_separator = true;
        Ok(())
    }

    /// The expectation a container returns to after one of its members
    /// completes.
    fn resting_state(kind: ContainerKind) -> Expected {
        match kind {
            ContainerKind::Object => Expected::Name,
            ContainerKind::Array => Expected::Value,
            ContainerKind::Root => Expected::Nothing,
        }
    }

    /// Emits the pending comma, if any, and in pretty mode the newline and
    /// indentation for the token about to be written.
    fn separator(&mut self) -> fmt::Result {
        if self.options.pretty {
            if self.pending_separator {
                self.sink.write_str(",\n")?;
            }
            self.write_indent()?;
        } else if self.pending_separator {
            self.sink.write_char(',')?;
        }
        self.pending_separator = false;
        Ok(())
    }

    fn write_indent(&mut self) -> fmt::Result {
        for _ in 0..self.indent {
            self.sink.write_str(INDENT)?;
        }
        Ok(())
    }

    fn top(&self) -> ContainerKind {
        // The stack bottom is Root and is never popped.
        self.containers.last().copied().unwrap_or(ContainerKind::Root)
    }

    fn check_not_complete(&self) -> Result<(), WriteError> {
        if self.expected == Expected::Nothing {
            return Err(StructuralError::DocumentComplete.into());
        }
        Ok(())
    }
}
