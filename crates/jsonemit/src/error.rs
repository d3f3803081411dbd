//! Error types reported by the writer.
//!
//! Every error here is a caller-contract violation detected synchronously at
//! the offending call (plus [`WriteError::Sink`] for failures of the
//! underlying sink). None are transient: after any error the writer's state
//! is unspecified and continued use is unsupported.

use thiserror::Error;

use crate::writer::ContainerKind;

/// The requested operation is not legal at the writer's current position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    /// A value or container-opening call was issued where a member name is
    /// required.
    #[error("expecting a property name")]
    ExpectingName,

    /// A member name was issued outside object-member position, for example
    /// inside an array or twice in a row.
    #[error("unexpected property name")]
    UnexpectedName,

    /// A close call does not match the innermost open container.
    #[error("unexpected end of {0}")]
    MismatchedEnd(ContainerKind),

    /// The single top-level node has been fully written; no further tokens
    /// are permitted.
    #[error("document is complete, no more values expected")]
    DocumentComplete,
}

/// An argument that can never be written, regardless of writer position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Member names must be non-empty.
    #[error("member name must not be empty")]
    EmptyName,

    /// The value has no JSON text representation.
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(&'static str),
}

/// Any failure a writer operation can surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// See [`StructuralError`].
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),

    /// See [`InvalidArgument`].
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The underlying sink rejected a write. When the sink is an
    /// [`IoSink`](crate::IoSink), the original `std::io::Error` can be
    /// recovered from the adapter.
    #[error("sink write failed")]
    Sink(#[from] core::fmt::Error),
}
