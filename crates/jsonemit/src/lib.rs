//! A streaming, forward-only JSON writer.
//!
//! [`JsonWriter`] emits well-formed JSON text incrementally to any
//! [`core::fmt::Write`] sink. The caller drives it one primitive operation at
//! a time — [`begin_object`](JsonWriter::begin_object),
//! [`name`](JsonWriter::name), [`value`](JsonWriter::value),
//! [`end_object`](JsonWriter::end_object) and the array equivalents — and
//! every call is checked against the writer's state machine before anything
//! is emitted, so a sequence of successful calls can only ever produce
//! syntactically valid JSON.
//!
//! Output is pretty-printed by default (four-space indentation, `" : "`
//! name/value delimiters); [`WriterOptions`] selects compact output instead.
//!
//! # Examples
//!
//! ```rust
//! use jsonemit::JsonWriter;
//!
//! let mut writer = JsonWriter::new(String::new());
//! writer
//!     .begin_object()?
//!     .name("language")?
//!     .value("rust")?
//!     .name("features")?
//!     .begin_array()?
//!     .value("serde")?
//!     .value("tokio")?
//!     .end_array()?
//!     .end_object()?;
//!
//! assert_eq!(writer.finish(), "{\n    \"language\" : \"rust\",\n    \"features\" : [\n        \"serde\",\n        \"tokio\"\n    ]\n}");
//! # Ok::<(), jsonemit::WriteError>(())
//! ```
//!
//! The writer is strictly forward-only: there is no buffering, no lookahead,
//! and no repair. Dropping a writer mid-document leaves exactly the prefix
//! that was written.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod options;
mod scalar;
#[cfg(feature = "std")]
mod sink;
mod writer;


pub use error::{InvalidArgument, StructuralError, WriteError};
pub use options::WriterOptions;
pub use scalar::Scalar;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use writer::{ContainerKind, JsonWriter};
