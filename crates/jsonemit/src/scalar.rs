//! Scalar values accepted by [`JsonWriter::value`](crate::JsonWriter::value)
//! and their JSON text forms.
//!
//! This module also owns the string-quoting routine. Unlike the minimal
//! "wrap in quotes" approach some writers take, embedded quotes, backslashes
//! and control characters are escaped, so any `&str` is safe to write.

use core::fmt::{self, Write};

use crate::error::{InvalidArgument, WriteError};

/// A scalar JSON value: a string, a boolean, or a number.
///
/// Callers rarely name this type; every supported primitive converts into it
/// via `From`, so `writer.value(42)?` and `writer.value("text")?` both work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// A string, quoted and escaped on output.
    Str(&'a str),
    /// A boolean, written as the literal `true` or `false`.
    Bool(bool),
    /// A signed integer, written in canonical decimal.
    Int(i64),
    /// An unsigned integer, written in canonical decimal.
    UInt(u64),
    /// A floating-point number, written in the shortest decimal form that
    /// round-trips. Non-finite values have no JSON representation and are
    /// rejected at write time.
    Float(f64),
}

impl Scalar<'_> {
    /// Writes the JSON text of this scalar to `sink`.
    pub(crate) fn write_text<W: Write>(self, sink: &mut W) -> Result<(), WriteError> {
        match self {
            Scalar::Str(s) => write_quoted(sink, s)?,
            Scalar::Bool(b) => sink.write_str(if b { "true" } else { "false" })?,
            Scalar::Int(n) => write!(sink, "{n}")?,
            Scalar::UInt(n) => write!(sink, "{n}")?,
            Scalar::Float(x) => {
                if !x.is_finite() {
                    return Err(InvalidArgument::UnsupportedValueType("non-finite number").into());
                }
                // Shortest round-tripping decimal, exponent notation where
                // shorter; `Display` would expand tiny magnitudes into
                // hundreds of digits that parsers read back off by an ulp.
                let mut buffer = ryu::Buffer::new();
                sink.write_str(buffer.format_finite(x))?;
            }
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v)
    }
}

impl<'a> From<&'a alloc::string::String> for Scalar<'a> {
    fn from(v: &'a alloc::string::String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Scalar<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Scalar<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Scalar<'_> {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

macro_rules! scalar_from_int {
    ($variant:ident: $($ty:ty),+) => {
        $(impl From<$ty> for Scalar<'_> {
            fn from(v: $ty) -> Self {
                Self::$variant(v.into())
            }
        })+
    };
}

scalar_from_int!(Int: i8, i16, i32, i64);
scalar_from_int!(UInt: u8, u16, u32, u64);

/// Writes `s` as a JSON string literal: surrounding quotes plus escapes.
///
/// Escaping matches what JSON requires for round-tripping: `"` and `\` get a
/// backslash escape, control characters (and the U+2028/U+2029 line
/// separators, which pre-2019 ECMAScript parsers mishandle) are written as
/// `\uXXXX`. Characters outside the basic multilingual plane pass through
/// unescaped; JSON escapes are exactly four hex digits, so their encoding is
/// left to the sink's UTF-8.
pub(crate) fn write_quoted<W: Write>(sink: &mut W, s: &str) -> fmt::Result {
    sink.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => sink.write_str("\\\"")?,
            '\\' => sink.write_str("\\\\")?,
            '\u{2028}' | '\u{2029}' => write!(sink, "\\u{:04X}", c as u32)?,
            c if c.is_ascii_control() || (c.is_control() && (c as u32) <= 0xFFFF) => {
                write!(sink, "\\u{:04X}", c as u32)?;
            }
            _ => sink.write_char(c)?,
        }
    }
    sink.write_char('"')
}
