/// Configuration options for the JSON streaming writer.
///
/// Options are consumed by [`JsonWriter::with_options`](crate::JsonWriter::with_options)
/// and are fixed for the lifetime of the writer. There is deliberately no way
/// to change formatting mid-document: a document written with mixed modes
/// would be inconsistently formatted, so the mode is frozen at construction.
///
/// # Examples
///
/// ```rust
/// use jsonemit::{JsonWriter, WriterOptions};
///
/// let mut writer = JsonWriter::with_options(String::new(), WriterOptions { pretty: false });
/// writer.begin_array()?.value(1)?.end_array()?;
/// assert_eq!(writer.finish(), "[1]");
/// # Ok::<(), jsonemit::WriteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Whether to pretty-print the document.
    ///
    /// When `true`, every opening symbol is followed by a newline, members
    /// are indented by one four-space unit per nesting level, names and
    /// values are separated by `" : "`, and sibling separators are a comma
    /// followed by a newline. When `false`, no whitespace is emitted beyond
    /// what JSON requires.
    ///
    /// # Default
    ///
    /// `true`
    pub pretty: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}
