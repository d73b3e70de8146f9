/// Controls whether a [`MessageSink`](crate::MessageSink) appends a trailing newline when writing lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each line.
    #[default]
    WithNewline,
    /// Emit the line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when writing a line.
    ///
    /// # Examples
    ///
    /// ```
    /// use flaglog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}
