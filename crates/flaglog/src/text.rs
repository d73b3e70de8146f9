//! crates/flaglog/src/text.rs
//! Display adapters for values that have no `Display` impl of their own.

use std::fmt;

/// Renders a byte sequence as text, replacing invalid UTF-8 with U+FFFD.
///
/// ```
/// use flaglog::Utf8Lossy;
///
/// assert_eq!(Utf8Lossy(b"ok").to_string(), "ok");
/// assert_eq!(Utf8Lossy(b"a\xffb").to_string(), "a\u{fffd}b");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Utf8Lossy<'a>(pub &'a [u8]);

impl fmt::Display for Utf8Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.0.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{fffd}")?;
            }
        }
        Ok(())
    }
}

/// Renders a character slice as the string it spells.
#[derive(Clone, Copy, Debug)]
pub struct CharSeq<'a>(pub &'a [char]);

impl fmt::Display for CharSeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        self.0.iter().try_for_each(|&c| f.write_char(c))
    }
}
