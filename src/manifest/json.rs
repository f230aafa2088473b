//! JSON encoding for the manifest.
//!
//! The document is pretty-printed with two-space indentation. With
//! `ensure_ascii` every character outside printable ASCII is written as a
//! `\uXXXX` escape (UTF-16 surrogate pairs above the BMP), which keeps the
//! file byte-identical to what the original generator produced.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

/// Indentation unit for the manifest document.
const INDENT: &[u8] = b"  ";

/// Pretty formatter that escapes non-ASCII characters.
struct AsciiFormatter<'a> {
    /// Handles layout; only string fragments are intercepted.
    inner: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, c) in fragment.char_indices() {
            if is_printable_ascii(c) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Printable ASCII passes through; DEL and everything above is escaped.
const fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Encode a value as the manifest's pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_vec_pretty<T: Serialize + ?Sized>(
    value: &T,
    ensure_ascii: bool,
) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(256);
    if ensure_ascii {
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::new());
        value.serialize(&mut ser)?;
    } else {
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut ser)?;
    }
    Ok(buf)
}
