//! Rendering the weight table as a browser script.

use crate::error::{Error, Result};
use crate::table::WeightTable;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Tool named in the generated-file notice.
pub const GENERATED_BY: &str = "build-weights";

/// Command that regenerates the output, named in the generated-file notice.
pub const REGENERATE_COMMAND: &str = "cargo run -p deck-weights-cli --bin build-weights";

/// Render the table as a script that defines `constant_name` and exposes it
/// on `window`.
///
/// ```
/// use deck_weights::{render::to_script, WeightTable};
///
/// let script = to_script(&WeightTable::new(), "DECK_LBS_PER_SQ")?;
/// assert!(script.ends_with("window.DECK_LBS_PER_SQ = DECK_LBS_PER_SQ;\n"));
/// # Ok::<(), deck_weights::Error>(())
/// ```
pub fn to_script(table: &WeightTable, constant_name: &str) -> Result<String> {
    let json = to_ascii_json(table)?;
    Ok(format!(
        "// Auto-generated by {generator}\n\
         // Command: {command}\n\
         const {name} = {json};\n\
         \n\
         window.{name} = {name};\n",
        generator = GENERATED_BY,
        command = REGENERATE_COMMAND,
        name = constant_name,
        json = json,
    ))
}

/// Read the table back out of a script produced by [`to_script`].
pub fn parse_script(script: &str, constant_name: &str) -> Result<WeightTable> {
    let opening = format!("const {} = ", constant_name);
    let closing = format!(";\n\nwindow.{} = ", constant_name);

    let start = script
        .find(&opening)
        .map(|i| i + opening.len())
        .ok_or_else(|| Error::InvalidData(format!("no '{}' declaration", constant_name)))?;
    let end = script
        .rfind(&closing)
        .filter(|&end| end >= start)
        .ok_or_else(|| Error::InvalidData(format!("no window.{} assignment", constant_name)))?;

    Ok(serde_json::from_str(&script[start..end])?)
}

/// Write a rendered script, replacing any existing file.
pub fn write_script(path: impl AsRef<Path>, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Pretty-print a value as JSON with 2-space indentation and every
/// non-ASCII character (and DEL) written as a `\u` escape.
pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter::new());
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| Error::Serialize(e.to_string()))
}

/// Pretty formatter that escapes non-ASCII string content and DEL.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl AsciiFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut ascii_start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(fragment[ascii_start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            ascii_start = i + ch.len_utf8();
        }
        writer.write_all(fragment[ascii_start..].as_bytes())
    }
}
