//! Worksheet row parsing.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};

use super::shared_strings::SharedStrings;

/// A single cell with its resolved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCell {
    /// Cell reference as written in the sheet (e.g. "B7"), empty if absent
    pub reference: String,
    /// 1-based column index (A = 1)
    pub column: u32,
    /// Resolved text value
    pub value: String,
}

/// One worksheet row, cells in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: Vec<SheetCell>,
}

impl SheetRow {
    /// Build a row from `(reference, value)` pairs.
    pub fn from_pairs<R, V>(pairs: impl IntoIterator<Item = (R, V)>) -> Self
    where
        R: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::default();
        for (reference, value) in pairs {
            row.push(reference.into(), value.into());
        }
        row
    }

    /// Append a cell. A cell without a reference lands in the column after
    /// the previous cell.
    pub fn push(&mut self, reference: String, value: String) {
        let column = column_index(&reference)
            .unwrap_or_else(|| self.cells.last().map_or(1, |c| c.column.saturating_add(1)));
        self.cells.push(SheetCell {
            reference,
            column,
            value,
        });
    }

    /// Cells in document order.
    pub fn cells(&self) -> &[SheetCell] {
        &self.cells
    }

    /// Text of the last cell in `column`, or "" when the row has none.
    pub fn value_at(&self, column: u32) -> &str {
        self.cells
            .iter()
            .rev()
            .find(|c| c.column == column)
            .map_or("", |c| c.value.as_str())
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Convert the letters of a cell reference to a 1-based column index.
///
/// Returns `None` when the reference has no column letters.
pub fn column_index(reference: &str) -> Option<u32> {
    let letters = reference
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase());

    let mut total: u32 = 0;
    let mut seen = false;
    for ch in letters {
        seen = true;
        let digit = u32::from(ch) - u32::from('A') + 1;
        total = total.saturating_mul(26).saturating_add(digit);
    }
    seen.then_some(total)
}

/// Parse the rows of a worksheet part.
///
/// Only `<v>` children are read. Cells typed `s` are looked up in the
/// shared string table; everything else is returned as stored.
pub fn parse_rows(xml: &str, shared_strings: &SharedStrings) -> Result<Vec<SheetRow>> {
    let mut rows = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut in_sheet_data = false;
    let mut current_row: Option<SheetRow> = None;
    let mut current_cell: Option<PendingCell> = None;
    let mut in_value = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"sheetData" => in_sheet_data = true,
                b"row" if in_sheet_data => current_row = Some(SheetRow::default()),
                b"c" if current_row.is_some() => current_cell = Some(PendingCell::from_start(e)),
                b"v" if current_cell.is_some() => in_value = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"row" if in_sheet_data => rows.push(SheetRow::default()),
                b"c" => {
                    if let Some(row) = current_row.as_mut() {
                        let cell = PendingCell::from_start(e);
                        row.push(cell.reference, String::new());
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_value => {
                if let Some(cell) = current_cell.as_mut() {
                    let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                    cell.raw.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"sheetData" => in_sheet_data = false,
                b"row" => {
                    if let Some(row) = current_row.take() {
                        rows.push(row);
                    }
                }
                b"c" => {
                    if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut()) {
                        let value = resolve_cell_value(
                            &cell.raw,
                            cell.cell_type.as_deref(),
                            shared_strings,
                        )?;
                        row.push(cell.reference, value);
                    }
                }
                b"v" => in_value = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}

/// Resolve a cell's stored text based on its type attribute.
pub fn resolve_cell_value(
    raw: &str,
    cell_type: Option<&str>,
    shared_strings: &SharedStrings,
) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    match cell_type {
        Some("s") => {
            let idx = raw.trim().parse::<usize>().map_err(|_| {
                Error::InvalidData(format!("shared string index '{}' is not an integer", raw))
            })?;
            shared_strings
                .get(idx)
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::InvalidData(format!(
                        "shared string index {} out of range ({} strings)",
                        idx,
                        shared_strings.len()
                    ))
                })
        }
        _ => Ok(raw.to_string()),
    }
}

/// Cell state collected between `<c>` and `</c>`.
#[derive(Debug, Default)]
struct PendingCell {
    reference: String,
    cell_type: Option<String>,
    raw: String,
}

impl PendingCell {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let mut cell = Self::default();
        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"r" => cell.reference = String::from_utf8_lossy(&attr.value).into_owned(),
                b"t" => cell.cell_type = Some(String::from_utf8_lossy(&attr.value).into_owned()),
                _ => {}
            }
        }
        cell
    }
}
