//! XLSX workbook reading.
//!
//! Resolves a sheet by name through `xl/workbook.xml` and
//! `xl/_rels/workbook.xml.rels`, then reads its rows with shared strings
//! already substituted.
//!
//! # Example
//!
//! ```no_run
//! use deck_weights::xlsx::XlsxReader;
//!
//! let reader = XlsxReader::open("Deck Weights.xlsx")?;
//! let rows = reader.read_sheet("Canam Deck Catalog")?;
//! println!("{} rows", rows.len());
//! # Ok::<(), deck_weights::Error>(())
//! ```

mod shared_strings;
mod sheet;

pub use shared_strings::SharedStrings;
pub use sheet::{column_index, parse_rows, resolve_cell_value, SheetCell, SheetRow};

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use quick_xml::events::Event;
use std::path::Path;

const WORKBOOK_PART: &str = "xl/workbook.xml";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Sheet entry from workbook.xml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    /// Display name shown on the sheet tab
    pub name: String,
    /// Relationship ID pointing at the worksheet part
    pub rel_id: String,
}

/// Reader for the sheets of an XLSX workbook.
#[derive(Debug)]
pub struct XlsxReader {
    container: OoxmlContainer,
    sheets: Vec<SheetInfo>,
}

impl XlsxReader {
    /// Open an XLSX file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a reader from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a reader from a container.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        let sheets = parse_workbook(&container.read_xml(WORKBOOK_PART)?)?;
        Ok(Self { container, sheets })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Resolve a sheet name to the path of its worksheet part.
    pub fn sheet_path(&self, sheet_name: &str) -> Result<String> {
        let rel_id = self
            .sheets
            .iter()
            .find(|s| s.name == sheet_name)
            .map(|s| s.rel_id.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;

        let rels = self.container.read_relationships(WORKBOOK_PART)?;
        let target = rels
            .get(rel_id)
            .map(|r| r.target.as_str())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::RelationshipNotFound(sheet_name.to_string()))?;

        Ok(OoxmlContainer::resolve_path(WORKBOOK_PART, target))
    }

    /// Load the shared string table; empty when the workbook has none.
    pub fn shared_strings(&self) -> Result<SharedStrings> {
        if !self.container.exists(SHARED_STRINGS_PART) {
            return Ok(SharedStrings::default());
        }
        SharedStrings::parse(&self.container.read_xml(SHARED_STRINGS_PART)?)
    }

    /// Read every row of the named sheet.
    pub fn read_sheet(&self, sheet_name: &str) -> Result<Vec<SheetRow>> {
        let sheet_path = self.sheet_path(sheet_name)?;
        log::debug!("sheet '{}' resolved to {}", sheet_name, sheet_path);

        let xml = self.container.read_xml(&sheet_path)?;
        let shared_strings = self.shared_strings()?;
        log::debug!("loaded {} shared strings", shared_strings.len());

        let rows = parse_rows(&xml, &shared_strings)?;
        log::debug!("read {} rows from '{}'", rows.len(), sheet_name);
        Ok(rows)
    }
}

/// Parse workbook.xml for sheet entries.
fn parse_workbook(xml: &str) -> Result<Vec<SheetInfo>> {
    let mut sheets = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.local_name().as_ref() == b"sheet" => {
                let mut name = String::new();
                let mut rel_id = String::new();

                for attr in e.attributes().flatten() {
                    let key = attr.key;
                    if key.as_ref() == b"name" {
                        name = attr
                            .unescape_value()
                            .map(|v| v.into_owned())
                            .map_err(|e| Error::XmlParse(e.to_string()))?;
                    } else if key.prefix().is_some() && key.local_name().as_ref() == b"id" {
                        rel_id = String::from_utf8_lossy(&attr.value).into_owned();
                    }
                }

                if !name.is_empty() {
                    sheets.push(SheetInfo { name, rel_id });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(sheets)
}
