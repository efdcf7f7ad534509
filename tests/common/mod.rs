//! Synthetic workbook packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Cell content for [`WorkbookBuilder::row`].
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    /// Stored in the shared string table
    Shared(&'a str),
    /// Stored as a literal number
    Number(&'a str),
    /// Cell element with no value
    Blank,
}

/// Builds a minimal `.xlsx` package in memory.
pub struct WorkbookBuilder {
    sheet_name: String,
    target: String,
    rel_id: String,
    shared: Vec<String>,
    rows: Vec<String>,
    with_shared_strings: bool,
    with_sheet_part: bool,
}

impl WorkbookBuilder {
    pub fn new(sheet_name: &str) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
            target: "worksheets/sheet1.xml".to_string(),
            rel_id: "rId1".to_string(),
            shared: Vec::new(),
            rows: Vec::new(),
            with_shared_strings: true,
            with_sheet_part: true,
        }
    }

    /// Point the workbook relationship at a different target.
    pub fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    /// Give the sheet a relationship id that the rels part does not define.
    pub fn dangling_rel(mut self) -> Self {
        self.rel_id = "rId9".to_string();
        self
    }

    /// Leave out xl/sharedStrings.xml.
    pub fn without_shared_strings(mut self) -> Self {
        self.with_shared_strings = false;
        self
    }

    /// Leave out the worksheet part itself.
    pub fn without_sheet_part(mut self) -> Self {
        self.with_sheet_part = false;
        self
    }

    /// Append a row. Cells are placed in consecutive columns starting at A.
    pub fn row(mut self, cells: &[Value<'_>]) -> Self {
        let row_number = self.rows.len() + 1;
        let mut xml = format!(r#"<row r="{}">"#, row_number);
        for (i, cell) in cells.iter().enumerate() {
            let reference = format!("{}{}", column_letters(i + 1), row_number);
            match cell {
                Value::Shared(text) => {
                    let index = self.intern(text);
                    xml.push_str(&format!(r#"<c r="{}" t="s"><v>{}</v></c>"#, reference, index));
                }
                Value::Number(text) => {
                    xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, text));
                }
                Value::Blank => {
                    xml.push_str(&format!(r#"<c r="{}" s="1"/>"#, reference));
                }
            }
        }
        xml.push_str("</row>");
        self.rows.push(xml);
        self
    }

    fn intern(&mut self, text: &str) -> usize {
        match self.shared.iter().position(|s| s == text) {
            Some(index) => index,
            None => {
                self.shared.push(text.to_string());
                self.shared.len() - 1
            }
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();

        let workbook = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Notes" sheetId="1" r:id="rId2"/>
    <sheet name="{}" sheetId="2" r:id="{}"/>
  </sheets>
</workbook>"#,
            escape(&self.sheet_name),
            self.rel_id
        );
        add(&mut zip, "xl/workbook.xml", &workbook, options);

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="{}"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/notes.xml"/>
</Relationships>"#,
            self.target
        );
        add(&mut zip, "xl/_rels/workbook.xml.rels", &rels, options);

        if self.with_shared_strings {
            let items: String = self
                .shared
                .iter()
                .map(|s| format!(r#"<si><t xml:space="preserve">{}</t></si>"#, escape(s)))
                .collect();
            let sst = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{1}</sst>"#,
                self.shared.len(),
                items
            );
            add(&mut zip, "xl/sharedStrings.xml", &sst, options);
        }

        if self.with_sheet_part {
            let sheet = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>{}</sheetData>
</worksheet>"#,
                self.rows.concat()
            );
            let path = deck_weights::OoxmlContainer::resolve_path("xl/workbook.xml", &self.target);
            add(&mut zip, &path, &sheet, options);
        }

        add(
            &mut zip,
            "xl/worksheets/notes.xml",
            r#"<worksheet><sheetData><row r="1"><c r="A1"><v>1</v></c></row></sheetData></worksheet>"#,
            options,
        );

        zip.finish().unwrap();
        buffer
    }
}

fn add<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &str,
    options: SimpleFileOptions,
) {
    zip.start_file(name, options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn column_letters(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(b'A' + rem as u8);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap()
}

/// Header row of the catalog sheet with a second, rightmost PROFILE column.
pub fn catalog_header() -> Vec<Value<'static>> {
    vec![
        Value::Shared("CONCAT"),
        Value::Shared("DEPTH"),
        Value::Shared("PROFILE"),
        Value::Shared("GAUGE"),
        Value::Shared("UNC"),
        Value::Shared("G30"),
        Value::Shared("G60"),
        Value::Shared("G90"),
        Value::Shared("PROFILE"),
    ]
}
