//! Header row detection and column resolution.

use crate::error::{Error, Result};
use crate::table::Finish;
use crate::xlsx::SheetRow;
use std::collections::BTreeMap;

/// Tokens that must all appear in the header row.
pub const HEADER_TOKENS: [&str; 5] = ["CONCAT", "UNC", "G30", "G60", "G90"];

/// Logical field read from a named column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderField {
    Depth,
    Profile,
    Gauge,
    Finish(Finish),
}

impl HeaderField {
    /// Every field the column map needs.
    pub const ALL: [HeaderField; 7] = [
        HeaderField::Depth,
        HeaderField::Profile,
        HeaderField::Gauge,
        HeaderField::Finish(Finish::Unc),
        HeaderField::Finish(Finish::G30),
        HeaderField::Finish(Finish::G60),
        HeaderField::Finish(Finish::G90),
    ];

    /// Header text for this field.
    pub fn name(self) -> &'static str {
        match self {
            HeaderField::Depth => "DEPTH",
            HeaderField::Profile => "PROFILE",
            HeaderField::Gauge => "GAUGE",
            HeaderField::Finish(finish) => finish.name(),
        }
    }

    /// Match header cell text, ignoring case and surrounding whitespace.
    pub fn from_header(text: &str) -> Option<Self> {
        let text = text.trim().to_uppercase();
        Self::ALL.into_iter().find(|field| field.name() == text)
    }
}

/// Find the first row whose non-empty values contain every header token.
///
/// Returns the row's position along with the row.
pub fn find_header_row(rows: &[SheetRow]) -> Result<(usize, &SheetRow)> {
    rows.iter()
        .enumerate()
        .find(|(_, row)| is_header_row(row))
        .ok_or(Error::HeaderRowNotFound)
}

fn is_header_row(row: &SheetRow) -> bool {
    HEADER_TOKENS.iter().all(|token| {
        row.cells()
            .iter()
            .any(|cell| cell.value.trim() == *token)
    })
}

/// Column index of each field, taken from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub depth: u32,
    pub profile: u32,
    pub gauge: u32,
    finishes: [u32; 4],
}

impl ColumnMap {
    /// Resolve field columns from the header row.
    ///
    /// When a header appears more than once the leftmost column wins.
    /// Fails listing every field that has no column.
    pub fn from_header_row(header: &SheetRow) -> Result<Self> {
        let mut columns: BTreeMap<HeaderField, u32> = BTreeMap::new();
        for cell in header.cells() {
            if let Some(field) = HeaderField::from_header(&cell.value) {
                columns
                    .entry(field)
                    .and_modify(|column| *column = (*column).min(cell.column))
                    .or_insert(cell.column);
            }
        }

        let column = |field: HeaderField| columns.get(&field).copied();
        match (
            column(HeaderField::Depth),
            column(HeaderField::Profile),
            column(HeaderField::Gauge),
            column(HeaderField::Finish(Finish::Unc)),
            column(HeaderField::Finish(Finish::G30)),
            column(HeaderField::Finish(Finish::G60)),
            column(HeaderField::Finish(Finish::G90)),
        ) {
            (Some(depth), Some(profile), Some(gauge), Some(unc), Some(g30), Some(g60), Some(g90)) => {
                Ok(Self {
                    depth,
                    profile,
                    gauge,
                    finishes: [unc, g30, g60, g90],
                })
            }
            _ => {
                let mut missing: Vec<String> = HeaderField::ALL
                    .iter()
                    .filter(|field| !columns.contains_key(*field))
                    .map(|field| field.name().to_string())
                    .collect();
                missing.sort();
                Err(Error::MissingColumns(missing))
            }
        }
    }

    /// Column holding the weight for `finish`.
    pub fn finish(&self, finish: Finish) -> u32 {
        match finish {
            Finish::Unc => self.finishes[0],
            Finish::G30 => self.finishes[1],
            Finish::G60 => self.finishes[2],
            Finish::G90 => self.finishes[3],
        }
    }
}
