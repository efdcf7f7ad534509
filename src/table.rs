//! The deck weight table and the row transformation that fills it.

use crate::error::Result;
use crate::header::{find_header_row, ColumnMap};
use crate::key::canonical_key;
use crate::numeric::{normalize_number, round_weight};
use crate::xlsx::SheetRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coating designation with its own weight column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Finish {
    /// Uncoated
    #[serde(rename = "UNC")]
    Unc,
    /// G30 galvanized
    G30,
    /// G60 galvanized
    G60,
    /// G90 galvanized
    G90,
}

impl Finish {
    /// All finishes in output order.
    pub const ALL: [Finish; 4] = [Finish::Unc, Finish::G30, Finish::G60, Finish::G90];

    /// Header text and output key for this finish.
    pub fn name(self) -> &'static str {
        match self {
            Finish::Unc => "UNC",
            Finish::G30 => "G30",
            Finish::G60 => "G60",
            Finish::G90 => "G90",
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weights of one deck entry by finish.
pub type FinishWeights = BTreeMap<Finish, i64>;

/// Canonical key to finish weights, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    entries: BTreeMap<String, FinishWeights>,
}

impl WeightTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same key.
    pub fn insert(&mut self, key: String, weights: FinishWeights) -> Option<FinishWeights> {
        self.entries.insert(key, weights)
    }

    /// Look up an entry by canonical key.
    pub fn get(&self, key: &str) -> Option<&FinishWeights> {
        self.entries.get(key)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FinishWeights)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the weight table from the rows of the catalog sheet.
///
/// The header row is located by content, then every row (the header and
/// anything above it included) is run through [`extract_entry`].
pub fn build_table(rows: &[SheetRow]) -> Result<WeightTable> {
    let (header_index, header) = find_header_row(rows)?;
    let columns = ColumnMap::from_header_row(header)?;
    log::debug!("header row at index {}, columns {:?}", header_index, columns);

    let mut table = WeightTable::new();
    for (index, row) in rows.iter().enumerate() {
        match extract_entry(row, &columns) {
            Some((key, weights)) => {
                if table.insert(key.clone(), weights).is_some() {
                    log::debug!("row {} replaces earlier entry {}", index, key);
                }
            }
            None => log::trace!("row {} skipped", index),
        }
    }

    log::info!("built weight table with {} keys", table.len());
    Ok(table)
}

/// Turn one row into a table entry.
///
/// Returns `None` when depth, profile or gauge is blank, or when no finish
/// column holds a number. A weight too large for an `i64` counts as no
/// number.
pub fn extract_entry(row: &SheetRow, columns: &ColumnMap) -> Option<(String, FinishWeights)> {
    let depth = row.value_at(columns.depth).trim();
    let profile = row.value_at(columns.profile).trim();
    let gauge = row.value_at(columns.gauge).trim();

    if depth.is_empty() || profile.is_empty() || gauge.is_empty() {
        return None;
    }

    let weights: FinishWeights = Finish::ALL
        .iter()
        .filter_map(|&finish| {
            normalize_number(row.value_at(columns.finish(finish)))
                .and_then(round_weight)
                .map(|weight| (finish, weight))
        })
        .collect();

    if weights.is_empty() {
        return None;
    }

    Some((canonical_key(depth, profile, gauge), weights))
}
