//! # deck-weights
//!
//! Extracts the deck weight lookup table from `Deck Weights.xlsx` and emits
//! it as `weights.js`, a script that defines `DECK_LBS_PER_SQ` for the
//! browser.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deck_weights::{build, BuildOptions};
//!
//! let report = build(&BuildOptions::default())?;
//! println!("Wrote {} with {} keys", report.output_path.display(), report.entries);
//! # Ok::<(), deck_weights::Error>(())
//! ```
//!
//! ## Step by step
//!
//! ```no_run
//! use deck_weights::render::to_script;
//! use deck_weights::xlsx::XlsxReader;
//!
//! let rows = XlsxReader::open("Deck Weights.xlsx")?.read_sheet("Canam Deck Catalog")?;
//! let table = deck_weights::build_table(&rows)?;
//! let script = to_script(&table, "DECK_LBS_PER_SQ")?;
//! # Ok::<(), deck_weights::Error>(())
//! ```

pub mod container;
pub mod error;
pub mod header;
pub mod key;
pub mod numeric;
pub mod options;
pub mod render;
pub mod table;
pub mod xlsx;

// Re-exports
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use error::{Error, Result};
pub use header::{ColumnMap, HeaderField};
pub use key::canonical_key;
pub use numeric::{normalize_number, round_weight, stringify_number, NumberValue};
pub use options::BuildOptions;
pub use table::{build_table, Finish, FinishWeights, WeightTable};

use std::path::PathBuf;
use xlsx::XlsxReader;

/// Outcome of a successful [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Where the script was written
    pub output_path: PathBuf,
    /// Number of keys in the table
    pub entries: usize,
}

/// Build the weight table from workbook bytes.
pub fn table_from_bytes(data: Vec<u8>, sheet: &str) -> Result<WeightTable> {
    let rows = XlsxReader::from_bytes(data)?.read_sheet(sheet)?;
    build_table(&rows)
}

/// Read the configured workbook and build the weight table.
///
/// Fails with [`Error::WorkbookNotFound`] when the workbook does not exist.
pub fn load_table(options: &BuildOptions) -> Result<WeightTable> {
    let path = options.workbook_path();
    if !path.is_file() {
        return Err(Error::WorkbookNotFound(options.workbook.clone()));
    }

    log::debug!("reading workbook {}", path.display());
    let rows = XlsxReader::open(&path)?.read_sheet(&options.sheet)?;
    build_table(&rows)
}

/// Read the workbook and render the output script without writing it.
pub fn generate(options: &BuildOptions) -> Result<(WeightTable, String)> {
    let table = load_table(options)?;
    let script = render::to_script(&table, &options.constant_name)?;
    Ok((table, script))
}

/// Regenerate the output script from the workbook.
pub fn build(options: &BuildOptions) -> Result<BuildReport> {
    let (table, script) = generate(options)?;
    let output_path = options.output_path();
    render::write_script(&output_path, &script)?;
    log::info!("wrote {}", output_path.display());

    Ok(BuildReport {
        output_path,
        entries: table.len(),
    })
}
