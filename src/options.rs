//! Build configuration.

use std::path::{Path, PathBuf};

/// Default workbook file name, relative to the project root.
pub const DEFAULT_WORKBOOK: &str = "Deck Weights.xlsx";

/// Default sheet holding the deck catalog.
pub const DEFAULT_SHEET: &str = "Canam Deck Catalog";

/// Default output script, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "weights.js";

/// Default name of the generated constant.
pub const DEFAULT_CONSTANT: &str = "DECK_LBS_PER_SQ";

/// Where to read the workbook from and where to write the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Project root that relative paths are joined to
    pub root: PathBuf,

    /// Workbook path
    pub workbook: PathBuf,

    /// Name of the sheet to read
    pub sheet: String,

    /// Output script path
    pub output: PathBuf,

    /// Name of the JavaScript constant
    pub constant_name: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: DEFAULT_SHEET.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            constant_name: DEFAULT_CONSTANT.to_string(),
        }
    }
}

impl BuildOptions {
    /// Create options with the default paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the workbook path.
    pub fn with_workbook(mut self, workbook: impl Into<PathBuf>) -> Self {
        self.workbook = workbook.into();
        self
    }

    /// Set the sheet name.
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the constant name.
    pub fn with_constant_name(mut self, name: impl Into<String>) -> Self {
        self.constant_name = name.into();
        self
    }

    /// Workbook path joined to the root.
    pub fn workbook_path(&self) -> PathBuf {
        join(&self.root, &self.workbook)
    }

    /// Output path joined to the root.
    pub fn output_path(&self) -> PathBuf {
        join(&self.root, &self.output)
    }
}

fn join(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
