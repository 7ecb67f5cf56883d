// ============================================================
// CSV HEADER TYPES
// ============================================================
// Header row and per-column inference results

use serde::{Deserialize, Serialize};

use super::ColumnType;

/// First row of a CSV file. Names are positional and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvHeader {
    pub names: Vec<String>,
}

impl CsvHeader {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Number of columns; zero for a file without rows
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names joined with commas, as printed by `--names`
    pub fn joined_names(&self) -> String {
        self.names.join(",")
    }
}

/// Inferred type of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnReport {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

impl std::fmt::Display for ColumnReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.column_type)
    }
}
