// ============================================================
// COLUMN TYPE ENUM
// ============================================================
// Closed set of type tags assigned to a CSV column

use serde::{Deserialize, Serialize};

/// Type tag observed for a single value or assigned to a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Empty or whitespace-only value
    Empty,
    Int,
    Float,
    Bool,
    Str,
    /// No non-empty value was observed for the column
    Unknown,
    /// Incompatible non-string observations, e.g. int and bool
    Mixed,
}

impl ColumnType {
    /// Every tag, in bit order
    pub const ALL: [ColumnType; 7] = [
        ColumnType::Empty,
        ColumnType::Int,
        ColumnType::Float,
        ColumnType::Bool,
        ColumnType::Str,
        ColumnType::Unknown,
        ColumnType::Mixed,
    ];

    /// Lowercase tag as printed by the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Empty => "empty",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Str => "str",
            ColumnType::Unknown => "unknown",
            ColumnType::Mixed => "mixed",
        }
    }

    pub(super) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
