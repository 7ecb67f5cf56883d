// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for CSV column inspection
// No I/O, no external dependencies beyond serde

mod column_observations;
mod column_type;
mod csv_header;
mod inspection_config;
mod type_set;
mod value_grammar;

pub use column_observations::ColumnObservations;
pub use column_type::ColumnType;
pub use csv_header::{ColumnReport, CsvHeader};
pub use inspection_config::{InspectionConfig, DEFAULT_SAMPLE_ROWS};
pub use type_set::TypeSet;
pub use value_grammar::classify_value;
