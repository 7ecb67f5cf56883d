// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV file access, encoding detection, and column type inference

mod csv_parser;
mod type_inferencer;

pub use csv_parser::{CsvParser, CsvSource};
pub use type_inferencer::TypeInferencer;
