// ============================================================
// TYPE INFERENCER
// ============================================================
// Sample data rows from a CSV source and reduce each column's
// observations to a single type

use std::io::Read;

use crate::domain::csv::{ColumnObservations, ColumnType, DEFAULT_SAMPLE_ROWS};
use crate::domain::error::Result;

use super::CsvSource;

/// Column type inference over a bounded row sample
pub struct TypeInferencer {
    sample_rows: usize,
}

impl TypeInferencer {
    pub fn new(sample_rows: usize) -> Self {
        Self { sample_rows }
    }

    pub fn sample_rows(&self) -> usize {
        self.sample_rows
    }

    /// Classify `column_count` columns from the rows remaining in `source`
    /// (the header must already have been consumed). At most `sample_rows`
    /// rows are read; the rest of the input is left untouched.
    pub fn infer<R: Read>(
        &self,
        source: &mut CsvSource<R>,
        column_count: usize,
    ) -> Result<Vec<ColumnType>> {
        let observations = self.observe(source, column_count)?;

        tracing::debug!(
            columns = column_count,
            rows_sampled = observations.rows_observed(),
            sample_limit = self.sample_rows,
            "Reduced column observations"
        );

        Ok(observations.finish())
    }

    fn observe<R: Read>(
        &self,
        source: &mut CsvSource<R>,
        column_count: usize,
    ) -> Result<ColumnObservations> {
        let mut observations = ColumnObservations::new(column_count);

        while observations.rows_observed() < self.sample_rows && source.next_row()? {
            observations.observe_row(source.current_row());
        }

        Ok(observations)
    }
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::infrastructure::csv::CsvParser;

    fn infer(content: &str, sample_rows: usize) -> Vec<ColumnType> {
        let mut source = CsvParser::new().from_reader(content.as_bytes());
        let header = source.read_header().unwrap();
        TypeInferencer::new(sample_rows)
            .infer(&mut source, header.column_count())
            .unwrap()
    }

    #[test]
    fn test_header_only_is_unknown() {
        assert_eq!(
            infer("a,b,c\n", 100),
            vec![ColumnType::Unknown; 3]
        );
    }

    #[test]
    fn test_name_age_scenario() {
        assert_eq!(
            infer("name,age\nAda,37\nLinus,\n", 10),
            vec![ColumnType::Str, ColumnType::Int]
        );
    }

    #[test]
    fn test_sampling_stops_at_limit() {
        let content = "value\n1\n2\nhello\n";
        assert_eq!(infer(content, 2), vec![ColumnType::Int]);
        assert_eq!(infer(content, 3), vec![ColumnType::Str]);
    }

    #[test]
    fn test_zero_sample_rows() {
        assert_eq!(infer("a\n1\n", 0), vec![ColumnType::Unknown]);
    }

    #[test]
    fn test_sample_limit_past_end_is_stable() {
        let content = "x,y,z\n1,1.5,yes\n2,2,no\n,3e2,\n";
        let full = infer(content, 3);
        assert_eq!(
            full,
            vec![ColumnType::Int, ColumnType::Float, ColumnType::Bool]
        );
        for sample_rows in [4, 100, 10_000] {
            assert_eq!(infer(content, sample_rows), full);
        }
    }

    #[test]
    fn test_parse_error_mid_sample_propagates() {
        let content: &[u8] = b"a\n1\n\xff\n";
        let mut source = CsvParser::new().from_reader(content);
        let header = source.read_header().unwrap();
        let err = TypeInferencer::default()
            .infer(&mut source, header.column_count())
            .unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_malformed_row_past_limit_is_not_read() {
        let content: &[u8] = b"a\n1\n\xff\n";
        let mut source = CsvParser::new().from_reader(content);
        let header = source.read_header().unwrap();
        let types = TypeInferencer::new(1)
            .infer(&mut source, header.column_count())
            .unwrap();
        assert_eq!(types, vec![ColumnType::Int]);
    }
}
