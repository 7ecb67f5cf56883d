// ============================================================
// COLUMN INSPECTOR USE CASE
// ============================================================
// Orchestrate argument validation, header reading, and column
// type inference for a CSV file

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::domain::csv::{ColumnReport, CsvHeader, InspectionConfig};
use crate::domain::error::Result;
use crate::infrastructure::csv::{CsvParser, CsvSource, TypeInferencer};

/// CSV column inspection use case
pub struct ColumnInspector {
    config: InspectionConfig,
}

impl ColumnInspector {
    /// Create a new column inspector
    pub fn new(config: InspectionConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(InspectionConfig::default())
    }

    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    /// Number of columns defined by the header row; zero for an empty file
    pub fn count_columns(&self, csv_path: &Path) -> Result<usize> {
        Ok(self.header_names(csv_path)?.column_count())
    }

    /// Header row of the file; empty for an empty file
    pub fn header_names(&self, csv_path: &Path) -> Result<CsvHeader> {
        let (_source, header) = self.open_with_header(csv_path)?;
        Ok(header)
    }

    /// Infer a type for every column from the first `sample_rows` data rows
    pub fn infer_types(&self, csv_path: &Path) -> Result<Vec<ColumnReport>> {
        let start = Instant::now();

        let (mut source, header) = self.open_with_header(csv_path)?;
        let reports = self.infer_from_source(&mut source, header)?;

        tracing::info!(
            path = %csv_path.display(),
            columns = reports.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inferred column types"
        );

        Ok(reports)
    }

    /// Infer column types from in-memory CSV content
    pub fn infer_types_from_content(&self, content: &str) -> Result<Vec<ColumnReport>> {
        let parser = self.parser()?;
        let mut source = parser.from_reader(content.as_bytes());
        let header = source.read_header()?;
        self.warn_on_suspicious_header(&header);
        self.infer_from_source(&mut source, header)
    }

    fn infer_from_source<R: Read>(
        &self,
        source: &mut CsvSource<R>,
        header: CsvHeader,
    ) -> Result<Vec<ColumnReport>> {
        let inferencer = TypeInferencer::new(self.config.sample_rows);
        let types = inferencer.infer(source, header.column_count())?;

        Ok(header
            .names
            .into_iter()
            .zip(types)
            .map(|(name, column_type)| ColumnReport::new(name, column_type))
            .collect())
    }

    /// Validate the delimiter before touching the file, then open it and
    /// read the header row.
    fn open_with_header(
        &self,
        csv_path: &Path,
    ) -> Result<(CsvSource<std::io::BufReader<std::fs::File>>, CsvHeader)> {
        let parser = self.parser()?;
        let mut source = parser.open(csv_path)?;
        let header = source.read_header()?;
        self.warn_on_suspicious_header(&header);
        Ok((source, header))
    }

    fn parser(&self) -> Result<CsvParser> {
        let parser = match self.config.delimiter_byte()? {
            Some(delimiter) => CsvParser::new().with_delimiter(delimiter),
            None => CsvParser::new(),
        };
        Ok(parser)
    }

    /// A single comma-parsed column containing another common delimiter
    /// usually means `--delimiter` was forgotten.
    fn warn_on_suspicious_header(&self, header: &CsvHeader) {
        if self.config.delimiter.is_some() || header.column_count() != 1 {
            return;
        }

        if let Some(likely) = CsvParser::detect_delimiter(&header.names[0]) {
            tracing::warn!(
                likely_delimiter = %(likely as char).escape_default(),
                "Header parsed as a single column; pass --delimiter if the file is not comma-separated"
            );
        }
    }
}

impl Default for ColumnInspector {
    fn default() -> Self {
        Self::default_config()
    }
}
