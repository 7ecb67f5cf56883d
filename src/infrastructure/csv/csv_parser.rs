// ============================================================
// CSV PARSER
// ============================================================
// Open CSV files with path checks and encoding detection, and
// expose a quoting-aware, forward-only row source

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::{Encoding, UTF_8};

use crate::domain::csv::CsvHeader;
use crate::domain::error::{AppError, Result};

/// Delimiters considered when hinting at a misparsed header
const HINT_DELIMITERS: [u8; 3] = [b';', b'\t', b'|'];

/// CSV parser configuration
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Open a file for reading. Fails with `NotFound` when the path does not
    /// exist and `InvalidInput` when it is not a regular file.
    pub fn open(&self, path: &Path) -> Result<CsvSource<BufReader<File>>> {
        check_regular_file(path)?;

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        skip_byte_order_mark(&mut reader)?;

        tracing::debug!(
            path = %path.display(),
            delimiter = %(self.delimiter as char).escape_default(),
            "Opened CSV file"
        );

        Ok(self.from_reader(reader))
    }

    /// Wrap any reader as a row source. No byte-order-mark handling is done.
    pub fn from_reader<R: Read>(&self, reader: R) -> CsvSource<R> {
        let reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .trim(Trim::None)
            .flexible(true) // Allow rows with different lengths
            .from_reader(reader);

        CsvSource {
            reader,
            record: StringRecord::new(),
        }
    }

    /// Guess which delimiter a one-column header was really split on
    /// (semicolon, tab or pipe). Returns `None` when none of them appear.
    pub fn detect_delimiter(header_text: &str) -> Option<u8> {
        HINT_DELIMITERS
            .iter()
            .map(|&delimiter| {
                let count = header_text.bytes().filter(|&b| b == delimiter).count();
                (delimiter, count)
            })
            .filter(|&(_, count)| count > 0)
            .max_by_key(|&(_, count)| count)
            .map(|(delimiter, _)| delimiter)
    }
}

/// Forward-only source of parsed rows. The header is simply the first row.
pub struct CsvSource<R> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl<R: Read> CsvSource<R> {
    /// Read the header row. A source with no rows yields an empty header.
    pub fn read_header(&mut self) -> Result<CsvHeader> {
        if !self.next_row()? {
            return Ok(CsvHeader::default());
        }

        let names = self.record.iter().map(str::to_string).collect();
        Ok(CsvHeader::new(names))
    }

    /// Advance to the next row. Returns `false` at end of input.
    pub fn next_row(&mut self) -> Result<bool> {
        Ok(self.reader.read_record(&mut self.record)?)
    }

    /// Fields of the row most recently read by `next_row`
    pub fn current_row(&self) -> impl Iterator<Item = &str> {
        self.record.iter()
    }
}

fn check_regular_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AppError::NotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(AppError::InvalidInput(path.display().to_string()));
    }
    Ok(())
}

/// Consume a UTF-8 byte-order mark if present. Any other BOM means the file
/// is not UTF-8, which is reported instead of producing garbled fields.
fn skip_byte_order_mark<R: BufRead>(reader: &mut R) -> Result<()> {
    let buffer = reader.fill_buf()?;

    match Encoding::for_bom(buffer) {
        Some((encoding, bom_length)) if encoding == UTF_8 => {
            tracing::debug!("Skipping UTF-8 byte order mark");
            reader.consume(bom_length);
            Ok(())
        }
        Some((encoding, _)) => Err(AppError::ParseError(format!(
            "unsupported encoding {}, expected UTF-8",
            encoding.name()
        ))),
        None => Ok(()),
    }
}
