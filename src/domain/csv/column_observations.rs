// ============================================================
// COLUMN OBSERVATIONS
// ============================================================
// Per-column type observation sets accumulated over sampled rows

use super::{classify_value, ColumnType, TypeSet};

/// Observation sets for a fixed number of columns
#[derive(Debug, Clone)]
pub struct ColumnObservations {
    sets: Vec<TypeSet>,
    rows_observed: usize,
}

impl ColumnObservations {
    /// Create empty observation sets for `column_count` columns
    pub fn new(column_count: usize) -> Self {
        Self {
            sets: vec![TypeSet::new(); column_count],
            rows_observed: 0,
        }
    }

    /// Record one data row. Fields past the column count are ignored and
    /// columns missing from a short row receive no observation.
    pub fn observe_row<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (set, field) in self.sets.iter_mut().zip(fields) {
            set.insert(classify_value(field));
        }
        self.rows_observed += 1;
    }

    pub fn column_count(&self) -> usize {
        self.sets.len()
    }

    pub fn rows_observed(&self) -> usize {
        self.rows_observed
    }

    /// Raw observation set for one column
    pub fn observed(&self, column: usize) -> Option<TypeSet> {
        self.sets.get(column).copied()
    }

    /// Reduce every column to its final type, in column order
    pub fn finish(&self) -> Vec<ColumnType> {
        self.sets.iter().map(TypeSet::reduce).collect()
    }
}
