//! Tabular data for report tables

use crate::types::*;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    /// LaTeX column specification, e.g. `lrr`. Defaults to one `l` per column.
    pub columns: Option<String>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Load a table from a CSV file
    pub fn from_csv(path: impl AsRef<Path>, has_header: bool) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file, has_header)
    }

    pub fn from_csv_reader(reader: impl Read, has_header: bool) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .from_reader(reader);

        let header = if has_header {
            Some(reader.headers()?.iter().map(str::to_string).collect())
        } else {
            None
        };

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            header,
            rows,
            columns: None,
        })
    }

    /// Number of columns, taken from the first row or the header
    pub fn column_count(&self) -> usize {
        self.rows
            .first()
            .or(self.header.as_ref())
            .map_or(0, Vec::len)
    }

    pub fn column_spec(&self) -> String {
        match &self.columns {
            Some(columns) => columns.clone(),
            None => "l".repeat(self.column_count()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.column_count() == 0 {
            return Err(ConfigError::Invalid("Table has no columns".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_spec_defaults_to_left_aligned() {
        let table = Table::new(vec![vec!["a".into(), "b".into(), "c".into()]]);
        assert_eq!(table.column_spec(), "lll");
        assert_eq!(table.with_columns("lrr").column_spec(), "lrr");
    }

    #[test]
    fn test_column_count_falls_back_to_header() {
        let table = Table::default().with_header(vec!["x".into(), "y".into()]);
        assert_eq!(table.column_count(), 2);
        assert!(Table::default().validate().is_err());
    }
}
