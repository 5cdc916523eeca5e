//! Flat output tables
//!
//! A [`Table`] is an ordered column universe plus one [`Record`] per source
//! row. Columns appear in first-seen order, as the union of every record's
//! keys; cells a record does not carry read back as `None`.

use indexmap::IndexMap;

/// One flat output row. Insertion order is column order; `None` is a null
/// cell.
pub type Record = IndexMap<String, Option<String>>;

/// An ordered, string-typed result table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Register a column name without touching any row.
    pub fn ensure_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    /// Append one record, registering any columns not seen before.
    pub fn push_record(&mut self, record: Record) {
        for key in record.keys() {
            if !self.has_column(key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(record);
    }

    /// Cell value, `None` for null or absent cells.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        self.rows
            .get(row)?
            .get(column)
            .and_then(|value| value.as_deref())
    }

    /// Every value of one column, row by row.
    pub fn column_values(&self, column: &str) -> Vec<Option<&str>> {
        (0..self.rows.len()).map(|row| self.get(row, column)).collect()
    }

    /// Set `column` on every row, overwriting existing cells. A column not
    /// seen before is appended to the column universe, so a table without
    /// rows still learns the column name.
    pub fn set_column(&mut self, column: &str, value: Option<&str>) {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
        for row in &mut self.rows {
            row.insert(column.to_string(), value.map(str::to_string));
        }
    }

    /// Append every row of `other`, merging its columns into this table's
    /// universe.
    pub fn append(&mut self, other: Table) {
        for column in other.columns {
            if !self.has_column(&column) {
                self.columns.push(column);
            }
        }
        self.rows.extend(other.rows);
    }

    /// Concatenate tables in order. An empty input yields an explicitly
    /// empty table.
    pub fn concat(tables: impl IntoIterator<Item = Table>) -> Table {
        let mut combined = Table::new();
        for table in tables {
            combined.append(table);
        }
        combined
    }

    /// Index of the first row whose `column` equals `value`.
    pub fn find_row(&self, column: &str, value: &str) -> Option<usize> {
        (0..self.rows.len()).find(|&row| self.get(row, column) == Some(value))
    }
}
