//! Accumulated search results

use super::schema;
use crate::error::PersistError;
use crate::types::JsonObject;
use arrow::record_batch::RecordBatch;
use std::collections::HashSet;

/// All items collected for one query, in fetch order
///
/// Columns are the union of item field names in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<JsonObject>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a result set holding exactly these rows
    pub fn from_rows(rows: Vec<JsonObject>) -> Self {
        let mut set = Self::new();
        set.append(rows);
        set
    }

    /// Append rows after the existing ones
    pub fn append(&mut self, rows: Vec<JsonObject>) {
        let mut known: HashSet<String> = self.columns.iter().cloned().collect();
        for row in &rows {
            for key in row.keys() {
                if known.insert(key.clone()) {
                    self.columns.push(key.clone());
                }
            }
        }
        self.rows.extend(rows);
    }

    /// Merge a page into an optional accumulator
    ///
    /// With no accumulator yet, the page becomes the accumulator; otherwise
    /// the page is appended.
    pub fn merge(accumulator: Option<Self>, page: Vec<JsonObject>) -> Self {
        match accumulator {
            None => Self::from_rows(page),
            Some(mut acc) => {
                acc.append(page);
                acc
            }
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in first-seen order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in fetch order
    pub fn rows(&self) -> &[JsonObject] {
        &self.rows
    }

    /// Convert to an Arrow batch with a leading `0..len` index column
    pub fn to_record_batch(&self, index_column: &str) -> Result<RecordBatch, PersistError> {
        schema::to_record_batch(&self.columns, &self.rows, index_column)
    }
}
