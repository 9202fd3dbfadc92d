//! Positional bind arguments.

use crate::record::SqlValue;
use std::fmt;
use tokio_postgres::types::ToSql;

/// A flat, ordered list of borrowed bind values.
///
/// Values are borrowed from the records they came from, so building the list
/// never clones row data.
#[derive(Clone, Default)]
pub struct Args<'a> {
    values: Vec<&'a dyn SqlValue>,
}

impl<'a> Args<'a> {
    /// Create a new empty argument list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty list with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Add a value at the next position.
    pub fn push<T: SqlValue>(&mut self, value: &'a T) {
        self.values.push(value);
    }

    /// Get the current value count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the values in bind order.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn SqlValue> + '_ {
        self.values.iter().copied()
    }

    /// Get all values as references for tokio-postgres.
    pub fn as_params(&self) -> Vec<&'a (dyn ToSql + Sync)> {
        self.values.iter().map(|&v| v.as_to_sql()).collect()
    }
}

impl fmt::Debug for Args<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
