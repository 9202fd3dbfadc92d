//! Record shape and value access.
//!
//! A [`Record`] is one row's worth of named, ordered field data. Its shape is a
//! `&'static [Field]` known per type, so every record of a `&[R]` batch has the
//! same field count and order by construction.
//!
//! ```ignore
//! use sqlinsert::Record;
//!
//! #[derive(Record)]
//! struct Candy {
//!     #[col = "id"]
//!     id: String,
//!     #[col = "weight_grams"]
//!     #[tag(db = "WEIGHT")]
//!     weight: f64,
//! }
//! ```

use crate::args::Args;
use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// Annotation key used for column names unless configured otherwise.
pub const DEFAULT_TAG_KEY: &str = "col";

/// Static descriptor of one record field.
///
/// The field's ordinal position is its index in [`Record::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    ident: &'static str,
    tags: &'static [(&'static str, &'static str)],
}

impl Field {
    /// Create a descriptor from the Rust field name and its `(key, name)` annotations.
    pub const fn new(ident: &'static str, tags: &'static [(&'static str, &'static str)]) -> Self {
        Self { ident, tags }
    }

    /// The Rust identifier of the field.
    pub fn ident(&self) -> &'static str {
        self.ident
    }

    /// All `(key, name)` annotations in declaration order.
    pub fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// The name annotated under `key`.
    ///
    /// A field without that annotation has an empty name. That is rendered as-is,
    /// not reported.
    pub fn name(&self, key: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, name)| *name)
            .unwrap_or("")
    }
}

/// An opaque value that can be bound to a positional placeholder.
///
/// Blanket-implemented for every `ToSql + Sync + Debug` type. The builder only
/// moves borrows of these from records into [`Args`].
pub trait SqlValue: ToSql + Sync + fmt::Debug {
    /// The value as a driver parameter.
    fn as_to_sql(&self) -> &(dyn ToSql + Sync);
}

impl<T: ToSql + Sync + fmt::Debug> SqlValue for T {
    fn as_to_sql(&self) -> &(dyn ToSql + Sync) {
        self
    }
}

/// A row that can be inserted.
///
/// Usually derived with `#[derive(Record)]`.
pub trait Record {
    /// Field descriptors in declaration order.
    fn fields() -> &'static [Field];

    /// Push this row's values, in the order of [`Record::fields`].
    fn push_values<'a>(&'a self, out: &mut Args<'a>);
}

impl<R: Record> Record for &R {
    fn fields() -> &'static [Field] {
        R::fields()
    }

    fn push_values<'a>(&'a self, out: &mut Args<'a>) {
        R::push_values(*self, out)
    }
}

impl<R: Record> Record for Box<R> {
    fn fields() -> &'static [Field] {
        R::fields()
    }

    fn push_values<'a>(&'a self, out: &mut Args<'a>) {
        R::push_values(self, out)
    }
}

impl<R: Record> Record for Arc<R> {
    fn fields() -> &'static [Field] {
        R::fields()
    }

    fn push_values<'a>(&'a self, out: &mut Args<'a>) {
        R::push_values(self, out)
    }
}
