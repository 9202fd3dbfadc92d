//! Derive macros for sqlinsert
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record;

/// Derive the `Record` trait for a struct.
///
/// # Example
///
/// ```ignore
/// use sqlinsert::Record;
///
/// #[derive(Record)]
/// struct Candy {
///     #[col = "id"]
///     id: String,
///     #[col = "candy_name"]
///     #[tag(db = "NAME")]
///     name: String,
///     // No `col` annotation: renders as an empty column name.
///     note: Option<String>,
/// }
/// ```
///
/// Every field is included, in declaration order. Field types must implement
/// `tokio_postgres::types::ToSql + Sync + Debug`.
///
/// # Attributes
///
/// - `#[col = "name"]` - Column name under the default annotation key `col`
/// - `#[tag(key = "name", ...)]` - Column names under other annotation keys,
///   selected at render time with `InsertConfig::tag_key`
#[proc_macro_derive(Record, attributes(col, tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
