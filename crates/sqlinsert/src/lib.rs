//! # sqlinsert
//!
//! Parameterized SQL `INSERT` statements and their bind arguments from typed records.
//!
//! ## Features
//!
//! - **Hide nothing**: the generated SQL is a plain string you can print and reuse
//! - **Any placeholder dialect**: `?`, `@name`, `$n` and `:name`
//! - **Single and multi-row inserts**: one `VALUES` group per record
//! - **Statically checked rows**: field names and values come from the `Record` trait,
//!   usually derived
//! - **Driver-agnostic execution**: anything implementing [`Executor`], with
//!   `tokio-postgres` clients and transactions supported out of the box
//!
//! ## Example
//!
//! ```ignore
//! use sqlinsert::{Insert, Record, TokenKind};
//!
//! #[derive(Record)]
//! struct Candy {
//!     #[col = "id"]
//!     id: String,
//!     #[col = "weight_grams"]
//!     weight: f64,
//! }
//!
//! let candy = Candy { id: "x".into(), weight: 1.5 };
//! let ins = Insert::one("candy", &candy);
//!
//! assert_eq!(
//!     ins.sql(TokenKind::QuestionMark),
//!     "INSERT INTO candy (id, weight_grams) VALUES (?, ?)"
//! );
//! assert_eq!(ins.args().len(), 2);
//!
//! // Prepare, execute and release the statement.
//! ins.insert(TokenKind::OrdinalNumber, &client).await?;
//! ```
//!
//! Identifiers are never quoted or escaped; pass table and column names that are
//! already safe to embed.

pub mod args;
pub mod config;
pub mod error;
pub mod executor;
pub mod insert;
mod logging;
pub mod record;
pub mod token;

pub use args::Args;
pub use config::InsertConfig;
pub use error::{InsertError, InsertResult};
pub use executor::{Cancellation, ContextExecutor, ExecContext, Executor};
pub use insert::Insert;
pub use record::{DEFAULT_TAG_KEY, Field, Record, SqlValue};
pub use token::{TokenKind, tokenize};

#[cfg(feature = "derive")]
pub use sqlinsert_derive::Record;
