//! SQL debug events, emitted via `tracing` under the target `sqlinsert.sql`.
//!
//! Enable via the crate feature: `sqlinsert = { features = ["tracing"] }` (on by
//! default). Without it these functions compile to nothing.

use crate::token::TokenKind;

/// Longest SQL string (in bytes) written to a log event.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
const MAX_SQL_LENGTH: usize = 200;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn before_prepare(kind: TokenKind, rows: usize, param_count: usize, sql: &str) {
    let shown = truncate_sql_bytes(sql, MAX_SQL_LENGTH);
    let truncated = shown.len() < sql.len();
    tracing::debug!(
        target: "sqlinsert.sql",
        token_kind = %kind,
        rows,
        param_count,
        truncated,
        sql = %shown,
        "prepare insert"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn before_prepare(_kind: TokenKind, _rows: usize, _param_count: usize, _sql: &str) {}

#[cfg(feature = "tracing")]
pub(crate) fn after_exec<E>(result: &Result<u64, E>) {
    match result {
        Ok(affected) => tracing::debug!(target: "sqlinsert.sql", affected, "insert executed"),
        Err(_) => tracing::debug!(target: "sqlinsert.sql", "insert failed"),
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn after_exec<E>(_result: &Result<u64, E>) {}
