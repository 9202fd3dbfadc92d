//! Column and placeholder tokens.

use crate::config::InsertConfig;
use crate::error::InsertError;
use crate::record::Field;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// How a field is rendered in the generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// The column name: `INSERT INTO tbl (foo, bar, baz)`
    ColumnName,
    /// `?` for every value: `VALUES (?, ?, ?)` (MySQL, SingleStore, SQLite)
    #[default]
    QuestionMark,
    /// `@` plus the column name: `VALUES (@foo, @bar, @baz)` (MySQL, SQL Server)
    AtColumnName,
    /// `$` plus the 1-based field position: `VALUES ($1, $2, $3)` (PostgreSQL)
    OrdinalNumber,
    /// `:` plus the column name: `VALUES (:foo, :bar, :baz)` (Oracle)
    Colon,
}

impl TokenKind {
    /// Every value-placeholder kind.
    pub const PLACEHOLDERS: [TokenKind; 4] = [
        TokenKind::QuestionMark,
        TokenKind::AtColumnName,
        TokenKind::OrdinalNumber,
        TokenKind::Colon,
    ];

    /// Whether this kind renders a bind placeholder rather than a column name.
    pub fn is_placeholder(self) -> bool {
        !matches!(self, TokenKind::ColumnName)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::ColumnName => "column_name",
            TokenKind::QuestionMark => "question_mark",
            TokenKind::AtColumnName => "at_column_name",
            TokenKind::OrdinalNumber => "ordinal_number",
            TokenKind::Colon => "colon",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = InsertError;

    /// Accepts the `Display` names and the bare sigils (`?`, `@`, `$`, `:`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column_name" | "column" => Ok(TokenKind::ColumnName),
            "question_mark" | "?" => Ok(TokenKind::QuestionMark),
            "at_column_name" | "@" => Ok(TokenKind::AtColumnName),
            "ordinal_number" | "ordinal" | "$" => Ok(TokenKind::OrdinalNumber),
            "colon" | ":" => Ok(TokenKind::Colon),
            _ => Err(InsertError::InvalidTokenKind(s.to_string())),
        }
    }
}

/// Render one token per field, joined by the configured separator.
///
/// Names are looked up under `config`'s annotation key. The result is not
/// wrapped in parentheses; see [`InsertConfig::group`]. Ordinal numbering is the
/// field's position in `fields`, starting at 1. An empty field list renders an
/// empty string.
pub fn tokenize(fields: &[Field], kind: TokenKind, config: &InsertConfig) -> String {
    let key = config.key();
    let separator = config.sep();
    let mut out = String::new();

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        match kind {
            TokenKind::ColumnName => out.push_str(field.name(key)),
            TokenKind::QuestionMark => out.push('?'),
            TokenKind::AtColumnName => {
                out.push('@');
                out.push_str(field.name(key));
            }
            TokenKind::OrdinalNumber => {
                let _ = write!(out, "${}", i + 1);
            }
            TokenKind::Colon => {
                out.push(':');
                out.push_str(field.name(key));
            }
        }
    }

    out
}
