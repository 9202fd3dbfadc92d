//! Rendering configuration and its process-wide default.
//!
//! Every [`Insert`](crate::Insert) carries its own [`InsertConfig`]. The
//! process-wide default below is only read when a request is constructed, so
//! changing it never affects a request that already exists. Callers that build
//! statements concurrently and need a fixed dialect should pass a config
//! explicitly with [`Insert::with_config`](crate::Insert::with_config).

use crate::record::DEFAULT_TAG_KEY;
use crate::token::TokenKind;
use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};

/// Configuration for rendering INSERT statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertConfig {
    /// Annotation key that holds column names.
    pub tag_key: Cow<'static, str>,
    /// Placeholder kind used by [`Insert::statement`](crate::Insert::statement).
    pub token_kind: TokenKind,
    /// Separator between tokens and between row groups.
    pub separator: Cow<'static, str>,
}

static DEFAULT_CONFIG: RwLock<InsertConfig> = RwLock::new(InsertConfig::const_default());

impl Default for InsertConfig {
    fn default() -> Self {
        Self::const_default()
    }
}

impl InsertConfig {
    const fn const_default() -> Self {
        Self {
            tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
            token_kind: TokenKind::QuestionMark,
            separator: Cow::Borrowed(", "),
        }
    }

    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annotation key for column names.
    pub fn tag_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Set the default placeholder kind.
    pub fn token_kind(mut self, kind: TokenKind) -> Self {
        self.token_kind = kind;
        self
    }

    /// Set the token separator.
    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Use `,` with no spacing: `(a,b) VALUES (?,?),(?,?)`.
    pub fn compact(self) -> Self {
        self.separator(",")
    }

    /// Wrap a token list in parentheses.
    pub fn group(&self, tokens: &str) -> String {
        let mut out = String::with_capacity(tokens.len() + 2);
        out.push('(');
        out.push_str(tokens);
        out.push(')');
        out
    }

    pub(crate) fn key(&self) -> &str {
        &self.tag_key
    }

    pub(crate) fn sep(&self) -> &str {
        &self.separator
    }
}

/// Snapshot of the process-wide default configuration.
pub fn default_config() -> InsertConfig {
    DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide default configuration.
pub fn set_default(config: InsertConfig) {
    *DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner) = config;
}

/// Change the process-wide annotation key (default `col`).
pub fn set_tag_key(key: impl Into<Cow<'static, str>>) {
    DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .tag_key = key.into();
}

/// Change the process-wide placeholder kind (default [`TokenKind::QuestionMark`]).
pub fn set_token_kind(kind: TokenKind) {
    DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .token_kind = kind;
}
