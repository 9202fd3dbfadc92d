//! INSERT statement builder.

use crate::args::Args;
use crate::config::{self, InsertConfig};
use crate::executor::{ContextExecutor, ExecContext, Executor, StatementGuard};
use crate::logging;
use crate::record::Record;
use crate::token::{TokenKind, tokenize};
use std::fmt::Write as _;

/// A single-use INSERT request: a table and one or more rows of the same type.
///
/// Identifiers are written into the SQL exactly as given. Table and column names
/// must already be safe; nothing is quoted or escaped.
///
/// # Example
///
/// ```ignore
/// use sqlinsert::{Insert, TokenKind};
///
/// let ins = Insert::one("candy", &candy);
/// assert_eq!(ins.sql(TokenKind::QuestionMark), "INSERT INTO candy (id, weight) VALUES (?, ?)");
///
/// let rows = ins.insert(TokenKind::OrdinalNumber, &client).await?;
/// ```
#[derive(Debug)]
pub struct Insert<'a, R> {
    table: String,
    rows: &'a [R],
    config: InsertConfig,
}

impl<'a, R: Record> Insert<'a, R> {
    /// Create a request for `rows`, snapshotting the process-wide default configuration.
    pub fn new(table: impl Into<String>, rows: &'a [R]) -> Self {
        Self {
            table: table.into(),
            rows,
            config: config::default_config(),
        }
    }

    /// Insert a single record.
    pub fn one(table: impl Into<String>, record: &'a R) -> Self {
        Self::new(table, std::slice::from_ref(record))
    }

    /// Insert a batch of records with one multi-row statement.
    pub fn many(table: impl Into<String>, records: &'a [R]) -> Self {
        Self::new(table, records)
    }

    /// Replace the configuration snapshot.
    pub fn with_config(mut self, config: InsertConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn rows(&self) -> &'a [R] {
        self.rows
    }

    pub fn config(&self) -> &InsertConfig {
        &self.config
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render one token per field of the row type.
    pub fn tokenize(&self, kind: TokenKind) -> String {
        tokenize(R::fields(), kind, &self.config)
    }

    /// The parenthesized column list, e.g. `(id, weight)`.
    pub fn columns(&self) -> String {
        self.config.group(&self.tokenize(TokenKind::ColumnName))
    }

    /// The placeholder clause: one parenthesized group per row.
    ///
    /// The group is rendered once and repeated for every row, so
    /// [`TokenKind::OrdinalNumber`] restarts at `$1` in each group:
    /// `($1, $2), ($1, $2)`. Drivers that need globally unique ordinals across a
    /// multi-row statement (PostgreSQL among them) will not bind that; insert
    /// rows one at a time or use another kind for batches.
    ///
    /// An empty batch renders an empty string.
    pub fn params(&self, kind: TokenKind) -> String {
        let n = self.rows.len();
        if n == 0 {
            return String::new();
        }

        let group = self.config.group(&self.tokenize(kind));
        if n == 1 {
            return group;
        }

        let separator = self.config.sep();
        let mut out = String::with_capacity(n * (group.len() + separator.len()));
        for i in 0..n {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&group);
        }
        out
    }

    /// The full statement: `INSERT INTO <table> <columns> VALUES <params>`.
    pub fn sql(&self, kind: TokenKind) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "INSERT INTO {} {} VALUES {}",
            self.table,
            self.columns(),
            self.params(kind)
        );
        out
    }

    /// Every row's values in row-major order, aligned with [`Insert::params`].
    pub fn args(&self) -> Args<'a> {
        let mut args = Args::with_capacity(self.rows.len() * R::fields().len());
        for row in self.rows {
            row.push_values(&mut args);
        }
        args
    }

    /// SQL and arguments rendered with the configured token kind.
    pub fn statement(&self) -> (String, Args<'a>) {
        (self.sql(self.config.token_kind), self.args())
    }

    /// Prepare and execute the statement, returning the affected row count.
    ///
    /// The prepared handle is released before this returns, on success and on
    /// failure. Errors from prepare or exec are returned exactly as the executor
    /// produced them.
    pub async fn insert<E: Executor>(&self, kind: TokenKind, executor: &E) -> Result<u64, E::Error> {
        let sql = self.sql(kind);
        let args = self.args();
        logging::before_prepare(kind, self.rows.len(), args.len(), &sql);

        let mut guard = StatementGuard::new(executor);
        let stmt = guard.hold(executor.prepare(&sql).await?);
        let result = executor.exec(stmt, &args.as_params()).await;
        drop(guard);

        logging::after_exec(&result);
        result
    }

    /// Like [`Insert::insert`], forwarding `ctx` to both prepare and exec.
    pub async fn insert_with_context<E: ContextExecutor>(
        &self,
        kind: TokenKind,
        executor: &E,
        ctx: &ExecContext,
    ) -> Result<u64, E::Error> {
        let sql = self.sql(kind);
        let args = self.args();
        logging::before_prepare(kind, self.rows.len(), args.len(), &sql);

        let mut guard = StatementGuard::new(executor);
        let stmt = guard.hold(executor.prepare_with_context(ctx, &sql).await?);
        let result = executor
            .exec_with_context(ctx, stmt, &args.as_params())
            .await;
        drop(guard);

        logging::after_exec(&result);
        result
    }
}
