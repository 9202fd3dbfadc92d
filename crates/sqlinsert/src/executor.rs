//! The prepare/execute contract statements are run through.
//!
//! Implemented for `tokio_postgres::Client`, `tokio_postgres::Transaction` and,
//! with the `pool` feature, `deadpool_postgres::Client`. Pass a transaction
//! anywhere an [`Executor`] is expected to insert inside it.

use crate::error::{InsertError, InsertResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_postgres::Statement;
use tokio_postgres::types::ToSql;

/// Something that can prepare a SQL string and execute the prepared handle.
pub trait Executor: Send + Sync {
    /// Prepared statement handle.
    type Statement: Send + Sync;

    /// Error reported by prepare and exec. Returned to callers unchanged.
    type Error;

    /// Prepare `sql` into a statement handle.
    fn prepare(
        &self,
        sql: &str,
    ) -> impl Future<Output = Result<Self::Statement, Self::Error>> + Send;

    /// Execute a prepared handle with positional parameters, returning the affected row count.
    fn exec(
        &self,
        stmt: &Self::Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Release a prepared handle.
    ///
    /// The default implementation drops it.
    fn release(&self, stmt: Self::Statement) {
        drop(stmt);
    }
}

/// An [`Executor`] that honours an [`ExecContext`] on both calls.
pub trait ContextExecutor: Executor {
    /// Prepare `sql`, giving up when `ctx` is cancelled or times out.
    fn prepare_with_context(
        &self,
        ctx: &ExecContext,
        sql: &str,
    ) -> impl Future<Output = Result<Self::Statement, Self::Error>> + Send;

    /// Execute a prepared handle, giving up when `ctx` is cancelled or times out.
    fn exec_with_context(
        &self,
        ctx: &ExecContext,
        stmt: &Self::Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

/// A clonable cancellation token.
///
/// All clones observe the same state; once cancelled it stays cancelled.
#[derive(Debug, Clone)]
pub struct Cancellation {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellation {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Cancel every operation waiting on this token.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so the channel cannot close here.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Cancellation and deadline forwarded to a [`ContextExecutor`].
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    /// Per-call timeout, applied separately to prepare and exec.
    pub timeout: Option<Duration>,
    /// Token that aborts the in-flight call when cancelled.
    pub cancellation: Option<Cancellation>,
}

impl ExecContext {
    /// A context that never times out and cannot be cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Attach a cancellation token.
    pub fn cancellation(mut self, token: Cancellation) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Run `future` until it completes, the token is cancelled or the timeout elapses.
    ///
    /// A context that is already cancelled returns before `future` is polled. The
    /// operation is polled ahead of the token and the timer, so an operation that
    /// finishes in the same instant as the deadline still reports its own result.
    /// When the context wins, `on_abort` runs before the error is returned; the
    /// postgres executors use it to send a server-side cancel request.
    pub async fn run<T, F>(&self, future: F, on_abort: impl FnOnce()) -> InsertResult<T>
    where
        F: Future<Output = InsertResult<T>>,
    {
        if self.cancellation.as_ref().is_some_and(Cancellation::is_cancelled) {
            return Err(InsertError::Cancelled);
        }

        let timeout = self.timeout;
        let deadline = async move {
            match timeout {
                Some(duration) => {
                    tokio::time::sleep(duration).await;
                    duration
                }
                None => std::future::pending().await,
            }
        };
        let cancelled = async {
            match &self.cancellation {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            result = future => result,
            _ = cancelled => {
                on_abort();
                Err(InsertError::Cancelled)
            }
            duration = deadline => {
                on_abort();
                Err(InsertError::Timeout(duration))
            }
        }
    }
}

/// Owns a prepared handle for the duration of one insert and releases it on drop.
pub(crate) struct StatementGuard<'e, E: Executor> {
    executor: &'e E,
    stmt: Option<E::Statement>,
}

impl<'e, E: Executor> StatementGuard<'e, E> {
    pub(crate) fn new(executor: &'e E) -> Self {
        Self { executor, stmt: None }
    }

    /// Take ownership of `stmt` until the guard drops.
    pub(crate) fn hold(&mut self, stmt: E::Statement) -> &E::Statement {
        self.stmt.insert(stmt)
    }
}

impl<E: Executor> Drop for StatementGuard<'_, E> {
    fn drop(&mut self) {
        if let Some(stmt) = self.stmt.take() {
            self.executor.release(stmt);
        }
    }
}

fn spawn_cancel(token: tokio_postgres::CancelToken) {
    tokio::spawn(async move {
        let _ = token.cancel_query(tokio_postgres::NoTls).await;
    });
}

impl Executor for tokio_postgres::Client {
    type Statement = Statement;
    type Error = InsertError;

    async fn prepare(&self, sql: &str) -> InsertResult<Statement> {
        tokio_postgres::Client::prepare(self, sql)
            .await
            .map_err(InsertError::from)
    }

    async fn exec(&self, stmt: &Statement, params: &[&(dyn ToSql + Sync)]) -> InsertResult<u64> {
        tokio_postgres::Client::execute(self, stmt, params)
            .await
            .map_err(InsertError::from)
    }
}

impl ContextExecutor for tokio_postgres::Client {
    async fn prepare_with_context(&self, ctx: &ExecContext, sql: &str) -> InsertResult<Statement> {
        let token = tokio_postgres::Client::cancel_token(self);
        ctx.run(Executor::prepare(self, sql), || spawn_cancel(token))
            .await
    }

    async fn exec_with_context(
        &self,
        ctx: &ExecContext,
        stmt: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> InsertResult<u64> {
        let token = tokio_postgres::Client::cancel_token(self);
        ctx.run(Executor::exec(self, stmt, params), || spawn_cancel(token))
            .await
    }
}

impl Executor for tokio_postgres::Transaction<'_> {
    type Statement = Statement;
    type Error = InsertError;

    async fn prepare(&self, sql: &str) -> InsertResult<Statement> {
        tokio_postgres::Transaction::prepare(self, sql)
            .await
            .map_err(InsertError::from)
    }

    async fn exec(&self, stmt: &Statement, params: &[&(dyn ToSql + Sync)]) -> InsertResult<u64> {
        tokio_postgres::Transaction::execute(self, stmt, params)
            .await
            .map_err(InsertError::from)
    }
}

impl ContextExecutor for tokio_postgres::Transaction<'_> {
    async fn prepare_with_context(&self, ctx: &ExecContext, sql: &str) -> InsertResult<Statement> {
        let token = tokio_postgres::Transaction::cancel_token(self);
        ctx.run(Executor::prepare(self, sql), || spawn_cancel(token))
            .await
    }

    async fn exec_with_context(
        &self,
        ctx: &ExecContext,
        stmt: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> InsertResult<u64> {
        let token = tokio_postgres::Transaction::cancel_token(self);
        ctx.run(Executor::exec(self, stmt, params), || spawn_cancel(token))
            .await
    }
}

#[cfg(feature = "pool")]
impl Executor for deadpool_postgres::Client {
    type Statement = Statement;
    type Error = InsertError;

    async fn prepare(&self, sql: &str) -> InsertResult<Statement> {
        let client: &tokio_postgres::Client = self;
        Executor::prepare(client, sql).await
    }

    async fn exec(&self, stmt: &Statement, params: &[&(dyn ToSql + Sync)]) -> InsertResult<u64> {
        let client: &tokio_postgres::Client = self;
        Executor::exec(client, stmt, params).await
    }
}

#[cfg(feature = "pool")]
impl ContextExecutor for deadpool_postgres::Client {
    async fn prepare_with_context(&self, ctx: &ExecContext, sql: &str) -> InsertResult<Statement> {
        let client: &tokio_postgres::Client = self;
        ContextExecutor::prepare_with_context(client, ctx, sql).await
    }

    async fn exec_with_context(
        &self,
        ctx: &ExecContext,
        stmt: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> InsertResult<u64> {
        let client: &tokio_postgres::Client = self;
        ContextExecutor::exec_with_context(client, ctx, stmt, params).await
    }
}
