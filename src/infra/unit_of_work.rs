//! Unit of Work pattern implementation.
//!
//! Every storage operation runs inside exactly one unit of work: a single
//! transaction that commits when the closure succeeds and rolls back when it
//! fails. Repositories are only reachable through the [`TransactionContext`],
//! so nothing can touch the store outside a transaction.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{CrudSchema, Repository, TxUserRepository};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transaction closures
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not mockable directly due to the generic method.
/// For testing, mock at the service level or use an in-memory store.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a transaction.
    ///
    /// Committed on `Ok`, rolled back on `Err`. The transaction is driven on
    /// its own task, so dropping the returned future still lets it finish.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send + 'static,
        T: Send + 'static;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'a> {
        Repository::new(self.txn)
    }

    /// Get the repository for any record schema
    pub fn repo<S: CrudSchema>(&self) -> Repository<'a, S> {
        Repository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork over a pooled connection
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn run<F, T>(db: DatabaseConnection, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = db.begin().await.map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();

        tokio::spawn(Self::run(db, f)).await.map_err(|e| {
            tracing::error!("Transaction task failed: {}", e);
            AppError::internal(format!("transaction task failed: {e}"))
        })?
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(move |$ctx| Box::pin(async move { $body }))
            .await
    };
}
