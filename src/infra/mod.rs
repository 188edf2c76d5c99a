//! Infrastructure layer - External systems integration
//!
//! - Database connection, pool and migrations
//! - Transaction-bound repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{CrudSchema, Repository, TxUserRepository, UserSchema};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};
