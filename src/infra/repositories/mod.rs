//! Repository layer - Data access abstraction
//!
//! Repositories only exist inside a unit of work; obtain them from a
//! [`TransactionContext`](crate::infra::TransactionContext).

mod base;
pub mod entities;
mod user_repository;

pub use base::{CrudSchema, PrimaryKeyOf, Repository};
pub use user_repository::{TxUserRepository, UserSchema};
