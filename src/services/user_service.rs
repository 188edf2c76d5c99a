//! User service - Handles user-related use cases.
//!
//! Each operation runs in exactly one unit of work, so a request either
//! commits all of its effects or none of them.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::config::{ONLINE_WINDOW_SECONDS, UNIQUE_MIN_COINS, UNIQUE_MIN_RATING};
use crate::domain::{CreateUser, UpdateUser, User, UserStats};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PageParams;
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Page through users in id order
    async fn list_users(&self, page: PageParams) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Get user by exact nickname
    async fn get_user_by_nickname(&self, nickname: &str) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Apply a partial update to an existing user
    async fn update_user(&self, id: i32, patch: UpdateUser) -> AppResult<User>;

    /// Permanently delete a user, returning the removed record
    async fn delete_user(&self, id: i32) -> AppResult<User>;

    /// Total, online and unique user counts
    async fn user_stats(&self) -> AppResult<UserStats>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self, page: PageParams) -> AppResult<Vec<User>> {
        let models = with_transaction!(self.uow, |ctx| ctx.users().list(&page).await)?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        with_transaction!(self.uow, |ctx| ctx.users().get(id).await)?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn get_user_by_nickname(&self, nickname: &str) -> AppResult<User> {
        let nickname = nickname.to_owned();
        with_transaction!(self.uow, |ctx| ctx.users().find_by_nickname(&nickname).await)?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let model = with_transaction!(self.uow, |ctx| ctx.users().create(input).await)?;
        tracing::info!(user_id = model.id, "User created");
        Ok(User::from(model))
    }

    async fn update_user(&self, id: i32, patch: UpdateUser) -> AppResult<User> {
        with_transaction!(self.uow, |ctx| {
            let users = ctx.users();
            match users.get(id).await? {
                Some(existing) => users.update(existing, patch).await.map(Some),
                None => Ok(None),
            }
        })?
        .map(User::from)
        .ok_or_not_found()
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        let removed = with_transaction!(self.uow, |ctx| ctx.users().delete(id).await)?
            .map(User::from)
            .ok_or_not_found()?;
        tracing::info!(user_id = removed.id, "User deleted");
        Ok(removed)
    }

    async fn user_stats(&self) -> AppResult<UserStats> {
        let cutoff = Utc::now() - Duration::seconds(ONLINE_WINDOW_SECONDS);

        with_transaction!(self.uow, |ctx| {
            let users = ctx.users();
            let total = users.count().await?;
            let online = users.count_active_since(cutoff).await?;
            let unique = users
                .count_with_minimums(UNIQUE_MIN_COINS, UNIQUE_MIN_RATING)
                .await?;
            AppResult::Ok(UserStats {
                total,
                online,
                unique,
            })
        })
    }
}
