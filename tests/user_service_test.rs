//! User service tests.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DbErr;

use telewebmanager_api::domain::{CreateUser, UpdateUser};
use telewebmanager_api::errors::{AppError, AppResult};
use telewebmanager_api::infra::{TransactionContext, TxFuture, UnitOfWork};
use telewebmanager_api::services::{UserManager, UserService};
use telewebmanager_api::types::PageParams;

use common::setup_persistence;

/// Unit of work whose store is never reachable
struct UnavailableStore;

#[async_trait]
impl UnitOfWork for UnavailableStore {
    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send + 'static,
        T: Send + 'static,
    {
        Err(AppError::Storage(DbErr::Custom("pool timed out".into())))
    }
}

async fn service() -> UserManager<telewebmanager_api::infra::Persistence> {
    let (_db, uow) = setup_persistence().await;
    UserManager::new(uow)
}

#[tokio::test]
async fn test_storage_failures_propagate() {
    let service = UserManager::new(Arc::new(UnavailableStore));

    let result = service.get_user(1).await;
    assert!(matches!(result, Err(AppError::Storage(_))));

    let result = service.user_stats().await;
    assert!(matches!(result, Err(AppError::Storage(_))));
}

#[tokio::test]
async fn test_get_user_not_found() {
    let service = service().await;

    let result = service.get_user(1).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let result = service.get_user_by_nickname("nobody").await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_create_then_get() {
    let service = service().await;

    let created = service
        .create_user(CreateUser::new("alice", "1001"))
        .await
        .unwrap();
    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let by_nickname = service.get_user_by_nickname("alice").await.unwrap();
    assert_eq!(by_nickname, created);
}

#[tokio::test]
async fn test_update_user() {
    let service = service().await;
    let created = service
        .create_user(CreateUser::new("alice", "1001"))
        .await
        .unwrap();

    let patch = UpdateUser {
        coins: Some(50),
        rating: None,
    };
    let updated = service.update_user(created.id, patch).await.unwrap();
    assert_eq!(updated.coins, 50);
    assert_eq!(updated.rating, 0);

    let result = service.update_user(created.id + 1, UpdateUser::default()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_user() {
    let service = service().await;
    let created = service
        .create_user(CreateUser::new("alice", "1001"))
        .await
        .unwrap();

    let removed = service.delete_user(created.id).await.unwrap();
    assert_eq!(removed, created);

    let result = service.delete_user(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let users = service.list_users(PageParams::default()).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_user_stats() {
    let service = service().await;
    let mut rich = CreateUser::new("rich", "1");
    rich.coins = Some(101);
    rich.rating = Some(51);
    service.create_user(rich).await.unwrap();
    service
        .create_user(CreateUser::new("plain", "2"))
        .await
        .unwrap();

    let stats = service.user_stats().await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.online, 2);
    assert_eq!(stats.unique, 1);
}
