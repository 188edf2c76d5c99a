//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, Persistence};
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
    /// Token every protected request must present
    auth_token: Arc<str>,
}

impl AppState {
    /// Wire the production services over `database`.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(uow));

        Self::new(user_service, database, config.auth_token())
    }

    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
        auth_token: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            user_service,
            database,
            auth_token: auth_token.into(),
        }
    }

    /// The configured shared secret.
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}
