//! User record schema and user-specific queries.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use super::base::{CrudSchema, Repository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use crate::domain::{CreateUser, UpdateUser};
use crate::errors::{AppError, AppResult};

/// [`CrudSchema`] for the `users` table.
pub struct UserSchema;

impl CrudSchema for UserSchema {
    type Entity = UserEntity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = CreateUser;
    type Update = UpdateUser;

    const NAME: &'static str = "User";

    fn new_record(input: CreateUser) -> ActiveModel {
        let now = Utc::now();
        ActiveModel {
            id: NotSet,
            nickname: Set(input.nickname),
            external_uid: Set(input.external_uid),
            coins: Set(input.coins.unwrap_or(0)),
            rating: Set(input.rating.unwrap_or(0)),
            last_login: Set(now),
            last_logout: Set(now),
        }
    }

    fn apply_update(record: &mut ActiveModel, patch: UpdateUser) {
        let UpdateUser { coins, rating } = patch;

        if let Some(coins) = coins {
            record.coins = Set(coins);
        }
        if let Some(rating) = rating {
            record.rating = Set(rating);
        }
    }
}

/// Transaction-bound user repository
pub type TxUserRepository<'a> = Repository<'a, UserSchema>;

impl<'a> Repository<'a, UserSchema> {
    /// Find a user by exact nickname.
    pub async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<Model>> {
        UserEntity::find()
            .filter(user::Column::Nickname.eq(nickname))
            .one(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Count users whose last login is at or after `cutoff`.
    pub async fn count_active_since(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        UserEntity::find()
            .filter(user::Column::LastLogin.gte(cutoff))
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Count users strictly above both thresholds.
    pub async fn count_with_minimums(&self, min_coins: i32, min_rating: i32) -> AppResult<u64> {
        UserEntity::find()
            .filter(user::Column::Coins.gt(min_coins))
            .filter(user::Column::Rating.gt(min_rating))
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }
}
