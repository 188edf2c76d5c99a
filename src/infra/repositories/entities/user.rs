//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nickname: String,
    /// Platform-side user id
    #[sea_orm(unique)]
    pub external_uid: String,
    pub coins: i32,
    pub rating: i32,
    pub last_login: DateTimeUtc,
    pub last_logout: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            nickname: model.nickname,
            external_uid: model.external_uid,
            coins: model.coins,
            rating: model.rating,
            last_login: model.last_login,
            last_logout: model.last_logout,
        }
    }
}
