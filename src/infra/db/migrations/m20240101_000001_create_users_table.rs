//! Migration: Create users table.

use sea_orm_migration::prelude::*;

use crate::config::{MAX_EXTERNAL_UID_LENGTH, MAX_NICKNAME_LENGTH};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Nickname)
                            .string_len(MAX_NICKNAME_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::ExternalUid)
                            .string_len(MAX_EXTERNAL_UID_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Coins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::Rating)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::LastLogin)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::LastLogout)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_nickname")
                    .table(Users::Table)
                    .col(Users::Nickname)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Online counts filter on last_login
        manager
            .create_index(
                Index::create()
                    .name("idx_users_last_login")
                    .table(Users::Table)
                    .col(Users::LastLogin)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_external_uid")
                    .table(Users::Table)
                    .col(Users::ExternalUid)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Nickname,
    ExternalUid,
    Coins,
    Rating,
    LastLogin,
    LastLogout,
}
