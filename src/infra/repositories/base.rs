//! Generic CRUD repository bound to a single transaction.
//!
//! A record type describes itself once through [`CrudSchema`]: its SeaORM
//! entity, its create/update inputs, and the explicit mapping from those
//! inputs onto an active model. [`Repository`] then provides the uniform
//! get/list/create/update/delete/count operations for any such schema.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, EntityTrait, FromQueryResult,
    IntoActiveModel, Iterable, ModelTrait, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryOrder, QuerySelect,
};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::types::PageParams;

/// Describes one record type to the generic repository.
pub trait CrudSchema: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;

    /// Input accepted by `create`
    type Create: Validate + Send + 'static;
    /// Partial field set accepted by `update`
    type Update: Validate + Send + 'static;

    /// Human-readable record name used in conflict messages
    const NAME: &'static str;

    /// Build the active model for a new record.
    fn new_record(input: Self::Create) -> Self::ActiveModel;

    /// Set exactly the fields present in `patch`; everything else stays untouched.
    fn apply_update(record: &mut Self::ActiveModel, patch: Self::Update);
}

/// Primary key value type of a schema's entity
pub type PrimaryKeyOf<S> =
    <<<S as CrudSchema>::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Transaction-bound repository for any [`CrudSchema`].
///
/// Borrows the transaction, so it can never outlive the unit of work that
/// created it.
pub struct Repository<'a, S: CrudSchema> {
    pub(crate) txn: &'a DatabaseTransaction,
    _schema: PhantomData<S>,
}

impl<'a, S: CrudSchema> Repository<'a, S> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self {
            txn,
            _schema: PhantomData,
        }
    }

    /// Find a record by primary key. Absence is `None`, not an error.
    pub async fn get(&self, id: PrimaryKeyOf<S>) -> AppResult<Option<S::Model>> {
        S::Entity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Page through records in ascending primary-key order.
    pub async fn list(&self, page: &PageParams) -> AppResult<Vec<S::Model>> {
        let mut query = S::Entity::find();
        for key in <<S::Entity as EntityTrait>::PrimaryKey as Iterable>::iter() {
            query = query.order_by_asc(key.into_column());
        }

        query
            .offset(page.skip)
            .limit(page.limit)
            .all(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Validate and insert a new record, returning it as stored.
    pub async fn create(&self, input: S::Create) -> AppResult<S::Model> {
        input.validate()?;

        S::new_record(input)
            .insert(self.txn)
            .await
            .map_err(|e| AppError::from_write(e, S::NAME))
    }

    /// Apply a partial update to `existing`.
    ///
    /// An update that sets nothing returns `existing` without a write.
    pub async fn update(&self, existing: S::Model, patch: S::Update) -> AppResult<S::Model> {
        patch.validate()?;

        let mut active = existing.clone().into_active_model();
        S::apply_update(&mut active, patch);
        if !active.is_changed() {
            return Ok(existing);
        }

        active
            .update(self.txn)
            .await
            .map_err(|e| AppError::from_write(e, S::NAME))
    }

    /// Remove a record, returning what was removed.
    pub async fn delete(&self, id: PrimaryKeyOf<S>) -> AppResult<Option<S::Model>> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        S::Entity::delete(existing.clone().into_active_model())
            .exec(self.txn)
            .await?;

        Ok(Some(existing))
    }

    /// Number of stored records.
    pub async fn count(&self) -> AppResult<u64> {
        S::Entity::find()
            .count(self.txn)
            .await
            .map_err(AppError::from)
    }
}
