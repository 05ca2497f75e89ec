use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, PrimaryKeyTrait};

use pinboard_core::error::RepoError;
use pinboard_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, Draft, ID> BaseRepository<T, Draft, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync + 'static,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
    Draft: Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let result = E::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, draft: Draft) -> Result<T, RepoError> {
        // Insert-only: the contract has no update operation, and insert hands
        // back the row with the database-assigned id.
        let active_model: E::ActiveModel = draft.into();
        let model = active_model.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("foreign key") || err_str.contains("violates") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError> {
        // Zero rows affected is fine: delete is idempotent by contract.
        E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
