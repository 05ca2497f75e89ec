use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `Draft` is the entity without its store-assigned id; `save` persists the
/// draft and returns the full entity with the id populated.
#[async_trait]
pub trait BaseRepository<T, Draft, ID>: Send + Sync {
    /// Return every stored entity - a snapshot at call time, unpaginated.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID. `None` for a missing id, never an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a draft, assigning its id.
    async fn save(&self, draft: Draft) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an absent id is a no-op, not an error.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {}

/// Post repository with the user-scoped lookup.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    /// Materialize a user's owned post collection with an explicit query.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}
