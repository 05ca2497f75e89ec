//! In-memory stores - used when no database is configured, and in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pinboard_core::domain::{NewPost, NewUser, Post, User};
use pinboard_core::error::RepoError;
use pinboard_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Both tables live behind one lock so the post store can check the foreign
/// key and user deletion can cascade, mirroring what Postgres enforces.
struct Tables {
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, Post>,
    next_user_id: i32,
    next_post_id: i32,
}

/// Shared in-memory database. Note: data is lost on process restart.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tables: RwLock::new(Tables {
                users: BTreeMap::new(),
                posts: BTreeMap::new(),
                next_user_id: 1,
                next_post_id: 1,
            }),
        })
    }
}

/// Build a user/post repository pair over one shared store.
pub fn in_memory_repositories() -> (InMemoryUserRepository, InMemoryPostRepository) {
    let store = InMemoryStore::new();
    (
        InMemoryUserRepository {
            store: store.clone(),
        },
        InMemoryPostRepository { store },
    )
}

/// In-memory user store.
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

/// In-memory post store.
pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl BaseRepository<User, NewUser, i32> for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn save(&self, draft: NewUser) -> Result<User, RepoError> {
        let mut tables = self.store.tables.write().await;
        // Ids count up monotonically and are never reused.
        let id = tables.next_user_id;
        tables.next_user_id += 1;

        let user = draft.with_id(id);
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.users.remove(&id).is_some() {
            // ON DELETE CASCADE
            tables.posts.retain(|_, post| post.user_id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {}

#[async_trait]
impl BaseRepository<Post, NewPost, i32> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn save(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.users.contains_key(&draft.user_id) {
            return Err(RepoError::Constraint(format!(
                "posts.user_id references missing user {}",
                draft.user_id
            )));
        }

        let id = tables.next_post_id;
        tables.next_post_id += 1;

        let post = draft.with_id(id);
        tables.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        tables.posts.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect())
    }
}
