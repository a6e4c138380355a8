//! In-process post datastore.
//!
//! Posts are kept in creation order so that listing is stable across calls.
//! Reads share the lock; writes take it exclusively for the duration of a
//! single operation.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Post, UpdatePost};

#[derive(Clone, Debug, Default)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Post> {
        let posts = self.posts.read().await;
        posts.iter().find(|post| post.id == id).cloned()
    }

    pub async fn insert(&self, post: Post) -> Post {
        self.posts.write().await.push(post.clone());
        post
    }

    /// Returns `None` when no post has the given id.
    pub async fn update(&self, id: Uuid, input: UpdatePost) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == id)?;
        post.apply(input);
        Some(post.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let index = posts.iter().position(|post| post.id == id)?;
        Some(posts.remove(index))
    }
}
