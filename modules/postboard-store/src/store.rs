use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use postboard_common::{NewPost, Post, PostChanges, StoreError, Tag};

/// In-memory holder of every post and tag for the life of the process.
///
/// Both collections sit behind one lock, so each mutation validates and
/// commits under a single write guard. Lookups are linear scans in
/// insertion order.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Collections>,
}

#[derive(Debug, Default)]
struct Collections {
    posts: Vec<Post>,
    tags: Vec<Tag>,
}

impl Collections {
    fn post_index(&self, id: Uuid) -> Option<usize> {
        self.posts.iter().position(|p| p.id == id)
    }

    fn has_tag(&self, id: Uuid) -> bool {
        self.tags.iter().any(|t| t.id == id)
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Reads ---

    pub async fn posts(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    pub async fn post(&self, id: Uuid) -> Option<Post> {
        let inner = self.inner.read().await;
        inner.posts.iter().find(|p| p.id == id).cloned()
    }

    pub async fn tags(&self) -> Vec<Tag> {
        self.inner.read().await.tags.clone()
    }

    pub async fn tag(&self, id: Uuid) -> Option<Tag> {
        let inner = self.inner.read().await;
        inner.tags.iter().find(|t| t.id == id).cloned()
    }

    /// Posts filed under `tag_id`. An unknown tag simply has no posts.
    pub async fn posts_by_tag(&self, tag_id: Uuid) -> Vec<Post> {
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .filter(|p| p.tag_id == tag_id)
            .cloned()
            .collect()
    }

    /// Batch lookup. Ids with no matching tag are left out of the map.
    pub async fn tags_by_ids(&self, ids: &[Uuid]) -> HashMap<Uuid, Tag> {
        let inner = self.inner.read().await;
        inner
            .tags
            .iter()
            .filter(|t| ids.contains(&t.id))
            .map(|t| (t.id, t.clone()))
            .collect()
    }

    /// Batch lookup. Every requested id gets an entry, empty if nothing matches.
    pub async fn posts_by_tag_ids(&self, ids: &[Uuid]) -> HashMap<Uuid, Vec<Post>> {
        let inner = self.inner.read().await;
        let mut grouped: HashMap<Uuid, Vec<Post>> =
            ids.iter().map(|id| (*id, Vec::new())).collect();
        for post in &inner.posts {
            if let Some(bucket) = grouped.get_mut(&post.tag_id) {
                bucket.push(post.clone());
            }
        }
        grouped
    }

    // --- Mutations ---

    pub async fn create_post(&self, input: NewPost) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.has_tag(input.tag_id) {
            warn!(tag_id = %input.tag_id, "create_post: tag not found");
            return Err(StoreError::TagNotFound(input.tag_id.to_string()));
        }

        let post = Post::new(input);
        inner.posts.push(post.clone());
        info!(post_id = %post.id, tag_id = %post.tag_id, "Post created");
        Ok(post)
    }

    pub async fn update_post(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(index) = inner.post_index(id) else {
            warn!(post_id = %id, "update_post: post not found");
            return Err(StoreError::PostNotFound(id.to_string()));
        };

        if let Some(tag_id) = changes.tag_id {
            if !inner.has_tag(tag_id) {
                warn!(post_id = %id, tag_id = %tag_id, "update_post: tag not found");
                return Err(StoreError::TagNotFound(tag_id.to_string()));
            }
        }

        let post = &mut inner.posts[index];
        post.apply(changes);
        info!(post_id = %post.id, tag_id = %post.tag_id, "Post updated");
        Ok(post.clone())
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(index) = inner.post_index(id) else {
            warn!(post_id = %id, "delete_post: post not found");
            return Err(StoreError::PostNotFound(id.to_string()));
        };

        let post = inner.posts.remove(index);
        info!(post_id = %post.id, "Post deleted");
        Ok(post)
    }

    pub async fn create_tag(&self, name: impl Into<String>) -> Tag {
        let tag = Tag::new(name);
        self.inner.write().await.tags.push(tag.clone());
        info!(tag_id = %tag.id, name = %tag.name, "Tag created");
        tag
    }
}
