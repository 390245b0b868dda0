use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use uuid::Uuid;

use postboard_common::{Post, Tag};
use postboard_store::Store;

// --- TagByIdLoader ---

pub struct TagByIdLoader {
    pub store: Arc<Store>,
}

impl Loader<Uuid> for TagByIdLoader {
    type Value = Tag;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        Ok(self.store.tags_by_ids(keys).await)
    }
}

// --- PostsByTagLoader ---

pub struct PostsByTagLoader {
    pub store: Arc<Store>,
}

impl Loader<Uuid> for PostsByTagLoader {
    type Value = Vec<Post>;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        Ok(self.store.posts_by_tag_ids(keys).await)
    }
}
