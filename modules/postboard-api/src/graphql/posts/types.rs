use async_graphql::dataloader::DataLoader;
use async_graphql::*;

use postboard_common::{Post, StoreError};

use crate::graphql::error;
use crate::graphql::loaders::TagByIdLoader;
use crate::graphql::tags::types::GqlTag;

pub struct GqlPost(pub Post);

impl From<Post> for GqlPost {
    fn from(p: Post) -> Self {
        Self(p)
    }
}

#[Object(name = "Post")]
impl GqlPost {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    /// The tag this post is filed under, resolved from its tag id.
    async fn tag(&self, ctx: &Context<'_>) -> Result<GqlTag> {
        let loader = ctx.data_unchecked::<DataLoader<TagByIdLoader>>();
        loader
            .load_one(self.0.tag_id)
            .await?
            .map(GqlTag::from)
            .ok_or_else(|| error::store_error(StoreError::TagNotFound(self.0.tag_id.to_string())))
    }
}
