use async_graphql::dataloader::DataLoader;
use async_graphql::*;

use postboard_common::Tag;

use crate::graphql::loaders::PostsByTagLoader;
use crate::graphql::posts::types::GqlPost;

pub struct GqlTag(pub Tag);

impl From<Tag> for GqlTag {
    fn from(t: Tag) -> Self {
        Self(t)
    }
}

#[Object(name = "Tag")]
impl GqlTag {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Posts currently filed under this tag, computed on demand.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<GqlPost>> {
        let loader = ctx.data_unchecked::<DataLoader<PostsByTagLoader>>();
        let posts = loader.load_one(self.0.id).await?.unwrap_or_default();
        Ok(posts.into_iter().map(GqlPost::from).collect())
    }
}
