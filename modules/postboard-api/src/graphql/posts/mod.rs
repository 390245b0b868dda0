pub mod mutations;
pub mod types;

use async_graphql::*;
use types::GqlPost;

use super::context::{parse_id, store};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// All posts, oldest first.
    async fn get_posts(&self, ctx: &Context<'_>) -> Vec<GqlPost> {
        let posts = store(ctx).posts().await;
        posts.into_iter().map(GqlPost::from).collect()
    }

    /// A single post, or null when no post has this id.
    async fn get_post(&self, ctx: &Context<'_>, id: ID) -> Option<GqlPost> {
        let id = parse_id(&id)?;
        store(ctx).post(id).await.map(GqlPost::from)
    }

    /// Posts filed under the given tag. Unknown tags have no posts.
    async fn get_posts_by_tag(&self, ctx: &Context<'_>, tag_id: ID) -> Vec<GqlPost> {
        let Some(tag_id) = parse_id(&tag_id) else {
            return Vec::new();
        };
        let posts = store(ctx).posts_by_tag(tag_id).await;
        posts.into_iter().map(GqlPost::from).collect()
    }
}
