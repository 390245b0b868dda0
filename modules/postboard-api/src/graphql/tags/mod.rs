pub mod mutations;
pub mod types;

use async_graphql::*;
use types::GqlTag;

use super::context::store;

#[derive(Default)]
pub struct TagQuery;

#[Object]
impl TagQuery {
    /// All tags, oldest first.
    async fn get_tags(&self, ctx: &Context<'_>) -> Vec<GqlTag> {
        let tags = store(ctx).tags().await;
        tags.into_iter().map(GqlTag::from).collect()
    }
}
