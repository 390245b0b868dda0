use async_graphql::*;

use super::types::GqlTag;
use crate::graphql::context::store;

#[derive(Default)]
pub struct TagMutation;

#[Object]
impl TagMutation {
    async fn create_tag(&self, ctx: &Context<'_>, name: String) -> GqlTag {
        GqlTag::from(store(ctx).create_tag(name).await)
    }
}
