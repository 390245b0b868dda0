use async_graphql::*;

use postboard_common::{NewPost, PostChanges, StoreError};

use super::types::GqlPost;
use crate::graphql::context::{parse_id, store};
use crate::graphql::error;

#[derive(InputObject)]
#[graphql(name = "PostCreate")]
pub struct PostCreateInput {
    pub title: String,
    pub content: String,
    pub tag_id: ID,
}

/// `content` is required on every update. Omitted `title` or `tagId` keep
/// their current values; an empty `tagId` counts as omitted.
#[derive(InputObject)]
#[graphql(name = "PostUpdate")]
pub struct PostUpdateInput {
    pub id: ID,
    pub title: Option<String>,
    pub content: String,
    pub tag_id: Option<ID>,
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(&self, ctx: &Context<'_>, new_post: PostCreateInput) -> Result<GqlPost> {
        let tag_id = parse_id(&new_post.tag_id).ok_or_else(|| {
            error::store_error(StoreError::TagNotFound(new_post.tag_id.0.clone()))
        })?;

        let post = store(ctx)
            .create_post(NewPost {
                title: new_post.title,
                content: new_post.content,
                tag_id,
            })
            .await
            .map_err(error::store_error)?;

        Ok(GqlPost::from(post))
    }

    /// Removes a post and returns it as it was.
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<GqlPost>> {
        let post_id = parse_id(&id)
            .ok_or_else(|| error::store_error(StoreError::PostNotFound(id.0.clone())))?;

        let post = store(ctx)
            .delete_post(post_id)
            .await
            .map_err(error::store_error)?;

        Ok(Some(GqlPost::from(post)))
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        update_post: Option<PostUpdateInput>,
    ) -> Result<GqlPost> {
        let Some(input) = update_post else {
            return Err(error::bad_input("updatePost input is required"));
        };
        let store = store(ctx);

        let post_id = parse_id(&input.id).ok_or_else(|| {
            error::store_error(StoreError::PostNotFound(input.id.0.clone()))
        })?;

        let tag_id = match input.tag_id.filter(|t| !t.is_empty()) {
            None => None,
            Some(raw) => match parse_id(&raw) {
                Some(tag_id) => Some(tag_id),
                None => {
                    // A malformed tag id can't exist, but a missing post is reported first.
                    let err = if store.post(post_id).await.is_none() {
                        StoreError::PostNotFound(input.id.0)
                    } else {
                        StoreError::TagNotFound(raw.0)
                    };
                    return Err(error::store_error(err));
                }
            },
        };

        let post = store
            .update_post(
                post_id,
                PostChanges {
                    title: input.title,
                    content: input.content,
                    tag_id,
                },
            )
            .await
            .map_err(error::store_error)?;

        Ok(GqlPost::from(post))
    }
}
