pub mod context;
pub mod error;
pub mod loaders;
pub mod posts;
pub mod tags;

use std::sync::Arc;

use async_graphql::dataloader::DataLoader;
use async_graphql::*;

use postboard_common::Config;
use postboard_store::Store;

use loaders::{PostsByTagLoader, TagByIdLoader};

/// Merged query root composing the per-entity query modules.
#[derive(MergedObject, Default)]
pub struct QueryRoot(posts::PostQuery, tags::TagQuery);

/// Merged mutation root composing the per-entity mutation modules.
#[derive(MergedObject, Default)]
pub struct MutationRoot(posts::mutations::PostMutation, tags::mutations::TagMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>, config: &Config) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(store.clone())
        // DataLoaders
        .data(DataLoader::new(
            TagByIdLoader {
                store: store.clone(),
            },
            tokio::spawn,
        ))
        .data(DataLoader::new(PostsByTagLoader { store }, tokio::spawn))
        .limit_depth(config.depth_limit)
        .limit_complexity(config.complexity_limit)
        .finish()
}
