use async_graphql::{Error, ErrorExtensions};

use postboard_common::StoreError;

/// Maps a store failure onto a GraphQL error carrying its `code` extension.
pub fn store_error(err: StoreError) -> Error {
    let code = err.code();
    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

pub fn bad_input(message: &str) -> Error {
    Error::new(message).extend_with(|_, e| e.set("code", "BAD_USER_INPUT"))
}
