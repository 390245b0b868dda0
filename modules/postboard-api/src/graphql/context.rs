use std::sync::Arc;

use async_graphql::{Context, ID};
use uuid::Uuid;

use postboard_store::Store;

/// The store handed to `build_schema` at startup.
pub fn store<'a>(ctx: &Context<'a>) -> &'a Arc<Store> {
    ctx.data_unchecked::<Arc<Store>>()
}

/// Ids are UUIDs on the inside, handed out in lowercase hyphenated form.
/// Any other spelling is a different id and can never match a record.
pub fn parse_id(id: &ID) -> Option<Uuid> {
    let uuid = Uuid::parse_str(id.as_str()).ok()?;
    (uuid.hyphenated().to_string() == id.as_str()).then_some(uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uuid_ids() {
        let uuid = Uuid::new_v4();
        assert_eq!(parse_id(&ID(uuid.to_string())), Some(uuid));
    }

    #[test]
    fn rejects_non_uuid_ids() {
        assert_eq!(parse_id(&ID("42".to_string())), None);
        assert_eq!(parse_id(&ID(String::new())), None);
    }

    #[test]
    fn rejects_alternate_spellings_of_a_uuid() {
        let uuid = Uuid::new_v4();
        let spellings = [
            uuid.to_string().to_uppercase(),
            format!("{{{uuid}}}"),
            format!("urn:uuid:{uuid}"),
            uuid.simple().to_string(),
        ];
        for spelling in spellings {
            assert_eq!(parse_id(&ID(spelling.clone())), None, "{spelling}");
        }
    }
}
