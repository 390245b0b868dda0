use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A content record. Refers to its tag by id; the tag itself is resolved on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tag_id: Uuid,
}

/// A named category. The posts under a tag are derived, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tag_id: Uuid,
}

/// Changes applied by an update. `content` always overwrites; `None` leaves
/// the title or tag untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: String,
    pub tag_id: Option<Uuid>,
}

impl Post {
    pub fn new(input: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            tag_id: input.tag_id,
        }
    }

    /// Applies `changes` in place. The caller has already checked that a new
    /// tag id, if any, points at an existing tag.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        self.content = changes.content;
        if let Some(tag_id) = changes.tag_id {
            self.tag_id = tag_id;
        }
    }
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(NewPost {
            title: "A".to_string(),
            content: "c1".to_string(),
            tag_id: Uuid::new_v4(),
        })
    }

    #[test]
    fn new_records_get_distinct_ids() {
        let a = Tag::new("tech");
        let b = Tag::new("tech");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn apply_without_title_or_tag_only_touches_content() {
        let mut post = sample_post();
        let before = post.clone();

        post.apply(PostChanges {
            title: None,
            content: "c2".to_string(),
            tag_id: None,
        });

        assert_eq!(post.id, before.id);
        assert_eq!(post.title, "A");
        assert_eq!(post.content, "c2");
        assert_eq!(post.tag_id, before.tag_id);
    }

    #[test]
    fn apply_overwrites_supplied_fields() {
        let mut post = sample_post();
        let new_tag = Uuid::new_v4();

        post.apply(PostChanges {
            title: Some("B".to_string()),
            content: "c1".to_string(),
            tag_id: Some(new_tag),
        });

        assert_eq!(post.title, "B");
        assert_eq!(post.content, "c1");
        assert_eq!(post.tag_id, new_tag);
    }

    #[test]
    fn post_serializes_tag_as_id() {
        let post = sample_post();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["tag_id"], post.tag_id.to_string());
        assert!(json.get("tag").is_none());
    }
}
