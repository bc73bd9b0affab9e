//! Post domain model, DTOs and the result shapes returned by the facade.

use serde::{Deserialize, Serialize};

use crate::entities::posts;

/// Post domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: i32,
}

/// DTO for creating a new post. `published` defaults to `true` when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreate {
    pub title: String,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub author_id: i32,
}

impl PostCreate {
    pub fn new(author_id: i32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            published: None,
            author_id,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}

/// Filter over posts; present fields are combined with AND, an empty filter
/// matches every post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFilter {
    pub published: Option<bool>,
    pub author_id: Option<i32>,
}

impl PostFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn published(published: bool) -> Self {
        Self {
            published: Some(published),
            author_id: None,
        }
    }

    pub fn by_author(author_id: i32) -> Self {
        Self {
            published: None,
            author_id: Some(author_id),
        }
    }
}

/// Posts partitioned by publish state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsByState {
    pub published: Vec<Post>,
    pub unpublished: Vec<Post>,
}

/// Result of adding a post: the created row and the post count seen by the
/// same transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostWithCount {
    pub new_post: Post,
    pub count: u64,
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            published: model.published,
            author_id: model.author_id,
        }
    }
}
