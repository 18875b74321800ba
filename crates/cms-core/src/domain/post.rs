use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::error::DomainError;

/// Maximum length of a post slug, in characters.
pub const MAX_SLUG_LEN: usize = 200;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => Err(DomainError::InvalidEnumValue {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Post entity - represents an article written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub content: String,
    pub author_id: i32,
    pub created_on: DateTime<Utc>,
    /// `None` until the post is updated for the first time.
    pub updated_on: Option<DateTime<Utc>>,
    pub status: PostStatus,
}

impl Validate for Post {
    fn validate(&self) -> Result<(), DomainError> {
        validate_slug(&self.slug)
    }
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// A post that has not been persisted yet. The id is chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub id: String,
    pub slug: String,
    pub content: String,
    pub author_id: i32,
    #[serde(default)]
    pub status: PostStatus,
}

impl NewPost {
    /// Create a new draft post.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
        author_id: i32,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            content: content.into(),
            author_id,
            status: PostStatus::default(),
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }
}

impl Validate for NewPost {
    fn validate(&self) -> Result<(), DomainError> {
        validate_slug(&self.slug)
    }
}

fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.chars().count() > MAX_SLUG_LEN {
        return Err(DomainError::Validation(format!(
            "slug exceeds {MAX_SLUG_LEN} characters"
        )));
    }
    Ok(())
}
