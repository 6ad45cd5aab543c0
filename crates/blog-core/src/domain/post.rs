use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a post, assigned once at creation.
///
/// Backed by a UUIDv7, so ordering by id is ordering by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PostId> for Uuid {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Post entity - one blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub image: String,
    pub body: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id. `created` defaults to now.
    pub fn new(
        title: String,
        image: String,
        body: String,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: PostId::new(),
            title,
            image,
            body,
            created: created.unwrap_or_else(Utc::now),
        }
    }

    /// Apply an update in place. `id` and `created` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
        if let Some(body) = changes.body {
            self.body = body;
        }
    }
}

/// Fields submitted to create a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub image: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl PostInput {
    pub fn new(title: impl Into<String>, image: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            image: Some(image.into()),
            body: Some(body.into()),
            created: None,
        }
    }

    /// Turn the submission into a post. Every text field must be present;
    /// empty strings are accepted.
    pub fn into_post(self) -> Result<Post, DomainError> {
        let title = self.title.ok_or_else(|| missing("title"))?;
        let image = self.image.ok_or_else(|| missing("image"))?;
        let body = self.body.ok_or_else(|| missing("body"))?;

        Ok(Post::new(title, image, body, self.created))
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::Validation(format!("missing field `{field}`"))
}

/// A partial update. Only the fields that are `Some` are replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub image: Option<String>,
    pub body: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none() && self.body.is_none()
    }
}

impl From<PostInput> for PostChanges {
    fn from(input: PostInput) -> Self {
        Self {
            title: input.title,
            image: input.image,
            body: input.body,
        }
    }
}
