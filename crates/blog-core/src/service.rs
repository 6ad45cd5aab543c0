//! Post service - the operations the HTTP layer performs against the store.

use std::sync::Arc;

use crate::domain::{Post, PostChanges, PostId, PostInput};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, Sanitizer};

/// Characters of plain text shown in a listing preview.
pub const EXCERPT_CHARS: usize = 100;

const EXAMPLE_TITLE: &str = "Test Blog Post";
const EXAMPLE_IMAGE: &str =
    "https://images-na.ssl-images-amazon.com/images/I/71UTRxPv8ML._AC_UY500_.jpg";
const EXAMPLE_BODY: &str = "This is a test post that shows the redskins logo!";

/// Wires the post store and the sanitizer together.
///
/// Ids arrive as raw strings from the URL. One that does not parse is
/// reported as not found, the same as an id with no record behind it.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    sanitizer: Arc<dyn Sanitizer>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, sanitizer: Arc<dyn Sanitizer>) -> Self {
        Self { repo, sanitizer }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_all().await.map_err(DomainError::Persistence)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;
        self.repo.find_by_id(id).await.map_err(lift(raw_id))
    }

    pub async fn create(&self, mut input: PostInput) -> Result<Post, DomainError> {
        input.body = input.body.map(|body| self.sanitizer.sanitize_html(&body));
        let post = input.into_post()?;

        self.repo.create(post).await.map_err(DomainError::Persistence)
    }

    pub async fn update(&self, raw_id: &str, mut changes: PostChanges) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;
        changes.body = changes.body.map(|body| self.sanitizer.sanitize_html(&body));

        self.repo
            .update_by_id(id, changes)
            .await
            .map_err(lift(raw_id))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), DomainError> {
        let id = parse_id(raw_id)?;
        self.repo.delete_by_id(id).await.map_err(lift(raw_id))
    }

    /// Create the example post, but only into an empty store.
    ///
    /// Returns the created post, or `None` when the store already had posts.
    pub async fn seed_example(&self) -> Result<Option<Post>, DomainError> {
        if !self.list().await?.is_empty() {
            return Ok(None);
        }

        let post = self
            .create(PostInput::new(EXAMPLE_TITLE, EXAMPLE_IMAGE, EXAMPLE_BODY))
            .await?;
        Ok(Some(post))
    }

    /// Short plain-text preview of a post body for the listing page.
    ///
    /// The result is HTML-escaped text and safe to emit as markup.
    pub fn excerpt(&self, post: &Post) -> String {
        truncate_escaped(&self.sanitizer.plain_text(&post.body), EXCERPT_CHARS)
    }
}

fn parse_id(raw_id: &str) -> Result<PostId, DomainError> {
    raw_id
        .parse()
        .map_err(|_| DomainError::post_not_found(raw_id))
}

fn lift(raw_id: &str) -> impl FnOnce(RepoError) -> DomainError + '_ {
    move |err| match err {
        RepoError::NotFound => DomainError::post_not_found(raw_id),
        other => DomainError::Persistence(other),
    }
}

/// Cut escaped text to `max_chars`, never leaving half an entity behind.
fn truncate_escaped(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut head = &text[..cut];
    if let Some(amp) = head.rfind('&') {
        if !head[amp..].contains(';') {
            head = &head[..amp];
        }
    }

    format!("{}...", head.trim_end())
}
