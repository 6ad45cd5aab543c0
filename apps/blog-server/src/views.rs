//! Server-rendered pages.
//!
//! Templates live in `templates/` and are compiled into the binary by askama.
//! Everything is escaped on output except post bodies, which were sanitized
//! before they were stored.

use actix_web::{HttpResponse, http::header::ContentType};
use askama::Template;

use blog_core::PostService;
use blog_core::domain::{Post, PostInput};

use crate::middleware::error::AppResult;
use crate::middleware::method_override::OVERRIDE_PARAM;

pub const POSTS_PATH: &str = "/posts";

const DATE_FORMAT: &str = "%a %b %d %Y";

pub fn post_path(id: impl std::fmt::Display) -> String {
    format!("{POSTS_PATH}/{id}")
}

/// Render a page as a `200 text/html` response.
pub fn render<T: Template>(page: &T) -> AppResult<HttpResponse> {
    let html = page.render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// One post as it appears on the listing.
pub struct PostSummary {
    pub url: String,
    pub title: String,
    pub image: String,
    pub created: String,
    pub excerpt: String,
}

#[derive(Template)]
#[template(path = "posts/index.html")]
pub struct IndexPage {
    pub posts: Vec<PostSummary>,
}

impl IndexPage {
    pub fn new(posts: &[Post], service: &PostService) -> Self {
        let posts = posts
            .iter()
            .map(|post| PostSummary {
                url: post_path(post.id),
                title: post.title.clone(),
                image: post.image.clone(),
                created: post.created.format(DATE_FORMAT).to_string(),
                excerpt: service.excerpt(post),
            })
            .collect();

        Self { posts }
    }
}

#[derive(Template)]
#[template(path = "posts/show.html")]
pub struct ShowPage {
    pub title: String,
    pub image: String,
    pub created: String,
    pub body: String,
    pub edit_url: String,
    pub delete_action: String,
}

impl From<Post> for ShowPage {
    fn from(post: Post) -> Self {
        let url = post_path(post.id);
        Self {
            edit_url: format!("{url}/edit"),
            delete_action: format!("{url}?{OVERRIDE_PARAM}=DELETE"),
            title: post.title,
            image: post.image,
            created: post.created.format(DATE_FORMAT).to_string(),
            body: post.body,
        }
    }
}

/// Creation form, optionally holding what was submitted last time.
#[derive(Template, Default)]
#[template(path = "posts/new.html")]
pub struct NewPage {
    pub title: String,
    pub image: String,
    pub body: String,
}

impl From<&PostInput> for NewPage {
    fn from(input: &PostInput) -> Self {
        Self {
            title: input.title.clone().unwrap_or_default(),
            image: input.image.clone().unwrap_or_default(),
            body: input.body.clone().unwrap_or_default(),
        }
    }
}

/// Edit form. `body` is emitted unescaped inside the textarea: the stored
/// body is already sanitized and entity-escaped, and cannot close the element.
#[derive(Template)]
#[template(path = "posts/edit.html")]
pub struct EditPage {
    pub action: String,
    pub cancel_url: String,
    pub title: String,
    pub image: String,
    pub body: String,
}

impl From<Post> for EditPage {
    fn from(post: Post) -> Self {
        let url = post_path(post.id);
        Self {
            action: format!("{url}?{OVERRIDE_PARAM}=PUT"),
            cancel_url: url,
            title: post.title,
            image: post.image,
            body: post.body,
        }
    }
}
