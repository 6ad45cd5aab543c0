//! Post routes.
//!
//! Every handler performs one store operation. Failures never surface as
//! error pages: they become a redirect to the listing, or for creation a
//! second look at the form.

use actix_web::{HttpResponse, http::header, web};

use blog_core::DomainError;
use blog_core::domain::{PostChanges, PostInput};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{EditPage, IndexPage, NewPage, POSTS_PATH, ShowPage, post_path, render};

type PostForm = Result<web::Form<PostInput>, actix_web::Error>;

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn log_failure(action: &str, id: &str, err: &DomainError) {
    if err.is_not_found() {
        tracing::warn!(post_id = %id, "{action}: post not found");
    } else {
        tracing::error!(post_id = %id, error = %err, "{action} failed");
    }
}

/// GET /
pub async fn root() -> HttpResponse {
    redirect(POSTS_PATH)
}

/// GET /posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to list posts");
        Vec::new()
    });

    render(&IndexPage::new(&posts, &state.posts))
}

/// GET /posts/new
pub async fn new_form() -> AppResult<HttpResponse> {
    render(&NewPage::default())
}

/// POST /posts
pub async fn create(state: web::Data<AppState>, form: PostForm) -> AppResult<HttpResponse> {
    let input = match form {
        Ok(form) => form.into_inner(),
        Err(err) => {
            tracing::warn!(error = %err, "Unreadable post form");
            return render(&NewPage::default());
        }
    };

    let page = NewPage::from(&input);
    match state.posts.create(input).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post created");
            Ok(redirect(POSTS_PATH))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to create post");
            render(&page)
        }
    }
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.posts.get(&id).await {
        Ok(post) => render(&ShowPage::from(post)),
        Err(err) => {
            log_failure("Show", &id, &err);
            Ok(redirect(POSTS_PATH))
        }
    }
}

/// GET /posts/{id}/edit
pub async fn edit(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.posts.get(&id).await {
        Ok(post) => render(&EditPage::from(post)),
        Err(err) => {
            log_failure("Edit", &id, &err);
            Ok(redirect(POSTS_PATH))
        }
    }
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: PostForm,
) -> HttpResponse {
    let id = path.into_inner();
    let changes = match form {
        Ok(form) => PostChanges::from(form.into_inner()),
        Err(err) => {
            tracing::warn!(post_id = %id, error = %err, "Unreadable post form");
            return redirect(POSTS_PATH);
        }
    };

    match state.posts.update(&id, changes).await {
        Ok(post) => {
            tracing::info!(post_id = %post.id, "Post updated");
            redirect(&post_path(post.id))
        }
        Err(err) => {
            log_failure("Update", &id, &err);
            redirect(POSTS_PATH)
        }
    }
}

/// DELETE /posts/{id}
pub async fn destroy(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match state.posts.delete(&id).await {
        Ok(()) => tracing::info!(post_id = %id, "Post deleted"),
        Err(err) => log_failure("Delete", &id, &err),
    }

    redirect(POSTS_PATH)
}
