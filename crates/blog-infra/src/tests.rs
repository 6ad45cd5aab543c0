//! Post service running over the in-memory store and the real sanitizer.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::domain::{PostChanges, PostId, PostInput};

use crate::{HtmlSanitizer, InMemoryPostRepository};

fn service() -> PostService {
    PostService::new(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(HtmlSanitizer::new()),
    )
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let service = service();
    let created = service
        .create(PostInput::new("T", "http://x/y.jpg", "plain body"))
        .await
        .unwrap();

    let found = service.get(&created.id.to_string()).await.unwrap();
    assert_eq!(found.title, "T");
    assert_eq!(found.image, "http://x/y.jpg");
    assert_eq!(found.body, "plain body");
    assert_eq!(found.created, created.created);
}

#[tokio::test]
async fn test_script_payload_is_stripped_on_create() {
    let service = service();
    let created = service
        .create(PostInput::new("T", "http://x/y.jpg", "<script>x</script>hi"))
        .await
        .unwrap();

    let stored = service.get(&created.id.to_string()).await.unwrap();
    assert!(!stored.body.contains("<script"));
    assert!(stored.body.contains("hi"));
}

#[tokio::test]
async fn test_script_payload_is_stripped_on_update() {
    let service = service();
    let created = service
        .create(PostInput::new("T", "http://x/y.jpg", "hi"))
        .await
        .unwrap();

    let changes = PostChanges {
        body: Some("<script>alert(1)</script>safe".into()),
        ..Default::default()
    };
    let updated = service
        .update(&created.id.to_string(), changes)
        .await
        .unwrap();

    assert_eq!(updated.body, "safe");
}

#[tokio::test]
async fn test_update_keeps_created_and_untouched_fields() {
    let service = service();
    let created = service
        .create(PostInput::new("T", "http://x/y.jpg", "hi"))
        .await
        .unwrap();

    let changes = PostChanges {
        title: Some("Renamed".into()),
        ..Default::default()
    };
    let updated = service
        .update(&created.id.to_string(), changes)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created, created.created);
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.image, created.image);
    assert_eq!(updated.body, created.body);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = service();
    let created = service
        .create(PostInput::new("T", "http://x/y.jpg", "hi"))
        .await
        .unwrap();
    let id = created.id.to_string();

    service.delete(&id).await.unwrap();
    assert!(service.get(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let service = service();

    let unknown = PostId::new().to_string();
    assert!(service.get(&unknown).await.unwrap_err().is_not_found());
    assert!(service.get("12345").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_unknown_id_leaves_store_unchanged() {
    let service = service();
    let created = service
        .create(PostInput::new("T", "http://x/y.jpg", "hi"))
        .await
        .unwrap();

    let changes = PostChanges {
        title: Some("Other".into()),
        ..Default::default()
    };
    let err = service
        .update(&PostId::new().to_string(), changes)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let posts = service.list().await.unwrap();
    assert_eq!(posts, vec![created]);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    assert!(service().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_excerpt_is_plain_text() {
    let service = service();
    let long_body = format!("<b>{}</b>", "word ".repeat(40));
    let post = service
        .create(PostInput::new("T", "", long_body))
        .await
        .unwrap();

    let excerpt = service.excerpt(&post);
    assert!(!excerpt.contains("<b>"));
    assert!(excerpt.ends_with("..."));
}
