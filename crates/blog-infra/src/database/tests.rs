use blog_core::domain::{PostChanges, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::PostgresPostRepository;
use crate::database::entity::post;

fn model(id: PostId, title: &str) -> post::Model {
    post::Model {
        id: id.as_uuid(),
        title: title.to_owned(),
        image: "http://x/y.jpg".to_owned(),
        body: "hi".to_owned(),
        created: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = PostId::new();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(post_id, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_id(post_id).await.unwrap();

    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_find_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.find_by_id(PostId::new()).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_list_all_on_empty_table() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_all_keeps_store_order() {
    let first = PostId::new();
    let second = PostId::new();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(first, "first"), model(second, "second")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let titles: Vec<_> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, ["first", "second"]);
}

#[tokio::test]
async fn test_create_returns_stored_post() {
    let post_id = PostId::new();
    let stored = model(post_id, "T");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let created = repo.create(stored.into()).await.unwrap();

    assert_eq!(created.id, post_id);
    assert_eq!(created.title, "T");
}

#[tokio::test]
async fn test_update_sets_only_supplied_columns() {
    let post_id = PostId::new();
    let original = model(post_id, "Old");
    let updated = post::Model {
        title: "New".to_owned(),
        ..original.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![updated]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let changes = PostChanges {
        title: Some("New".into()),
        ..Default::default()
    };
    let post = repo.update_by_id(post_id, changes).await.unwrap();

    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "New");
    assert_eq!(post.image, original.image);
    assert_eq!(post.body, original.body);
    assert_eq!(post.created, original.created.with_timezone(&chrono::Utc));

    let log = repo.into_connection().into_transaction_log();
    assert_eq!(log.len(), 1);
    let sql = &log[0].statements()[0].sql;
    let (set_clause, _) = sql.split_once(" WHERE ").unwrap();
    assert!(set_clause.starts_with(r#"UPDATE "posts" SET"#));
    assert!(set_clause.contains(r#""title""#));
    assert!(!set_clause.contains(r#""image""#));
    assert!(!set_clause.contains(r#""body""#));
    assert!(!set_clause.contains(r#""created""#));
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let changes = PostChanges {
        title: Some("New".into()),
        ..Default::default()
    };
    let err = repo.update_by_id(PostId::new(), changes).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.delete_by_id(PostId::new()).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_existing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    repo.delete_by_id(PostId::new()).await.unwrap();
}
