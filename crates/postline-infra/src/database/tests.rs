use chrono::{Duration, Utc};
use sea_orm::{
    ConnAcquireErr, DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr,
};

use postline_core::domain::{NewPost, PostPatch};
use postline_core::error::RepoError;
use postline_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: i64, title: &str, body: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        body: body.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(12345, "Test title", "Test body")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_id(12345).await.unwrap().unwrap();

    assert_eq!(post.id, 12345);
    assert_eq!(post.title, "Test title");
    assert_eq!(post.body, "Test body");
}

#[tokio::test]
async fn test_find_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.find_by_id(99999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_by_creation_time_descending() {
    let newer = model(2, "Test title 2", "Test body 2");
    let mut older = model(1, "Test title", "Test body");
    older.created_at = (Utc::now() - Duration::days(1)).into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![newer, older]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list_all().await.unwrap();
    assert_eq!(posts.len(), 2);

    let log = repo_log(repo);
    assert!(log.contains("ORDER BY \"posts\".\"created_at\" DESC"), "{log}");
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(99999, "New Post", "")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo
        .insert(NewPost {
            title: "New Post".to_owned(),
            body: String::new(),
        })
        .await
        .unwrap();

    assert_eq!(post.id, 99999);
    assert_eq!(post.body, "");
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn test_replace_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo
        .replace(
            99999,
            PostPatch {
                title: Some("Updated".to_owned()),
                body: None,
            },
        )
        .await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_replace_updates_only_patched_columns() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(12345, "Test title", "New body")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo
        .replace(
            12345,
            PostPatch {
                title: None,
                body: Some("New body".to_owned()),
            },
        )
        .await
        .unwrap();
    assert_eq!(post.body, "New body");

    let log = repo_log(repo);
    assert!(log.contains("\"body\" ="), "{log}");
    assert!(!log.contains("\"title\" ="), "{log}");
}

#[tokio::test]
async fn test_remove_reports_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    repo.remove(12345).await.unwrap();
    assert!(matches!(repo.remove(12345).await, Err(RepoError::NotFound)));
}

fn failing_repo(errors: impl IntoIterator<Item = DbErr>) -> PostgresPostRepository {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(errors)
        .into_connection();
    PostgresPostRepository::new(db)
}

#[tokio::test]
async fn test_connection_errors_are_classified_as_connection() {
    let repo = failing_repo([
        DbErr::Conn(RuntimeErr::Internal("connection refused".to_owned())),
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout),
    ]);

    assert!(matches!(
        repo.find_by_id(1).await,
        Err(RepoError::Connection(_))
    ));
    assert!(matches!(repo.list_all().await, Err(RepoError::Connection(_))));
}

#[tokio::test]
async fn test_unique_violations_are_classified_as_constraint() {
    let duplicate = || {
        DbErr::Query(RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"posts_pkey\"".to_owned(),
        ))
    };
    let repo = failing_repo([duplicate(), duplicate()]);

    let inserted = repo
        .insert(NewPost {
            title: "T".to_owned(),
            body: String::new(),
        })
        .await;
    assert!(matches!(inserted, Err(RepoError::Constraint(_))));

    let replaced = repo.replace(1, PostPatch::default()).await;
    assert!(matches!(replaced, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_other_errors_are_classified_as_query() {
    let repo = failing_repo([DbErr::Query(RuntimeErr::Internal(
        "syntax error at or near \"FROM\"".to_owned(),
    ))]);

    assert!(matches!(repo.list_all().await, Err(RepoError::Query(_))));
}

fn repo_log(repo: PostgresPostRepository) -> String {
    repo.into_connection()
        .into_transaction_log()
        .iter()
        .map(|t| format!("{t:?}").replace("\\\"", "\""))
        .collect::<Vec<_>>()
        .join("\n")
}
