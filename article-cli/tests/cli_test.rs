//! Tests for CLI parsing and [`article_cli::execute`] dispatch.
//!
//! Dispatch is checked against a mocked repository and end to end against in-memory SQLite.

use article_cli::{execute, Cli, Commands};
use article_storage::{
    Article, ArticleRepository, ExecContext, Page, SqliteArticleRepository, SqlitePoolManager,
    StorageError,
};
use async_trait::async_trait;
use clap::Parser;
use mockall::mock;

mock! {
    pub Repo {}

    #[async_trait]
    impl ArticleRepository for Repo {
        async fn fetch(&self, ctx: &ExecContext, cursor: &str, page_size: u32) -> article_storage::Result<Page>;
        async fn get_by_id(&self, ctx: &ExecContext, id: i64) -> article_storage::Result<Article>;
        async fn get_by_title(&self, ctx: &ExecContext, title: &str) -> article_storage::Result<Article>;
        async fn store(&self, ctx: &ExecContext, article: &mut Article) -> article_storage::Result<()>;
        async fn update(&self, ctx: &ExecContext, article: &Article) -> article_storage::Result<()>;
        async fn delete(&self, ctx: &ExecContext, id: i64) -> article_storage::Result<()>;
    }
}

#[test]
fn test_parse_list_defaults() {
    let cli = Cli::try_parse_from(["articles", "list"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::List {
            cursor: String::new(),
            limit: 10
        }
    );
}

#[test]
fn test_parse_update_with_optional_fields() {
    let cli = Cli::try_parse_from(["articles", "update", "7", "--title", "New"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Update {
            id: 7,
            title: Some("New".to_string()),
            content: None
        }
    );
}

#[test]
fn test_parse_rejects_non_numeric_id() {
    assert!(Cli::try_parse_from(["articles", "get", "seven"]).is_err());
}

#[tokio::test]
async fn test_list_passes_cursor_and_prints_next() {
    let mut repo = MockRepo::new();
    repo.expect_fetch()
        .withf(|_, cursor, page_size| cursor.to_string() == "abc" && *page_size == 3)
        .times(1)
        .returning(|_, _, _| {
            Ok(Page {
                articles: vec![Article::new("One", "1")],
                next_cursor: "def".to_string(),
            })
        });

    let out = execute(
        &repo,
        &ExecContext::new(),
        Commands::List {
            cursor: "abc".to_string(),
            limit: 3,
        },
    )
    .await
    .unwrap();

    assert!(out.contains("\"title\": \"One\""));
    assert!(out.ends_with("next cursor: def"));
}

#[tokio::test]
async fn test_get_surfaces_not_found() {
    let mut repo = MockRepo::new();
    repo.expect_get_by_id()
        .returning(|_, id| Err(StorageError::NotFound(format!("article id={}", id))));

    let err = execute(&repo, &ExecContext::new(), Commands::Get { id: 5 })
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_create_prints_assigned_id() {
    let mut repo = MockRepo::new();
    repo.expect_store()
        .withf(|_, article| article.title == "T" && article.content == "C" && article.id == 0)
        .times(1)
        .returning(|_, article| {
            article.id = 41;
            Ok(())
        });

    let out = execute(
        &repo,
        &ExecContext::new(),
        Commands::Create {
            title: "T".to_string(),
            content: "C".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(out.contains("\"id\": 41"));
}

#[tokio::test]
async fn test_update_loads_then_writes_changes() {
    let mut repo = MockRepo::new();
    let mut existing = Article::new("Old", "Body");
    existing.id = 9;
    let original_updated_at = existing.updated_at;

    repo.expect_get_by_id()
        .withf(|_, id| *id == 9)
        .times(1)
        .returning(move |_, _| Ok(existing.clone()));
    repo.expect_update()
        .withf(move |_, article| {
            article.id == 9
                && article.title == "Old"
                && article.content == "Fresh"
                && article.updated_at >= original_updated_at
        })
        .times(1)
        .returning(|_, _| Ok(()));

    execute(
        &repo,
        &ExecContext::new(),
        Commands::Update {
            id: 9,
            title: None,
            content: Some("Fresh".to_string()),
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_update_without_changes_is_rejected() {
    let repo = MockRepo::new();

    let res = execute(
        &repo,
        &ExecContext::new(),
        Commands::Update {
            id: 1,
            title: None,
            content: None,
        },
    )
    .await;

    assert!(res.is_err());
}

#[tokio::test]
async fn test_delete_reports_affected_rows_error() {
    let mut repo = MockRepo::new();
    repo.expect_delete()
        .returning(|_, _| Err(StorageError::UnexpectedAffectedRows(0)));

    let err = execute(&repo, &ExecContext::new(), Commands::Delete { id: 3 })
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::UnexpectedAffectedRows(0))
    ));
}

#[tokio::test]
async fn test_end_to_end_against_sqlite() {
    let pool_manager = SqlitePoolManager::new("sqlite::memory:", 1).await.unwrap();
    let repo = SqliteArticleRepository::new(pool_manager).await.unwrap();
    let ctx = ExecContext::new();

    for title in ["a", "b", "c"] {
        execute(
            &repo,
            &ctx,
            Commands::Create {
                title: title.to_string(),
                content: format!("{} body", title),
            },
        )
        .await
        .unwrap();
    }

    let out = execute(
        &repo,
        &ctx,
        Commands::List {
            cursor: String::new(),
            limit: 5,
        },
    )
    .await
    .unwrap();
    assert!(out.ends_with("(end of list)"));

    let found = repo.get_by_title(&ctx, "b").await.unwrap();
    let out = execute(&repo, &ctx, Commands::Delete { id: found.id })
        .await
        .unwrap();
    assert_eq!(out, format!("deleted article {}", found.id));
    assert!(repo.get_by_title(&ctx, "b").await.is_err());
}
