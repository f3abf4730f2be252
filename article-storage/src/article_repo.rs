//! Article repository: persistence, lookups and cursor pagination over the `articles` table.
//!
//! Uses SqlitePoolManager and the models (Article, Page).
//! External: SQLite via sqlx; callers go through the [`ArticleRepository`] trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;
use tracing::{debug, error, info};

use crate::config::StorageConfig;
use crate::context::ExecContext;
use crate::cursor::{decode_cursor, encode_cursor};
use crate::error::{Result, StorageError};
use crate::models::{to_db_timestamp, Article, Page};
use crate::repository::ArticleRepository;
use crate::sqlite_pool::SqlitePoolManager;

const FETCH_FIRST_PAGE: &str = "SELECT id, title, content, updated_at, created_at FROM articles \
     ORDER BY created_at, id LIMIT ?";
const FETCH_AFTER_CURSOR: &str = "SELECT id, title, content, updated_at, created_at FROM articles \
     WHERE created_at > ? ORDER BY created_at, id LIMIT ?";
const GET_BY_ID: &str =
    "SELECT id, title, content, updated_at, created_at FROM articles WHERE id = ?";
const GET_BY_TITLE: &str = "SELECT id, title, content, updated_at, created_at FROM articles \
     WHERE title = ? ORDER BY id LIMIT 1";
const INSERT: &str =
    "INSERT INTO articles (title, content, updated_at, created_at) VALUES (?, ?, ?, ?)";
const UPDATE: &str = "UPDATE articles SET title = ?, content = ?, updated_at = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM articles WHERE id = ?";

type ArticleQuery<'q> = QueryAs<'q, Sqlite, Article, SqliteArguments<'q>>;
type Statement<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool_manager: SqlitePoolManager,
}

impl SqliteArticleRepository {
    /// Wraps an existing pool and creates the schema if missing.
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    /// Opens a pool from config and creates the schema if missing.
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        config.validate()?;
        let pool_manager = SqlitePoolManager::from_config(config).await?;
        Self::new(pool_manager).await
    }

    async fn init(&self) -> Result<()> {
        info!("Creating articles table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_articles_created_at ON articles(created_at);
            CREATE INDEX IF NOT EXISTS idx_articles_title ON articles(title);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Articles table ready");
        Ok(())
    }

    /// Shared multi-row read path. Any row decode error aborts the whole read; the result set
    /// is released when the query future is dropped, on every exit path.
    async fn fetch_rows(
        &self,
        ctx: &ExecContext,
        op: &'static str,
        query: ArticleQuery<'_>,
    ) -> Result<Vec<Article>> {
        let pool = self.pool_manager.pool();
        let rows = ctx
            .run(op, query.fetch_all(pool))
            .await
            .map_err(|e| log_failure(op, e))?;
        debug!(op, rows = rows.len(), "query returned rows");
        Ok(rows)
    }

    async fn execute_single_row(
        &self,
        ctx: &ExecContext,
        op: &'static str,
        query: Statement<'_>,
    ) -> Result<()> {
        let pool = self.pool_manager.pool();
        let result = ctx
            .run(op, query.execute(pool))
            .await
            .map_err(|e| log_failure(op, e))?;

        let affected = result.rows_affected();
        if affected != 1 {
            return Err(log_failure(op, StorageError::UnexpectedAffectedRows(affected)));
        }
        Ok(())
    }
}

fn log_failure(op: &'static str, err: StorageError) -> StorageError {
    error!(op, error = %err, "article repository call failed");
    err
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn fetch(&self, ctx: &ExecContext, cursor: &str, page_size: u32) -> Result<Page> {
        if page_size == 0 {
            return Err(StorageError::BadParamInput(
                "page size must be at least 1".to_string(),
            ));
        }

        let query: ArticleQuery<'_> = if cursor.is_empty() {
            sqlx::query_as::<_, Article>(FETCH_FIRST_PAGE).bind(i64::from(page_size))
        } else {
            let boundary = decode_cursor(cursor).map_err(|e| {
                debug!(error = %e, "rejecting malformed cursor");
                StorageError::from(e)
            })?;
            sqlx::query_as::<_, Article>(FETCH_AFTER_CURSOR)
                .bind(to_db_timestamp(&boundary.with_timezone(&Utc)))
                .bind(i64::from(page_size))
        };

        let articles = self.fetch_rows(ctx, "fetch", query).await?;

        let next_cursor = match articles.last() {
            Some(last) if articles.len() == page_size as usize => {
                encode_cursor(last.created_at.fixed_offset())
            }
            _ => String::new(),
        };

        info!(
            page_size,
            rows = articles.len(),
            has_next = !next_cursor.is_empty(),
            "Fetched article page"
        );
        Ok(Page {
            articles,
            next_cursor,
        })
    }

    async fn get_by_id(&self, ctx: &ExecContext, id: i64) -> Result<Article> {
        let query = sqlx::query_as::<_, Article>(GET_BY_ID).bind(id);
        self.fetch_rows(ctx, "get_by_id", query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::NotFound(format!("article id={}", id)))
    }

    async fn get_by_title(&self, ctx: &ExecContext, title: &str) -> Result<Article> {
        let query = sqlx::query_as::<_, Article>(GET_BY_TITLE).bind(title.to_string());
        self.fetch_rows(ctx, "get_by_title", query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::NotFound(format!("article title={:?}", title)))
    }

    async fn store(&self, ctx: &ExecContext, article: &mut Article) -> Result<()> {
        let pool = self.pool_manager.pool();
        let query = sqlx::query(INSERT)
            .bind(article.title.clone())
            .bind(article.content.clone())
            .bind(to_db_timestamp(&article.updated_at))
            .bind(to_db_timestamp(&article.created_at));

        let result = ctx
            .run("store", query.execute(pool))
            .await
            .map_err(|e| log_failure("store", e))?;

        article.id = result.last_insert_rowid();
        info!(id = article.id, "Stored article");
        Ok(())
    }

    async fn update(&self, ctx: &ExecContext, article: &Article) -> Result<()> {
        let query = sqlx::query(UPDATE)
            .bind(article.title.clone())
            .bind(article.content.clone())
            .bind(to_db_timestamp(&article.updated_at))
            .bind(article.id);

        self.execute_single_row(ctx, "update", query).await?;
        info!(id = article.id, "Updated article");
        Ok(())
    }

    async fn delete(&self, ctx: &ExecContext, id: i64) -> Result<()> {
        let query = sqlx::query(DELETE).bind(id);

        self.execute_single_row(ctx, "delete", query).await?;
        info!(id, "Deleted article");
        Ok(())
    }
}
