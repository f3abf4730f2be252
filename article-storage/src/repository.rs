//! Repository trait for article persistence. [`SqliteArticleRepository`](crate::SqliteArticleRepository)
//! is the concrete SQLite implementation.

use async_trait::async_trait;

use crate::context::ExecContext;
use crate::error::Result;
use crate::models::{Article, Page};

/// Async article repository. Every call is bounded by the given [`ExecContext`].
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Returns up to `page_size` articles created strictly after the cursor position, oldest first.
    /// An empty `cursor` starts from the beginning.
    async fn fetch(&self, ctx: &ExecContext, cursor: &str, page_size: u32) -> Result<Page>;
    /// Returns the article with the given id, or `NotFound`.
    async fn get_by_id(&self, ctx: &ExecContext, id: i64) -> Result<Article>;
    /// Returns the first article with the given title, or `NotFound`.
    async fn get_by_title(&self, ctx: &ExecContext, title: &str) -> Result<Article>;
    /// Inserts the article and writes the assigned id back into it.
    async fn store(&self, ctx: &ExecContext, article: &mut Article) -> Result<()>;
    /// Updates title, content and updated_at of the row with `article.id`.
    async fn update(&self, ctx: &ExecContext, article: &Article) -> Result<()>;
    /// Deletes the row with the given id.
    async fn delete(&self, ctx: &ExecContext, id: i64) -> Result<()>;
}
