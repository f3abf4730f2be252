//! CLI parser and command dispatch over an [`ArticleRepository`].

use anyhow::{Context, Result};
use article_storage::{Article, ArticleRepository, ExecContext, StorageConfig};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "articles")]
#[command(about = "Article store CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List articles oldest first, one page at a time.
    List {
        /// Cursor printed by the previous page; omit to start from the beginning.
        #[arg(short, long, default_value = "")]
        cursor: String,
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
    /// Show the article with the given id.
    Get { id: i64 },
    /// Show the first article with the given title.
    Find { title: String },
    /// Create a new article.
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        content: String,
    },
    /// Change title and/or content of an existing article.
    Update {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete the article with the given id.
    Delete { id: i64 },
}

/// Load StorageConfig from environment (DATABASE_URL, QUERY_TIMEOUT_SECS, ...).
pub fn load_config() -> StorageConfig {
    StorageConfig::load()
}

/// Runs one command and returns what should be printed to stdout.
pub async fn execute(
    repo: &dyn ArticleRepository,
    ctx: &ExecContext,
    command: Commands,
) -> Result<String> {
    match command {
        Commands::List { cursor, limit } => {
            let page = repo
                .fetch(ctx, &cursor, limit)
                .await
                .context("Fetch article page")?;
            info!(rows = page.articles.len(), "Listed articles");
            let mut out = serde_json::to_string_pretty(&page.articles)?;
            if page.is_last() {
                out.push_str("\n(end of list)");
            } else {
                out.push_str(&format!("\nnext cursor: {}", page.next_cursor));
            }
            Ok(out)
        }
        Commands::Get { id } => {
            let article = repo
                .get_by_id(ctx, id)
                .await
                .with_context(|| format!("Get article {}", id))?;
            Ok(serde_json::to_string_pretty(&article)?)
        }
        Commands::Find { title } => {
            let article = repo
                .get_by_title(ctx, &title)
                .await
                .with_context(|| format!("Find article titled {:?}", title))?;
            Ok(serde_json::to_string_pretty(&article)?)
        }
        Commands::Create { title, content } => {
            let mut article = Article::new(title, content);
            repo.store(ctx, &mut article)
                .await
                .context("Store article")?;
            Ok(serde_json::to_string_pretty(&article)?)
        }
        Commands::Update { id, title, content } => {
            if title.is_none() && content.is_none() {
                anyhow::bail!("Nothing to update: pass --title and/or --content");
            }
            let mut article = repo
                .get_by_id(ctx, id)
                .await
                .with_context(|| format!("Load article {} for update", id))?;
            if let Some(title) = title {
                article.title = title;
            }
            if let Some(content) = content {
                article.content = content;
            }
            article.updated_at = Utc::now();
            repo.update(ctx, &article)
                .await
                .with_context(|| format!("Update article {}", id))?;
            Ok(serde_json::to_string_pretty(&article)?)
        }
        Commands::Delete { id } => {
            repo.delete(ctx, id)
                .await
                .with_context(|| format!("Delete article {}", id))?;
            Ok(format!("deleted article {}", id))
        }
    }
}
