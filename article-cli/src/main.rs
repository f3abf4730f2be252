//! articles CLI: list, read, create, update and delete articles. Config from env.

use anyhow::{Context, Result};
use article_cli::{execute, init_tracing, load_config, Cli};
use article_storage::{ExecContext, SqliteArticleRepository};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config();
    init_tracing(&config.log_file)?;

    let repo = SqliteArticleRepository::connect(&config)
        .await
        .with_context(|| format!("Open article store at {}", config.database_url))?;

    let cancel = CancellationToken::new();
    let mut ctx = ExecContext::new().with_cancellation(cancel.clone());
    if let Some(timeout) = config.query_timeout {
        ctx = ctx.with_timeout(timeout);
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight command");
            cancel.cancel();
        }
    });

    let output = execute(&repo, &ctx, cli.command).await?;
    println!("{}", output);

    Ok(())
}
