//! # article-cli
//!
//! Operator CLI over the article store: argument parsing, config loading, logging and
//! command dispatch.

pub mod cli;
pub mod logger;

pub use article_storage::StorageConfig;
pub use cli::{execute, load_config, Cli, Commands};
pub use logger::init_tracing;
