//! Article storage crate: article persistence, cursor pagination and repository abstractions.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Article, Page
//! - [`repository`] – ArticleRepository trait
//! - [`article_repo`] – SqliteArticleRepository (SQLite)
//! - [`cursor`] – Opaque pagination cursor codec
//! - [`context`] – ExecContext (cancellation + deadline)
//! - [`config`] – StorageConfig loaded from env
//! - [`sqlite_pool`] – SqlitePoolManager

mod article_repo;
mod config;
mod context;
mod cursor;
mod error;
mod models;
mod repository;
mod sqlite_pool;


pub use article_repo::SqliteArticleRepository;
pub use config::StorageConfig;
pub use context::ExecContext;
pub use cursor::{decode_cursor, encode_cursor, CursorError};
pub use error::{Result, StorageError};
pub use models::{Article, Page};
pub use repository::ArticleRepository;
pub use sqlite_pool::SqlitePoolManager;
