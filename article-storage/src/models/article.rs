//! Article model for persistence.
//!
//! Maps to the `articles` table and is used by SqliteArticleRepository.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    /// Assigned by the store on insert; `0` until persisted.
    pub id: i64,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
    /// Set once at insert; drives pagination order.
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Creates an unsaved article with both timestamps set to now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            updated_at: now,
            created_at: now,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// Fixed-width UTC text used for timestamp columns, so that SQLite's text ordering
/// matches chronological ordering.
pub(crate) fn to_db_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
