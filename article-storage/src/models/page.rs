//! One batch of articles returned by a forward scan.

use serde::{Deserialize, Serialize};

use super::Article;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub articles: Vec<Article>,
    /// Cursor for the next call; empty when the scan is exhausted.
    pub next_cursor: String,
}

impl Page {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_empty()
    }
}
