//! Browse parameters for question listings.

use serde::{Deserialize, Serialize};
use trivia_domain::DEFAULT_PAGE_SIZE;

/// Controls how the paged question listing is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Questions returned per page
    pub questions_per_page: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowseConfig {
    pub fn with_questions_per_page(mut self, size: usize) -> Self {
        self.questions_per_page = size;
        self
    }
}
