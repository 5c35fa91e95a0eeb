//! Pagination configuration from TOML (`[pagination]` section)

use serde::{Deserialize, Serialize};
use trivia_application::BrowseConfig;
use trivia_domain::DEFAULT_PAGE_SIZE;

/// Raw pagination configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaginationConfig {
    pub questions_per_page: usize,
}

impl Default for FilePaginationConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilePaginationConfig {
    pub fn to_browse_config(&self) -> BrowseConfig {
        BrowseConfig::default().with_questions_per_page(self.questions_per_page)
    }
}
