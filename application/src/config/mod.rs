//! Application-level configuration.
//!
//! - [`BrowseConfig`]: how question listings are paged

pub mod browse;

pub use browse::BrowseConfig;
