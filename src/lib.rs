//! reposcout - Interactive GitHub repository search
//!
//! Search-as-you-type client for the GitHub repository-search API, rendered
//! in the terminal.
//!
//! # Features
//!
//! - **Debounced input**: keystrokes coalesce into one request per pause
//! - **Paginated results**: page through matches 30 at a time
//! - **Stale-response protection**: out-of-order replies never clobber newer ones
//! - **Browser handoff**: open the selected repository with one key
//! - **One-shot mode**: `reposcout search <query>` prints results and exits
//!
//! # Example
//!
//! ```no_run
//! use reposcout::github::SearchClient;
//!
//! fn main() -> reposcout::Result<()> {
//!     let client = SearchClient::new()?;
//!     let results = client.search("ratatui", 1)?;
//!
//!     println!("{} repositories match", results.total_count);
//!     for repo in &results.items {
//!         println!("{}: {}", repo.full_name, repo.html_url);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

pub mod error;
pub mod github;
pub mod logging;
pub mod pager;
pub mod tui;

// Re-export main types
pub use error::{Result, ScoutError};
pub use github::{Repository, SearchClient, SearchResponse};
pub use pager::{total_pages_for, Pager, PAGE_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a count as a short human-readable string (1234 -> "1.2K")
pub fn format_count(count: u32) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API root; the public GitHub API unless overridden
    pub base_url: String,
    /// Optional bearer token for authenticated requests
    pub token: Option<String>,
    /// Quiet period between the last (query, page) change and the fetch
    pub debounce: Duration,
    /// Event-loop tick interval
    pub tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: github::DEFAULT_BASE_URL.to_string(),
            token: None,
            debounce: Duration::from_millis(300),
            tick: Duration::from_millis(50),
        }
    }
}
