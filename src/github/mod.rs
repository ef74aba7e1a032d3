//! GitHub search API support
//!
//! This module provides the client side of repository search:
//! - Typed models for the search/repositories response
//! - A blocking HTTP client with rate-limit and validation handling

pub mod client;
pub mod models;

// Re-export commonly used types
pub use client::{SearchClient, DEFAULT_BASE_URL};
pub use models::{Repository, SearchResponse};
