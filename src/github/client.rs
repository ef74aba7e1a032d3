//! Blocking client for GET /search/repositories
//!
//! One request per call; the TUI runs these on background threads so the
//! event loop never blocks on the network.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;

use crate::error::{Result, ScoutError};
use crate::github::models::SearchResponse;

/// Public GitHub API root
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("reposcout/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the repository-search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl SearchClient {
    /// Create a client against the public GitHub API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token (raises the search rate limit from 10 to 30 req/min)
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Fetch one page of search results for `query`
    ///
    /// Sends exactly the two parameters the endpoint needs: `q` and `page`.
    /// Page size stays at the server default of 30.
    pub fn search(&self, query: &str, page: u32) -> Result<SearchResponse> {
        let response = self.build_request(query, page).send()?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN && rate_limit_depleted(&response) {
            return Err(ScoutError::RateLimited {
                reset: reset_time(&response),
            });
        }

        let body = response.text()?;

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let message = api_message(&body)
                .unwrap_or_else(|| "query was not understood".to_string());
            return Err(ScoutError::QueryRejected(message));
        }

        if !status.is_success() {
            let message = api_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "unexpected response".to_string());
            return Err(ScoutError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn build_request(&self, query: &str, page: u32) -> RequestBuilder {
        let page = page.to_string();
        let mut request = self
            .http
            .get(format!("{}/search/repositories", self.base_url))
            .query(&[("q", query), ("page", page.as_str())])
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }
}

/// True when the response says the rate-limit window is spent
fn rate_limit_depleted(response: &Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u32>().ok())
        .map(|remaining| remaining == 0)
        .unwrap_or(false)
}

/// Human-readable reset time from the x-ratelimit-reset header
fn reset_time(response: &Response) -> String {
    response
        .headers()
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .map(format_reset)
        .unwrap_or_else(|| "unknown time".to_string())
}

fn format_reset(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0).single() {
        Some(t) => t.format("%H:%M:%S UTC").to_string(),
        None => "unknown time".to_string(),
    }
}

/// Pull the `message` field out of a GitHub error payload
fn api_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_only_q_and_page_params() {
        let client = SearchClient::new().unwrap();
        let request = client.build_request("tetris", 2).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://api.github.com/search/repositories?q=tetris&page=2"
        );
    }

    #[test]
    fn query_is_form_encoded() {
        let client = SearchClient::new().unwrap();
        let request = client.build_request("hello world", 1).build().unwrap();
        assert_eq!(
            request.url().query(),
            Some("q=hello+world&page=1")
        );
    }

    #[test]
    fn request_carries_accept_header() {
        let client = SearchClient::new().unwrap();
        let request = client.build_request("rust", 1).build().unwrap();
        let accept = request.headers().get(reqwest::header::ACCEPT).unwrap();
        assert_eq!(accept, "application/vnd.github.v3+json");
    }

    #[test]
    fn token_becomes_bearer_auth() {
        let client = SearchClient::new()
            .unwrap()
            .with_token(Some("sometoken".to_string()));
        let request = client.build_request("rust", 1).build().unwrap();
        let auth = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .unwrap();
        assert_eq!(auth, "Bearer sometoken");
    }

    #[test]
    fn empty_token_is_dropped() {
        let client = SearchClient::new()
            .unwrap()
            .with_token(Some(String::new()));
        let request = client.build_request("rust", 1).build().unwrap();
        assert!(request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .is_none());
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let client = SearchClient::with_base_url("http://localhost:8080/").unwrap();
        let request = client.build_request("x", 1).build().unwrap();
        assert!(request
            .url()
            .as_str()
            .starts_with("http://localhost:8080/search/repositories"));
    }

    #[test]
    fn formats_reset_timestamp() {
        assert_eq!(format_reset(1_700_000_000), "22:13:20 UTC");
    }

    #[test]
    fn extracts_api_message() {
        let body = r#"{"message":"API rate limit exceeded","documentation_url":"https://docs.github.com/rest"}"#;
        assert_eq!(
            api_message(body),
            Some("API rate limit exceeded".to_string())
        );
        assert_eq!(api_message("not json"), None);
        assert_eq!(api_message("{}"), None);
    }
}
