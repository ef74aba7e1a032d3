//! Typed models for the GitHub repository-search API
//!
//! Only the fields reposcout renders are deserialized; everything else in
//! the payload is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One repository entry from the search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Top-level payload of GET /search/repositories
///
/// Error payloads (rate limit, validation) carry a `message` field instead
/// of `items`, so deserializing them into this type fails. Callers treat
/// that as a decode error rather than a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_count: u32,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total_count": 61,
        "incomplete_results": false,
        "items": [
            {
                "id": 10270250,
                "full_name": "facebook/react",
                "html_url": "https://github.com/facebook/react",
                "description": "The library for web and native user interfaces.",
                "language": "JavaScript",
                "stargazers_count": 230540,
                "updated_at": "2024-01-02T15:04:05Z"
            },
            {
                "id": 70107786,
                "full_name": "someone/no-description",
                "html_url": "https://github.com/someone/no-description",
                "description": null,
                "language": null,
                "stargazers_count": 3,
                "updated_at": "2023-06-30T00:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn parses_search_response() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.total_count, 61);
        assert!(!response.incomplete_results);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].full_name, "facebook/react");
        assert_eq!(response.items[0].language.as_deref(), Some("JavaScript"));
        assert_eq!(response.items[0].stargazers_count, 230540);
    }

    #[test]
    fn null_description_and_language_are_allowed() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.items[1].description, None);
        assert_eq!(response.items[1].language, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{
            "total_count": 0,
            "incomplete_results": false,
            "items": [],
            "extra_field": "ignored"
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn error_payload_does_not_parse_as_results() {
        // Shape GitHub uses for rate-limit and validation errors
        let body = r#"{
            "message": "API rate limit exceeded",
            "documentation_url": "https://docs.github.com/rest"
        }"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn missing_stargazers_defaults_to_zero() {
        let body = r#"{
            "total_count": 1,
            "items": [
                {
                    "id": 1,
                    "full_name": "a/b",
                    "html_url": "https://github.com/a/b",
                    "description": null,
                    "language": null,
                    "updated_at": null
                }
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items[0].stargazers_count, 0);
        assert_eq!(response.items[0].updated_at, None);
    }
}
