// API client module: contains a small blocking HTTP client that talks to
// the Gutendex book catalog. It is intentionally small and synchronous;
// one request is ever in flight at a time and there are no retries.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::model::Page;
use crate::search::PageSource;

/// First page of the catalog listing. Also the page every transform task
/// operates on. The endpoint is deliberately not configurable.
pub const BOOKS_URL: &str = "https://gutendex.com/books/?page=1";

/// Everything that can go wrong between issuing a GET and holding a
/// decoded `Page`. The menu layer branches on this and keeps looping;
/// none of these are fatal to the process.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
    #[error("response body was not a valid page: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Simple API client holding the one reqwest blocking client built at
/// startup and kept for the process lifetime.
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client })
    }

    /// Issue a single GET and return the raw body text. Non-2xx statuses
    /// are failures carrying the numeric status for diagnostics.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let res = self.client.get(url).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(res.text()?)
    }

    /// Fetch a URL and decode the body as a catalog page. A fetch failure
    /// short-circuits without attempting to parse.
    pub fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let body = self.fetch(url)?;
        decode(&body)
    }
}

/// Parse a raw response body as a page of the catalog schema. Malformed
/// JSON or a schema mismatch is a `Decode` error, never a panic.
pub fn decode(body: &str) -> Result<Page, FetchError> {
    Ok(serde_json::from_str(body)?)
}

impl PageSource for ApiClient {
    fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        ApiClient::fetch_page(self, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_BODY: &str = r#"{
        "count": 2,
        "next": "https://gutendex.com/books/?page=2",
        "previous": null,
        "results": [{
            "id": 2554,
            "title": "Crime and Punishment",
            "authors": [{"name": "Dostoyevsky, Fyodor", "birth_year": 1821, "death_year": 1881}],
            "translators": [],
            "subjects": ["Crime -- Fiction"],
            "bookshelves": ["Best Books Ever Listings"],
            "languages": ["en"],
            "media_type": "Text",
            "download_count": 25000
        }]
    }"#;

    #[test]
    fn decode_valid_page_is_lossless() {
        let page = decode(PAGE_BODY).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(
            page.next.as_deref(),
            Some("https://gutendex.com/books/?page=2")
        );
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 1);

        let book = &page.results[0];
        assert_eq!(book.id, 2554);
        assert_eq!(book.title, "Crime and Punishment");
        assert_eq!(book.authors[0].name, "Dostoyevsky, Fyodor");
        assert_eq!(book.authors[0].birth_year, Some(1821));
        assert_eq!(book.authors[0].death_year, Some(1881));
        assert_eq!(book.subjects, vec!["Crime -- Fiction"]);
        assert_eq!(book.media_type, "Text");
        assert_eq!(book.download_count, 25000);

        // Round-trip through serde preserves every modeled field.
        let reencoded = serde_json::to_string(&page).unwrap();
        let again = decode(&reencoded).unwrap();
        assert_eq!(again.results.len(), page.results.len());
        assert_eq!(again.results[0].id, book.id);
        assert_eq!(again.results[0].subjects, book.subjects);
    }

    #[test]
    fn decode_rejects_malformed_body() {
        assert!(matches!(
            decode("not json at all"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn decode_rejects_schema_mismatch() {
        // `results` entries must be objects, not numbers.
        assert!(matches!(
            decode(r#"{"count": 1, "results": [1, 2, 3]}"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn decode_tolerates_missing_optional_fields() {
        let page = decode(r#"{"count": 0, "results": []}"#).unwrap();
        assert_eq!(page.next, None);
        assert!(page.results.is_empty());
    }
}
