//! Synchronous page fetch and title extraction.

use std::time::Duration;

use scraper::{Html, Selector};
use thiserror::Error;

/// Transport-level failure while fetching a page.
///
/// Kept distinct from "the page has no usable title", which
/// [`TitleResolver::resolve`] reports as `Ok(None)` so callers can log the
/// two outcomes at different severities.
#[derive(Error, Debug)]
pub enum TitleError {
    /// Request construction, connection, timeout, or HTTP-status failure.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Upper bound on how long one fetch may block the host's event thread.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves a URL to the HTML document title behind it.
pub struct TitleResolver {
    client: reqwest::blocking::Client,
}

impl TitleResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("blocking client with static configuration"),
        }
    }

    /// Fetch `url` and extract the document title.
    ///
    /// Non-2xx statuses land in the same error channel as transport
    /// failures. The response body is scoped to this call and released on
    /// every exit path. Malformed markup degrades to a best-effort parse,
    /// never an error.
    pub fn resolve(&self, url: &str) -> Result<Option<String>, TitleError> {
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(extract_title(&body))
    }
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// First `<title>` element's leading text node, trimmed.
///
/// The tree is walked depth-first in document order. A `title` element
/// whose first child is not text (or that is empty) yields `None` rather
/// than a fault.
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    let text = element.children().next()?.value().as_text()?;
    let title = text.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_simple_title() {
        let html = "<html><head><title>Hello World</title></head><body></body></html>";
        assert_eq!(extract_title(html), Some("Hello World".to_string()));
    }

    #[test]
    fn test_no_title_element() {
        let html = "<html><head></head><body><h1>heading</h1></body></html>";
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn test_empty_title_element() {
        assert_eq!(extract_title("<title></title>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[test]
    fn test_title_whitespace_is_trimmed() {
        assert_eq!(
            extract_title("<title>\n  Spaced Out  \n</title>"),
            Some("Spaced Out".to_string())
        );
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<title>first</title><title>second</title>";
        assert_eq!(extract_title(html), Some("first".to_string()));
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        let html = "<html><head><title>Broken<body><div><div>";
        // The parser recovers; whatever it yields must not be a fault.
        let _ = extract_title(html);

        assert_eq!(extract_title("%%% not html at all %%%"), None);
    }

    #[test]
    fn test_resolver_fetches_title_from_server() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><head><title>Hello World</title></head><body></body></html>")
            .create();

        let resolver = TitleResolver::new();
        let title = resolver
            .resolve(&format!("{}/page", server.url()))
            .expect("fetch should succeed");
        assert_eq!(title, Some("Hello World".to_string()));
    }

    #[test]
    fn test_resolver_reports_missing_title_as_none() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/bare")
            .with_status(200)
            .with_body("<html><body>no title here</body></html>")
            .create();

        let resolver = TitleResolver::new();
        let title = resolver
            .resolve(&format!("{}/bare", server.url()))
            .expect("fetch should succeed");
        assert_eq!(title, None);
    }

    #[test]
    fn test_resolver_maps_error_status_to_failure() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/gone").with_status(404).create();

        let resolver = TitleResolver::new();
        let err = resolver
            .resolve(&format!("{}/gone", server.url()))
            .expect_err("404 should be a resolution failure");
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_resolver_reports_transport_failure_with_description() {
        // Bind then drop a listener so the port is very likely unused.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let resolver = TitleResolver::new();
        let err = resolver
            .resolve(&format!("http://127.0.0.1:{port}/"))
            .expect_err("connection should be refused");
        assert!(!err.to_string().is_empty());
    }
}
