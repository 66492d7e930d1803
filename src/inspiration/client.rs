//! Pin search API client

use std::time::Duration;

use tracing::{debug, warn};

use super::error::SearchError;
use super::mock::mock_results;
use super::types::{wedding_query, SearchResults, UpstreamSearchResponse};
use crate::config::settings::{SearchSettings, ACCESS_TOKEN_ENV};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the client gets its access token
#[derive(Debug, Clone)]
pub enum TokenSource {
    /// Fixed when the client is built
    Fixed(Option<String>),
    /// Read from this environment variable on every search
    Env(String),
}

impl TokenSource {
    /// The current token; blank counts as unset
    fn resolve(&self) -> Option<String> {
        let token = match self {
            Self::Fixed(token) => token.clone(),
            Self::Env(var) => std::env::var(var).ok(),
        };
        token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Client for the pin search endpoint
#[derive(Debug, Clone)]
pub struct PinterestClient {
    http: reqwest::Client,
    api_base: String,
    page_size: u32,
    token: TokenSource,
}

impl PinterestClient {
    pub fn new(
        api_base: impl Into<String>,
        page_size: u32,
        access_token: Option<String>,
    ) -> Result<Self, SearchError> {
        Self::with_token_source(api_base, page_size, TokenSource::Fixed(access_token))
    }

    pub fn with_token_source(
        api_base: impl Into<String>,
        page_size: u32,
        token: TokenSource,
    ) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("wedplan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            page_size,
            token,
        })
    }

    /// Client configured from settings. The token is looked up in
    /// `PINTEREST_ACCESS_TOKEN` at search time, so a running proxy picks up
    /// a token that is set or rotated later.
    pub fn from_settings(settings: &SearchSettings) -> Result<Self, SearchError> {
        Self::with_token_source(
            settings.api_base.clone(),
            settings.page_size,
            TokenSource::Env(ACCESS_TOKEN_ENV.to_string()),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.token.resolve().is_some()
    }

    /// One raw page of upstream results for `query`, exactly as given
    pub async fn search_pins(
        &self,
        query: &str,
        bookmark: Option<&str>,
    ) -> Result<UpstreamSearchResponse, SearchError> {
        let token = self.token.resolve().ok_or(SearchError::NotConfigured)?;

        let mut params = vec![
            ("query", query.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(bookmark) = bookmark.filter(|b| !b.is_empty()) {
            params.push(("bookmark", bookmark.to_string()));
        }

        let url = format!("{}/search/pins", self.api_base);
        debug!(%url, query, "Searching pins");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .bearer_auth(&token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "Pinterest API error");
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<UpstreamSearchResponse>().await?)
    }

    /// Search for wedding inspiration.
    ///
    /// The query gains a "wedding" prefix unless it already mentions one.
    /// Without an access token the fixed placeholder page is returned.
    /// Only an empty query is rejected; whitespace is passed through.
    pub async fn search(
        &self,
        query: &str,
        bookmark: Option<&str>,
    ) -> Result<SearchResults, SearchError> {
        if query.is_empty() {
            return Err(SearchError::MissingQuery);
        }

        match self.search_pins(&wedding_query(query), bookmark).await {
            Ok(response) => Ok(SearchResults::from(response)),
            Err(SearchError::NotConfigured) => {
                debug!("No access token configured, serving placeholder pins");
                Ok(mock_results(query))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> PinterestClient {
        PinterestClient::new(server.uri(), 25, Some("test-token".into())).unwrap()
    }

    fn page() -> serde_json::Value {
        json!({
            "items": [{
                "id": "987",
                "title": null,
                "description": "Blush peony centrepieces with gold candlesticks",
                "link": "https://example.com/peonies",
                "dominant_color": "#f3d6d0",
                "media": {"media_type": "image", "images": {
                    "400x300": {"url": "https://i.example/400.jpg", "width": 400, "height": 300},
                    "600x": {"url": "https://i.example/600.jpg", "width": 600, "height": 900}
                }}
            }],
            "bookmark": "bm-2"
        })
    }

    #[tokio::test]
    async fn test_search_maps_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/pins"))
            .and(query_param("query", "wedding peonies"))
            .and(query_param("page_size", "25"))
            .and(query_param_is_missing("bookmark"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page()))
            .expect(1)
            .mount(&server)
            .await;

        let results = client(&server).search("peonies", None).await.unwrap();
        assert!(!results.is_mock);
        assert_eq!(results.next_page.as_deref(), Some("bm-2"));
        let pin = &results.pins[0];
        assert_eq!(pin.id, "987");
        assert_eq!(pin.title, "Blush peony centrepieces with gold candlesticks");
        assert_eq!(pin.image_url, "https://i.example/600.jpg");
        assert_eq!(pin.thumbnail_url, "https://i.example/400.jpg");
        assert_eq!(pin.dominant_color.as_deref(), Some("#f3d6d0"));
    }

    #[tokio::test]
    async fn test_search_passes_bookmark_and_keeps_wedding_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/pins"))
            .and(query_param("query", "Wedding arches"))
            .and(query_param("bookmark", "bm-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "bookmark": null})))
            .expect(1)
            .mount(&server)
            .await;

        let results = client(&server)
            .search("Wedding arches", Some("bm-2"))
            .await
            .unwrap();
        assert!(results.pins.is_empty());
        assert!(results.next_page.is_none());
    }

    #[tokio::test]
    async fn test_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .mount(&server)
            .await;

        let err = client(&server).search("veils", None).await.unwrap_err();
        assert!(matches!(err, SearchError::Upstream { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client(&server).search("veils", None).await.unwrap_err();
        assert!(matches!(err, SearchError::Http(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_serves_mock_without_calling_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let client = PinterestClient::new(server.uri(), 25, Some("   ".into())).unwrap();
        assert!(!client.is_configured());
        let results = client.search("boho", None).await.unwrap();
        assert!(results.is_mock);
        assert_eq!(results.pins[0].title, "boho - Bridal bouquet");
    }

    #[tokio::test]
    async fn test_empty_query() {
        let client = PinterestClient::new("http://127.0.0.1:9", 25, None).unwrap();
        assert!(matches!(
            client.search("", None).await,
            Err(SearchError::MissingQuery)
        ));
    }

    #[tokio::test]
    async fn test_whitespace_query_is_searched_as_typed() {
        let client = PinterestClient::new("http://127.0.0.1:9", 25, None).unwrap();
        let results = client.search(" ", None).await.unwrap();
        assert!(results.is_mock);
        assert_eq!(results.pins[0].title, "  - Bridal bouquet");

        let results = client.search(" lace veil ", None).await.unwrap();
        assert_eq!(results.pins[0].title, " lace veil  - Bridal bouquet");
    }

    #[tokio::test]
    async fn test_env_token_is_read_on_each_search() {
        // Unique to this test so parallel tests never see it
        const VAR: &str = "WEDPLAN_TEST_ROTATING_PIN_TOKEN";
        std::env::remove_var(VAR);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/pins"))
            .and(header("authorization", "Bearer rotated-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page()))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            PinterestClient::with_token_source(server.uri(), 25, TokenSource::Env(VAR.into()))
                .unwrap();
        assert!(!client.is_configured());
        assert!(client.search("peonies", None).await.unwrap().is_mock);

        std::env::set_var(VAR, " rotated-token ");
        assert!(client.is_configured());
        let results = client.search("peonies", None).await.unwrap();
        assert!(!results.is_mock);
        assert_eq!(results.pins[0].id, "987");

        std::env::remove_var(VAR);
    }
}
