//! TheMealDB HTTP client
//!
//! One explicitly constructed [`MealDbClient`] is shared (by clone) between
//! every background fetch. Each call is a single GET with no retry; failures
//! come back as [`Error`] values classified by [`Error::fetch_kind`].

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use mealdeck_core::prelude::{Error, Result};
use mealdeck_core::{Category, CategoryResponse, Meal, MealListPayload, Thumbnail};

use crate::decode::decode_thumbnail;

/// Public TheMealDB v1 endpoint with the shared test key
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("mealdeck/", env!("CARGO_PKG_VERSION"));

/// Characters left unescaped in a query value (RFC 3986 unreserved set)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Options applied when building the underlying HTTP client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Whole-request timeout. `None` keeps the client default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Client for TheMealDB's JSON API and the image hosts it links to
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client for `base_url` (e.g. `https://www.themealdb.com/api/json/v1/1`)
    pub fn new(base_url: impl Into<String>, options: &ClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent.clone());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base>/categories.php`
    pub fn categories_url(&self) -> Result<Url> {
        parse_url(&format!("{}/categories.php", self.base_url))
    }

    /// `GET <base>/filter.php?c=<category>`
    ///
    /// The category name is percent-encoded, so names with spaces or `&`
    /// still produce a single well-formed query value.
    pub fn meals_url(&self, category: &str) -> Result<Url> {
        let encoded = utf8_percent_encode(category, QUERY_VALUE).to_string();
        if encoded != category {
            debug!("Encoded category '{}' as '{}'", category, encoded);
        }
        parse_url(&format!("{}/filter.php?c={}", self.base_url, encoded))
    }

    /// Fetch the category list
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let url = self.categories_url()?;
        let response: CategoryResponse = self.fetch_json(&url).await?;
        Ok(response.into())
    }

    /// Fetch the meals filed under `category`
    pub async fn fetch_meals(&self, category: &str) -> Result<Vec<Meal>> {
        let url = self.meals_url(category)?;
        let payload: MealListPayload = self.fetch_json(&url).await?;
        Ok(payload.into())
    }

    /// GET `url` and decode the body as JSON into `T`
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.get_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(e.to_string()))
    }

    /// GET `url` and decode the body as an image, reduced to a thumbnail
    pub async fn load_thumbnail(&self, url: &str) -> Result<Thumbnail> {
        let url = parse_url(url)?;
        let body = self.get_bytes(&url).await?;

        // Image decoding is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || decode_thumbnail(&body))
            .await
            .map_err(|e| Error::image_decode(format!("decode task failed: {e}")))?
    }

    /// GET `url` and return the raw body.
    ///
    /// Non-success statuses and empty bodies are errors.
    pub async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        trace!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        if body.is_empty() {
            return Err(Error::empty_payload(url.as_str()));
        }

        Ok(body.to_vec())
    }
}

/// Parse an absolute URL, logging "Invalid URL" on failure
fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        warn!("Invalid URL '{}': {}", raw, e);
        Error::invalid_url(raw, e)
    })
}
