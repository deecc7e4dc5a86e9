//! Item sources: where grids get their data.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use trestle_grid::Item;

use crate::error::LoadError;

/// Request header used to pass an API key to HTTP endpoints.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Supplies the items a grid renders.
///
/// Rendering in `trestle-grid` is a pure function; implementations of this
/// trait own all the I/O. The bundled implementations cover remote JSON
/// endpoints ([`HttpSource`]) and in-memory fixtures ([`StaticSource`]).
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetches the full item sequence.
    ///
    /// Order is meaningful: rendering preserves it within groups.
    async fn fetch_items(&self) -> Result<Vec<Item>, LoadError>;
}

/// Loads items from an HTTP endpoint that returns a JSON array of objects.
///
/// Each fetch is a single `GET` of the configured URL. The source is cheap
/// to clone and can be shared across tasks.
///
/// # Example
///
/// ```no_run
/// use trestle_source::{HttpSource, ItemSource};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), trestle_source::LoadError> {
///     let source = HttpSource::new("https://example.com/employees.json")
///         .api_key("demo-key");
///     let items = source.fetch_items().await?;
///     println!("loaded {} items", items.len());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl HttpSource {
    /// Creates a source for the given URL with a default HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a source that reuses an existing HTTP client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Sends the given API key with each request, as [`API_KEY_HEADER`].
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets a per-request timeout.
    ///
    /// A request that times out surfaces as [`LoadError::Network`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ItemSource for HttpSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, LoadError> {
        let mut request = self.client.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::status(status.as_u16(), body));
        }

        let body = response.text().await?;
        decode_items(&body)
    }
}

/// Serves a fixed, in-memory item sequence.
///
/// Useful in tests and for data that is already loaded.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    items: Vec<Item>,
}

impl StaticSource {
    /// Creates a source over the given items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Creates a source by decoding a JSON array of objects.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(Self::new(decode_items(body)?))
    }
}

#[async_trait]
impl ItemSource for StaticSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, LoadError> {
        Ok(self.items.clone())
    }
}

/// Decodes a JSON document into items.
///
/// The document must be an array of objects; anything else is a
/// [`LoadError::Decode`]. Document order is preserved.
pub fn decode_items(body: &str) -> Result<Vec<Item>, LoadError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| LoadError::decode_with_body(e.to_string(), body))?;

    let elements = match value {
        Value::Array(elements) => elements,
        _ => {
            return Err(LoadError::decode_with_body(
                "expected a JSON array of objects",
                body,
            ))
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(i, element)| match element {
            Value::Object(item) => Ok(item),
            other => Err(LoadError::decode_with_body(
                format!("element {i} is not an object: {other}"),
                body,
            )),
        })
        .collect()
}
