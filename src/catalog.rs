use crate::{ImportError, Result, ServerConfig};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// Catalog trait
// =============================================================================

/// The remote music library that albums are searched for, added to and
/// queued in.
///
/// Each method is a single remote call. Failures are returned as
/// [`ImportError::Transport`] or [`ImportError::Parse`] and nothing is retried.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockCatalog`
/// that implements this trait using the `mockall` library.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait(?Send)]
pub trait Catalog {
    /// Search the catalog, returning candidates in the catalog's own order.
    async fn search(&self, query: &str) -> Result<Vec<CatalogCandidate>>;

    /// Add the album with the given catalog id to the library.
    async fn add(&self, catalog_id: &str) -> Result<()>;

    /// Mark an added album as wanted so the catalog starts looking for it.
    async fn queue(&self, catalog_id: &str, prefer_lossless: bool) -> Result<()>;
}

/// One entry of a catalog album search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCandidate {
    /// Album title
    pub title: String,
    /// Artist name as the catalog spells it
    #[serde(rename = "uniquename")]
    pub artist_unique_name: String,
    /// Release id, used for the add and queue calls
    #[serde(rename = "albumid")]
    pub album_id: String,
    /// Artist id
    #[serde(rename = "id", default)]
    pub artist_id: Option<String>,
    /// Search relevance reported by the catalog
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub formats: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tracks: Option<String>,
    #[serde(rename = "rgid", default, deserialize_with = "lenient_text")]
    pub release_group_id: Option<String>,
    #[serde(rename = "rgtype", default, deserialize_with = "lenient_text")]
    pub release_group_type: Option<String>,
}

impl CatalogCandidate {
    pub fn new(
        title: impl Into<String>,
        artist_unique_name: impl Into<String>,
        album_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist_unique_name: artist_unique_name.into(),
            album_id: album_id.into(),
            artist_id: None,
            score: None,
            date: None,
            country: None,
            formats: None,
            tracks: None,
            release_group_id: None,
            release_group_type: None,
        }
    }
}

// =============================================================================
// Headphones implementation
// =============================================================================

/// Client for the Headphones web API (`<base>/api?cmd=...&apikey=...`).
///
/// # Examples
///
/// ```rust,no_run
/// use headphones_import::{Catalog, HeadphonesClient};
///
/// # tokio_test::block_on(async {
/// let http_client = http_client::native::NativeClient::new();
/// let client = HeadphonesClient::with_base_url(
///     Box::new(http_client),
///     "http://headphones:8181".to_string(),
///     "0123456789abcdef".to_string(),
/// );
///
/// let candidates = client.search("Radiohead - In Rainbows (2007)").await?;
/// println!("{} candidates", candidates.len());
/// # Ok::<(), headphones_import::ImportError>(())
/// # });
/// ```
pub struct HeadphonesClient {
    client: Box<dyn HttpClient>,
    base_url: String,
    api_key: String,
}

impl HeadphonesClient {
    pub fn new(client: Box<dyn HttpClient>, config: &ServerConfig) -> Self {
        Self::with_base_url(client, config.url.clone(), config.api_key.clone())
    }

    pub fn with_base_url(client: Box<dyn HttpClient>, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, cmd: &str, params: &[(&str, &str)], api_key: &str) -> String {
        let mut query = format!("cmd={}", urlencoding::encode(cmd));
        for (key, value) in params {
            query.push_str(&format!(
                "&{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        query.push_str(&format!("&apikey={}", urlencoding::encode(api_key)));

        format!("{}/api?{}", self.base_url, query)
    }

    /// Perform one API call and return the response body.
    async fn api_get(&self, cmd: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = self.api_url(cmd, params, &self.api_key);
        log::debug!("GET {}", self.api_url(cmd, params, "<redacted>"));

        let url = url
            .parse::<Url>()
            .map_err(|e| ImportError::Transport(format!("Invalid URL: {e}")))?;
        let mut request = Request::new(Method::Get, url);
        add_api_headers(&mut request);

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| ImportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Transport(format!(
                "{cmd} returned HTTP {status}"
            )));
        }

        response
            .body_string()
            .await
            .map_err(|e| ImportError::Transport(e.to_string()))
    }
}

#[async_trait(?Send)]
impl Catalog for HeadphonesClient {
    async fn search(&self, query: &str) -> Result<Vec<CatalogCandidate>> {
        let body = self.api_get("findAlbum", &[("name", query)]).await?;
        parse_find_album_response(&body)
    }

    async fn add(&self, catalog_id: &str) -> Result<()> {
        self.api_get("addAlbum", &[("id", catalog_id)]).await?;
        Ok(())
    }

    async fn queue(&self, catalog_id: &str, prefer_lossless: bool) -> Result<()> {
        let lossless = python_bool(prefer_lossless);
        self.api_get(
            "queueAlbum",
            &[("id", catalog_id), ("new", "True"), ("lossless", lossless)],
        )
        .await?;
        Ok(())
    }
}

/// Headphones reads its boolean flags with Python semantics.
fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn add_api_headers(request: &mut Request) {
    let _ = request.insert_header(
        "User-Agent",
        concat!("headphones-import/", env!("CARGO_PKG_VERSION")),
    );
    let _ = request.insert_header("Accept", "application/json");
}

// The descriptive fields are informational only. Values of an unexpected JSON
// type are kept as text or dropped instead of failing the whole search.

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

pub fn parse_find_album_response(json: &str) -> Result<Vec<CatalogCandidate>> {
    serde_json::from_str(json).map_err(|e| ImportError::Parse(e.to_string()))
}
