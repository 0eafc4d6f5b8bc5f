//! HTTP access to the camera backend

use async_trait::async_trait;
use log::trace;
use reqwest::Client;
use url::Url;

use crate::error::Result;

pub use reqwest::{Method, StatusCode};


/// Status and body of a backend response
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}


/// Sends requests to the camera backend
///
/// `path` is always absolute (e.g. */api/cameras*) and already percent-encoded.
#[async_trait]
pub trait Transport: Send + Sync + 'static {

    /// Sends a request without a body and collects the response
    async fn send(&self, method: Method, path: &str) -> Result<Reply>;
}


/// `Transport` backed by a `reqwest` client
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {

    /// Creates a transport for the backend at `base`
    ///
    /// Request paths are resolved relative to `base`, so a base URL ending in `/` keeps its path
    /// prefix (e.g. *http://pi.local/cams/* sends to *http://pi.local/cams/api/cameras*).
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base: Url::parse(base)?,
        })
    }

    /// Resolves a backend path against the base URL
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {

    async fn send(&self, method: Method, path: &str) -> Result<Reply> {

        let url = self.url_for(path)?;
        trace!("{} {}", method, url);

        let response = self.client.request(method, url)
            .send()
            .await?;

        let status = response.status();
        let body = response.text()
            .await?;

        Ok(Reply { status, body })
    }
}
