use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};
use crate::storage::constants::ACCESS_KEY_HEADER;

/// Raw outcome of one HTTP round trip: status plus the fully read body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP collaborator seam: one verb per call against a fully built
/// resource URL. Transport-level failures (connect errors, timeouts,
/// cancellation) surface as `Error::Transport` and are never reclassified
/// into the typed taxonomy.
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse>;
    async fn put(&self, url: &str, body: Vec<u8>) -> Result<RawResponse>;
    async fn delete(&self, url: &str) -> Result<RawResponse>;
}

/// Production transport: a reused reqwest client with the access key
/// installed as a default header, so every request carries the credential.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport bound to the given access key. A key that cannot
    /// be encoded as a header value is rejected here, before any request.
    pub fn new(access_key: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(access_key).map_err(|_| Error::MalformedAccessKey)?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(ACCESS_KEY_HEADER), value);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }

    async fn run(&self, request: reqwest::RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.run(self.client.get(url)).await
    }

    async fn put(&self, url: &str, body: Vec<u8>) -> Result<RawResponse> {
        self.run(self.client.put(url).body(body)).await
    }

    async fn delete(&self, url: &str) -> Result<RawResponse> {
        self.run(self.client.delete(url)).await
    }
}
