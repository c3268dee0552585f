use crate::error::{Error, Result};
use crate::storage::response::{Outcome, classify};
use crate::transport::Transport;

/// Trait for reading a single file's bytes from a storage zone.
pub trait Downloader {
    /// Fetch the raw bytes stored at a zone-scoped resource URL.
    ///
    /// # Arguments
    /// * `url` - Fully built resource URL
    /// * `path` - The caller-supplied relative path, for error context
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The exact response body, or a typed error
    async fn download(&self, url: &str, path: &str) -> Result<Vec<u8>>;
}

/// Implementation of Downloader over an HTTP transport.
pub struct HttpDownloader<'a, T> {
    transport: &'a T,
}

impl<'a, T> HttpDownloader<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> Downloader for HttpDownloader<'_, T> {
    async fn download(&self, url: &str, path: &str) -> Result<Vec<u8>> {
        let response = self.transport.get(url).await?;
        match classify(response.status, response.body) {
            Outcome::Ok(body) => Ok(body.to_vec()),
            Outcome::Unauthorized => Err(Error::Unauthorized),
            Outcome::NotFound => Err(Error::NotFound {
                path: path.to_string(),
            }),
            other => Err(Error::UnexpectedStatus {
                status: other.status(),
            }),
        }
    }
}
