use crate::error::{Error, Result};
use crate::storage::response::{Outcome, classify};
use crate::transport::Transport;

/// Trait for writing a file into a storage zone.
pub trait Uploader {
    /// Create or overwrite the file at a zone-scoped resource URL.
    ///
    /// Returns `Ok(true)` when the remote confirms creation, `Ok(false)`
    /// for any other non-auth status. The soft failure keeps the common
    /// "did it succeed" check cheap for callers that retry.
    async fn upload(&self, url: &str, data: Vec<u8>) -> Result<bool>;
}

/// Implementation of Uploader over an HTTP transport.
pub struct HttpUploader<'a, T> {
    transport: &'a T,
}

impl<'a, T> HttpUploader<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> Uploader for HttpUploader<'_, T> {
    async fn upload(&self, url: &str, data: Vec<u8>) -> Result<bool> {
        let response = self.transport.put(url, data).await?;
        match classify(response.status, response.body) {
            Outcome::Created => Ok(true),
            Outcome::Unauthorized => Err(Error::Unauthorized),
            _ => Ok(false),
        }
    }
}
