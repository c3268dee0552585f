use crate::error::{Error, Result};
use crate::storage::response::{Outcome, classify};
use crate::transport::Transport;

/// Trait for deleting a file or directory prefix from a storage zone.
pub trait Deleter {
    /// Delete the resource at a zone-scoped resource URL.
    ///
    /// Returns `Ok(true)` when the remote confirms deletion, `Ok(false)`
    /// for any other non-auth status, including Not Found. Same soft
    /// failure policy as upload.
    async fn delete(&self, url: &str) -> Result<bool>;
}

/// Implementation of Deleter over an HTTP transport.
pub struct HttpDeleter<'a, T> {
    transport: &'a T,
}

impl<'a, T> HttpDeleter<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> Deleter for HttpDeleter<'_, T> {
    async fn delete(&self, url: &str) -> Result<bool> {
        let response = self.transport.delete(url).await?;
        match classify(response.status, response.body) {
            Outcome::Ok(_) => Ok(true),
            Outcome::Unauthorized => Err(Error::Unauthorized),
            _ => Ok(false),
        }
    }
}
