use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{Error, InvalidResponseSnafu, Result};
use crate::storage::constants::NO_ERROR_DETAIL;
use crate::storage::response::{Outcome, classify};
use crate::transport::Transport;

/// One object or subdirectory in a zone listing.
///
/// Wire shape follows the remote listing payload (PascalCase keys);
/// unknown keys are ignored and nullable fields default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectoryEntry {
    pub guid: String,
    pub storage_zone_name: String,
    pub path: String,
    pub object_name: String,
    pub length: u64,
    pub last_changed: String,
    pub date_created: String,
    pub is_directory: bool,
    #[serde(default)]
    pub server_id: u64,
    #[serde(default)]
    pub storage_zone_id: u64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub checksum: Option<String>,
    #[serde(default)]
    pub replicated_zones: Option<String>,
}

/// Trait for listing the direct contents of a zone directory.
pub trait Lister {
    /// List one directory (non-recursive).
    ///
    /// # Arguments
    /// * `url` - Fully built resource URL, already slash-terminated
    /// * `path` - The normalized relative path, for error context
    ///
    /// # Returns
    /// * `Result<Vec<DirectoryEntry>>` - Decoded entries, or a typed error
    async fn list(&self, url: &str, path: &str) -> Result<Vec<DirectoryEntry>>;
}

/// Implementation of Lister over an HTTP transport.
pub struct HttpLister<'a, T> {
    transport: &'a T,
}

impl<'a, T> HttpLister<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> Lister for HttpLister<'_, T> {
    async fn list(&self, url: &str, path: &str) -> Result<Vec<DirectoryEntry>> {
        let response = self.transport.get(url).await?;
        match classify(response.status, response.body) {
            Outcome::Ok(body) => serde_json::from_slice(&body).context(InvalidResponseSnafu),
            Outcome::BadRequest(message) => Err(Error::BadRequest {
                message: message.unwrap_or_else(|| NO_ERROR_DETAIL.to_string()),
            }),
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
