use std::fmt;

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};
use crate::validate;

pub mod constants;
mod operations;
mod response;
mod utils;

use self::constants::DEFAULT_ENDPOINT;
use self::operations::delete::HttpDeleter;
use self::operations::download::HttpDownloader;
use self::operations::list::HttpLister;
use self::operations::upload::HttpUploader;
use self::operations::{Deleter, Downloader, Lister, Uploader};
use self::utils::path::{build_resource_url, ensure_trailing_slash};

pub use self::operations::list::DirectoryEntry;

/// Configuration for a storage client: one credential, one zone.
#[derive(Clone)]
pub struct StorageConfig {
    pub access_key: String,
    pub zone: String,
    /// Overrides the process-wide default endpoint when set.
    pub endpoint: Option<String>,
    /// When set, the credential and zone must also match the documented
    /// lexical shapes, not just be non-empty.
    pub strict: bool,
}

impl StorageConfig {
    pub fn new(access_key: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            zone: zone.into(),
            endpoint: None,
            strict: false,
        }
    }

    pub fn strict(access_key: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            strict: true,
            ..Self::new(access_key, zone)
        }
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("access_key", &"<redacted>")
            .field("zone", &self.zone)
            .field("endpoint", &self.endpoint)
            .field("strict", &self.strict)
            .finish()
    }
}

/// Zone-scoped storage client over a pluggable HTTP transport.
///
/// Immutable once built: one credential and one zone for its lifetime,
/// no shared mutable state. Operations take `&self` and may run
/// concurrently; any ordering between them is the remote's business.
#[derive(Clone)]
pub struct StorageClient<T = HttpTransport> {
    transport: T,
    zone: String,
    endpoint: String,
}

impl StorageClient<HttpTransport> {
    /// Build a client with the production HTTP transport. No network call
    /// occurs at construction time.
    pub fn new(config: StorageConfig) -> Result<Self> {
        Self::validate(&config)?;
        let transport = HttpTransport::new(&config.access_key)?;
        Ok(Self::assemble(transport, config))
    }
}

impl<T: Transport> StorageClient<T> {
    /// Build a client over a caller-supplied transport. The credential is
    /// still validated, but binding it to the wire is the transport's job.
    pub fn with_transport(transport: T, config: StorageConfig) -> Result<Self> {
        Self::validate(&config)?;
        Ok(Self::assemble(transport, config))
    }

    fn validate(config: &StorageConfig) -> Result<()> {
        if config.access_key.trim().is_empty() {
            return Err(Error::MissingAccessKey);
        }
        if config.zone.trim().is_empty() {
            return Err(Error::MissingZone);
        }
        if config.strict {
            if !validate::is_access_key(&config.access_key) {
                return Err(Error::MalformedAccessKey);
            }
            if !validate::is_storage_zone_name(&config.zone) {
                return Err(Error::MalformedZone {
                    zone: config.zone.clone(),
                });
            }
        }
        Ok(())
    }

    fn assemble(transport: T, config: StorageConfig) -> Self {
        Self {
            transport,
            zone: config.zone,
            endpoint: config
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn resource_url(&self, path: &str) -> String {
        build_resource_url(&self.endpoint, &self.zone, path)
    }

    /// Read the file at `path` and return its exact bytes.
    pub async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        log::debug!("read_file zone={} path={}", self.zone, path);
        let downloader = HttpDownloader::new(&self.transport);
        downloader.download(&self.resource_url(path), path).await
    }

    /// List the direct contents of the directory at `path`. A missing
    /// trailing separator is appended first; an empty path lists the
    /// zone root.
    pub async fn list_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let dir_path = ensure_trailing_slash(path);
        log::debug!("list_directory zone={} path={}", self.zone, dir_path);
        let lister = HttpLister::new(&self.transport);
        lister.list(&self.resource_url(&dir_path), &dir_path).await
    }

    /// Create or overwrite the file at `path` with `data`. An empty
    /// payload writes a zero-length file. The path names a file and is
    /// used verbatim.
    pub async fn write_file(&self, data: Vec<u8>, path: &str) -> Result<bool> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        log::debug!("write_file zone={} path={} bytes={}", self.zone, path, data.len());
        let uploader = HttpUploader::new(&self.transport);
        uploader.upload(&self.resource_url(path), data).await
    }

    /// Delete the file or directory prefix at `path`.
    pub async fn delete_path(&self, path: &str) -> Result<bool> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        log::debug!("delete_path zone={} path={}", self.zone, path);
        let deleter = HttpDeleter::new(&self.transport);
        deleter.delete(&self.resource_url(path)).await
    }
}

impl<T> fmt::Debug for StorageClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageClient")
            .field("zone", &self.zone)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
