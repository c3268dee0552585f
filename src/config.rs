use std::env;

use crate::error::{Error, Result};
use crate::storage::StorageConfig;

// Helper to keep required-variable loading uniform.
fn require_env_var(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::MissingEnvVar {
        key: key.to_string(),
    })
}

/// Load storage configuration from environment variables.
///
/// `EDGESTORE_ACCESS_KEY` and `EDGESTORE_ZONE` are required;
/// `EDGESTORE_ENDPOINT` optionally overrides the default endpoint.
pub fn load_storage_config() -> Result<StorageConfig> {
    let access_key = require_env_var("EDGESTORE_ACCESS_KEY")?;
    let zone = require_env_var("EDGESTORE_ZONE")?;

    let mut config = StorageConfig::new(access_key, zone);
    config.endpoint = env::var("EDGESTORE_ENDPOINT").ok();
    Ok(config)
}
