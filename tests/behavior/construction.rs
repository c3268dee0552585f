use edgestore::config::load_storage_config;
use edgestore::error::Error;
use edgestore::storage::constants::DEFAULT_ENDPOINT;
use edgestore::storage::{StorageClient, StorageConfig};

use crate::*;

const ACCOUNT_KEY: &str =
    "a1b2c3d4-e5f6-a1b2-c3d4-e5f6a1b2c3d4e5f6a1b2-c3d4-e5f6-a1b2-c3d4e5f6a1b2";

#[test]
fn client_reports_the_zone_it_was_given() {
    let config = StorageConfig::new(TEST_ACCESS_KEY, TEST_ZONE);
    let client = StorageClient::with_transport(MockTransport::new(), config).unwrap();
    assert_eq!(client.zone(), TEST_ZONE);
    assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
}

#[test]
fn endpoint_override_is_respected() {
    let client = test_client(MockTransport::new());
    assert_eq!(client.endpoint(), TEST_ENDPOINT);
}

#[test]
fn empty_or_whitespace_credential_is_rejected() {
    for key in ["", "   ", "\t\n"] {
        let config = StorageConfig::new(key, TEST_ZONE);
        let err = StorageClient::with_transport(MockTransport::new(), config).unwrap_err();
        assert!(matches!(err, Error::MissingAccessKey), "key {key:?}: {err}");
    }
}

#[test]
fn empty_or_whitespace_zone_is_rejected() {
    for zone in ["", "  "] {
        let config = StorageConfig::new(TEST_ACCESS_KEY, zone);
        let err = StorageClient::with_transport(MockTransport::new(), config).unwrap_err();
        assert!(matches!(err, Error::MissingZone), "zone {zone:?}: {err}");
    }
}

#[test]
fn default_construction_accepts_any_non_empty_credential() {
    let config = StorageConfig::new("not-a-token-shape", TEST_ZONE);
    assert!(StorageClient::with_transport(MockTransport::new(), config).is_ok());
}

#[test]
fn strict_construction_accepts_both_token_classes() {
    for key in [TEST_ACCESS_KEY, ACCOUNT_KEY] {
        let config = StorageConfig::strict(key, TEST_ZONE);
        assert!(
            StorageClient::with_transport(MockTransport::new(), config).is_ok(),
            "key {key:?} should be accepted"
        );
    }
}

#[test]
fn strict_construction_rejects_unshaped_identifiers() {
    // A plain 8-4-4-4-12 UUID matches neither issued token class.
    let config = StorageConfig::strict("12345678-abcd-ef01-2345-67890abcdef0", TEST_ZONE);
    let err = StorageClient::with_transport(MockTransport::new(), config).unwrap_err();
    assert!(matches!(err, Error::MalformedAccessKey));

    let config = StorageConfig::strict(TEST_ACCESS_KEY, "bad_zone!");
    let err = StorageClient::with_transport(MockTransport::new(), config).unwrap_err();
    assert!(matches!(err, Error::MalformedZone { zone } if zone == "bad_zone!"));
}

#[test]
fn production_construction_makes_no_network_call() {
    // Building the reqwest-backed client must work without a runtime.
    let config = StorageConfig::new(TEST_ACCESS_KEY, TEST_ZONE);
    let client = StorageClient::new(config).unwrap();
    assert_eq!(client.zone(), TEST_ZONE);
}

#[test]
fn debug_output_does_not_leak_the_credential() {
    let config = StorageConfig::new(TEST_ACCESS_KEY, TEST_ZONE);
    assert!(!format!("{config:?}").contains(TEST_ACCESS_KEY));

    let client = StorageClient::with_transport(MockTransport::new(), config).unwrap();
    assert!(!format!("{client:?}").contains(TEST_ACCESS_KEY));
}

#[test]
fn load_storage_config_reads_the_environment() {
    // Process-global env: one test mutates it, start to finish.
    unsafe {
        std::env::remove_var("EDGESTORE_ACCESS_KEY");
        std::env::remove_var("EDGESTORE_ZONE");
        std::env::remove_var("EDGESTORE_ENDPOINT");
    }
    let err = load_storage_config().unwrap_err();
    assert!(matches!(err, Error::MissingEnvVar { key } if key == "EDGESTORE_ACCESS_KEY"));

    unsafe {
        std::env::set_var("EDGESTORE_ACCESS_KEY", TEST_ACCESS_KEY);
    }
    let err = load_storage_config().unwrap_err();
    assert!(matches!(err, Error::MissingEnvVar { key } if key == "EDGESTORE_ZONE"));

    unsafe {
        std::env::set_var("EDGESTORE_ZONE", TEST_ZONE);
        std::env::set_var("EDGESTORE_ENDPOINT", TEST_ENDPOINT);
    }
    let config = load_storage_config().unwrap();
    assert_eq!(config.access_key, TEST_ACCESS_KEY);
    assert_eq!(config.zone, TEST_ZONE);
    assert_eq!(config.endpoint.as_deref(), Some(TEST_ENDPOINT));

    unsafe {
        std::env::remove_var("EDGESTORE_ACCESS_KEY");
        std::env::remove_var("EDGESTORE_ZONE");
        std::env::remove_var("EDGESTORE_ENDPOINT");
    }
}
