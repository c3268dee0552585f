use edgestore::error::Error;
use reqwest::StatusCode;

use crate::*;

#[tokio::test]
async fn read_returns_exact_body_bytes() {
    let payload = random_payload(1024);
    let transport = MockTransport::new().respond(StatusCode::OK, payload.clone());
    let client = test_client(transport.clone());
    let path = new_file_path();

    let bytes = client.read_file(&path).await.unwrap();

    assert_eq!(bytes, payload);
    assert_eq!(transport.calls(), vec![Call::Get(zone_url(&path))]);
}

#[tokio::test]
async fn read_missing_path_is_not_found() {
    let transport = MockTransport::new().respond(StatusCode::NOT_FOUND, "");
    let client = test_client(transport);
    let path = new_file_path();

    let err = client.read_file(&path).await.unwrap_err();
    assert!(
        matches!(err, Error::NotFound { path: ref p } if *p == path),
        "expected NotFound, got {err}"
    );
}

#[tokio::test]
async fn read_unauthorized_raises() {
    let transport = MockTransport::new().respond(StatusCode::UNAUTHORIZED, "");
    let client = test_client(transport);

    let err = client.read_file("file.bin").await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
}

#[tokio::test]
async fn read_unmodeled_status_carries_the_code() {
    let transport = MockTransport::new().respond(StatusCode::SERVICE_UNAVAILABLE, "");
    let client = test_client(transport);

    let err = client.read_file("file.bin").await.unwrap_err();
    assert!(
        matches!(err, Error::UnexpectedStatus { status } if status == StatusCode::SERVICE_UNAVAILABLE)
    );
}

#[tokio::test]
async fn read_empty_path_fails_before_any_request() {
    let transport = MockTransport::new();
    let client = test_client(transport.clone());

    let err = client.read_file("").await.unwrap_err();
    assert!(matches!(err, Error::EmptyPath));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn repeated_reads_of_an_unchanged_object_are_identical() {
    let payload = random_payload(256);
    let transport = MockTransport::new()
        .respond(StatusCode::OK, payload.clone())
        .respond(StatusCode::OK, payload.clone());
    let client = test_client(transport);
    let path = new_file_path();

    let first = client.read_file(&path).await.unwrap();
    let second = client.read_file(&path).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_reads_share_one_client() {
    let payload = random_payload(64);
    let mut transport = MockTransport::new();
    for _ in 0..4 {
        transport = transport.respond(StatusCode::OK, payload.clone());
    }
    let client = test_client(transport);

    let reads = (0..4).map(|_| {
        let client = client.clone();
        let path = new_file_path();
        async move { client.read_file(&path).await }
    });
    let results = futures::future::try_join_all(reads).await.unwrap();

    assert_eq!(results.len(), 4);
    for bytes in results {
        assert_eq!(bytes, payload);
    }
}
