//! Tests for the download collaborator.

use mural::download;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_image_writes_file_and_returns_absolute_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pic.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg-bytes".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();
    let url = format!("{}/pic.jpg", server.uri());

    let saved = download::fetch_image(&client, &url, dir.path()).await.unwrap();

    assert!(saved.is_absolute());
    assert_eq!(std::fs::read(&saved).unwrap(), b"jpeg-bytes");
    assert_eq!(saved.extension().and_then(|e| e.to_str()), Some("jpg"));
}

#[tokio::test]
async fn fetch_image_surfaces_transport_errors() {
    let dead = MockServer::start().await;
    let url = format!("{}/pic.jpg", dead.uri());
    drop(dead);

    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    match download::fetch_image(&client, &url, dir.path()).await {
        Err(mural::error::MuralError::Network(_)) => {}
        other => panic!("expected Network error, got {other:?}"),
    }
}
