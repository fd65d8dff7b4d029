//! Tests for the filesystem/HTTP source reader.

mod common;

use std::time::Duration;

use wordcount::error::ReadError;
use wordcount::reader::{FsHttpReader, SourceReader};

fn reader() -> FsHttpReader {
    FsHttpReader::new(Duration::from_secs(5)).expect("build reader")
}

#[tokio::test]
async fn reads_a_local_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("content.txt");
    std::fs::write(&path, "Go is great, go go!").expect("write fixture");

    let content = reader()
        .read(path.to_str().expect("utf-8 path"))
        .await
        .expect("read file");
    assert_eq!(content, b"Go is great, go go!");
}

#[tokio::test]
async fn missing_path_is_an_invalid_source() {
    // Not a file, not an absolute URL: rejected before any network attempt.
    let err = reader()
        .read("/nonexistent/path")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ReadError::InvalidSource));
}

#[tokio::test]
async fn fetches_an_http_source() {
    let url = common::serve_once("HTTP/1.1 200 OK", "no matches here").await;

    let content = reader().read(&url).await.expect("fetch");
    assert_eq!(content, b"no matches here");
}

#[tokio::test]
async fn non_ok_status_is_a_read_failure() {
    let url = common::serve_once("HTTP/1.1 404 Not Found", "ignored body").await;

    let err = reader().read(&url).await.expect_err("should fail");
    match err {
        ReadError::Status(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    // Bind-then-drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = reader()
        .read(&format!("http://{addr}/"))
        .await
        .expect_err("should fail");
    assert!(matches!(err, ReadError::Http(_)));
}
