use std::time::{Duration, SystemTime};

use blobpad_api_client::{BlobpadApiClient, BlobpadApiClientError};
use blobpad_api_schema::store::StoreRequest;
use blobpad_common::clock::Clock;
use blobpad_node::{Hash, NodeConfig};
use blobpad_server::api::{run_server, ServerConfig};
use serial_test::serial;
use tokio::runtime::Builder;

fn spawn_server(port: u16, storage_dir: Option<std::path::PathBuf>) -> tokio::runtime::Runtime {
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap();

    let fixed_system_time =
        SystemTime::UNIX_EPOCH + Duration::from_secs(40 * 365 * 24 * 60 * 60);
    let config = ServerConfig {
        port,
        clock: Clock::new_with_fixed_time(fixed_system_time),
        node: NodeConfig {
            storage_dir,
            secret_key: None,
        },
    };

    runtime.spawn(async move {
        run_server(config).await.unwrap();
    });
    runtime
}

fn wait_for_server(client: &BlobpadApiClient) {
    for _ in 0..50 {
        if client.health().is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    panic!("server did not come up in time");
}

#[test]
#[serial]
fn test_store_and_read_roundtrip() {
    let _runtime = spawn_server(8741, None);
    let client = BlobpadApiClient::new("http://localhost:8741".to_string());
    wait_for_server(&client);

    let health = client.health().unwrap();
    assert_eq!(health.status, "live");
    // Fixed clock, so no time passes as far as the server is concerned.
    assert_eq!(health.uptime_secs, 0);

    let stored = client
        .store(StoreRequest {
            content: "Hello, blobpad!".to_string(),
        })
        .unwrap();
    assert!(!stored.blob_id.is_empty());

    let read = client.read_blob(&stored.blob_id).unwrap();
    assert_eq!(read.content, "Hello, blobpad!");

    // Content addressing: storing the same text again yields the same id.
    let again = client
        .store(StoreRequest {
            content: "Hello, blobpad!".to_string(),
        })
        .unwrap();
    assert_eq!(again.blob_id, stored.blob_id);
}

#[test]
#[serial]
fn test_store_empty_content_is_rejected() {
    let _runtime = spawn_server(8742, None);
    let client = BlobpadApiClient::new("http://localhost:8742".to_string());
    wait_for_server(&client);

    let err = client
        .store(StoreRequest {
            content: String::new(),
        })
        .unwrap_err();

    match err {
        BlobpadApiClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "missing content");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_store_without_content_field_is_rejected() {
    let _runtime = spawn_server(8746, None);
    let client = BlobpadApiClient::new("http://localhost:8746".to_string());
    wait_for_server(&client);

    // Raw body with no `content` field at all, bypassing the typed client.
    let err = ureq::post("http://localhost:8746/api/store")
        .send_json(serde_json::json!({}))
        .unwrap_err();

    match err {
        ureq::Error::Status(status, response) => {
            assert_eq!(status, 400);
            let body: blobpad_api_schema::error::ErrorResponse = response.into_json().unwrap();
            assert_eq!(body.error, "missing content");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_read_malformed_blob_id_is_rejected() {
    let _runtime = spawn_server(8743, None);
    let client = BlobpadApiClient::new("http://localhost:8743".to_string());
    wait_for_server(&client);

    let err = client.read_blob("not-a-blob-id").unwrap_err();

    match err {
        BlobpadApiClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("invalid blob id"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_read_unknown_blob_id_surfaces_upstream_error() {
    let _runtime = spawn_server(8744, None);
    let client = BlobpadApiClient::new("http://localhost:8744".to_string());
    wait_for_server(&client);

    // A perfectly valid hash that nothing ever stored.
    let missing = Hash::new(b"never stored anywhere").to_string();
    let err = client.read_blob(&missing).unwrap_err();

    match err {
        BlobpadApiClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(!message.is_empty());
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_fs_backed_server_roundtrip() {
    let tempdir = tempfile::tempdir().unwrap();
    let _runtime = spawn_server(8745, Some(tempdir.as_ref().to_path_buf()));
    let client = BlobpadApiClient::new("http://localhost:8745".to_string());
    wait_for_server(&client);

    let stored = client
        .store(StoreRequest {
            content: "persisted text".to_string(),
        })
        .unwrap();

    let read = client.read_blob(&stored.blob_id).unwrap();
    assert_eq!(read.content, "persisted text");
}
