//! End-to-end flows through TransmissionClient against a canned daemon.
//!
//! The fake transport records every request body and answers with a fixed
//! reply, so these tests exercise builders, serialization, the executor and
//! result ordering together without a running daemon.

#![allow(unused_crate_dependencies)]
#![allow(missing_docs)]

use std::{io::Write, sync::Mutex};

use serde_json::{Value, json};

use mosaic_transmission_rpc::{
    Command, TransmissionClient, TransmissionError, Transport, TransportError,
    new_add_cmd_by_file, new_get_torrents_cmd,
};

struct FakeDaemon {
    reply: &'static str,
    requests: Mutex<Vec<String>>,
}

impl FakeDaemon {
    fn replying(reply: &'static str) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|body| serde_json::from_str(body).unwrap())
            .collect()
    }
}

impl Transport for &FakeDaemon {
    async fn post(&self, body: String) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(body);
        Ok(self.reply.as_bytes().to_vec())
    }
}

#[tokio::test]
async fn list_then_sort_by_name() {
    let daemon = FakeDaemon::replying(
        r#"{"arguments":{"torrents":[{"id":1,"name":"b"},{"id":2,"name":"a"}]},"result":"success"}"#,
    );
    let client = TransmissionClient::with_transport(&daemon);

    let mut torrents = client.get_torrents().await.unwrap();
    let names: Vec<_> = torrents.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);

    torrents.sort_by_name(false);
    let names: Vec<_> = torrents.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);

    let requests = daemon.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["method"], "torrent-get");
}

#[tokio::test]
async fn start_torrent_reports_success() {
    let daemon = FakeDaemon::replying(r#"{"result":"success"}"#);
    let client = TransmissionClient::with_transport(&daemon);

    let result = client.start_torrent(5).await.unwrap();

    assert_eq!(result, "success");
    assert_eq!(
        daemon.requests(),
        vec![json!({
            "method": "torrent-start",
            "arguments": {
                "ids": [5],
                "torrent-added": {"hashString": "", "id": 0, "name": ""}
            }
        })]
    );
}

#[tokio::test]
async fn get_torrent_rejects_ambiguous_reply() {
    let daemon = FakeDaemon::replying(
        r#"{"arguments":{"torrents":[{"id":1,"name":"b"},{"id":2,"name":"a"}]},"result":"success"}"#,
    );
    let client = TransmissionClient::with_transport(&daemon);

    match client.get_torrent(1).await {
        Err(TransmissionError::NoResults { count }) => assert_eq!(count, 2),
        other => panic!("Expected NoResults error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_by_file_uploads_metainfo() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello torrent").unwrap();

    let daemon = FakeDaemon::replying(
        r#"{"arguments":{"torrent-added":{"hashString":"f00d","id":3,"name":"hello"}},"result":"success"}"#,
    );
    let client = TransmissionClient::with_transport(&daemon);

    let mut cmd = new_add_cmd_by_file(file.path()).unwrap();
    cmd.set_download_dir("/downloads");
    let added = client.execute_add(&cmd).await.unwrap();

    assert_eq!(added.id, 3);
    assert_eq!(added.hash_string, "f00d");

    let request = &daemon.requests()[0];
    assert_eq!(request["method"], "torrent-add");
    assert_eq!(request["arguments"]["metainfo"], "aGVsbG8gdG9ycmVudA==");
    assert_eq!(request["arguments"]["download-dir"], "/downloads");
    assert!(request["arguments"].get("filename").is_none());
}

#[tokio::test]
async fn execute_returns_full_response_envelope() {
    let daemon = FakeDaemon::replying(
        r#"{"arguments":{"torrents":[{"id":9,"name":"x","status":6,"files":[{"name":"x","length":10,"bytesCompleted":10}]}]},"result":"success","tag":1}"#,
    );
    let client = TransmissionClient::with_transport(&daemon);

    let response: Command = client.execute(&new_get_torrents_cmd()).await.unwrap();

    assert!(response.is_success());
    let torrents = response.response().torrents();
    assert_eq!(torrents[0].files[0].progress(), 1.0);
    assert_eq!(torrents[0].status.to_string(), "seeding");
}

#[tokio::test]
async fn truncated_reply_is_a_deserialize_error() {
    let daemon = FakeDaemon::replying(r#"{"result":"succ"#);
    let client = TransmissionClient::with_transport(&daemon);

    assert!(matches!(
        client.stop_torrent(1).await,
        Err(TransmissionError::Deserialize(_))
    ));
}
