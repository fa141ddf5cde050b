//! Shared test utilities and fixtures.

use mosaic_transmission_types::TransportError;
use serde_json::{Value, json};

/// Encodes a canned daemon reply the way a transport would hand it back.
pub(crate) fn reply(value: Value) -> Result<Vec<u8>, TransportError> {
    Ok(serde_json::to_vec(&value).expect("reply should serialize"))
}

/// Parses a request body captured by a mock transport.
pub(crate) fn request_json(body: &str) -> Value {
    serde_json::from_str(body).expect("request body should be JSON")
}

pub(crate) fn torrent_json(id: i32, name: &str, hash: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "hashString": hash,
        "status": 4,
        "addedDate": 1_700_000_000 + id,
        "leftUntilDone": 500,
        "eta": 60,
        "uploadRatio": 0.0,
        "rateDownload": 1000,
        "rateUpload": 0,
        "downloadDir": "/downloads",
        "isFinished": false,
        "percentDone": 0.5,
        "seedRatioMode": 0,
        "error": 0,
        "errorString": "",
        "trackerStats": [],
        "files": [{"name": name, "length": 1000, "bytesCompleted": 500}]
    })
}
