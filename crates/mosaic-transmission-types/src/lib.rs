//! # Mosaic Transmission Types
//!
//! This crate defines the torrent snapshot types, the error taxonomy and the
//! [`TorrentControl`] trait shared by the Mosaic Transmission RPC crates.

use std::{io, path::PathBuf};

use thiserror::Error;

mod torrent;
mod torrents;

pub use torrent::{File, Torrent, TorrentAdded, TorrentStatus, TrackerStat};
pub use torrents::Torrents;

/// Error type for Transmission RPC operations.
#[derive(Error, Debug)]
pub enum TransmissionError {
    /// A local file could not be read while building a command.
    #[error("file system error reading {}: {source}", path.display())]
    FileSystem {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The request could not be encoded as JSON.
    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The transport failed to deliver the request or return a reply.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The reply was not a well-formed response envelope.
    #[error("failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Zero or several torrents were returned where exactly one was expected.
    #[error("no results found (got {count} torrents)")]
    NoResults {
        /// Number of torrents the daemon actually returned.
        count: usize,
    },
}

/// Errors raised by a transport while delivering a request body.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failures, timeouts and other network-level errors.
    #[error("network error: {0}")]
    Network(String),

    /// The daemon rejected the credentials.
    #[error("authentication required")]
    Unauthorized,

    /// The daemon answered with a non-success HTTP status.
    #[error("daemon answered with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The session id header echoed by the daemon, if any.
        session_id: Option<String>,
    },

    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid RPC URL: {0}")]
    InvalidUrl(String),
}

/// TorrentControl defines the operations a torrent daemon client exposes.
#[allow(async_fn_in_trait)]
pub trait TorrentControl {
    /// List all torrents, in the order the daemon reports them.
    async fn list(&self) -> Result<Torrents, TransmissionError>;
    /// Get a single torrent by its daemon-assigned ID.
    async fn get(&self, id: i32) -> Result<Torrent, TransmissionError>;
    /// Add a torrent from a magnet link, URL or path the daemon can resolve.
    async fn add(&self, filename: &str) -> Result<TorrentAdded, TransmissionError>;
    /// Start a torrent. Returns the daemon's result string.
    async fn start(&self, id: i32) -> Result<String, TransmissionError>;
    /// Stop a torrent. Returns the daemon's result string.
    async fn stop(&self, id: i32) -> Result<String, TransmissionError>;
    /// Verify the local data of a torrent. Returns the daemon's result string.
    async fn verify(&self, id: i32) -> Result<String, TransmissionError>;
    /// Remove a torrent. If `delete_local_data` is true, the downloaded data is deleted too.
    async fn remove(&self, id: i32, delete_local_data: bool)
    -> Result<String, TransmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_message_mentions_count() {
        let err = TransmissionError::NoResults { count: 2 };
        assert_eq!(err.to_string(), "no results found (got 2 torrents)");
    }

    #[test]
    fn transport_error_converts() {
        let err: TransmissionError = TransportError::Unauthorized.into();
        assert!(matches!(
            err,
            TransmissionError::Transport(TransportError::Unauthorized)
        ));
    }

    #[test]
    fn file_system_error_names_path() {
        let err = TransmissionError::FileSystem {
            path: PathBuf::from("/missing.torrent"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/missing.torrent"));
    }
}
