//! # Transmission RPC commands and executor.
//!
//! usage:
//!
//! ```rust,ignore
//! use mosaic_transmission_rpc::{HttpTransportConfig, TransmissionClient, new_add_cmd_by_file};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransmissionClient::try_new(HttpTransportConfig::from_env())?;
//!
//!     let mut cmd = new_add_cmd_by_file("path/to/file.torrent")?;
//!     cmd.set_download_dir("/path/to/download/dir");
//!     let added = client.execute_add(&cmd).await?;
//!     println!("Added torrent: {:?}", added);
//!
//!     let mut torrents = client.get_torrents().await?;
//!     torrents.sort_by_name(false);
//!     for torrent in &torrents {
//!         println!("{} {} {}", torrent.id, torrent.name, torrent.status);
//!     }
//!     Ok(())
//! }
//! ```
//!

#[cfg(test)]
use httpmock as _;
#[cfg(test)]
use tracing_subscriber as _;

mod builders;
mod client;
mod command;
mod http;
#[cfg(test)]
mod testutil;
mod transport;

pub use builders::{
    METHOD_ADD, METHOD_GET, METHOD_REMOVE, METHOD_SET, METHOD_START, METHOD_STOP, METHOD_VERIFY,
    encode_file, new_add_cmd, new_add_cmd_by_file, new_add_cmd_by_filename,
    new_add_cmd_by_magnet, new_add_cmd_by_url, new_del_cmd, new_get_torrent_cmd,
    new_get_torrents_cmd, new_set_cmd, new_start_cmd, new_stop_cmd, new_verify_cmd,
};
pub use client::TransmissionClient;
pub use command::{Command, RESULT_SUCCESS, Request, Response, TORRENT_FIELDS};
pub use http::{
    DEFAULT_RPC_URL, DEFAULT_TIMEOUT, HttpTransport, HttpTransportConfig, SESSION_ID_HEADER,
};
pub use transport::Transport;

pub use mosaic_transmission_types::{
    File, Torrent, TorrentAdded, TorrentControl, TorrentStatus, Torrents, TrackerStat,
    TransmissionError, TransportError,
};
