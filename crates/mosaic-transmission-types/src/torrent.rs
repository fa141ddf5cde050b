//! Torrent snapshots as reported by the daemon.
//!
//! Every field tolerates absence on the wire so partially populated replies
//! still decode; the daemon only returns the fields that were requested.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a torrent, encoded on the wire as an integer.
///
/// Codes outside the known range decode to [`TorrentStatus::Unknown`] so a
/// newer daemon cannot make a whole `torrent-get` reply undecodable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TorrentStatus {
    /// Stopped by the user or never started.
    #[default]
    Paused,
    /// Queued for a local data check.
    Wait,
    /// Checking local data.
    Check,
    /// Queued for download.
    DownloadWait,
    /// Downloading.
    Download,
    /// Queued for seeding.
    SeedWait,
    /// Seeding.
    Seed,
    /// A code this client does not know, kept as received.
    Unknown(i32),
}

impl From<i32> for TorrentStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Paused,
            1 => Self::Wait,
            2 => Self::Check,
            3 => Self::DownloadWait,
            4 => Self::Download,
            5 => Self::SeedWait,
            6 => Self::Seed,
            other => Self::Unknown(other),
        }
    }
}

impl From<TorrentStatus> for i32 {
    fn from(status: TorrentStatus) -> Self {
        match status {
            TorrentStatus::Paused => 0,
            TorrentStatus::Wait => 1,
            TorrentStatus::Check => 2,
            TorrentStatus::DownloadWait => 3,
            TorrentStatus::Download => 4,
            TorrentStatus::SeedWait => 5,
            TorrentStatus::Seed => 6,
            TorrentStatus::Unknown(code) => code,
        }
    }
}

impl fmt::Display for TorrentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paused => "paused",
            Self::Wait => "queued for check",
            Self::Check => "checking",
            Self::DownloadWait => "queued for download",
            Self::Download => "downloading",
            Self::SeedWait => "queued for seeding",
            Self::Seed => "seeding",
            Self::Unknown(code) => return write!(f, "unknown ({code})"),
        };
        f.write_str(label)
    }
}

/// Torrent information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)] // rationale: these are the field names of the Transmission RPC
pub struct Torrent {
    pub id: i32,

    pub name: String,

    pub status: TorrentStatus,

    pub added_date: i64,

    pub left_until_done: i64,

    pub eta: i64,

    pub upload_ratio: f64,

    pub rate_download: i64,

    pub rate_upload: i64,

    pub download_dir: String,

    pub is_finished: bool,

    pub percent_done: f64,

    pub seed_ratio_mode: i32,

    pub hash_string: String,

    pub error: i32,

    pub error_string: String,

    pub tracker_stats: Vec<TrackerStat>,

    pub files: Vec<File>,
}

/// Announce and scrape history of one tracker for a torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TrackerStat {
    pub announce: String,
    pub announce_state: i32,
    pub download_count: i64,
    pub has_announced: bool,
    pub has_scraped: bool,
    pub host: String,
    pub id: u64,
    pub is_backup: bool,
    pub last_announce_peer_count: i64,
    pub last_announce_result: String,
    pub last_announce_start_time: i64,
    pub last_announce_succeeded: bool,
    pub last_announce_time: i64,
    #[serde(deserialize_with = "bool_or_int")]
    pub last_announce_timed_out: bool,
    pub last_scrape_result: String,
    pub last_scrape_start_time: i64,
    pub last_scrape_succeeded: bool,
    pub last_scrape_time: i64,
    #[serde(deserialize_with = "bool_or_int")]
    pub last_scrape_timed_out: bool,
    pub leecher_count: i64,
    pub next_announce_time: i64,
    pub next_scrape_time: i64,
    pub scrape: String,
    pub scrape_state: i32,
    pub seeder_count: i64,
    pub tier: i32,
}

/// Accepts a JSON bool or an integer flag; older daemons send `0`/`1`.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Int(flag) => flag != 0,
    })
}

/// One file of a torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    /// Path of the file relative to the download directory.
    pub name: String,
    /// Total size in bytes.
    pub length: i64,
    /// Bytes downloaded and verified so far. Never exceeds `length` for well-formed replies.
    pub bytes_completed: i64,
}

impl File {
    /// Completed fraction of the file, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.length <= 0 {
            return 0.0;
        }
        self.bytes_completed as f64 / self.length as f64
    }
}

/// Descriptor returned by the daemon when a torrent was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TorrentAdded {
    /// Info hash of the added torrent.
    pub hash_string: String,
    /// Daemon-assigned ID.
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl TorrentAdded {
    /// Whether the descriptor is empty, i.e. the daemon did not report an added torrent.
    pub fn is_empty(&self) -> bool {
        self.hash_string.is_empty() && self.id == 0 && self.name.is_empty()
    }
}
