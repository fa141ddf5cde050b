//! The request/response envelope of the Transmission RPC protocol.
//!
//! The daemon uses one JSON shape for both directions: a request carries a
//! `method` and `arguments`, a response carries `arguments` and a `result`.
//! [`Command`] is that shape. Request-side fields are set through the
//! mutators on [`Command`] and read back through [`Command::request`];
//! response-side fields are only reachable through [`Command::response`].
//!
//! Every optional argument is an explicit `Option` and is left out of the
//! serialized body when unset, since the daemon treats an absent key
//! differently from an explicit default. The one exception is
//! `torrent-added`, which is always written.

use serde::{Deserialize, Serialize};

use mosaic_transmission_types::{Torrent, TorrentAdded, Torrents};

/// The result string the daemon reports for a successful call.
pub const RESULT_SUCCESS: &str = "success";

/// Every torrent attribute requested by `torrent-get`, so records are never partially populated.
pub const TORRENT_FIELDS: &[&str] = &[
    "id",
    "name",
    "hashString",
    "status",
    "addedDate",
    "leftUntilDone",
    "eta",
    "uploadRatio",
    "rateDownload",
    "rateUpload",
    "downloadDir",
    "isFinished",
    "percentDone",
    "seedRatioMode",
    "error",
    "errorString",
    "trackerStats",
    "files",
];

/// A Transmission RPC envelope, used once for a single request/response exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    #[serde(default)]
    arguments: Arguments,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Arguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fields: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) torrents: Option<Torrents>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ids: Option<Vec<i32>>,

    #[serde(rename = "delete-local-data", skip_serializing_if = "Option::is_none")]
    pub(crate) delete_local_data: Option<bool>,

    #[serde(rename = "download-dir", skip_serializing_if = "Option::is_none")]
    pub(crate) download_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) metainfo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) filename: Option<String>,

    #[serde(rename = "torrent-added")]
    pub(crate) torrent_added: TorrentAdded,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) paused: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<String>,
}

impl Command {
    /// Creates an empty request for `method`.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Default::default()
        }
    }

    /// Creates a request for `method` scoped to a single torrent.
    pub(crate) fn for_torrent(method: impl Into<String>, id: i32) -> Self {
        let mut cmd = Self::new(method);
        cmd.arguments.ids = Some(vec![id]);
        cmd
    }

    pub(crate) fn arguments_mut(&mut self) -> &mut Arguments {
        &mut self.arguments
    }

    /// Overrides the directory the daemon downloads into. Valid on any add or set command.
    pub fn set_download_dir(&mut self, dir: impl Into<String>) -> &mut Self {
        self.arguments.download_dir = Some(dir.into());
        self
    }

    /// Sets whether the torrent should be paused.
    pub fn set_paused(&mut self, paused: bool) -> &mut Self {
        self.arguments.paused = Some(paused);
        self
    }

    /// Sets the new location of the torrent data.
    pub fn set_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.arguments.location = Some(location.into());
        self
    }

    /// Read-only view over the request-side fields.
    pub fn request(&self) -> Request<'_> {
        Request(self)
    }

    /// Read-only view over the response-side fields.
    pub fn response(&self) -> Response<'_> {
        Response(self)
    }

    /// Whether the daemon reported `"success"`.
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(RESULT_SUCCESS)
    }

    /// Consumes a response and returns its torrents, empty when the daemon sent none.
    pub fn into_torrents(self) -> Torrents {
        self.arguments.torrents.unwrap_or_default()
    }

    /// Consumes a response and returns the added-torrent descriptor.
    pub fn into_torrent_added(self) -> TorrentAdded {
        self.arguments.torrent_added
    }

    /// Consumes a response and returns its result string, empty when the daemon sent none.
    pub fn into_result(self) -> String {
        self.result.unwrap_or_default()
    }
}

/// Request-side accessors of a [`Command`].
#[derive(Debug, Clone, Copy)]
pub struct Request<'a>(&'a Command);

impl<'a> Request<'a> {
    /// The RPC method name.
    pub fn method(&self) -> Option<&'a str> {
        self.0.method.as_deref()
    }

    /// The requested torrent fields.
    pub fn fields(&self) -> Option<&'a [String]> {
        self.0.arguments.fields.as_deref()
    }

    /// The targeted torrent IDs.
    pub fn ids(&self) -> Option<&'a [i32]> {
        self.0.arguments.ids.as_deref()
    }

    /// Whether local data should be deleted along with the torrent.
    pub fn delete_local_data(&self) -> Option<bool> {
        self.0.arguments.delete_local_data
    }

    /// The download directory override.
    pub fn download_dir(&self) -> Option<&'a str> {
        self.0.arguments.download_dir.as_deref()
    }

    /// Base64 encoded metafile content.
    pub fn metainfo(&self) -> Option<&'a str> {
        self.0.arguments.metainfo.as_deref()
    }

    /// Filename, URL or magnet link the daemon should resolve.
    pub fn filename(&self) -> Option<&'a str> {
        self.0.arguments.filename.as_deref()
    }

    /// The paused flag.
    pub fn paused(&self) -> Option<bool> {
        self.0.arguments.paused
    }

    /// The relocation path.
    pub fn location(&self) -> Option<&'a str> {
        self.0.arguments.location.as_deref()
    }
}

/// Response-side accessors of a [`Command`].
#[derive(Debug, Clone, Copy)]
pub struct Response<'a>(&'a Command);

impl<'a> Response<'a> {
    /// The daemon's result string.
    pub fn result(&self) -> Option<&'a str> {
        self.0.result.as_deref()
    }

    /// The torrents returned by `torrent-get`.
    pub fn torrents(&self) -> &'a [Torrent] {
        self.0
            .arguments
            .torrents
            .as_ref()
            .map(|torrents| &**torrents)
            .unwrap_or_default()
    }

    /// The descriptor returned by `torrent-add`; empty if nothing was added.
    pub fn torrent_added(&self) -> &'a TorrentAdded {
        &self.0.arguments.torrent_added
    }
}
