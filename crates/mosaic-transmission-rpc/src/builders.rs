//! Builders producing ready-to-execute [`Command`]s for each supported operation.

use std::{fs, path::Path};

use base64::{Engine as _, engine::general_purpose};
use tracing::debug;

use mosaic_transmission_types::TransmissionError;

use crate::command::{Command, TORRENT_FIELDS};

/// `torrent-get` method name.
pub const METHOD_GET: &str = "torrent-get";
/// `torrent-add` method name.
pub const METHOD_ADD: &str = "torrent-add";
/// `torrent-set` method name.
pub const METHOD_SET: &str = "torrent-set";
/// `torrent-remove` method name.
pub const METHOD_REMOVE: &str = "torrent-remove";
/// `torrent-start` method name.
pub const METHOD_START: &str = "torrent-start";
/// `torrent-stop` method name.
pub const METHOD_STOP: &str = "torrent-stop";
/// `torrent-verify` method name.
pub const METHOD_VERIFY: &str = "torrent-verify";

/// Lists every torrent, requesting the complete field set.
pub fn new_get_torrents_cmd() -> Command {
    let mut cmd = Command::new(METHOD_GET);
    cmd.arguments_mut().fields = Some(TORRENT_FIELDS.iter().map(|f| f.to_string()).collect());
    cmd
}

/// Fetches a single torrent by ID, requesting the complete field set.
pub fn new_get_torrent_cmd(id: i32) -> Command {
    let mut cmd = new_get_torrents_cmd();
    cmd.arguments_mut().ids = Some(vec![id]);
    cmd
}

/// Base `torrent-add` command without a source.
pub fn new_add_cmd() -> Command {
    Command::new(METHOD_ADD)
}

/// Adds a torrent from a magnet link.
pub fn new_add_cmd_by_magnet(magnet_link: impl Into<String>) -> Command {
    with_filename(magnet_link.into())
}

/// Adds a torrent from a URL the daemon downloads the metafile from.
pub fn new_add_cmd_by_url(url: impl Into<String>) -> Command {
    with_filename(url.into())
}

/// Adds a torrent from a metafile path on the daemon's host.
pub fn new_add_cmd_by_filename(filename: impl Into<String>) -> Command {
    with_filename(filename.into())
}

/// Adds a torrent by uploading the content of a local metafile.
///
/// The file is read here and embedded as base64; no command is built if it
/// cannot be read.
pub fn new_add_cmd_by_file(file: impl AsRef<Path>) -> Result<Command, TransmissionError> {
    let metainfo = encode_file(file)?;
    let mut cmd = new_add_cmd();
    cmd.arguments_mut().metainfo = Some(metainfo);
    Ok(cmd)
}

/// Changes properties of one torrent. Augment with [`Command::set_download_dir`],
/// [`Command::set_paused`] or [`Command::set_location`].
pub fn new_set_cmd(id: i32) -> Command {
    Command::for_torrent(METHOD_SET, id)
}

/// Removes one torrent, and its downloaded data if `delete_local_data` is set.
pub fn new_del_cmd(id: i32, delete_local_data: bool) -> Command {
    let mut cmd = Command::for_torrent(METHOD_REMOVE, id);
    cmd.arguments_mut().delete_local_data = Some(delete_local_data);
    cmd
}

/// Starts one torrent.
pub fn new_start_cmd(id: i32) -> Command {
    Command::for_torrent(METHOD_START, id)
}

/// Stops one torrent.
pub fn new_stop_cmd(id: i32) -> Command {
    Command::for_torrent(METHOD_STOP, id)
}

/// Verifies the local data of one torrent.
pub fn new_verify_cmd(id: i32) -> Command {
    Command::for_torrent(METHOD_VERIFY, id)
}

/// Reads a file and returns its content as standard, padded base64.
pub fn encode_file(file: impl AsRef<Path>) -> Result<String, TransmissionError> {
    let path = file.as_ref();
    let data = fs::read(path).map_err(|source| TransmissionError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Encoding {} bytes from {}", data.len(), path.display());
    Ok(general_purpose::STANDARD.encode(data))
}

fn with_filename(filename: String) -> Command {
    let mut cmd = new_add_cmd();
    cmd.arguments_mut().filename = Some(filename);
    cmd
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn get_torrents_requests_every_field() {
        let cmd = new_get_torrents_cmd();
        let request = cmd.request();

        assert_eq!(request.method(), Some("torrent-get"));
        assert_eq!(request.fields().unwrap().len(), TORRENT_FIELDS.len());
        assert!(request.fields().unwrap().iter().any(|f| f == "trackerStats"));
        assert_eq!(request.ids(), None);
    }

    #[test]
    fn get_torrent_is_scoped_to_one_id() {
        let cmd = new_get_torrent_cmd(42);
        assert_eq!(cmd.request().method(), Some("torrent-get"));
        assert_eq!(cmd.request().ids(), Some(&[42][..]));
        assert!(cmd.request().fields().is_some());
    }

    #[test]
    fn add_variants_populate_filename_only() {
        let magnet = new_add_cmd_by_magnet("magnet:?xt=urn:btih:abc");
        let url = new_add_cmd_by_url("https://example.org/a.torrent");
        let filename = new_add_cmd_by_filename("/srv/a.torrent");

        for (cmd, expected) in [
            (&magnet, "magnet:?xt=urn:btih:abc"),
            (&url, "https://example.org/a.torrent"),
            (&filename, "/srv/a.torrent"),
        ] {
            assert_eq!(cmd.request().method(), Some("torrent-add"));
            assert_eq!(cmd.request().filename(), Some(expected));
            assert_eq!(cmd.request().metainfo(), None);
        }
    }

    #[test]
    fn add_by_file_embeds_base64_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"d8:announce3:urle").unwrap();

        let cmd = new_add_cmd_by_file(file.path()).unwrap();

        assert_eq!(cmd.request().method(), Some("torrent-add"));
        assert_eq!(cmd.request().metainfo(), Some("ZDg6YW5ub3VuY2UzOnVybGU="));
        assert_eq!(cmd.request().filename(), None);
    }

    #[test]
    fn add_by_file_fails_on_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.torrent");

        match new_add_cmd_by_file(&missing) {
            Err(TransmissionError::FileSystem { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }

    #[test]
    fn download_dir_can_be_layered_on_add() {
        let mut cmd = new_add_cmd_by_magnet("magnet:?xt=urn:btih:abc");
        cmd.set_download_dir("/downloads/linux");
        assert_eq!(cmd.request().download_dir(), Some("/downloads/linux"));
    }

    #[test]
    fn set_command_is_scoped_and_augmentable() {
        let mut cmd = new_set_cmd(3);
        assert_eq!(cmd.request().method(), Some("torrent-set"));
        assert_eq!(cmd.request().paused(), None);

        cmd.set_paused(true).set_location("/mnt/media");
        assert_eq!(cmd.request().ids(), Some(&[3][..]));
        assert_eq!(cmd.request().paused(), Some(true));
        assert_eq!(cmd.request().location(), Some("/mnt/media"));
    }

    #[test]
    fn delete_command_carries_flag() {
        let keep = new_del_cmd(7, false);
        assert_eq!(keep.request().method(), Some("torrent-remove"));
        assert_eq!(keep.request().ids(), Some(&[7][..]));
        assert_eq!(keep.request().delete_local_data(), Some(false));

        let purge = new_del_cmd(7, true);
        assert_eq!(purge.request().delete_local_data(), Some(true));
    }

    #[test]
    fn simple_actions_use_documented_methods() {
        for (cmd, method) in [
            (new_start_cmd(5), "torrent-start"),
            (new_stop_cmd(5), "torrent-stop"),
            (new_verify_cmd(5), "torrent-verify"),
        ] {
            assert_eq!(cmd.request().method(), Some(method));
            assert_eq!(cmd.request().ids(), Some(&[5][..]));
            assert_eq!(cmd.request().fields(), None);
        }
    }
}
