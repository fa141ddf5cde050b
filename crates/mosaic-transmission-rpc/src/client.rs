//! Transmission RPC executor.

use tracing::{debug, warn};

use mosaic_transmission_types::{
    Torrent, TorrentAdded, TorrentControl, Torrents, TransmissionError,
};

use crate::builders::{
    new_add_cmd_by_filename, new_del_cmd, new_get_torrent_cmd, new_get_torrents_cmd,
    new_start_cmd, new_stop_cmd, new_verify_cmd,
};
use crate::command::Command;
use crate::http::{HttpTransport, HttpTransportConfig};
use crate::transport::Transport;


/// TransmissionClient executes [`Command`]s against a daemon through a [`Transport`].
///
/// The client keeps no state between calls; concurrent calls are fine as
/// long as the transport allows them.
#[allow(missing_debug_implementations)]
pub struct TransmissionClient<T: Transport = HttpTransport> {
    transport: T,
}

impl TransmissionClient {
    /// Create a new TransmissionClient talking HTTP to the configured endpoint.
    pub fn try_new(config: HttpTransportConfig) -> Result<Self, TransmissionError> {
        debug!("Creating Transmission client for {:?}", config);
        let transport = HttpTransport::new(config)?;
        Ok(Self { transport })
    }
}

impl<T: Transport> TransmissionClient<T> {
    /// Create a TransmissionClient over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Serializes `cmd`, delivers it, and decodes the reply into a fresh [`Command`].
    pub async fn execute(&self, cmd: &Command) -> Result<Command, TransmissionError> {
        let method = cmd.request().method().unwrap_or_default();
        let body = serde_json::to_string(cmd).map_err(TransmissionError::Serialize)?;
        debug!("Sending {method} ({} bytes)", body.len());

        let output = self.transport.post(body).await?;
        let response: Command =
            serde_json::from_slice(&output).map_err(TransmissionError::Deserialize)?;

        let result = response.response().result();
        if response.is_success() {
            debug!("{method} returned {result:?}");
        } else {
            warn!("{method} did not succeed: {result:?}");
        }
        Ok(response)
    }

    /// Executes an add command and returns only the added-torrent descriptor.
    pub async fn execute_add(&self, cmd: &Command) -> Result<TorrentAdded, TransmissionError> {
        let response = self.execute(cmd).await?;
        let added = response.into_torrent_added();
        debug!("Added {added:?}");
        Ok(added)
    }

    /// Lists every torrent in response order.
    pub async fn get_torrents(&self) -> Result<Torrents, TransmissionError> {
        let response = self.execute(&new_get_torrents_cmd()).await?;
        Ok(response.into_torrents())
    }

    /// Gets one torrent by ID. Zero or several matches are both reported as
    /// [`TransmissionError::NoResults`].
    pub async fn get_torrent(&self, id: i32) -> Result<Torrent, TransmissionError> {
        let torrents = self
            .execute(&new_get_torrent_cmd(id))
            .await?
            .into_torrents()
            .into_inner();

        let count = torrents.len();
        let mut torrents = torrents.into_iter();
        match (torrents.next(), torrents.next()) {
            (Some(torrent), None) => Ok(torrent),
            _ => {
                debug!("Expected one torrent for ID {id}, got {count}");
                Err(TransmissionError::NoResults { count })
            }
        }
    }

    /// Starts a torrent and returns the daemon's result string.
    pub async fn start_torrent(&self, id: i32) -> Result<String, TransmissionError> {
        self.send_simple_command(new_start_cmd(id)).await
    }

    /// Stops a torrent and returns the daemon's result string.
    pub async fn stop_torrent(&self, id: i32) -> Result<String, TransmissionError> {
        self.send_simple_command(new_stop_cmd(id)).await
    }

    /// Verifies a torrent and returns the daemon's result string.
    pub async fn verify_torrent(&self, id: i32) -> Result<String, TransmissionError> {
        self.send_simple_command(new_verify_cmd(id)).await
    }

    /// Removes a torrent and returns the daemon's result string.
    pub async fn remove_torrent(
        &self,
        id: i32,
        delete_local_data: bool,
    ) -> Result<String, TransmissionError> {
        self.send_simple_command(new_del_cmd(id, delete_local_data)).await
    }

    async fn send_simple_command(&self, cmd: Command) -> Result<String, TransmissionError> {
        let response = self.execute(&cmd).await?;
        Ok(response.into_result())
    }
}

impl<T: Transport> TorrentControl for TransmissionClient<T> {
    async fn list(&self) -> Result<Torrents, TransmissionError> {
        self.get_torrents().await
    }

    async fn get(&self, id: i32) -> Result<Torrent, TransmissionError> {
        self.get_torrent(id).await
    }

    async fn add(&self, filename: &str) -> Result<TorrentAdded, TransmissionError> {
        self.execute_add(&new_add_cmd_by_filename(filename)).await
    }

    async fn start(&self, id: i32) -> Result<String, TransmissionError> {
        self.start_torrent(id).await
    }

    async fn stop(&self, id: i32) -> Result<String, TransmissionError> {
        self.stop_torrent(id).await
    }

    async fn verify(&self, id: i32) -> Result<String, TransmissionError> {
        self.verify_torrent(id).await
    }

    async fn remove(
        &self,
        id: i32,
        delete_local_data: bool,
    ) -> Result<String, TransmissionError> {
        self.remove_torrent(id, delete_local_data).await
    }
}
