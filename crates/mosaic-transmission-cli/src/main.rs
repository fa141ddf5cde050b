//! # Mosaic Transmission CLI
//!
//! ## Usage
//!
//! ```sh,ignore
//! TRANSMISSION_RPC_URL=http://localhost:9091/transmission/rpc \
//!     cargo run --release -p mosaic-transmission-cli -- list --sort name
//! ```

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mosaic_transmission_rpc::{
    Command, TransmissionClient, TransmissionError, Transport, new_add_cmd_by_file,
    new_add_cmd_by_filename, new_add_cmd_by_magnet, new_add_cmd_by_url, new_set_cmd,
};

mod cli;
mod output;

use cli::{Cli, Commands, SortKey};

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Picks the add variant matching the shape of `source`.
fn add_command(source: &str, upload: bool) -> Result<Command, TransmissionError> {
    if upload {
        return new_add_cmd_by_file(source);
    }
    let cmd = if source.starts_with("magnet:") {
        new_add_cmd_by_magnet(source)
    } else if source.starts_with("http://") || source.starts_with("https://") {
        new_add_cmd_by_url(source)
    } else {
        new_add_cmd_by_filename(source)
    };
    Ok(cmd)
}

/// Runs one subcommand and logs the failure, if any, before handing it back.
async fn run_logged<T: Transport>(
    client: &TransmissionClient<T>,
    command: Commands,
) -> Result<(), TransmissionError> {
    let name = command.name();
    run(client, command)
        .await
        .inspect_err(|e| error!("Failed to {}: {}", name, e))
}

/// Runs one subcommand against the daemon.
async fn run<T: Transport>(
    client: &TransmissionClient<T>,
    command: Commands,
) -> Result<(), TransmissionError> {
    match command {
        Commands::List { sort, reverse } => {
            let mut torrents = client.get_torrents().await?;
            match sort {
                SortKey::Id => torrents.sort_by_id(reverse),
                SortKey::Name => torrents.sort_by_name(reverse),
                SortKey::Added => torrents.sort_by_added_date(reverse),
            }
            output::render_torrent_list(&torrents);
        }
        Commands::Get { id } => {
            let torrent = client.get_torrent(id).await?;
            output::render_torrent(&torrent);
        }
        Commands::Add {
            source,
            upload,
            download_dir,
        } => {
            let mut cmd = add_command(&source, upload)?;
            if let Some(dir) = download_dir {
                cmd.set_download_dir(dir);
            }
            let added = client.execute_add(&cmd).await?;
            output::render_added(&added);
        }
        Commands::Start { id } => {
            let result = client.start_torrent(id).await?;
            info!("start {id}: {result}");
        }
        Commands::Stop { id } => {
            let result = client.stop_torrent(id).await?;
            info!("stop {id}: {result}");
        }
        Commands::Verify { id } => {
            let result = client.verify_torrent(id).await?;
            info!("verify {id}: {result}");
        }
        Commands::Remove { id, delete_data } => {
            let result = client.remove_torrent(id, delete_data).await?;
            info!("remove {id}: {result}");
        }
        Commands::Set {
            id,
            download_dir,
            paused,
            location,
        } => {
            let mut cmd = new_set_cmd(id);
            if let Some(dir) = download_dir {
                cmd.set_download_dir(dir);
            }
            if let Some(paused) = paused {
                cmd.set_paused(paused);
            }
            if let Some(location) = location {
                cmd.set_location(location);
            }
            let result = client.execute(&cmd).await?.into_result();
            info!("set {id}: {result}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let client = TransmissionClient::try_new(cli.connection.into())?;

    run_logged(&client, cli.command).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use mosaic_transmission_rpc::TransportError;

    use super::*;

    struct Unreachable;

    impl Transport for Unreachable {
        async fn post(&self, _body: String) -> Result<Vec<u8>, TransportError> {
            Err(TransportError::Network("connection refused".into()))
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failed_command_is_logged_at_error() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = TransmissionClient::with_transport(Unreachable);
        let result = run_logged(&client, Commands::Start { id: 5 }).await;

        assert!(matches!(
            result,
            Err(TransmissionError::Transport(TransportError::Network(_)))
        ));
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("Failed to start"), "{logs}");
        assert!(logs.contains("connection refused"), "{logs}");
    }

    #[test]
    fn add_command_picks_variant_by_source() {
        let magnet = add_command("magnet:?xt=urn:btih:abc", false).unwrap();
        assert_eq!(magnet.request().filename(), Some("magnet:?xt=urn:btih:abc"));

        let url = add_command("https://example.org/a.torrent", false).unwrap();
        assert_eq!(url.request().filename(), Some("https://example.org/a.torrent"));

        let path = add_command("/srv/a.torrent", false).unwrap();
        assert_eq!(path.request().filename(), Some("/srv/a.torrent"));
        assert_eq!(path.request().metainfo(), None);
    }

    #[test]
    fn upload_of_missing_file_fails() {
        assert!(matches!(
            add_command("/definitely/not/here.torrent", true),
            Err(TransmissionError::FileSystem { .. })
        ));
    }
}
