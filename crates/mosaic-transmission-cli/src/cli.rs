use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mosaic_transmission_rpc::{DEFAULT_RPC_URL, HttpTransportConfig};

/// Top-level CLI struct for the binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Daemon connection options
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// The operation to run
    #[command(subcommand)]
    pub command: Commands,
}

/// How to reach the daemon.
#[derive(Debug, Clone, Args)]
pub(crate) struct ConnectionArgs {
    /// The Transmission RPC endpoint.
    #[arg(long, env = "TRANSMISSION_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub url: String,

    /// Basic auth user name.
    #[arg(short, long, env = "TRANSMISSION_USERNAME")]
    pub username: Option<String>,

    /// Basic auth password.
    #[arg(short, long, env = "TRANSMISSION_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Session id to send with every request.
    #[arg(long, env = "TRANSMISSION_SESSION_ID")]
    pub session_id: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List all torrents.
    List {
        /// Sort key.
        #[arg(long, value_enum, default_value_t = SortKey::Id)]
        sort: SortKey,

        /// Sort descending.
        #[arg(long, default_value_t = false)]
        reverse: bool,
    },
    /// Show one torrent with its trackers and files.
    Get {
        /// Torrent ID.
        id: i32,
    },
    /// Add a torrent from a magnet link, URL or metafile path.
    Add {
        /// Magnet link, URL, or path to a .torrent file.
        source: String,

        /// Read the metafile locally and upload its content instead of passing the path.
        #[arg(long, default_value_t = false)]
        upload: bool,

        /// Download directory override.
        #[arg(long)]
        download_dir: Option<String>,
    },
    /// Start a torrent.
    Start {
        /// Torrent ID.
        id: i32,
    },
    /// Stop a torrent.
    Stop {
        /// Torrent ID.
        id: i32,
    },
    /// Verify the local data of a torrent.
    Verify {
        /// Torrent ID.
        id: i32,
    },
    /// Remove a torrent.
    Remove {
        /// Torrent ID.
        id: i32,

        /// Delete the downloaded data as well.
        #[arg(long, default_value_t = false)]
        delete_data: bool,
    },
    /// Change properties of a torrent.
    Set {
        /// Torrent ID.
        id: i32,

        /// New download directory.
        #[arg(long)]
        download_dir: Option<String>,

        /// Pause or resume.
        #[arg(long)]
        paused: Option<bool>,

        /// Move the data to a new location.
        #[arg(long)]
        location: Option<String>,
    },
}

impl Commands {
    /// The subcommand name, as typed on the command line.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Get { .. } => "get",
            Self::Add { .. } => "add",
            Self::Start { .. } => "start",
            Self::Stop { .. } => "stop",
            Self::Verify { .. } => "verify",
            Self::Remove { .. } => "remove",
            Self::Set { .. } => "set",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortKey {
    Id,
    Name,
    Added,
}

impl From<ConnectionArgs> for HttpTransportConfig {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            url: args.url,
            username: args.username,
            password: args.password,
            session_id: args.session_id,
            timeout: Duration::from_secs(args.timeout),
        }
    }
}
