//! Plain-text renderers for torrent snapshots.

use mosaic_transmission_rpc::{Torrent, TorrentAdded, Torrents};

pub(crate) fn render_torrent_list(torrents: &Torrents) {
    println!("{:>5} {:<20} {:>7} {:>9} NAME", "ID", "STATUS", "DONE", "ETA");
    for torrent in torrents {
        println!("{}", torrent_row(torrent));
    }
}

pub(crate) fn render_torrent(torrent: &Torrent) {
    println!("{}", torrent_row(torrent));
    println!("  hash:     {}", torrent.hash_string);
    println!("  location: {}", torrent.download_dir);
    println!("  ratio:    {:.2}", torrent.upload_ratio);
    if torrent.error != 0 {
        println!("  error:    {} ({})", torrent.error_string, torrent.error);
    }
    for tracker in &torrent.tracker_stats {
        println!(
            "  tracker {}: {} seeders, {} leechers, last announce: {}",
            tracker.host, tracker.seeder_count, tracker.leecher_count, tracker.last_announce_result
        );
    }
    for file in &torrent.files {
        println!("  {:>6.1}% {}", file.progress() * 100.0, file.name);
    }
}

pub(crate) fn render_added(added: &TorrentAdded) {
    if added.is_empty() {
        println!("daemon did not report an added torrent");
    } else {
        println!("added {} {} ({})", added.id, added.name, added.hash_string);
    }
}

fn torrent_row(torrent: &Torrent) -> String {
    format!(
        "{:>5} {:<20} {:>6.1}% {:>9} {}",
        torrent.id,
        torrent.status.to_string(),
        torrent.percent_done * 100.0,
        format_eta(torrent.eta),
        torrent.name
    )
}

/// The daemon reports -1 when no estimate is available and -2 when the ETA is unknown.
fn format_eta(eta: i64) -> String {
    if eta < 0 {
        return "-".to_string();
    }
    let (hours, minutes, seconds) = (eta / 3600, (eta % 3600) / 60, eta % 60);
    if hours > 0 {
        format!("{hours}h{minutes:02}m")
    } else {
        format!("{minutes}m{seconds:02}s")
    }
}
