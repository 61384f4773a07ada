//! M3U playlist rendering
//!
//! A pure, single-pass join of the compiled-in catalog against the resolved
//! directory. Catalog order is output order; attribute values are copied
//! verbatim with no escaping.

use tracing::debug;

use crate::models::{ChannelDirectory, ChannelEntry};

/// Render the playlist document for `catalog` against `directory`.
///
/// Each catalog entry is matched by linear scan against the directory
/// (first `id` match wins). Entries with no match, or whose match carries
/// an empty stream URL, produce no output.
pub fn render_playlist(
    epg_url: &str,
    catalog: &[ChannelEntry],
    directory: &ChannelDirectory,
) -> String {
    let mut m3u = format!("#EXTM3U x-tvg-url=\"{}\"\n", epg_url);

    for entry in catalog {
        let Some(channel) = directory.dt.iter().find(|c| c.id == entry.upstream_id) else {
            debug!(
                key = entry.key,
                upstream_id = entry.upstream_id,
                "no upstream channel for catalog entry"
            );
            continue;
        };
        if channel.channel_url.is_empty() {
            debug!(key = entry.key, "upstream channel carries no stream url");
            continue;
        }

        m3u.push_str(&format!(
            "#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}\n",
            entry.tvg_id, entry.tvg_name, entry.logo_url, entry.group_title, entry.display_name
        ));
        m3u.push_str(&format!("{}\n\n", channel.channel_url));
    }

    m3u
}

/// Degraded output for failed resolutions. Playlist clients still receive a
/// document that begins with `#EXTM3U`.
pub fn error_playlist(reason: &str) -> String {
    format!("#EXTM3U\n# Error: {}\n", reason)
}
