//! Playlist parser for the extended M3U variant
//!
//! The format is rigid: one `#EXTM3U` header line naming two guide URLs,
//! then strictly alternating metadata/URL line pairs. Each pair is scanned
//! as a single two-line window with one multi-alternative pattern, so
//! attribute order inside the window does not matter and keys that never
//! match simply stay absent from the entry.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::errors::{FormatError, FormatResult};
use crate::models::{PlaylistDocument, StreamEntry};

/// Header line shape. Searched, not anchored, and both captures are greedy,
/// so a value containing quotes is swallowed whole rather than rejected.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#EXTM3U url-tvg="(?P<url_tvg>.*)" x-tvg-url="(?P<x_tvg_url>.*)""#)
        .expect("header pattern is valid")
});

/// One alternation over a metadata/URL window. Every group is independently
/// optional; a quoted attribute only matches with a non-empty value.
static ENTRY_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
          \#EXTINF:(?P<ext_inf>\d+)
        | channelID="(?P<channel_id>[^"]+)"
        | tvg-chno="(?P<tvg_chno>[^"]+)"
        | tvg-name="(?P<tvg_name>[^"]+)"
        | tvg-id="(?P<tvg_id>[^"]+)"
        | tvg-logo="(?P<tvg_logo>[^"]+)"
        | group-title="(?P<group_title>[^"]+)"
        | ,(?P<chan_name>.*)
        | (?P<stream_url>http://\d+\.\d+\.\d+\.\d+:\d+/stream/.*)
        "#,
    )
    .expect("entry pattern is valid")
});

/// Parse extended-M3U playlist text into a structured document.
///
/// The first line must carry the header with its two guide URLs; anything
/// else fails with [`FormatError::MalformedHeader`] and no entries are
/// attempted. The remaining lines are consumed as (metadata, URL) pairs in
/// order. Body irregularities never fail: an odd trailing line is dropped,
/// and a pair in which nothing matches still yields an (empty) entry so the
/// pair count is preserved.
pub fn parse_playlist(source: &str) -> FormatResult<PlaylistDocument> {
    let mut lines = source.lines();
    let header = lines.next().ok_or(FormatError::EmptySource)?;

    let caps = HEADER
        .captures(header)
        .ok_or_else(|| FormatError::malformed_header(header))?;
    let url_tvg = caps["url_tvg"].to_string();
    let x_tvg_url = caps["x_tvg_url"].to_string();

    let body: Vec<&str> = lines.collect();
    if body.len() % 2 != 0
        && let Some(orphan) = body.last()
    {
        debug!("Dropping unpaired trailing line: {:?}", orphan);
    }

    let streams: Vec<StreamEntry> = body
        .chunks_exact(2)
        .map(|pair| parse_entry_window(&format!("{}\n{}", pair[0], pair[1])))
        .collect();

    debug!("Parsed playlist with {} stream entries", streams.len());

    Ok(PlaylistDocument {
        url_tvg,
        x_tvg_url,
        streams,
    })
}

/// Collect every matching field from one two-line window into a sparse entry.
///
/// If a key matches more than once, the last non-empty match wins.
fn parse_entry_window(window: &str) -> StreamEntry {
    let mut entry = StreamEntry::default();

    for caps in ENTRY_FIELDS.captures_iter(window) {
        if let Some(m) = caps.name("ext_inf")
            && let Ok(duration) = m.as_str().parse()
        {
            entry.ext_inf = Some(duration);
        }
        if let Some(value) = non_empty(&caps, "channel_id") {
            entry.channel_id = Some(value);
        }
        if let Some(value) = non_empty(&caps, "tvg_chno") {
            entry.tvg_chno = Some(value);
        }
        if let Some(value) = non_empty(&caps, "tvg_name") {
            entry.tvg_name = Some(value);
        }
        if let Some(value) = non_empty(&caps, "tvg_id") {
            entry.tvg_id = Some(value);
        }
        if let Some(value) = non_empty(&caps, "tvg_logo") {
            entry.tvg_logo = Some(value);
        }
        if let Some(value) = non_empty(&caps, "group_title") {
            entry.group_title = Some(value);
        }
        if let Some(value) = non_empty(&caps, "chan_name") {
            entry.chan_name = Some(value);
        }
        if let Some(value) = non_empty(&caps, "stream_url") {
            entry.stream_url = Some(value);
        }
    }

    entry
}

/// A capture counts only when present and non-empty; empty matches must
/// leave the field absent, never set it to an empty string.
fn non_empty(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
