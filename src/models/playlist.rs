//! Parsed playlist document model
//!
//! A playlist is a header carrying two guide URLs followed by stream entries.
//! Entry fields are sparse: a field exists only if its key actually matched
//! in the entry's two source lines, and serialized JSON omits absent fields
//! entirely rather than writing null or empty strings.

use serde::{Deserialize, Serialize};

/// A parsed playlist: the header guide URLs plus the ordered stream entries
///
/// `streams` preserves source order, which is the channel display order the
/// provider intended. The two header URLs are required fields whose values
/// may legitimately be empty strings (`url-tvg=""` parses, it is not an
/// absent field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDocument {
    /// URL of the external TV-guide XML resource named by the header
    pub url_tvg: String,
    /// Secondary guide URL named by the same header
    pub x_tvg_url: String,
    /// Stream entries in source order
    pub streams: Vec<StreamEntry>,
}

impl PlaylistDocument {
    /// Render the document as a JSON string
    ///
    /// This is the interchange form the playlist-serving layer stores and
    /// returns. Absent entry fields do not appear in the output at all.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One playlist row: a channel's metadata plus its playable URL
///
/// Every field is optional. `None` means the key never appeared in the
/// entry's two source lines; consumers must treat a missing key as
/// "unknown", never as "empty". No field is ever populated with an empty
/// string by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    /// Duration marker from `#EXTINF:<n>`. Only an unsigned digit run is
    /// recognized, so the conventional `-1` live-stream marker leaves this
    /// unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_inf: Option<u32>,

    /// Provider channel identifier, serialized under the `channelID` key
    #[serde(rename = "channelID", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Channel number, kept as text (non-numeric values occur in the wild)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_chno: Option<String>,

    /// Guide channel name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_name: Option<String>,

    /// Guide channel identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_id: Option<String>,

    /// Logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_logo: Option<String>,

    /// Category or grouping label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,

    /// Human-readable name after the final comma of the `#EXTINF` line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chan_name: Option<String>,

    /// Playable URL (`http://<ipv4>:<port>/stream/...`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}
