//! Guide generation input records
//!
//! Channel and program rows are exchanged with the EPG-serving layer as JSON
//! arrays of strings (4 per channel, 5 or 6 per program), so the named-field
//! structs here serialize to and from those tuple forms. The two program
//! arities are distinct types selected by the caller, never inferred from a
//! value count at generation time.

use serde::{Deserialize, Serialize};

type ChannelTuple = (String, String, String, String);
type ProgramTuple = (String, String, String, String, String);
type ProgramWithIconTuple = (String, String, String, String, String, String);

/// Channel lineup row for guide generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ChannelTuple", into = "ChannelTuple")]
pub struct ChannelRecord {
    /// Channel identifier, becomes `<channel id="...">`
    pub tvg_id: String,
    /// Display name
    pub tvg_name: String,
    /// Logo URL, becomes the channel `<icon src="..."/>`
    pub tvg_logo: String,
    /// Accepted for interchange compatibility; not emitted in the current
    /// channel element shape
    pub epg_desc: String,
}

impl From<ChannelTuple> for ChannelRecord {
    fn from((tvg_id, tvg_name, tvg_logo, epg_desc): ChannelTuple) -> Self {
        Self {
            tvg_id,
            tvg_name,
            tvg_logo,
            epg_desc,
        }
    }
}

impl From<ChannelRecord> for ChannelTuple {
    fn from(c: ChannelRecord) -> Self {
        (c.tvg_id, c.tvg_name, c.tvg_logo, c.epg_desc)
    }
}

/// Program row for guide generation
///
/// Start and stop are opaque strings passed through verbatim; no date
/// parsing or validation happens anywhere in generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProgramTuple", into = "ProgramTuple")]
pub struct ProgramRecord {
    /// Channel this program belongs to, becomes `<programme channel="...">`
    pub tvg_id: String,
    /// Program title
    pub epg_title: String,
    /// Schedule start, verbatim
    pub epg_start: String,
    /// Schedule stop, verbatim
    pub epg_stop: String,
    /// Program description
    pub epg_desc: String,
}

impl From<ProgramTuple> for ProgramRecord {
    fn from((tvg_id, epg_title, epg_start, epg_stop, epg_desc): ProgramTuple) -> Self {
        Self {
            tvg_id,
            epg_title,
            epg_start,
            epg_stop,
            epg_desc,
        }
    }
}

impl From<ProgramRecord> for ProgramTuple {
    fn from(p: ProgramRecord) -> Self {
        (p.tvg_id, p.epg_title, p.epg_start, p.epg_stop, p.epg_desc)
    }
}

/// Program row with a trailing icon URL
///
/// The icon is accepted for interchange compatibility; the current programme
/// element shape does not emit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProgramWithIconTuple", into = "ProgramWithIconTuple")]
pub struct ProgramRecordWithIcon {
    pub tvg_id: String,
    pub epg_title: String,
    pub epg_start: String,
    pub epg_stop: String,
    pub epg_desc: String,
    /// Program icon URL, not emitted
    pub epg_icon: String,
}

impl From<ProgramWithIconTuple> for ProgramRecordWithIcon {
    fn from(
        (tvg_id, epg_title, epg_start, epg_stop, epg_desc, epg_icon): ProgramWithIconTuple,
    ) -> Self {
        Self {
            tvg_id,
            epg_title,
            epg_start,
            epg_stop,
            epg_desc,
            epg_icon,
        }
    }
}

impl From<ProgramRecordWithIcon> for ProgramWithIconTuple {
    fn from(p: ProgramRecordWithIcon) -> Self {
        (
            p.tvg_id,
            p.epg_title,
            p.epg_start,
            p.epg_stop,
            p.epg_desc,
            p.epg_icon,
        )
    }
}

/// Either program arity, so one slice can carry mixed rows
///
/// Untagged so the JSON form stays a bare 5- or 6-element array. The icon
/// variant is declared first: untagged deserialization tries variants in
/// order, and a 6-element row must never lose its icon to the shorter shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpgProgram {
    /// Six-field row with trailing icon URL
    WithIcon(ProgramRecordWithIcon),
    /// Five-field row
    Plain(ProgramRecord),
}

impl From<ProgramRecord> for EpgProgram {
    fn from(p: ProgramRecord) -> Self {
        EpgProgram::Plain(p)
    }
}

impl From<ProgramRecordWithIcon> for EpgProgram {
    fn from(p: ProgramRecordWithIcon) -> Self {
        EpgProgram::WithIcon(p)
    }
}
