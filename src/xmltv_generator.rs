//! XMLTV guide generation
//!
//! Renders channel and program records into the fixed XMLTV template the
//! guide consumers expect, byte for byte: utf-8 prolog, `xmltv.dtd`
//! DOCTYPE, four-space element indentation with eight-space children.
//! Values are written into the template verbatim; see [`generate_xmltv`]
//! for the caller contract.

use tracing::{debug, warn};

use crate::models::{ChannelRecord, EpgProgram};
use crate::utils::url::UrlUtils;

/// Render channel and program records as an XMLTV document.
///
/// The output follows a fixed template: prolog, `xmltv.dtd` DOCTYPE, a
/// `<tv>` root stamped `generator-info-name="IPTV"` and the origin of
/// `base_url`, one `<channel>` per channel record, then one `<programme>`
/// per program record, all in input order. Generation never fails: a
/// `base_url` without a usable origin yields an empty `generator-info-url`
/// attribute and a logged warning.
///
/// Values are inserted with no XML entity escaping, so callers must supply
/// strings free of unescaped `<`, `>`, and `&` for the output to stay well
/// formed. The channel `epg_desc` and program `epg_icon` fields are
/// accepted but not emitted by the current element shapes.
pub fn generate_xmltv(
    channels: &[ChannelRecord],
    programs: &[EpgProgram],
    base_url: &str,
) -> String {
    let origin = UrlUtils::origin(base_url).unwrap_or_else(|| {
        warn!(
            "Base URL {:?} has no usable origin, stamping an empty generator-info-url",
            base_url
        );
        String::new()
    });

    let mut xmltv = String::new();

    // XMLTV header
    xmltv.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    xmltv.push_str("<!DOCTYPE tv SYSTEM \"xmltv.dtd\">\n");
    xmltv.push_str(&format!(
        "<tv generator-info-name=\"IPTV\" generator-info-url=\"{origin}\">\n"
    ));

    // Channel lineup
    for channel in channels {
        xmltv.push_str(&format!("    <channel id=\"{}\">\n", channel.tvg_id));
        xmltv.push_str(&format!(
            "        <display-name>{}</display-name>\n",
            channel.tvg_name
        ));
        xmltv.push_str(&format!("        <icon src=\"{}\"/>\n", channel.tvg_logo));
        xmltv.push_str("    </channel>\n");
    }

    // Schedule
    for program in programs {
        let (tvg_id, epg_title, epg_start, epg_stop, epg_desc) = match program {
            EpgProgram::WithIcon(p) => {
                (&p.tvg_id, &p.epg_title, &p.epg_start, &p.epg_stop, &p.epg_desc)
            }
            EpgProgram::Plain(p) => {
                (&p.tvg_id, &p.epg_title, &p.epg_start, &p.epg_stop, &p.epg_desc)
            }
        };

        xmltv.push_str(&format!(
            "    <programme channel=\"{tvg_id}\" start=\"{epg_start}\" stop=\"{epg_stop}\">\n"
        ));
        xmltv.push_str(&format!("        <title lang=\"en\">{epg_title}</title>\n"));
        xmltv.push_str(&format!("        <desc lang=\"en\">{epg_desc}</desc>\n"));
        xmltv.push_str("    </programme>\n");
    }

    xmltv.push_str("</tv>\n");

    debug!(
        "Generated XMLTV with {} channels and {} programmes",
        channels.len(),
        programs.len()
    );

    xmltv
}
