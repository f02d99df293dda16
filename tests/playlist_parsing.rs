/*!
 * End-to-end playlist parsing tests.
 *
 * These tests feed realistic multi-entry playlist text through the public
 * parse entry point and assert the contract the playlist-serving layer
 * depends on:
 *
 * 1. Header guide URLs are captured verbatim.
 * 2. An entry keeps every field that matched in its line pair and omits
 *    every field that did not, never substituting empty strings.
 * 3. Entry count and order follow the source line pairs; an odd trailing
 *    line is dropped rather than erroring.
 * 4. Only a bad header fails, and it fails before any entry is read.
 * 5. The JSON form omits absent fields and uses the `channelID` key.
 */

use m3u_epg::errors::FormatError;
use m3u_epg::m3u_parser::parse_playlist;
use m3u_epg::models::PlaylistDocument;

/// Three entries of decreasing attribute coverage, as a provider would
/// actually serve them: a fully tagged channel, a partially tagged one, and
/// one carrying only a number, a name, and its URL.
const SAMPLE: &str = r#"#EXTM3U url-tvg="http://epg.example/tvg.xml" x-tvg-url="http://epg.example/tvg-alt.xml"
#EXTINF:0 channelID="101" tvg-chno="1" tvg-name="BBC One" tvg-id="bbc1.uk" tvg-logo="http://logos.example/bbc1.png" group-title="Entertainment",BBC One
http://203.0.113.10:8080/stream/101.ts
#EXTINF:0 channelID="102" tvg-name="BBC Two" group-title="Entertainment",BBC Two
http://203.0.113.10:8080/stream/102.ts
#EXTINF:0 tvg-chno="9" tvg-name="Shop 24",Shop 24
http://203.0.113.10:8080/stream/901.ts"#;

#[test]
fn test_header_guide_urls_are_captured_verbatim() {
    let doc = parse_playlist(SAMPLE).unwrap();
    assert_eq!(doc.url_tvg, "http://epg.example/tvg.xml");
    assert_eq!(doc.x_tvg_url, "http://epg.example/tvg-alt.xml");
}

#[test]
fn test_fully_tagged_entry_carries_all_nine_fields() {
    let doc = parse_playlist(SAMPLE).unwrap();
    let entry = &doc.streams[0];

    assert_eq!(entry.ext_inf, Some(0));
    assert_eq!(entry.channel_id.as_deref(), Some("101"));
    assert_eq!(entry.tvg_chno.as_deref(), Some("1"));
    assert_eq!(entry.tvg_name.as_deref(), Some("BBC One"));
    assert_eq!(entry.tvg_id.as_deref(), Some("bbc1.uk"));
    assert_eq!(
        entry.tvg_logo.as_deref(),
        Some("http://logos.example/bbc1.png")
    );
    assert_eq!(entry.group_title.as_deref(), Some("Entertainment"));
    assert_eq!(entry.chan_name.as_deref(), Some("BBC One"));
    assert_eq!(
        entry.stream_url.as_deref(),
        Some("http://203.0.113.10:8080/stream/101.ts")
    );
}

#[test]
fn test_partially_tagged_entries_omit_unmatched_fields() {
    let doc = parse_playlist(SAMPLE).unwrap();

    let partial = &doc.streams[1];
    assert_eq!(partial.channel_id.as_deref(), Some("102"));
    assert_eq!(partial.tvg_name.as_deref(), Some("BBC Two"));
    assert_eq!(partial.tvg_chno, None, "absent keys must stay absent");
    assert_eq!(partial.tvg_id, None);
    assert_eq!(partial.tvg_logo, None);

    let minimal = &doc.streams[2];
    assert_eq!(minimal.tvg_chno.as_deref(), Some("9"));
    assert_eq!(minimal.chan_name.as_deref(), Some("Shop 24"));
    assert_eq!(minimal.channel_id, None);
    assert_eq!(minimal.group_title, None);
    assert_eq!(
        minimal.stream_url.as_deref(),
        Some("http://203.0.113.10:8080/stream/901.ts")
    );
}

#[test]
fn test_entry_count_and_order_follow_line_pairs() {
    let doc = parse_playlist(SAMPLE).unwrap();
    assert_eq!(doc.streams.len(), 3);

    let names: Vec<_> = doc
        .streams
        .iter()
        .map(|s| s.tvg_name.as_deref().unwrap())
        .collect();
    assert_eq!(names, ["BBC One", "BBC Two", "Shop 24"]);
}

#[test]
fn test_trailing_orphan_line_is_dropped_not_an_error() {
    let with_orphan = format!("{SAMPLE}\n#EXTINF:0 tvg-name=\"Orphan\",Orphan");
    let doc = parse_playlist(&with_orphan).unwrap();

    assert_eq!(doc.streams.len(), 3, "orphan line must not form an entry");
    assert!(
        doc.streams
            .iter()
            .all(|s| s.tvg_name.as_deref() != Some("Orphan"))
    );
}

#[test]
fn test_malformed_header_rejects_whole_document() {
    let bad = "#EXTM3U\nhttp://203.0.113.10:8080/stream/1.ts";
    match parse_playlist(bad) {
        Err(FormatError::MalformedHeader { line }) => assert_eq!(line, "#EXTM3U"),
        other => panic!("expected a malformed-header failure, got {other:?}"),
    }

    assert!(parse_playlist("not a playlist at all").is_err());
    assert_eq!(parse_playlist("").unwrap_err(), FormatError::EmptySource);
}

#[test]
fn test_json_form_omits_absent_fields_and_renames_channel_id() {
    let doc = parse_playlist(SAMPLE).unwrap();
    let json = doc.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["url_tvg"], "http://epg.example/tvg.xml");
    assert_eq!(value["streams"][0]["channelID"], "101");
    assert_eq!(value["streams"][0]["ext_inf"], 0);

    let minimal = value["streams"][2].as_object().unwrap();
    assert!(!minimal.contains_key("channelID"));
    assert!(!minimal.contains_key("tvg_logo"));
    assert!(minimal.contains_key("tvg_chno"));
}

#[test]
fn test_document_round_trips_through_json() {
    let doc = parse_playlist(SAMPLE).unwrap();
    let json = doc.to_json().unwrap();

    let restored: PlaylistDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
}
