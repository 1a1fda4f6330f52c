/*!
 * Tests for header building and document assembly
 */

use subfx::document::header::style_row;
use subfx::document::{build_header, Document, Event, Segment, Tag, EVENTS_FORMAT};
use subfx::style::{Canvas, StyleConfig};

#[test]
fn test_buildHeader_shouldDeclareCanvasAndStyle() {
    let style = StyleConfig {
        font: Some("Komika Axis".to_string()),
        font_size: Some(72),
        primary_color: Some("#FFAA00".to_string()),
        outline_color: Some("#333333".to_string()),
        ..Default::default()
    };
    let header = build_header(&style, Canvas { width: 1280, height: 720 });

    assert!(header.starts_with("[Script Info]\nScriptType: v4.00+\nPlayResX: 1280\nPlayResY: 720\n\n[V4+ Styles]\n"));
    assert!(header.contains(
        "Style: Default, Komika Axis, 72, &H0000AAFF, &H000000FF, &H00333333, &H00000000, 0, 0, 0, 0, 100, 100, 0, 0, 1, 2, 0, 5, 10, 10, 10, 1"
    ));
    assert!(header.ends_with("\n\n"));
}

#[test]
fn test_styleRow_withNativeColours_shouldKeepThem() {
    let style = StyleConfig {
        primary_color: Some("&H8000FFFF".to_string()),
        ..Default::default()
    };
    assert!(style_row(&style).contains(", &H8000FFFF, &H000000FF, &H00000000,"));
}

#[test]
fn test_document_withoutEvents_shouldEndAtFormatRow() {
    let document = Document::new(build_header(&StyleConfig::default(), Canvas::default()));
    let ass = document.to_ass();

    assert!(ass.ends_with(&format!("[Events]\n{}", EVENTS_FORMAT)));
    assert_eq!(document.dialogue_count(), 0);
}

#[test]
fn test_document_shouldJoinRowsWithoutTrailingNewline() {
    let mut document = Document::new(String::new());
    document.push(Event::text(0, 0, 100, "a"));
    document.extend([Event::text(1, 100, 200, "b")]);

    let ass = document.to_ass();
    assert_eq!(
        ass,
        format!(
            "[Events]\n{}\nDialogue: 0,0:00:00.00,0:00:00.10,Default,,0,0,0,,a\nDialogue: 1,0:00:00.10,0:00:00.20,Default,,0,0,0,,b",
            EVENTS_FORMAT
        )
    );
    assert_eq!(document.to_string(), ass);
}

#[test]
fn test_event_withNegativeTime_shouldClampToZero() {
    let event = Event::text(0, -250, -50, "early");
    assert!(event.has_negative_time());
    assert!(event.to_string().starts_with("Dialogue: 0,0:00:00.00,0:00:00.00,Default,"));
}

#[test]
fn test_event_withSegmentsAndNoTags_shouldOmitEmptyBlocks() {
    let event = Event::segments(
        1,
        0,
        10,
        vec![Segment::new(vec![], "plain"), Segment::new(vec![Tag::Blur(2)], "soft")],
    );
    assert_eq!(event.text_field(), "plain {\\blur2}soft");
}

#[test]
fn test_event_withLineBreaksAndBraces_shouldEscapeText() {
    let event = Event::text(1, 0, 500, "two\nlines {\\b1}\r\nend").tag(Tag::Align(5));
    assert_eq!(event.text_field(), "{\\an5}two\\Nlines \\{\\b1\\}\\Nend");

    let row = event.to_string();
    assert_eq!(row.lines().count(), 1);
    assert!(row.ends_with(",,{\\an5}two\\Nlines \\{\\b1\\}\\Nend"));

    let karaoke = Event::segments(1, 0, 10, vec![Segment::new(vec![Tag::Blur(2)], "{x}")]);
    assert_eq!(karaoke.text_field(), "{\\blur2}\\{x\\}");
}

#[test]
fn test_event_withDrawingBody_shouldNotEscapePath() {
    let event = Event::drawing(0, 0, 100, "m 0 0 l 10 0 10 10");
    assert!(event.text_field().ends_with("\\p1}m 0 0 l 10 0 10 10{\\p0}"));
}

#[test]
fn test_tag_display_shouldMatchOverrideSyntax() {
    assert_eq!(Tag::Align(5).to_string(), "\\an5");
    assert_eq!(Tag::Alpha(0x0A).to_string(), "\\alpha&H0A&");
    assert_eq!(
        Tag::Move { from: (1, 2), to: (3, 4), window: Some((0, 300)) }.to_string(),
        "\\move(1,2,3,4,0,300)"
    );
    assert_eq!(Tag::Move { from: (1, 2), to: (3, 4), window: None }.to_string(), "\\move(1,2,3,4)");
    assert_eq!(Tag::transform_all(vec![Tag::Rotate(-3)]).to_string(), "\\t(\\frz-3)");
}
