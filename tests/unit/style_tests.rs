/*!
 * Tests for style records, the preset catalog and anchor geometry
 */

use subfx::style::{catalog_entry, Anchor, Canvas, Placement, StyleConfig, PRESET_CATALOG};

#[test]
fn test_styleConfig_default_shouldApplyFieldDefaults() {
    let style = StyleConfig::default();
    assert_eq!(style.preset_id(), "word-pop");
    assert_eq!(style.font_family(), "Inter");
    assert_eq!(style.font_size_px(), 60);
    assert_eq!(style.primary_native(), "&H00FFFFFF");
    assert_eq!(style.outline_native(), "&H00000000");
    assert_eq!(style.placement(), Placement::Bottom);
}

#[test]
fn test_styleConfig_withBlankFont_shouldUseDefaultFont() {
    let style = StyleConfig {
        font: Some("  , Arial".to_string()),
        ..Default::default()
    };
    assert_eq!(style.font_family(), "Inter");
}

#[test]
fn test_styleConfig_withNonPositiveSize_shouldUseDefaultSize() {
    let style = StyleConfig {
        font_size: Some(0),
        ..Default::default()
    };
    assert_eq!(style.font_size_px(), 60);
}

#[test]
fn test_styleConfig_deserialize_withStringNumbers_shouldParseLeniently() {
    let style: StyleConfig = serde_json::from_str(
        r##"{"id": "neon-sign", "font_size": "64", "alignment": "8", "gradient": "x", "primary_color": "#FF00FF"}"##,
    )
    .unwrap();
    assert_eq!(style.font_size, Some(64));
    assert_eq!(style.alignment, Some(8));
    assert_eq!(style.primary_native(), "&H00FF00FF");
}

#[test]
fn test_styleConfig_deserialize_withUnreadableNumber_shouldTreatAsAbsent() {
    let style: StyleConfig = serde_json::from_str(r#"{"font_size": "big", "alignment": null}"#).unwrap();
    assert_eq!(style.font_size, None);
    assert_eq!(style.alignment, None);
}

#[test]
fn test_styleConfig_over_shouldPreferOwnFields() {
    let user = StyleConfig {
        font: Some("Poppins".to_string()),
        ..Default::default()
    };
    let merged = user.over(StyleConfig::for_preset("matrix-rain"));
    assert_eq!(merged.font.as_deref(), Some("Poppins"));
    assert_eq!(merged.font_size, Some(54));
    assert_eq!(merged.primary_color.as_deref(), Some("#00FF00"));
    assert_eq!(merged.preset_id(), "matrix-rain");
}

#[test]
fn test_forPreset_withUnknownId_shouldOnlySetId() {
    let style = StyleConfig::for_preset("fire-storm");
    assert_eq!(style.id.as_deref(), Some("fire-storm"));
    assert_eq!(style.font, None);
    assert_eq!(style.font_size, None);
}

#[test]
fn test_catalogEntry_shouldIgnoreCaseAndSeparators() {
    let entry = catalog_entry("Neon_Sign").unwrap();
    assert_eq!(entry.font, "Oslla");
    assert_eq!(entry.font_size, 64);
    assert!(catalog_entry("typewriter-line").is_none());
    assert_eq!(PRESET_CATALOG.len(), 10);
}

#[test]
fn test_placement_fromCode_shouldTreatUnknownCodesAsBottom() {
    assert_eq!(Placement::from_code(8), Placement::Top);
    assert_eq!(Placement::from_code(5), Placement::Middle);
    for code in [2, 1, 3, 7, 9, 0, -4] {
        assert_eq!(Placement::from_code(code), Placement::Bottom);
    }
}

#[test]
fn test_anchor_locate_onDefaultCanvas_shouldMatchPlacements() {
    let canvas = Canvas::default();
    assert_eq!(Anchor::locate(Placement::Bottom, canvas, 150), Anchor { x: 960, y: 930 });
    assert_eq!(Anchor::locate(Placement::Middle, canvas, 150), Anchor { x: 960, y: 540 });
    assert_eq!(Anchor::locate(Placement::Top, canvas, 150), Anchor { x: 960, y: 150 });
}

#[test]
fn test_anchor_locate_onPortraitCanvas_shouldCentreHorizontally() {
    let canvas = Canvas { width: 1080, height: 1920 };
    assert_eq!(Anchor::locate(Placement::Bottom, canvas, 300), Anchor { x: 540, y: 1620 });
}
