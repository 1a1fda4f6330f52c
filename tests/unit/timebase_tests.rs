/*!
 * Tests for timestamp and colour encoding
 */

use subfx::errors::CodecError;
use subfx::timebase::{checked_timestamp, color_to_native, ms_to_timestamp, parse_timestamp, resolve_color, Bgr};

#[test]
fn test_ms_to_timestamp_withMixedFields_shouldFormatEachUnit() {
    assert_eq!(ms_to_timestamp(0), "0:00:00.00");
    assert_eq!(ms_to_timestamp(3_723_456), "1:02:03.45");
    assert_eq!(ms_to_timestamp(59_999), "0:00:59.99");
}

#[test]
fn test_ms_to_timestamp_withSubCentisecond_shouldTruncate() {
    assert_eq!(ms_to_timestamp(1_239), "0:00:01.23");
    assert_eq!(ms_to_timestamp(9), "0:00:00.00");
}

#[test]
fn test_ms_to_timestamp_withManyHours_shouldNotWrap() {
    assert_eq!(ms_to_timestamp(36_000_000 + 1_000), "10:00:01.00");
}

#[test]
fn test_checked_timestamp_withNegative_shouldFail() {
    assert_eq!(checked_timestamp(-1), Err(CodecError::NegativeTime(-1)));
    assert_eq!(checked_timestamp(500), Ok("0:00:00.50".to_string()));
}

#[test]
fn test_parse_timestamp_withFormattedValue_shouldRecoverCentiseconds() {
    for ms in [0_u64, 10, 990, 61_230, 3_723_450] {
        assert_eq!(parse_timestamp(&ms_to_timestamp(ms)).unwrap(), ms);
    }
}

#[test]
fn test_parse_timestamp_withMalformedInput_shouldFail() {
    for bad in ["", "1:2:3.4", "0:61:00.00", "0:00:60.00", "0:00:00,00", "abc"] {
        assert!(
            matches!(parse_timestamp(bad), Err(CodecError::InvalidTimestamp(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_color_to_native_withHashHex_shouldReverseChannels() {
    assert_eq!(color_to_native("#FF8800"), "&H000088FF");
    assert_eq!(color_to_native("00FF00"), "&H0000FF00");
    assert_eq!(color_to_native("#123456"), "&H00563412");
}

#[test]
fn test_color_to_native_withNativeToken_shouldPassThrough() {
    assert_eq!(color_to_native("&H80FFFFFF"), "&H80FFFFFF");
    assert_eq!(color_to_native("&h00abcdef"), "&h00abcdef");
}

#[test]
fn test_color_to_native_withGarbage_shouldFallBackToWhite() {
    assert_eq!(color_to_native(""), "&H00FFFFFF");
    assert_eq!(color_to_native("#FFF"), "&H00FFFFFF");
    assert_eq!(color_to_native("red"), "&H00FFFFFF");
    assert_eq!(color_to_native("#GGHHII"), "&H00FFFFFF");
}

#[test]
fn test_resolve_color_withAbsentSpec_shouldUseRoleDefault() {
    assert_eq!(resolve_color(None, "&H00000000"), "&H00000000");
    assert_eq!(resolve_color(Some(""), "&H00000000"), "&H00FFFFFF");
}

#[test]
fn test_bgr_display_shouldUseInlineToken() {
    assert_eq!(Bgr(0xFF00FF).to_string(), "&HFF00FF&");
    assert_eq!(Bgr(0x00FF00).to_string(), "&H00FF00&");
}
