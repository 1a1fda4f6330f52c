use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use crate::errors::CodecError;

// @module: ASS timestamp and colour encoding

// @const: ASS timestamp regex (H:MM:SS.cc, hours unbounded)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})\.(\d{2})$").unwrap()
});

// @const: Bare RRGGBB hex triplet
static HEX_RGB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{6}$").unwrap()
});

/// Opaque white, used for empty or unreadable colour specs
pub const OPAQUE_WHITE: &str = "&H00FFFFFF";

/// Opaque black, the outline colour when none is configured
pub const OPAQUE_BLACK: &str = "&H00000000";

/// Format milliseconds as an ASS timestamp (`H:MM:SS.cc`)
///
/// Sub-centisecond precision is truncated, never rounded up.
pub fn ms_to_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;

    format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

/// Format a signed offset, rejecting times before zero
pub fn checked_timestamp(ms: i64) -> Result<String, CodecError> {
    u64::try_from(ms)
        .map(ms_to_timestamp)
        .map_err(|_| CodecError::NegativeTime(ms))
}

/// Parse an ASS timestamp back to milliseconds
pub fn parse_timestamp(timestamp: &str) -> Result<u64, CodecError> {
    let invalid = || CodecError::InvalidTimestamp(timestamp.to_string());
    let caps = TIMESTAMP_REGEX.captures(timestamp.trim()).ok_or_else(invalid)?;

    let field = |idx: usize| -> Result<u64, CodecError> {
        caps[idx].parse::<u64>().map_err(|_| invalid())
    };
    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;
    let centis = field(4)?;

    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + centis * 10)
}

/// Convert a colour spec to the native `&HAABBGGRR` token
///
/// Accepts `#RRGGBB`, `RRGGBB` or an existing `&H...` token (returned
/// unchanged). Anything else silently becomes opaque white.
pub fn color_to_native(spec: &str) -> String {
    if spec.is_empty() {
        return OPAQUE_WHITE.to_string();
    }
    if is_native(spec) {
        return spec.to_string();
    }

    let hex = spec.trim_start_matches('#');
    if !HEX_RGB_REGEX.is_match(hex) {
        return OPAQUE_WHITE.to_string();
    }

    let (r, g, b) = (&hex[0..2], &hex[2..4], &hex[4..6]);
    format!("&H00{}{}{}", b, g, r)
}

/// Resolve an optional colour spec, using `default` when it is absent
pub fn resolve_color(spec: Option<&str>, default: &str) -> String {
    match spec {
        Some(spec) => color_to_native(spec),
        None => default.to_string(),
    }
}

// @checks: Native token prefix, case-insensitive
fn is_native(spec: &str) -> bool {
    spec.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("&h"))
}

/// Inline override colour in ASS channel order, rendered as `&HBBGGRR&`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgr(pub u32);

impl fmt::Display for Bgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&H{:06X}&", self.0 & 0x00FF_FFFF)
    }
}
