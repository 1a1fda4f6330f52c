use crate::style::{Canvas, StyleConfig};

// @module: Script preamble ([Script Info] and [V4+ Styles])

/// Column list of the style section
pub const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

// Secondary (karaoke) colour and back colour are fixed
const SECONDARY_COLOUR: &str = "&H000000FF";
const BACK_COLOUR: &str = "&H00000000";

/// Build the single `Default` style row
///
/// Bold and italics are off, alignment is 5 and outline/shadow/margins are
/// fixed; presets vary the look through inline override tags only.
pub fn style_row(style: &StyleConfig) -> String {
    format!(
        "Style: Default, {}, {}, {}, {}, {}, {}, 0, 0, 0, 0, 100, 100, 0, 0, 1, 2, 0, 5, 10, 10, 10, 1",
        style.font_family(),
        style.font_size_px(),
        style.primary_native(),
        SECONDARY_COLOUR,
        style.outline_native(),
        BACK_COLOUR,
    )
}

/// Build the script header, ending with a blank line
pub fn build_header(style: &StyleConfig, canvas: Canvas) -> String {
    format!(
        "[Script Info]\nScriptType: v4.00+\nPlayResX: {}\nPlayResY: {}\n\n[V4+ Styles]\n{}\n{}\n\n",
        canvas.width,
        canvas.height,
        STYLE_FORMAT,
        style_row(style),
    )
}
