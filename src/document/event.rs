use std::fmt;
use crate::timebase::{checked_timestamp, ms_to_timestamp, Bgr};

// @module: Structured dialogue events and override tags

/// Style row every event refers to
pub const DEFAULT_STYLE: &str = "Default";

/// One inline override directive
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// `\an` numpad alignment
    Align(u8),
    /// `\pos(x,y)`
    Pos(i64, i64),
    /// `\move(x1,y1,x2,y2[,t1,t2])`
    Move {
        from: (i64, i64),
        to: (i64, i64),
        window: Option<(i64, i64)>,
    },
    /// `\1c` fill colour
    PrimaryColour(Bgr),
    /// `\3c` outline colour
    OutlineColour(Bgr),
    /// `\alpha`, 0x00 opaque to 0xFF invisible
    Alpha(u8),
    /// `\fad(in,out)`
    Fade(i64, i64),
    /// `\fscx` and `\fscy` with the same percentage
    Scale(i64),
    /// `\frz` rotation in degrees
    Rotate(i64),
    /// `\blur`
    Blur(u32),
    /// `\bord`
    Border(u32),
    /// `\t([t1,t2,]tags)` animated transition
    Transform {
        window: Option<(i64, i64)>,
        tags: Vec<Tag>,
    },
}

impl Tag {
    // @creates: Transition over an explicit window
    pub fn transform(start_ms: i64, end_ms: i64, tags: Vec<Tag>) -> Self {
        Self::Transform {
            window: Some((start_ms, end_ms)),
            tags,
        }
    }

    // @creates: Transition spanning the whole event
    pub fn transform_all(tags: Vec<Tag>) -> Self {
        Self::Transform { window: None, tags }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Align(code) => write!(f, "\\an{}", code),
            Self::Pos(x, y) => write!(f, "\\pos({},{})", x, y),
            Self::Move { from, to, window } => {
                write!(f, "\\move({},{},{},{}", from.0, from.1, to.0, to.1)?;
                if let Some((t1, t2)) = window {
                    write!(f, ",{},{}", t1, t2)?;
                }
                write!(f, ")")
            }
            Self::PrimaryColour(colour) => write!(f, "\\1c{}", colour),
            Self::OutlineColour(colour) => write!(f, "\\3c{}", colour),
            Self::Alpha(alpha) => write!(f, "\\alpha&H{:02X}&", alpha),
            Self::Fade(fade_in, fade_out) => write!(f, "\\fad({},{})", fade_in, fade_out),
            Self::Scale(percent) => write!(f, "\\fscx{}\\fscy{}", percent, percent),
            Self::Rotate(degrees) => write!(f, "\\frz{}", degrees),
            Self::Blur(strength) => write!(f, "\\blur{}", strength),
            Self::Border(width) => write!(f, "\\bord{}", width),
            Self::Transform { window, tags } => {
                write!(f, "\\t(")?;
                if let Some((t1, t2)) = window {
                    write!(f, "{},{},", t1, t2)?;
                }
                write_tags(f, tags)?;
                write!(f, ")")
            }
        }
    }
}

fn write_tags(f: &mut fmt::Formatter<'_>, tags: &[Tag]) -> fmt::Result {
    for tag in tags {
        write!(f, "{}", tag)?;
    }
    Ok(())
}

/// Render a tag list as one `{...}` override block
pub fn tag_block(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let inner: String = tags.iter().map(Tag::to_string).collect();
    format!("{{{}}}", inner)
}

/// Separately tagged run of text inside one event
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub tags: Vec<Tag>,
    pub text: String,
}

impl Segment {
    pub fn new(tags: Vec<Tag>, text: impl Into<String>) -> Self {
        Self {
            tags,
            text: text.into(),
        }
    }
}

/// What an event draws
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Plain text
    Text(String),
    /// Vector path drawn in `\p1` mode
    Drawing(String),
    /// Space-joined segments, each with its own override block
    Segments(Vec<Segment>),
}

/// One `Dialogue:` row
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    // @field: Paint-order bucket, 0 for decoration
    pub layer: u32,

    // @field: Start time in ms (may be negative for degenerate input)
    pub start_ms: i64,

    // @field: End time in ms
    pub end_ms: i64,

    // @field: Style row name
    pub style: String,

    // @field: Leading override tags
    pub tags: Vec<Tag>,

    // @field: Drawn content
    pub body: Body,
}

impl Event {
    fn with_body(layer: u32, start_ms: i64, end_ms: i64, body: Body) -> Self {
        Self {
            layer,
            start_ms,
            end_ms,
            style: DEFAULT_STYLE.to_string(),
            tags: Vec::new(),
            body,
        }
    }

    /// Creates a text event
    pub fn text(layer: u32, start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        Self::with_body(layer, start_ms, end_ms, Body::Text(text.into()))
    }

    /// Creates a vector drawing event
    pub fn drawing(layer: u32, start_ms: i64, end_ms: i64, path: impl Into<String>) -> Self {
        Self::with_body(layer, start_ms, end_ms, Body::Drawing(path.into()))
    }

    /// Creates an event made of independently tagged segments
    pub fn segments(layer: u32, start_ms: i64, end_ms: i64, segments: Vec<Segment>) -> Self {
        Self::with_body(layer, start_ms, end_ms, Body::Segments(segments))
    }

    // @builder: Append one override tag
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    // @builder: Append several override tags
    pub fn tags<I: IntoIterator<Item = Tag>>(mut self, tags: I) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Whether either timestamp falls before zero
    pub fn has_negative_time(&self) -> bool {
        self.start_ms < 0 || self.end_ms < 0
    }

    /// The `Text` field of the row: override block plus body
    pub fn text_field(&self) -> String {
        match &self.body {
            Body::Text(text) => format!("{}{}", tag_block(&self.tags), escape_text(text)),
            Body::Drawing(path) => {
                let inner: String = self.tags.iter().map(Tag::to_string).collect();
                format!("{{{}\\p1}}{}{{\\p0}}", inner, path)
            }
            Body::Segments(segments) => {
                let joined = segments
                    .iter()
                    .map(|segment| format!("{}{}", tag_block(&segment.tags), escape_text(&segment.text)))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{}{}", tag_block(&self.tags), joined)
            }
        }
    }
}

// @returns: Row timestamp, times before zero pinned to 0:00:00.00
fn row_timestamp(ms: i64) -> String {
    checked_timestamp(ms).unwrap_or_else(|_| ms_to_timestamp(0))
}

/// Make word text safe for the `Text` column
///
/// Line breaks become the `\N` hard break and braces are escaped so they
/// cannot open an override block. Drawing paths are never passed through here.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\N");
            }
            '\n' => escaped.push_str("\\N"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dialogue: {},{},{},{},,0,0,0,,{}",
            self.layer,
            row_timestamp(self.start_ms),
            row_timestamp(self.end_ms),
            self.style,
            self.text_field()
        )
    }
}
