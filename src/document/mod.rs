/*!
 * ASS document assembly.
 *
 * - `header`: script preamble with the single style row
 * - `event`: structured dialogue rows and their override tags
 *
 * `Document` collects events in emission order and serializes everything in
 * one place, so presets never deal with row formatting.
 */

pub mod event;
pub mod header;

use std::fmt;
use log::warn;

pub use event::{Body, Event, Segment, Tag, DEFAULT_STYLE};
pub use header::build_header;

/// Section header preceding the dialogue rows
pub const EVENTS_SECTION: &str = "[Events]";

/// Column list of the events section
pub const EVENTS_FORMAT: &str = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// A complete subtitle script
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    header: String,
    events: Vec<Event>,
}

impl Document {
    /// Create an empty document with the given header
    pub fn new(header: String) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Append one event
    pub fn push(&mut self, event: Event) -> &mut Self {
        self.events.push(event);
        self
    }

    /// Append events, keeping their order
    pub fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Number of `Dialogue:` rows the document will contain
    pub fn dialogue_count(&self) -> usize {
        self.events.len()
    }

    /// Serialize to ASS text
    pub fn to_ass(&self) -> String {
        let clamped = self.events.iter().filter(|e| e.has_negative_time()).count();
        if clamped > 0 {
            warn!("{} event(s) had negative timestamps and were clamped to zero", clamped);
        }

        let mut lines = Vec::with_capacity(self.events.len() + 2);
        lines.push(EVENTS_SECTION.to_string());
        lines.push(EVENTS_FORMAT.to_string());
        lines.extend(self.events.iter().map(Event::to_string));

        format!("{}{}", self.header, lines.join("\n"))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ass())
    }
}
