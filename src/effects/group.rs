use rand::RngCore;
use crate::document::{Event, Segment, Tag};
use crate::style::Anchor;
use crate::timebase::Bgr;
use crate::transcript::Word;
use super::{anchored, chunk_words, SequenceEffect};

// @module: Multi-word presets (karaoke window and chunked lines)

const HIGHLIGHT: Bgr = Bgr(0xFFFF00);

// @returns: Tags for the dimmed neighbour words
fn dimmed() -> Vec<Tag> {
    vec![Tag::Alpha(0xA0), Tag::Scale(85)]
}

// @returns: Tags for the word being spoken
fn highlighted() -> Vec<Tag> {
    vec![Tag::Alpha(0x00), Tag::Scale(130), Tag::PrimaryColour(HIGHLIGHT), Tag::Blur(4)]
}

/// Three-word window centred on the word being spoken
///
/// One event per word, timed to that word, showing the previous word (if any)
/// and the next word (if any) dimmed on either side.
#[derive(Debug, Default, Clone, Copy)]
pub struct KaraokeClassic;

impl SequenceEffect for KaraokeClassic {
    fn emit(&self, words: &[Word], anchor: Anchor, _rng: &mut dyn RngCore) -> Vec<Event> {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let mut segments = Vec::with_capacity(3);
                if let Some(prev) = i.checked_sub(1).and_then(|p| words.get(p)) {
                    segments.push(Segment::new(dimmed(), prev.text.clone()));
                }
                segments.push(Segment::new(highlighted(), word.text.clone()));
                if let Some(next) = words.get(i + 1) {
                    segments.push(Segment::new(dimmed(), next.text.clone()));
                }

                Event::segments(1, word.start_ms(), word.end_ms(), segments)
                    .tags(anchored(anchor))
                    .tag(Tag::Fade(80, 80))
            })
            .collect()
    }
}

/// Chunk text typed out one character at a time
///
/// The chunk duration is divided evenly over its characters. Every reveal
/// lasts until the chunk ends; later rows are drawn over earlier ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypewriterLine;

impl TypewriterLine {
    pub const CHUNK_WORDS: usize = 6;
}

impl SequenceEffect for TypewriterLine {
    fn emit(&self, words: &[Word], anchor: Anchor, _rng: &mut dyn RngCore) -> Vec<Event> {
        let mut events = Vec::new();
        for chunk in chunk_words(words, Self::CHUNK_WORDS) {
            let char_count = chunk.text.chars().count();
            let per_char = (chunk.end_ms - chunk.start_ms).div_euclid(char_count.max(1) as i64);

            let mut revealed = String::with_capacity(chunk.text.len());
            for (i, ch) in chunk.text.chars().enumerate() {
                revealed.push(ch);
                let start = chunk.start_ms + i as i64 * per_char;
                events.push(Event::text(1, start, chunk.end_ms, revealed.clone()).tags(anchored(anchor)));
            }
        }
        events
    }
}

// One event per chunk carrying the tags built for the anchor
fn chunked_lines(words: &[Word], size: usize, anchor: Anchor, tags: impl Fn(Anchor) -> Vec<Tag>) -> Vec<Event> {
    chunk_words(words, size)
        .into_iter()
        .map(|chunk| Event::text(1, chunk.start_ms, chunk.end_ms, chunk.text).tags(tags(anchor)))
        .collect()
}

/// Whole chunk fading in and out
#[derive(Debug, Default, Clone, Copy)]
pub struct FadeInOut;

impl FadeInOut {
    pub const CHUNK_WORDS: usize = 5;
}

impl SequenceEffect for FadeInOut {
    fn emit(&self, words: &[Word], anchor: Anchor, _rng: &mut dyn RngCore) -> Vec<Event> {
        chunked_lines(words, Self::CHUNK_WORDS, anchor, |a| {
            vec![Tag::Align(5), Tag::Pos(a.x, a.y), Tag::Fade(400, 400)]
        })
    }
}

/// Chunk rising 100px into place
#[derive(Debug, Default, Clone, Copy)]
pub struct SlideUp;

impl SlideUp {
    pub const CHUNK_WORDS: usize = 4;
}

impl SequenceEffect for SlideUp {
    fn emit(&self, words: &[Word], anchor: Anchor, _rng: &mut dyn RngCore) -> Vec<Event> {
        chunked_lines(words, Self::CHUNK_WORDS, anchor, |a| {
            vec![
                Tag::Align(5),
                Tag::Move { from: (a.x, a.y + 100), to: (a.x, a.y), window: Some((0, 300)) },
                Tag::Fade(100, 200),
            ]
        })
    }
}

/// Chunk scaling up from nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct ZoomBurst;

impl ZoomBurst {
    pub const CHUNK_WORDS: usize = 4;
}

impl SequenceEffect for ZoomBurst {
    fn emit(&self, words: &[Word], anchor: Anchor, _rng: &mut dyn RngCore) -> Vec<Event> {
        chunked_lines(words, Self::CHUNK_WORDS, anchor, |a| {
            vec![
                Tag::Align(5),
                Tag::Pos(a.x, a.y),
                Tag::Scale(0),
                Tag::transform(0, 300, vec![Tag::Scale(100)]),
                Tag::Fade(0, 200),
            ]
        })
    }
}
