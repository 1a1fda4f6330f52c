/*!
 * Effect library.
 *
 * Presets come in two shapes:
 * - `WordEffect`: called once per word by the shared `per_word` loop
 *   (particles, jitter, flicker, pop)
 * - `SequenceEffect`: sees the whole word list, for presets that need
 *   neighbouring words or fixed-size chunks (karaoke, typewriter, line fades)
 *
 * Randomness is always passed in as `&mut dyn RngCore`. Particle counts and
 * layer assignment are fixed per preset; only per-particle parameters vary.
 */

pub mod flicker;
pub mod group;
pub mod jitter;
pub mod particles;
pub mod pop;

use rand::{Rng, RngCore};
use crate::document::{Event, Tag};
use crate::style::Anchor;
use crate::transcript::Word;

pub use flicker::NeonSign;
pub use group::{FadeInOut, KaraokeClassic, SlideUp, TypewriterLine, ZoomBurst};
pub use jitter::PixelGlitch;
pub use particles::{ElectricShock, MatrixRain, SmokeTrail};
pub use pop::WordPop;

/// Millisecond window of one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTiming {
    pub start_ms: i64,
    pub end_ms: i64,
    pub duration_ms: i64,
}

impl WordTiming {
    pub fn of(word: &Word) -> Self {
        let start_ms = word.start_ms();
        let end_ms = word.end_ms();
        Self {
            start_ms,
            end_ms,
            duration_ms: end_ms - start_ms,
        }
    }
}

/// Preset applied to each word independently
pub trait WordEffect: Send + Sync {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event>;
}

/// Preset that works on the whole word sequence
pub trait SequenceEffect: Send + Sync {
    fn emit(&self, words: &[Word], anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event>;
}

/// Run a word effect over every word, collecting events in order
pub fn per_word(effect: &dyn WordEffect, words: &[Word], anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
    let mut events = Vec::new();
    for word in words {
        events.extend(effect.emit(word, WordTiming::of(word), anchor, rng));
    }
    events
}

/// Contiguous run of words shown as one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// Split words into fixed-size chunks spanning first start to last end
pub fn chunk_words(words: &[Word], size: usize) -> Vec<Chunk> {
    words
        .chunks(size.max(1))
        .filter_map(|group| {
            let first = group.first()?;
            let last = group.last()?;
            Some(Chunk {
                text: group.iter().map(|w| w.text.as_str()).collect::<Vec<_>>().join(" "),
                start_ms: first.start_ms(),
                end_ms: last.end_ms(),
            })
        })
        .collect()
}

/// Inclusive random integer between two bounds, in either order
///
/// Degenerate word timing can invert a window; the bounds are then sorted
/// instead of panicking.
pub fn spread(rng: &mut dyn RngCore, a: i64, b: i64) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.random_range(lo..=hi)
}

/// Centre alignment plus position at the anchor
pub fn anchored(anchor: Anchor) -> [Tag; 2] {
    [Tag::Align(5), Tag::Pos(anchor.x, anchor.y)]
}
