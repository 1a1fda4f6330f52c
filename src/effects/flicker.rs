use rand::{Rng, RngCore};
use crate::document::{Event, Tag};
use crate::style::Anchor;
use crate::timebase::Bgr;
use crate::transcript::Word;
use super::{anchored, WordEffect, WordTiming};

// @module: Flicker presets

/// Walk the duration in `step_ms` steps, inserting an opacity toggle with
/// probability `chance` at each step
///
/// A toggle hides the text for half a step and shows it again for the other
/// half, then the walk resumes after the toggle.
pub fn flicker_chain(rng: &mut dyn RngCore, duration_ms: i64, step_ms: i64, chance: f64) -> Vec<Tag> {
    let step_ms = step_ms.max(2);
    let half = step_ms / 2;
    let chance = chance.clamp(0.0, 1.0);

    let mut tags = Vec::new();
    let mut t = 0;
    while t < duration_ms {
        if rng.random_bool(chance) {
            tags.push(Tag::transform(t, t + half, vec![Tag::Alpha(0xFF)]));
            tags.push(Tag::transform(t + half, t + step_ms, vec![Tag::Alpha(0x00)]));
        }
        t += step_ms;
    }
    tags
}

const NEON_MAGENTA: Bgr = Bgr(0xFF00FF);

/// Glowing magenta word that randomly cuts out
#[derive(Debug, Default, Clone, Copy)]
pub struct NeonSign;

impl NeonSign {
    pub const STEP_MS: i64 = 100;
    pub const FLICKER_CHANCE: f64 = 0.3;
}

impl WordEffect for NeonSign {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
        let flicker = flicker_chain(rng, timing.duration_ms, Self::STEP_MS, Self::FLICKER_CHANCE);

        vec![
            Event::text(1, timing.start_ms, timing.end_ms, word.text.clone())
                .tags(anchored(anchor))
                .tags([
                    Tag::PrimaryColour(NEON_MAGENTA),
                    Tag::OutlineColour(NEON_MAGENTA),
                    Tag::Border(3),
                    Tag::Blur(5),
                ])
                .tags(flicker),
        ]
    }
}
