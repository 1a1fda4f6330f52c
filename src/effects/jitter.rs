use rand::RngCore;
use crate::document::{Event, Tag};
use crate::style::Anchor;
use crate::timebase::Bgr;
use crate::transcript::Word;
use super::{spread, WordEffect, WordTiming};

// @module: Jitter presets built from chained short transforms

/// Chain of rotation keyframes, one per `step_ms` across the duration
///
/// Each keyframe rotates to an independent angle in `[-max_degrees, max_degrees]`.
/// A non-positive duration yields no keyframes.
pub fn shake_chain(rng: &mut dyn RngCore, duration_ms: i64, step_ms: i64, max_degrees: i64) -> Vec<Tag> {
    let steps = duration_ms.max(0) / step_ms.max(1);
    (0..steps)
        .map(|i| {
            let angle = spread(rng, -max_degrees, max_degrees);
            Tag::transform(i * step_ms, (i + 1) * step_ms, vec![Tag::Rotate(angle)])
        })
        .collect()
}

/// Chain of position hops around `anchor`, one per `step_ms`
pub fn hop_chain(rng: &mut dyn RngCore, duration_ms: i64, step_ms: i64, anchor: Anchor, reach: (i64, i64)) -> Vec<Tag> {
    let steps = duration_ms.max(0) / step_ms.max(1);
    (0..steps)
        .map(|j| {
            let x = anchor.x + spread(rng, -reach.0, reach.0);
            let y = anchor.y + spread(rng, -reach.1, reach.1);
            Tag::transform(j * step_ms, (j + 1) * step_ms, vec![Tag::Pos(x, y)])
        })
        .collect()
}

// Layer 0 through 3, drawn in this order
const GLITCH_COLOURS: [Bgr; 4] = [Bgr(0xFF0000), Bgr(0x00FF00), Bgr(0x0000FF), Bgr(0xFFFFFF)];

/// Four translucent colour copies of the word hopping independently
#[derive(Debug, Default, Clone, Copy)]
pub struct PixelGlitch;

impl PixelGlitch {
    pub const HOP_STEP_MS: i64 = 100;
}

impl WordEffect for PixelGlitch {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
        GLITCH_COLOURS
            .iter()
            .enumerate()
            .map(|(layer, colour)| {
                let offset_x = spread(rng, -5, 5);
                let offset_y = spread(rng, -3, 3);
                let hops = hop_chain(rng, timing.duration_ms, Self::HOP_STEP_MS, anchor, (10, 5));

                Event::text(layer as u32, timing.start_ms, timing.end_ms, word.text.clone())
                    .tags([
                        Tag::Align(5),
                        Tag::Pos(anchor.x + offset_x, anchor.y + offset_y),
                        Tag::PrimaryColour(*colour),
                        Tag::Alpha(0x60),
                    ])
                    .tags(hops)
            })
            .collect()
    }
}
