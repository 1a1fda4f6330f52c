use rand::{Rng, RngCore};
use crate::document::{Event, Tag};
use crate::style::Anchor;
use crate::timebase::Bgr;
use crate::transcript::Word;
use super::{anchored, spread, WordEffect, WordTiming};

// @module: Particle presets (word text on layer 1, decoration on layer 0)

// @const: Glyphs dropped by the matrix rain
const RAIN_GLYPHS: &[char] = &['0', '1', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ'];

// @const: Zig-zag bolt outline
const LIGHTNING_SHAPE: &str = "m 0 0 l 5 20 l -3 20 l 8 40 l -10 25 l 0 25";

// @const: Flat puff outline built from two bezier arcs
const SMOKE_SHAPE: &str = "m 0 0 b 10 -5 20 -5 30 0 b 20 5 10 5 0 0";

const MATRIX_GREEN: Bgr = Bgr(0x00FF00);
const BOLT_COLOUR: Bgr = Bgr(0xFFFF00);
const SMOKE_GREY: Bgr = Bgr(0xCCCCCC);

/// Green word with glyphs falling past it
#[derive(Debug, Default, Clone, Copy)]
pub struct MatrixRain;

impl MatrixRain {
    /// Falling glyphs per word
    pub const DROPS: usize = 20;
}

impl WordEffect for MatrixRain {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
        let mut events = Vec::with_capacity(Self::DROPS + 1);
        events.push(
            Event::text(1, timing.start_ms, timing.end_ms, word.text.clone())
                .tags(anchored(anchor))
                .tag(Tag::PrimaryColour(MATRIX_GREEN))
                .tag(Tag::Fade(100, 100)),
        );

        for _ in 0..Self::DROPS {
            let glyph = RAIN_GLYPHS[rng.random_range(0..RAIN_GLYPHS.len())];
            let x = anchor.x + spread(rng, -200, 200);
            let y_start = anchor.y - spread(rng, 200, 400);
            let y_end = anchor.y + spread(rng, 100, 300);
            let drop_start = timing.start_ms + spread(rng, 0, timing.duration_ms);
            let drop_end = drop_start + spread(rng, 500, 1000);

            events.push(
                Event::text(0, drop_start, drop_end, glyph.to_string()).tags([
                    Tag::Align(5),
                    Tag::Move { from: (x, y_start), to: (x, y_end), window: None },
                    Tag::PrimaryColour(MATRIX_GREEN),
                    Tag::Alpha(0x80),
                    Tag::Scale(50),
                    Tag::Fade(0, 200),
                ]),
            );
        }
        events
    }
}

/// Shaking word with short lightning bolts flashing around it
#[derive(Debug, Default, Clone, Copy)]
pub struct ElectricShock;

impl ElectricShock {
    /// Bolts per word
    pub const BOLTS: usize = 8;
    /// Interval between shake keyframes
    pub const SHAKE_STEP_MS: i64 = 50;
    /// Maximum shake angle either way
    pub const SHAKE_DEGREES: i64 = 3;
}

impl WordEffect for ElectricShock {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
        let shake = super::jitter::shake_chain(rng, timing.duration_ms, Self::SHAKE_STEP_MS, Self::SHAKE_DEGREES);

        let mut events = Vec::with_capacity(Self::BOLTS + 1);
        events.push(
            Event::text(1, timing.start_ms, timing.end_ms, word.text.clone())
                .tags(anchored(anchor))
                .tag(Tag::PrimaryColour(BOLT_COLOUR))
                .tags(shake),
        );

        for _ in 0..Self::BOLTS {
            let x = anchor.x + spread(rng, -80, 80);
            let y = anchor.y + spread(rng, -60, 60);
            // bolts only strike during the first half of the word
            let bolt_start = timing.start_ms + spread(rng, 0, timing.duration_ms.div_euclid(2));
            let bolt_end = bolt_start + spread(rng, 50, 150);
            let rotation = spread(rng, 0, 360);

            events.push(
                Event::drawing(0, bolt_start, bolt_end, LIGHTNING_SHAPE).tags([
                    Tag::Align(5),
                    Tag::Pos(x, y),
                    Tag::Rotate(rotation),
                    Tag::PrimaryColour(BOLT_COLOUR),
                    Tag::Scale(80),
                    Tag::Fade(0, 50),
                ]),
            );
        }
        events
    }
}

/// Word that dissolves while smoke puffs drift upward
#[derive(Debug, Default, Clone, Copy)]
pub struct SmokeTrail;

impl SmokeTrail {
    /// Smoke puffs per word
    pub const PUFFS: usize = 12;
}

impl WordEffect for SmokeTrail {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
        let dur = timing.duration_ms;

        let mut events = Vec::with_capacity(Self::PUFFS + 1);
        events.push(
            Event::text(1, timing.start_ms, timing.end_ms, word.text.clone())
                .tags(anchored(anchor))
                .tag(Tag::Fade(100, 300))
                .tag(Tag::transform(dur - 200, dur, vec![Tag::Alpha(0xFF), Tag::Blur(10)])),
        );

        for _ in 0..Self::PUFFS {
            let x = anchor.x + spread(rng, -40, 40);
            let y = anchor.y + spread(rng, -20, 20);
            let rise_to = y - spread(rng, 50, 100);
            let drift_to = x + spread(rng, -30, 30);
            // puffs appear in the second half of the word
            let puff_start = timing.start_ms + spread(rng, dur.div_euclid(2), dur);
            let puff_end = puff_start + spread(rng, 800, 1200);
            let size = spread(rng, 30, 60);

            events.push(
                Event::drawing(0, puff_start, puff_end, SMOKE_SHAPE).tags([
                    Tag::Align(5),
                    Tag::Move { from: (x, y), to: (drift_to, rise_to), window: None },
                    Tag::Scale(size),
                    Tag::PrimaryColour(SMOKE_GREY),
                    Tag::Alpha(0x40),
                    Tag::Blur(8),
                    Tag::transform_all(vec![Tag::Alpha(0xFF), Tag::Scale(size * 2)]),
                ]),
            );
        }
        events
    }
}
