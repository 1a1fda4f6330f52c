use rand::RngCore;
use crate::document::{Event, Tag};
use crate::style::Anchor;
use crate::transcript::Word;
use super::{anchored, WordEffect, WordTiming};

/// Word that pops in: 80% → 110% over 80ms, then settles at 100% by 150ms
///
/// This is the fallback for unknown preset identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordPop;

impl WordEffect for WordPop {
    fn emit(&self, word: &Word, timing: WordTiming, anchor: Anchor, _rng: &mut dyn RngCore) -> Vec<Event> {
        vec![
            Event::text(1, timing.start_ms, timing.end_ms, word.text.clone())
                .tags(anchored(anchor))
                .tags([
                    Tag::Scale(80),
                    Tag::transform(0, 80, vec![Tag::Scale(110)]),
                    Tag::transform(80, 150, vec![Tag::Scale(100)]),
                ]),
        ]
    }
}
