use std::collections::BTreeMap;
use std::fmt;
use log::debug;
use rand::RngCore;
use crate::document::Event;
use crate::effects::{self, SequenceEffect, WordEffect};
use crate::style::{Anchor, DEFAULT_PRESET};
use crate::transcript::Word;

// @module: Preset identifier lookup with total fallback

/// Normalize a preset identifier to its lookup key
///
/// Case and surrounding whitespace are ignored; hyphens and inner whitespace
/// become underscores, so "Matrix-Rain" and "matrix_rain" match.
pub fn canonical_key(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace(|c: char| c == '-' || c.is_whitespace(), "_")
}

/// A registered effect in one of the two dispatch shapes
pub enum Preset {
    PerWord(Box<dyn WordEffect>),
    Sequence(Box<dyn SequenceEffect>),
}

impl Preset {
    pub fn per_word<E: WordEffect + 'static>(effect: E) -> Self {
        Self::PerWord(Box::new(effect))
    }

    pub fn sequence<E: SequenceEffect + 'static>(effect: E) -> Self {
        Self::Sequence(Box::new(effect))
    }

    /// Produce all events for the word list, in emission order
    pub fn render(&self, words: &[Word], anchor: Anchor, rng: &mut dyn RngCore) -> Vec<Event> {
        match self {
            Self::PerWord(effect) => effects::per_word(effect.as_ref(), words, anchor, rng),
            Self::Sequence(effect) => effect.emit(words, anchor, rng),
        }
    }
}

impl fmt::Debug for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerWord(_) => write!(f, "Preset::PerWord"),
            Self::Sequence(_) => write!(f, "Preset::Sequence"),
        }
    }
}

/// Named presets keyed by canonical identifier
#[derive(Debug)]
pub struct PresetRegistry {
    // @field: canonical key -> (display id, preset)
    presets: BTreeMap<String, (String, Preset)>,

    // @field: Used for any identifier with no entry
    fallback: Preset,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetRegistry {
    /// Registry with no named presets; every lookup yields word-pop
    pub fn empty() -> Self {
        Self {
            presets: BTreeMap::new(),
            fallback: Preset::per_word(effects::WordPop),
        }
    }

    /// Registry holding every built-in preset
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("matrix-rain", Preset::per_word(effects::MatrixRain));
        registry.register("electric-shock", Preset::per_word(effects::ElectricShock));
        registry.register("smoke-trail", Preset::per_word(effects::SmokeTrail));
        registry.register("pixel-glitch", Preset::per_word(effects::PixelGlitch));
        registry.register("neon-sign", Preset::per_word(effects::NeonSign));
        registry.register("karaoke-classic", Preset::sequence(effects::KaraokeClassic));
        registry.register("typewriter-line", Preset::sequence(effects::TypewriterLine));
        registry.register("fade-in-out", Preset::sequence(effects::FadeInOut));
        registry.register("slide-up", Preset::sequence(effects::SlideUp));
        registry.register("zoom-burst", Preset::sequence(effects::ZoomBurst));
        registry.register(DEFAULT_PRESET, Preset::per_word(effects::WordPop));
        registry
    }

    /// Add or replace a named preset
    pub fn register(&mut self, id: &str, preset: Preset) {
        self.presets.insert(canonical_key(id), (id.to_string(), preset));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.presets.contains_key(&canonical_key(id))
    }

    /// Registered identifiers in key order
    pub fn ids(&self) -> Vec<&str> {
        self.presets.values().map(|(id, _)| id.as_str()).collect()
    }

    /// Look up a preset; unknown identifiers resolve to word-pop
    pub fn resolve(&self, id: &str) -> &Preset {
        match self.presets.get(&canonical_key(id)) {
            Some((_, preset)) => preset,
            None => {
                debug!("Unknown preset '{}', falling back to {}", id, DEFAULT_PRESET);
                &self.fallback
            }
        }
    }
}
