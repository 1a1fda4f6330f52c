/*!
 * Render entry point.
 *
 * A render call turns a word list and a style into a complete ASS script:
 * the anchor is computed once, the preset is resolved once, and every event
 * the preset emits is appended to the document in order.
 */

use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use crate::dispatch::PresetRegistry;
use crate::document::{build_header, Document};
use crate::style::{Anchor, Canvas, StyleConfig};
use crate::transcript::Word;

/// Geometry and randomness settings for a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output canvas (PlayResX/PlayResY)
    pub canvas: Canvas,

    /// Distance of top/bottom anchors from the canvas edge
    pub edge_margin: u32,

    /// Fixed seed for reproducible particle layouts
    pub seed: Option<u64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            edge_margin: 150,
            seed: None,
        }
    }
}

/// Subtitle effect renderer
#[derive(Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
    registry: PresetRegistry,
}

impl Renderer {
    /// Renderer with the built-in presets
    pub fn new(options: RenderOptions) -> Self {
        Self::with_registry(options, PresetRegistry::builtin())
    }

    /// Renderer with a caller-supplied preset registry
    pub fn with_registry(options: RenderOptions, registry: PresetRegistry) -> Self {
        Self { options, registry }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Render to ASS text
    pub fn render(&self, words: &[Word], style: &StyleConfig) -> String {
        self.render_document(words, style).to_ass()
    }

    /// Render to ASS text using the given random source
    pub fn render_with_rng(&self, words: &[Word], style: &StyleConfig, rng: &mut dyn RngCore) -> String {
        self.render_document_with_rng(words, style, rng).to_ass()
    }

    /// Render to a structured document
    pub fn render_document(&self, words: &[Word], style: &StyleConfig) -> Document {
        let mut rng = self.make_rng();
        self.render_document_with_rng(words, style, &mut rng)
    }

    /// Render to a structured document using the given random source
    pub fn render_document_with_rng(&self, words: &[Word], style: &StyleConfig, rng: &mut dyn RngCore) -> Document {
        let canvas = self.options.canvas;
        let anchor = Anchor::locate(style.placement(), canvas, self.options.edge_margin);
        let preset = self.registry.resolve(style.preset_id());

        let mut document = Document::new(build_header(style, canvas));
        document.extend(preset.render(words, anchor, rng));

        debug!(
            "Rendered '{}' for {} words into {} events (anchor {},{})",
            style.preset_id(),
            words.len(),
            document.dialogue_count(),
            anchor.x,
            anchor.y
        );
        document
    }

    // @returns: Seeded rng when configured, OS entropy otherwise
    fn make_rng(&self) -> StdRng {
        match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Render with default options and the built-in presets
pub fn render(words: &[Word], style: &StyleConfig) -> String {
    Renderer::default().render(words, style)
}
