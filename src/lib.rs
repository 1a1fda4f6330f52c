/*!
 * # subfx - preset-driven ASS subtitle effects
 *
 * A Rust library that turns timed word lists into Advanced SubStation Alpha
 * scripts, animating the words with named visual effect presets.
 *
 * ## Features
 *
 * - Eleven built-in presets:
 *   - per-word effects (matrix rain, electric shock, smoke trail, pixel glitch,
 *     neon sign, word pop)
 *   - line effects (karaoke, typewriter, fade, slide-up, zoom burst)
 * - Open preset registry with a total fallback to word pop
 * - Injectable random source for reproducible particle layouts
 * - Batch rendering of transcript folders
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timebase`: Timestamp and colour encoding
 * - `document`: Script model and serialization:
 *   - `document::header`: `[Script Info]` and `[V4+ Styles]` preamble
 *   - `document::event`: Override tags and dialogue events
 * - `style`: Style records, preset catalog and anchor geometry
 * - `transcript`: Word list loading
 * - `effects`: Effect implementations
 * - `dispatch`: Preset registry
 * - `renderer`: Render entry points
 * - `app_config`: Configuration management
 * - `app_controller`: Single-file and folder rendering
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dispatch;
pub mod document;
pub mod effects;
pub mod errors;
pub mod file_utils;
pub mod renderer;
pub mod style;
pub mod timebase;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::Config;
pub use dispatch::{Preset, PresetRegistry};
pub use document::{Document, Event, Tag};
pub use errors::{AppError, CodecError, TranscriptError};
pub use renderer::{render, RenderOptions, Renderer};
pub use style::{Canvas, StyleConfig};
pub use transcript::Word;
