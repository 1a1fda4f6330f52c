use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::{FileManager, FileType};
use crate::renderer::Renderer;
use crate::style::{StyleConfig, DEFAULT_PRESET};
use crate::transcript;

// @module: Application controller for transcript rendering

/// Outcome of rendering one transcript file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Script written to the given path with this many dialogue rows
    Written { path: PathBuf, events: usize },
    /// Output already existed and overwrite was not forced
    Skipped(PathBuf),
}

/// Main application controller for subtitle rendering
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Effect renderer built from the config
    renderer: Renderer,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;
        let renderer = Renderer::new(config.render_options());
        Ok(Self { config, renderer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Resolve the style for a run
    ///
    /// The preset comes from `preset_override`, then the style record, then the
    /// config default. Catalog defaults for that preset fill any field the
    /// style record leaves unset. An unregistered id keeps its name but takes
    /// the word-pop defaults, matching the effect it falls back to.
    pub fn resolve_style(&self, style: StyleConfig, preset_override: Option<&str>) -> StyleConfig {
        let preset_id = preset_override
            .map(str::to_string)
            .or_else(|| style.id.clone())
            .unwrap_or_else(|| self.config.default_preset.clone());

        let catalog_id = if self.renderer.registry().contains(&preset_id) {
            preset_id.as_str()
        } else {
            warn!("Preset '{}' is not registered, word-pop will be used", preset_id);
            DEFAULT_PRESET
        };

        let mut resolved = style.over(StyleConfig::for_preset(catalog_id));
        resolved.id = Some(preset_id);
        resolved
    }

    /// Render one transcript file
    ///
    /// When `output` is `None` the script is written next to the input as
    /// `<stem>.<preset>.<ext>`.
    pub fn run(&self, input_file: &Path, output: Option<PathBuf>, style: &StyleConfig, force_overwrite: bool) -> Result<RenderOutcome, AppError> {
        let output_path = output.unwrap_or_else(|| {
            FileManager::generate_output_path(
                input_file,
                input_file.parent().unwrap_or(Path::new(".")),
                style.preset_id(),
                &self.config.output_extension,
            )
        });

        if output_path.exists() && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
            return Ok(RenderOutcome::Skipped(output_path));
        }

        let words = transcript::load_transcript(input_file)?;
        if words.is_empty() {
            warn!("Transcript {:?} contains no words, writing an empty script", input_file);
        }

        let document = self.renderer.render_document(&words, style);
        FileManager::write_to_file(&output_path, &document.to_ass())
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        debug!("Wrote {} events to {:?}", document.dialogue_count(), output_path);
        Ok(RenderOutcome::Written {
            path: output_path,
            events: document.dialogue_count(),
        })
    }

    /// Render every transcript found under `input_dir`
    pub fn run_folder(&self, input_dir: &Path, style: &StyleConfig, force_overwrite: bool) -> Result<Vec<RenderOutcome>, AppError> {
        if !FileManager::dir_exists(input_dir) {
            return Err(AppError::File(format!("Input directory does not exist: {:?}", input_dir)));
        }

        let transcripts: Vec<PathBuf> = FileManager::find_files(input_dir, "json")
            .map_err(|e| AppError::File(format!("{:#}", e)))?
            .into_iter()
            .filter(|path| match FileManager::detect_file_type(path) {
                Ok(FileType::Transcript) => true,
                _ => {
                    debug!("Skipping {:?}: not a word transcript", path);
                    false
                }
            })
            .collect();

        if transcripts.is_empty() {
            warn!("No transcripts found in {:?}", input_dir);
            return Ok(Vec::new());
        }

        info!("Rendering {} transcript(s) with '{}'", transcripts.len(), style.preset_id());

        let folder_pb = ProgressBar::new(transcripts.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Rendering files");

        let mut outcomes = Vec::with_capacity(transcripts.len());
        let mut failures = 0;
        for path in &transcripts {
            match self.run(path, None, style, force_overwrite) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    failures += 1;
                    error!("Error rendering {:?}: {:#}", path, e);
                }
            }
            folder_pb.inc(1);
        }
        folder_pb.finish_with_message("Done");

        info!("Finished rendering {} files ({} failed)", outcomes.len(), failures);
        Ok(outcomes)
    }
}
