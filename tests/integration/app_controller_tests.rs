/*!
 * Integration tests for the application controller
 */

use anyhow::Result;
use subfx::app_config::Config;
use subfx::app_controller::{Controller, RenderOutcome};
use subfx::errors::{AppError, TranscriptError};
use subfx::style::{Canvas, StyleConfig};
use crate::common;

fn seeded_controller() -> Result<Controller> {
    Ok(Controller::with_config(Config {
        seed: Some(21),
        ..Default::default()
    })?)
}

#[test]
fn test_withConfig_withInvalidConfig_shouldFail() {
    let config = Config {
        canvas: Canvas { width: 1920, height: 0 },
        ..Default::default()
    };
    assert!(matches!(Controller::with_config(config), Err(AppError::Config(_))));
}

#[test]
fn test_resolveStyle_shouldPreferCliThenStyleThenConfig() -> Result<()> {
    let controller = seeded_controller()?;

    let from_config = controller.resolve_style(StyleConfig::default(), None);
    assert_eq!(from_config.preset_id(), "word-pop");
    assert_eq!(from_config.font.as_deref(), Some("Komika Axis"));

    let from_style = controller.resolve_style(
        StyleConfig {
            id: Some("neon-sign".to_string()),
            ..Default::default()
        },
        None,
    );
    assert_eq!(from_style.preset_id(), "neon-sign");
    assert_eq!(from_style.font_size, Some(64));

    let from_cli = controller.resolve_style(
        StyleConfig {
            id: Some("neon-sign".to_string()),
            font: Some("Poppins".to_string()),
            ..Default::default()
        },
        Some("zoom-burst"),
    );
    assert_eq!(from_cli.preset_id(), "zoom-burst");
    assert_eq!(from_cli.font.as_deref(), Some("Poppins"));
    assert_eq!(from_cli.primary_color.as_deref(), Some("#FF69B4"));
    Ok(())
}

#[test]
fn test_run_withTranscript_shouldWriteNextToInput() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let transcript = common::create_test_transcript(temp_dir.path(), "talk.json")?;
    let controller = seeded_controller()?;
    let style = controller.resolve_style(StyleConfig::default(), Some("karaoke-classic"));

    let outcome = controller.run(&transcript, None, &style, false)?;
    let expected_path = temp_dir.path().join("talk.karaoke-classic.ass");
    assert_eq!(outcome, RenderOutcome::Written { path: expected_path.clone(), events: 4 });

    let script = std::fs::read_to_string(&expected_path)?;
    assert!(script.contains("Style: Default, Marble, 62, &H00FFFFFF,"));
    assert_eq!(common::dialogue_lines(&script).len(), 4);
    Ok(())
}

#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let transcript = common::create_test_transcript(temp_dir.path(), "talk.json")?;
    let output = common::create_test_file(temp_dir.path(), "custom.ass", "keep me")?;
    let controller = seeded_controller()?;
    let style = controller.resolve_style(StyleConfig::default(), None);

    let skipped = controller.run(&transcript, Some(output.clone()), &style, false)?;
    assert_eq!(skipped, RenderOutcome::Skipped(output.clone()));
    assert_eq!(std::fs::read_to_string(&output)?, "keep me");

    let written = controller.run(&transcript, Some(output.clone()), &style, true)?;
    assert!(matches!(written, RenderOutcome::Written { events: 4, .. }));
    assert!(std::fs::read_to_string(&output)?.starts_with("[Script Info]"));
    Ok(())
}

#[test]
fn test_run_withMalformedTranscript_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let broken = common::create_test_file(temp_dir.path(), "broken.json", "[{\"text\": \"a\"}")?;
    let controller = seeded_controller()?;

    let error = controller.run(&broken, None, &StyleConfig::default(), false).unwrap_err();
    assert!(matches!(error, AppError::Transcript(TranscriptError::Parse(_))));
    assert!(!temp_dir.path().join("broken.word-pop.ass").exists());
    Ok(())
}

#[test]
fn test_runFolder_shouldRenderOnlyTranscripts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_transcript(temp_dir.path(), "one.json")?;
    common::create_test_transcript(temp_dir.path(), "nested/two.json")?;
    common::create_test_file(temp_dir.path(), "settings.json", r#"{"seed": 4}"#)?;
    let controller = seeded_controller()?;
    let style = controller.resolve_style(StyleConfig::default(), Some("fade-in-out"));

    let outcomes = controller.run_folder(temp_dir.path(), &style, false)?;
    assert_eq!(outcomes.len(), 2);
    assert!(temp_dir.path().join("one.fade-in-out.ass").exists());
    assert!(temp_dir.path().join("nested").join("two.fade-in-out.ass").exists());
    assert!(!temp_dir.path().join("settings.fade-in-out.ass").exists());

    let rerun = controller.run_folder(temp_dir.path(), &style, false)?;
    assert!(rerun.iter().all(|outcome| matches!(outcome, RenderOutcome::Skipped(_))));
    Ok(())
}

#[test]
fn test_runFolder_withMissingDir_shouldFail() -> Result<()> {
    let controller = seeded_controller()?;
    let result = controller.run_folder(std::path::Path::new("./no_such_transcripts_dir"), &StyleConfig::default(), false);
    assert!(matches!(result, Err(AppError::File(_))));
    Ok(())
}

#[test]
fn test_resolveStyle_withUnknownPreset_shouldRenderLikeWordPop() -> Result<()> {
    let controller = seeded_controller()?;
    let words = common::sample_words();

    let unknown = controller.resolve_style(StyleConfig::default(), Some("does-not-exist"));
    let word_pop = controller.resolve_style(StyleConfig::default(), Some("word-pop"));
    assert_eq!(unknown.preset_id(), "does-not-exist");
    assert_eq!(unknown.font, word_pop.font);
    assert_eq!(unknown.font_size, word_pop.font_size);
    assert_eq!(unknown.outline_color, word_pop.outline_color);

    let unknown_ass = controller
        .renderer()
        .render_with_rng(&words, &unknown, &mut common::seeded_rng(3));
    let word_pop_ass = controller
        .renderer()
        .render_with_rng(&words, &word_pop, &mut common::seeded_rng(3));
    assert_eq!(unknown_ass, word_pop_ass);
    Ok(())
}

#[test]
fn test_resolveStyle_withUnknownPresetOverCatalogStyle_shouldKeepExplicitFields() -> Result<()> {
    let controller = seeded_controller()?;
    let style = controller.resolve_style(
        StyleConfig {
            font: Some("Poppins".to_string()),
            ..Default::default()
        },
        Some("does-not-exist"),
    );
    assert_eq!(style.font.as_deref(), Some("Poppins"));
    assert_eq!(style.outline_color.as_deref(), Some("#333333"));
    Ok(())
}

#[test]
fn test_runFolder_withReorderedTranscriptKeys_shouldRenderIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(
        temp_dir.path(),
        "aligned.json",
        r#"[{"start": 0.0, "end": 0.5, "text": "Hi"}, {"start": 0.5, "end": 1.0, "text": "there"}]"#,
    )?;
    common::create_test_file(temp_dir.path(), "settings.json", r#"{"text": "x", "start": "later"}"#)?;
    let controller = seeded_controller()?;
    let style = controller.resolve_style(StyleConfig::default(), None);

    let outcomes = controller.run_folder(temp_dir.path(), &style, false)?;
    assert_eq!(outcomes.len(), 1);
    let script = std::fs::read_to_string(temp_dir.path().join("aligned.word-pop.ass"))?;
    assert_eq!(common::dialogue_lines(&script).len(), 2);
    assert!(!temp_dir.path().join("settings.word-pop.ass").exists());
    Ok(())
}
