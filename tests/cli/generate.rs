//! Generation runs that never reach the network: every item is either
//! already on disk or the run is a dry run.

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const WORDS: &str = r#"
export const WORDS = [
  { en: 'to be', ua: 'бути' },
  { en: 'to eat', ua: "їсти" },
  { en: 'to be', ua: 'бути' },
];
"#;

const EXPECTED_REGISTRY: &str = "\
// AUTO-GENERATED \u{2014} do not edit manually.
// To regenerate: vocab-voice
//
// prettier-ignore
export const UK_AUDIO: Record<string, ReturnType<typeof require>> = {
  'бути': require('../assets/audio/uk/uk_0001.mp3'),
  'їсти': require('../assets/audio/uk/uk_0002.mp3'),
};
";

fn with_cached_audio() -> Result<CliTest> {
    let test = CliTest::with_file("constants/words.ts", WORDS)?;
    test.write_file("assets/audio/uk/uk_0001.mp3", "cached-1")?;
    test.write_file("assets/audio/uk/uk_0002.mp3", "cached-2")?;
    Ok(test)
}

#[test]
fn test_no_arguments_writes_registry_from_cached_audio() -> Result<()> {
    let test = with_cached_audio()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("constants/audio-uk.ts")?, EXPECTED_REGISTRY);

    let out = stdout(&output);
    assert!(out.contains("Found 2 unique texts across all word files"));
    assert!(out.contains("  [  1/2] skip   uk_0001.mp3  \"бути\""));
    assert!(out.contains("  [  2/2] skip   uk_0002.mp3  \"їсти\""));
    assert!(out.contains("\u{2713} Registry written \u{2192} constants/audio-uk.ts  (2 entries)"));
    assert!(out.contains("\u{2713} Audio files      \u{2192} assets/audio/uk/"));

    Ok(())
}

#[test]
fn test_generate_subcommand_matches_default() -> Result<()> {
    let test = with_cached_audio()?;

    let output = test.command().arg("generate").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("constants/audio-uk.ts")?, EXPECTED_REGISTRY);

    Ok(())
}

#[test]
fn test_cached_audio_is_not_overwritten() -> Result<()> {
    let test = with_cached_audio()?;

    test.command().output()?;
    test.command().output()?;

    assert_eq!(test.read_file("assets/audio/uk/uk_0001.mp3")?, "cached-1");
    assert_eq!(test.read_file("assets/audio/uk/uk_0002.mp3")?, "cached-2");
    assert_eq!(test.read_file("constants/audio-uk.ts")?, EXPECTED_REGISTRY);

    Ok(())
}

#[test]
fn test_missing_word_files_only_warn() -> Result<()> {
    let test = with_cached_audio()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("warning: constants/words-es.ts not found, skipping"));
    assert!(err.contains("warning: constants/words-de.ts not found, skipping"));

    Ok(())
}

#[test]
fn test_words_merge_across_files_in_order() -> Result<()> {
    let test = CliTest::with_file("constants/words.ts", "ua: 'кіт'")?;
    test.write_file("constants/words-es.ts", "ua: 'пес', ua: 'кіт'")?;
    test.write_file("constants/words-de.ts", "ua: \"риба\"")?;
    for n in 1..=3 {
        test.write_file(&format!("assets/audio/uk/uk_000{}.mp3", n), "x")?;
    }

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let registry = test.read_file("constants/audio-uk.ts")?;
    let lines: Vec<_> = registry.lines().filter(|l| l.contains("require(")).collect();
    assert_eq!(
        lines,
        vec![
            "  'кіт': require('../assets/audio/uk/uk_0001.mp3'),",
            "  'пес': require('../assets/audio/uk/uk_0002.mp3'),",
            "  'риба': require('../assets/audio/uk/uk_0003.mp3'),",
        ]
    );

    Ok(())
}

#[test]
fn test_empty_project_writes_empty_registry() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Found 0 unique texts"));
    assert!(test.root().join("assets/audio/uk").is_dir());
    assert!(test.read_file("constants/audio-uk.ts")?.ends_with("> = {\n};\n"));

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("constants/words.ts", WORDS)?;
    test.write_file("assets/audio/uk/uk_0002.mp3", "cached-2")?;

    let output = test.command().arg("--dry-run").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("  [  1/2] fetch uk_0001.mp3  \"бути\"  (dry run)"));
    assert!(out.contains("  [  2/2] skip   uk_0002.mp3  \"їсти\""));
    assert!(out.contains("Dry run: 1 to fetch, 1 already present (nothing written)"));
    assert!(!test.root().join("constants/audio-uk.ts").exists());
    assert!(!test.root().join("assets/audio/uk/uk_0001.mp3").exists());

    Ok(())
}

#[test]
fn test_root_flag_points_at_project() -> Result<()> {
    let test = CliTest::with_file("app/constants/words.ts", "ua: 'так'")?;
    test.write_file("app/assets/audio/uk/uk_0001.mp3", "x")?;

    let output = test.command().args(["--root", "app"]).output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let registry = test.read_file("app/constants/audio-uk.ts")?;
    assert!(registry.contains("  'так': require('../assets/audio/uk/uk_0001.mp3'),"));

    Ok(())
}

#[test]
fn test_config_file_overrides_paths_and_names() -> Result<()> {
    let test = CliTest::with_file(
        ".vocabvoicerc.json",
        r#"{
  "wordFiles": ["src/vocab.ts"],
  "audioDir": "media/voice",
  "registryFile": "src/voice.ts",
  "key": "uk",
  "filePrefix": "voice",
  "exportName": "VOICE",
  "assetPathPrefix": "../media/voice"
}"#,
    )?;
    test.write_file("src/vocab.ts", "{ uk: 'п\\'ять', ua: 'ignored', uk: 'сім' }")?;
    test.write_file("media/voice/voice_0001.mp3", "x")?;
    test.write_file("media/voice/voice_0002.mp3", "x")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let registry = test.read_file("src/voice.ts")?;
    assert!(registry.contains("export const VOICE: Record<string, ReturnType<typeof require>> = {"));
    assert!(registry.contains("  'п\\\\': require('../media/voice/voice_0001.mp3'),"));
    assert!(registry.contains("  'сім': require('../media/voice/voice_0002.mp3'),"));
    assert!(!registry.contains("ignored"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(".vocabvoicerc.json", r#"{ "exportName": "not-valid" }"#)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Invalid 'exportName'"));
    assert!(!test.root().join("constants/audio-uk.ts").exists());

    Ok(())
}
