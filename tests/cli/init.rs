use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .vocabvoicerc.json"));

    let content = test.read_file(".vocabvoicerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["key"], "ua");
    assert_eq!(parsed["language"], "uk");
    assert_eq!(parsed["audioDir"], "assets/audio/uk");
    assert_eq!(parsed["wordFiles"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".vocabvoicerc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".vocabvoicerc.json already exists"));
    assert_eq!(test.read_file(".vocabvoicerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    let output = test.command().arg("--dry-run").output()?;

    assert!(
        output.status.success(),
        "Dry run should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
