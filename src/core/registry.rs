//! Generated TypeScript registry mapping each text to its bundled audio asset.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// One resolved text and the asset file that voices it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub text: String,
    pub file_name: String,
}

/// Naming knobs for the generated module.
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    pub export_name: String,
    /// Asset directory relative to the registry file, without trailing slash.
    pub asset_path_prefix: String,
    pub regenerate_command: String,
}

/// Escape text for a single-quoted TypeScript string literal.
pub fn escape_ts_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render the registry source. Entries keep their given order.
pub fn render_registry(entries: &[RegistryEntry], options: &RegistryOptions) -> String {
    let prefix = options.asset_path_prefix.trim_end_matches('/');

    let mut lines = vec![
        "// AUTO-GENERATED \u{2014} do not edit manually.".to_string(),
        format!("// To regenerate: {}", options.regenerate_command),
        "//".to_string(),
        "// prettier-ignore".to_string(),
        format!(
            "export const {}: Record<string, ReturnType<typeof require>> = {{",
            options.export_name
        ),
    ];
    lines.extend(entries.iter().map(|entry| {
        format!(
            "  '{}': require('{}/{}'),",
            escape_ts_string(&entry.text),
            prefix,
            entry.file_name
        )
    }));
    lines.push("};".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Overwrite the registry file, creating its directory if needed.
pub fn write_registry(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write registry: {}", path.display()))
}
