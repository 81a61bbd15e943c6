//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ManifestError, ManifestResult};

use super::types::Config;

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "assetdigest.toml";

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "ASSETDIGEST_";

/// Non-fatal configuration warning (unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ManifestResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ManifestError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// Unreadable or invalid files are skipped with a warning so a broken user
/// config never blocks generation.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("assetdigest").join("config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!(
                        key = %warning.key,
                        file = %warning.file.display(),
                        suggestion = ?warning.suggestion,
                        "unknown configuration key"
                    );
                }
                return with_env_overrides(config);
            }
            Err(e) => tracing::warn!(error = %e, "skipping configuration file"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (ASSETDIGEST_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
///
/// `lookup` receives full variable names such as `ASSETDIGEST_DIALECT`.
/// Values that do not parse leave the setting unchanged.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));

    // ASSETDIGEST_DIALECT
    if let Some(value) = var("DIALECT") {
        match value.parse() {
            Ok(dialect) => config.manifest.dialect = dialect,
            Err(e) => tracing::warn!(error = %e, "ignoring ASSETDIGEST_DIALECT"),
        }
    }

    // ASSETDIGEST_DUPLICATES
    if let Some(value) = var("DUPLICATES") {
        match value.parse() {
            Ok(policy) => config.manifest.duplicates = policy,
            Err(e) => tracing::warn!(error = %e, "ignoring ASSETDIGEST_DUPLICATES"),
        }
    }

    // ASSETDIGEST_ALIGN
    if let Some(value) = var("ALIGN") {
        config.manifest.align = value.to_lowercase() != "false" && value != "0";
    }

    config
}

/// Line (1-based) where `key` is assigned, ignoring values and comments
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|idx| idx + 1)
}

/// Closest known key within two edits, first known key on ties
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &["manifest", "dialect", "duplicates", "align"];

    KNOWN_KEYS
        .iter()
        .map(|key| (*key, edit_distance(unknown, key)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(key, _)| key.to_string())
}

/// Levenshtein distance over chars, single-row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
