use std::path::{Path, PathBuf};

use nutria_metrics::RecordVocabulary;

const VOCABULARY_FILE: &str = "vocabulary.json";

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("nutria"))
}

/// `<config dir>/nutria/vocabulary.json`, whether or not it exists.
pub fn default_vocabulary_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(VOCABULARY_FILE))
}

pub fn load_vocabulary(path: &Path) -> eyre::Result<RecordVocabulary> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read vocabulary at {}: {e}", path.display()))?;
    let vocabulary = RecordVocabulary::from_json(&contents)
        .map_err(|e| eyre::eyre!("failed to load vocabulary at {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "vocabulary loaded");
    Ok(vocabulary)
}

/// Pick the vocabulary: an explicit path must load; otherwise the file in
/// the config directory is used when present, else the built-in defaults.
pub fn resolve_vocabulary(explicit: Option<&Path>) -> eyre::Result<RecordVocabulary> {
    if let Some(path) = explicit {
        return load_vocabulary(path);
    }
    match default_vocabulary_path() {
        Ok(path) if path.exists() => load_vocabulary(&path),
        _ => {
            tracing::debug!("using built-in vocabulary");
            Ok(RecordVocabulary::default())
        }
    }
}

pub fn save_vocabulary(path: &Path, vocabulary: &RecordVocabulary) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = vocabulary.clone();
    stamped.config_version = nutria_metrics::vocabulary::CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "vocabulary saved");
    Ok(())
}
