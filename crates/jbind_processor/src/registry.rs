//! Persistent registry of exposed type names.
//!
//! One artifact at a fixed path under the output root accumulates the
//! exposed set across compiler invocations. Each round loads whatever a
//! previous round left behind, unions in its own exposed names, and rewrites
//! the whole file; overwriting from scratch would drop entries contributed
//! by separately compiled batches.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Registry location relative to the output root.
pub const REGISTRY_RELATIVE_PATH: &str = "META-INF/exposed.jbind-beans";

/// Error raised while persisting the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry path {path:?} has no parent directory")]
    MissingParent { path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to replace registry at {path:?}: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn registry_path(output_dir: &Path) -> PathBuf {
    output_dir.join(REGISTRY_RELATIVE_PATH)
}

/// Load the existing registry, one trimmed name per line.
///
/// An absent or unreadable registry is treated as empty; a later round
/// re-derives and re-merges the same data, so degrading beats failing.
pub fn load(output_dir: &Path) -> BTreeSet<String> {
    let path = registry_path(output_dir);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return BTreeSet::new(),
        Err(error) => {
            warn!(path = %path.display(), %error, "registry unreadable, starting from empty");
            return BTreeSet::new();
        }
    };

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Union `exposed` into the persisted registry and rewrite it sorted, one
/// name per line, UTF-8.
///
/// The new contents land in a temporary file in the registry's directory and
/// are renamed over the old file, so a concurrent reader sees either the old
/// or the new complete registry, never a partial write.
pub fn merge_and_store(
    output_dir: &Path,
    exposed: &BTreeSet<String>,
) -> Result<BTreeSet<String>, RegistryError> {
    let path = registry_path(output_dir);
    let parent = path.parent().ok_or_else(|| RegistryError::MissingParent {
        path: path.clone(),
    })?;
    fs::create_dir_all(parent)?;

    let mut merged = load(output_dir);
    merged.extend(exposed.iter().cloned());

    let mut contents = String::new();
    for name in &merged {
        contents.push_str(name);
        contents.push('\n');
    }

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(&path).map_err(|error| RegistryError::Replace {
        path: path.clone(),
        source: error.error,
    })?;

    debug!(path = %path.display(), entries = merged.len(), "registry rewritten");
    Ok(merged)
}
