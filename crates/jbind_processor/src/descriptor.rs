//! Per-type descriptor artifacts persisted under the compiled output tree.
//!
//! A descriptor is a small properties-style text record keyed by the owning
//! type's qualified name. Its path is derived deterministically from that
//! name, so revisiting a type in a later round overwrites the whole artifact.

use jbind_model::QualifiedName;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension of constructor descriptors.
pub const CONSTRUCTOR_DESCRIPTOR_EXTENSION: &str = "jbind";

/// Extension of member-documentation descriptors.
pub const DOC_DESCRIPTOR_EXTENSION: &str = "javadoc";

/// Fixed key under which the parameter-name list is stored.
pub const CONSTRUCTOR_KEY: &str = "constructor";

/// Error raised while persisting a descriptor artifact.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("descriptor path {path:?} has no parent directory")]
    MissingParent { path: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Artifact path for `name`: qualifier separators become path separators and
/// the fixed extension is appended (`com.acme.Widget` -> `com/acme/Widget.jbind`).
pub fn descriptor_path(output_dir: &Path, name: &QualifiedName, extension: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    let (parents, simple) = match name.segments.split_last() {
        Some((simple, parents)) => (parents, simple.as_str()),
        None => (&[] as &[String], ""),
    };
    for segment in parents {
        path.push(segment);
    }
    path.push(format!("{}.{}", simple, extension));
    path
}

/// Overwrite the artifact at `path` with the given records, one `key=value`
/// line per entry, keys sorted so repeated rounds produce identical bytes.
pub fn write_descriptor(path: &Path, entries: &[(String, String)]) -> Result<(), DescriptorError> {
    let parent = path.parent().ok_or_else(|| DescriptorError::MissingParent {
        path: path.to_path_buf(),
    })?;
    fs::create_dir_all(parent)?;

    let mut sorted: Vec<&(String, String)> = entries.iter().collect();
    sorted.sort_by(|left, right| left.0.cmp(&right.0));

    let mut contents = String::new();
    for (key, value) in sorted {
        contents.push_str(&properties_escape(key));
        contents.push('=');
        contents.push_str(&properties_escape(value));
        contents.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

fn properties_escape(value: impl AsRef<str>) -> String {
    let mut result = String::new();
    for ch in value.as_ref().chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '=' => result.push_str("\\="),
            ':' => result.push_str("\\:"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            ' ' => result.push_str("\\ "),
            other => result.push(other),
        }
    }
    result
}
