use crate::marker::MarkerSpec;
use std::path::{Path, PathBuf};

/// Per-invocation configuration for the processor.
///
/// The host passes one of these into every round; there is no process-wide
/// destination state to set up beforehand.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Root of the compiled output tree; all artifacts land beneath it.
    pub output_dir: PathBuf,
    /// Marker selecting data-bound constructors.
    pub constructor_marker: MarkerSpec,
    /// Marker selecting exported members.
    pub export_marker: MarkerSpec,
    /// Write per-type documentation descriptors for exposed types.
    pub capture_docs: bool,
}

impl ProcessorConfig {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            constructor_marker: MarkerSpec::bound_constructor(),
            export_marker: MarkerSpec::exported(),
            capture_docs: false,
        }
    }

    pub fn with_constructor_marker(mut self, marker: MarkerSpec) -> Self {
        self.constructor_marker = marker;
        self
    }

    pub fn with_export_marker(mut self, marker: MarkerSpec) -> Self {
        self.export_marker = marker;
        self
    }

    pub fn with_doc_capture(mut self, capture_docs: bool) -> Self {
        self.capture_docs = capture_docs;
        self
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new("./out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{BOUND_CONSTRUCTOR_ANNOTATION, EXPORTED_ANNOTATION};

    #[test]
    fn default_config_uses_standard_markers() {
        let config = ProcessorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./out"));
        assert_eq!(
            config.constructor_marker.annotation,
            BOUND_CONSTRUCTOR_ANNOTATION
        );
        assert!(config.constructor_marker.doc_tag.is_some());
        assert_eq!(config.export_marker.annotation, EXPORTED_ANNOTATION);
        assert!(config.export_marker.doc_tag.is_none());
        assert!(!config.capture_docs);
    }

    #[test]
    fn builders_override_fields() {
        let config = ProcessorConfig::new("/tmp/out")
            .with_export_marker(MarkerSpec::annotation("com.acme.Visible"))
            .with_doc_capture(true);
        assert_eq!(config.export_marker.annotation, "com.acme.Visible");
        assert!(config.capture_docs);
    }
}
