// jbind_processor - Compile-time extraction pipelines and persistent registry
//! Once per compiler pass, the processor scans the batch of declarations the
//! host visited, extracts binding metadata from marked declarations, and
//! persists it under the output tree:
//!
//! - constructor descriptors capture parameter names per data-bound type;
//! - exported-member collection marks types exposed and (optionally) captures
//!   member documentation;
//! - the exposed set, widened by the one-level nested-type closure, is merged
//!   into a registry shared by every invocation targeting the output tree.
//!
//! The whole sequence is synchronous and single-threaded, and nothing in it
//! is fatal to the host: failures degrade to diagnostics on the supplied sink
//! and the round reports itself processed either way.

pub mod closure;
pub mod config;
pub mod constructor;
pub mod descriptor;
pub mod diagnostics;
pub mod exported;
pub mod marker;
pub mod registry;

pub use config::ProcessorConfig;
pub use descriptor::{
    DescriptorError, CONSTRUCTOR_DESCRIPTOR_EXTENSION, CONSTRUCTOR_KEY, DOC_DESCRIPTOR_EXTENSION,
};
pub use diagnostics::{CollectedDiagnostics, Diagnostic, DiagnosticSink, Severity};
pub use marker::{
    MarkerSpec, BOUND_CONSTRUCTOR_ANNOTATION, BOUND_CONSTRUCTOR_DOC_TAG, EXPORTED_ANNOTATION,
};
pub use registry::{RegistryError, REGISTRY_RELATIVE_PATH};

use jbind_model::Batch;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Summary of one processed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Always true: the processor never asks the host to stop compiling.
    pub continue_processing: bool,
    /// Constructor descriptors written this round.
    pub constructor_descriptors: usize,
    /// Documentation descriptors written this round (doc-capture mode only).
    pub doc_descriptors: usize,
    /// Registry size after the merge, or `None` when the rewrite failed.
    pub registry_entries: Option<usize>,
}

/// The extraction pipeline, configured once and invoked per compiler pass.
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Run the full scan -> extract -> merge -> persist sequence over one
    /// batch.
    ///
    /// Extraction failures are reported to `sink` and never abort the batch;
    /// the registry merge runs once per round regardless of how many
    /// declarations matched, so an unchanged round rewrites the registry
    /// byte-identically.
    pub fn process_round(&self, batch: &Batch, sink: &mut dyn DiagnosticSink) -> RoundOutcome {
        let constructor_descriptors = constructor::extract(batch, &self.config, sink);

        let collection = exported::collect(batch, &self.config.export_marker);
        let doc_descriptors = if self.config.capture_docs {
            exported::write_doc_descriptors(&collection, &self.config, sink)
        } else {
            0
        };

        let expanded = closure::expand(&collection.exposed_roots, &collection.nested_by_root);

        let registry_entries = match registry::merge_and_store(&self.config.output_dir, &expanded)
        {
            Ok(merged) => Some(merged.len()),
            Err(error) => {
                sink.report(Diagnostic::error(format!(
                    "failed to update exposed-type registry: {}",
                    error
                )));
                None
            }
        };

        info!(
            constructor_descriptors,
            doc_descriptors,
            exposed = expanded.len(),
            registry_entries = registry_entries.unwrap_or(0),
            "round processed"
        );

        RoundOutcome {
            continue_processing: true,
            constructor_descriptors,
            doc_descriptors,
            registry_entries,
        }
    }
}
