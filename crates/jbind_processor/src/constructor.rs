//! Constructor descriptor extraction.
//!
//! Parameter names are erased from compiled output; for every constructor
//! selected by the marker this pass records them, in declaration order, in a
//! per-type descriptor the run-time binder can read back.

use crate::config::ProcessorConfig;
use crate::descriptor::{self, CONSTRUCTOR_DESCRIPTOR_EXTENSION, CONSTRUCTOR_KEY};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use jbind_model::Batch;
use tracing::debug;

/// Scan every type in the batch (nested types included) and write one
/// constructor descriptor per type with a selected constructor.
///
/// A type with several selected constructors gets the artifact of whichever
/// was processed last in declaration order; the earlier write is overwritten.
/// An I/O failure on one artifact is reported and the scan continues.
pub fn extract(
    batch: &Batch,
    config: &ProcessorConfig,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let mut written = 0;

    for decl in batch.all_types() {
        for constructor in &decl.constructors {
            if !config
                .constructor_marker
                .selects(&constructor.annotations, constructor.doc_text())
            {
                continue;
            }

            let value = constructor.parameter_names().join(",");
            let path = descriptor::descriptor_path(
                &config.output_dir,
                &decl.name,
                CONSTRUCTOR_DESCRIPTOR_EXTENSION,
            );
            sink.report(Diagnostic::note(format!("Generating {}", path.display())));

            let entries = vec![(CONSTRUCTOR_KEY.to_string(), value)];
            match descriptor::write_descriptor(&path, &entries) {
                Ok(()) => {
                    debug!(owner = %decl.name, path = %path.display(), "constructor descriptor written");
                    written += 1;
                }
                Err(error) => {
                    sink.report(Diagnostic::error(format!(
                        "failed to write constructor descriptor for {}: {}",
                        decl.name, error
                    )));
                }
            }
        }
    }

    written
}
