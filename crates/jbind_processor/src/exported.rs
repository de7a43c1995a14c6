//! Exported-member collection.
//!
//! A root type becomes "exposed" when any directly enclosed member carries
//! the export marker. Directly nested types are recorded alongside for the
//! closure step, whether or not their enclosing root is exposed.

use crate::config::ProcessorConfig;
use crate::descriptor::{self, DOC_DESCRIPTOR_EXTENSION};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::marker::MarkerSpec;
use jbind_model::{Batch, MemberDecl, MemberKind, QualifiedName};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// What one pass over the batch's root types observed.
#[derive(Debug, Default)]
pub struct ExportedCollection {
    /// Root type names with at least one marked member.
    pub exposed_roots: BTreeSet<String>,
    /// Root type name -> names of its directly nested types.
    pub nested_by_root: HashMap<String, Vec<String>>,
    /// Exposed type -> documentation records of its marked members.
    pub docs_by_type: BTreeMap<QualifiedName, Vec<(String, String)>>,
}

/// Inspect every root type's directly enclosed declarations.
pub fn collect(batch: &Batch, marker: &MarkerSpec) -> ExportedCollection {
    let mut collection = ExportedCollection::default();

    for root in &batch.roots {
        let root_name = root.name.qualified();

        if !root.nested_types.is_empty() {
            let nested = collection
                .nested_by_root
                .entry(root_name.clone())
                .or_default();
            for nested_type in &root.nested_types {
                nested.push(nested_type.name.qualified());
            }
        }

        let mut docs = Vec::new();
        let mut exposed = false;
        for member in &root.members {
            if !marker.selects(&member.annotations, member.doc_text()) {
                continue;
            }
            exposed = true;
            if let Some(doc) = member.doc_text() {
                docs.push((member_label(member), doc.to_string()));
            }
        }

        if exposed {
            collection.exposed_roots.insert(root_name);
            collection.docs_by_type.insert(root.name.clone(), docs);
        }
    }

    collection
}

/// Write one documentation descriptor per exposed type (documentation-capture
/// mode). Members without doc text were already skipped at collection.
pub fn write_doc_descriptors(
    collection: &ExportedCollection,
    config: &ProcessorConfig,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let mut written = 0;

    for (name, entries) in &collection.docs_by_type {
        let path = descriptor::descriptor_path(&config.output_dir, name, DOC_DESCRIPTOR_EXTENSION);
        sink.report(Diagnostic::note(format!("Generating {}", path.display())));

        match descriptor::write_descriptor(&path, entries) {
            Ok(()) => {
                debug!(owner = %name, path = %path.display(), "documentation descriptor written");
                written += 1;
            }
            Err(error) => {
                sink.report(Diagnostic::error(format!(
                    "failed to write documentation descriptor for {}: {}",
                    name, error
                )));
            }
        }
    }

    written
}

/// Field members keep their simple name; method members are suffixed so the
/// consumer can tell the two apart.
fn member_label(member: &MemberDecl) -> String {
    match member.kind {
        MemberKind::Field => member.name.clone(),
        MemberKind::Method => format!("{}()", member.name),
    }
}
