//! Cross-invocation behavior of the pipeline: accumulation, idempotence, and
//! the per-batch visibility limits of the closure.

use jbind_model::{Annotation, Batch, ConstructorDecl, MemberDecl, TypeDecl};
use jbind_processor::{
    CollectedDiagnostics, Processor, ProcessorConfig, REGISTRY_RELATIVE_PATH,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn bound(constructor: ConstructorDecl) -> ConstructorDecl {
    constructor.with_annotation(Annotation::new("BoundConstructor"))
}

fn exported(member: MemberDecl) -> MemberDecl {
    member.with_annotation(Annotation::new("Exported"))
}

fn run_round(output_dir: &Path, batch: &Batch) -> CollectedDiagnostics {
    let processor = Processor::new(ProcessorConfig::new(output_dir));
    let mut sink = CollectedDiagnostics::new();
    let outcome = processor.process_round(batch, &mut sink);
    assert!(outcome.continue_processing);
    sink
}

fn registry_contents(output_dir: &Path) -> String {
    fs::read_to_string(output_dir.join(REGISTRY_RELATIVE_PATH)).expect("read registry")
}

#[test]
fn repeated_rounds_over_an_unchanged_batch_are_byte_identical() {
    let temp = tempdir().expect("tempdir");
    let batch = Batch::new(vec![TypeDecl::new("com.acme.Widget")
        .with_constructor(bound(
            ConstructorDecl::new().with_parameter("x").with_parameter("y"),
        ))
        .with_member(exported(MemberDecl::field("limit")))]);

    run_round(temp.path(), &batch);
    let registry_first = registry_contents(temp.path());
    let descriptor_first =
        fs::read(temp.path().join("com/acme/Widget.jbind")).expect("read descriptor");

    run_round(temp.path(), &batch);
    let registry_second = registry_contents(temp.path());
    let descriptor_second =
        fs::read(temp.path().join("com/acme/Widget.jbind")).expect("read descriptor");

    assert_eq!(registry_first, registry_second);
    assert_eq!(descriptor_first, descriptor_second);
}

#[test]
fn independent_invocations_accumulate_into_one_registry() {
    let temp = tempdir().expect("tempdir");

    // Separately compiled modules, one invocation each, same output tree.
    let module_a = Batch::new(vec![
        TypeDecl::new("com.acme.a.First").with_member(exported(MemberDecl::field("value")))
    ]);
    let module_b = Batch::new(vec![
        TypeDecl::new("com.acme.b.Second").with_member(exported(MemberDecl::field("value")))
    ]);

    run_round(temp.path(), &module_a);
    run_round(temp.path(), &module_b);

    assert_eq!(
        registry_contents(temp.path()),
        "com.acme.a.First\ncom.acme.b.Second\n"
    );
}

#[test]
fn out_of_order_invocations_converge_to_the_same_registry() {
    let forward = tempdir().expect("tempdir");
    let reversed = tempdir().expect("tempdir");
    let module_a = Batch::new(vec![
        TypeDecl::new("com.acme.a.First").with_member(exported(MemberDecl::field("value")))
    ]);
    let module_b = Batch::new(vec![
        TypeDecl::new("com.acme.b.Second").with_member(exported(MemberDecl::field("value")))
    ]);

    run_round(forward.path(), &module_a);
    run_round(forward.path(), &module_b);
    run_round(reversed.path(), &module_b);
    run_round(reversed.path(), &module_a);

    assert_eq!(
        registry_contents(forward.path()),
        registry_contents(reversed.path())
    );
}

#[test]
fn registry_entries_survive_rounds_that_do_not_revisit_them() {
    let temp = tempdir().expect("tempdir");
    let first = Batch::new(vec![
        TypeDecl::new("com.acme.Old").with_member(exported(MemberDecl::field("value")))
    ]);
    let second = Batch::new(vec![
        TypeDecl::new("com.acme.New").with_member(exported(MemberDecl::field("value")))
    ]);

    run_round(temp.path(), &first);
    run_round(temp.path(), &second);

    assert_eq!(registry_contents(temp.path()), "com.acme.New\ncom.acme.Old\n");
}

#[test]
fn stale_descriptors_are_left_behind_when_a_type_disappears() {
    let temp = tempdir().expect("tempdir");
    let first = Batch::new(vec![TypeDecl::new("com.acme.Gone").with_constructor(bound(
        ConstructorDecl::new().with_parameter("value"),
    ))]);
    run_round(temp.path(), &first);
    assert!(temp.path().join("com/acme/Gone.jbind").exists());

    // A later pass that no longer contains the type neither refreshes nor
    // deletes the old artifact.
    let second = Batch::new(vec![TypeDecl::new("com.acme.Other").with_constructor(bound(
        ConstructorDecl::new().with_parameter("other"),
    ))]);
    run_round(temp.path(), &second);

    let stale = fs::read_to_string(temp.path().join("com/acme/Gone.jbind"))
        .expect("stale descriptor still present");
    assert_eq!(stale, "constructor=value\n");
}

#[test]
fn closure_only_sees_nested_types_of_the_current_batch() {
    let temp = tempdir().expect("tempdir");

    // First pass compiles the root with its nested type but nothing marked.
    let first = Batch::new(vec![TypeDecl::new("com.acme.R")
        .with_nested(TypeDecl::new("com.acme.R.Inner"))]);
    run_round(temp.path(), &first);

    // Second pass marks the root but no longer carries the nested type:
    // exposure cannot reach com.acme.R.Inner compiled in the earlier pass.
    let second = Batch::new(vec![
        TypeDecl::new("com.acme.R").with_member(exported(MemberDecl::field("value")))
    ]);
    run_round(temp.path(), &second);

    assert_eq!(registry_contents(temp.path()), "com.acme.R\n");
}

#[test]
fn seeded_registry_with_blank_lines_is_cleaned_on_merge() {
    let temp = tempdir().expect("tempdir");
    let registry = temp.path().join(REGISTRY_RELATIVE_PATH);
    fs::create_dir_all(registry.parent().expect("parent")).expect("create META-INF");
    fs::write(&registry, "com.acme.Seeded\n\n   \n").expect("seed registry");

    let batch = Batch::new(vec![
        TypeDecl::new("com.acme.Widget").with_member(exported(MemberDecl::field("value")))
    ]);
    run_round(temp.path(), &batch);

    assert_eq!(
        registry_contents(temp.path()),
        "com.acme.Seeded\ncom.acme.Widget\n"
    );
}

#[test]
fn doc_capture_rounds_overwrite_per_type_doc_descriptors() {
    let temp = tempdir().expect("tempdir");
    let processor = Processor::new(ProcessorConfig::new(temp.path()).with_doc_capture(true));
    let mut sink = CollectedDiagnostics::new();

    let first = Batch::new(vec![TypeDecl::new("com.acme.Widget")
        .with_member(exported(MemberDecl::field("limit").with_doc("Old text.")))]);
    processor.process_round(&first, &mut sink);

    let second = Batch::new(vec![TypeDecl::new("com.acme.Widget")
        .with_member(exported(MemberDecl::method("getLimit").with_doc("New text.")))]);
    processor.process_round(&second, &mut sink);

    let contents = fs::read_to_string(temp.path().join("com/acme/Widget.javadoc"))
        .expect("read doc descriptor");
    assert_eq!(contents, "getLimit()=New\\ text.\n");
}
