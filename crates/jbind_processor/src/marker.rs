//! Marker matching: decides which declarations are selected for extraction.

use jbind_model::Annotation;

/// Default annotation selecting data-bound constructors.
pub const BOUND_CONSTRUCTOR_ANNOTATION: &str = "io.jbind.BoundConstructor";

/// Documentation tag accepted as a fallback for constructors whose sources
/// cannot carry the annotation.
pub const BOUND_CONSTRUCTOR_DOC_TAG: &str = "@bound-constructor";

/// Default annotation selecting externally observable members.
pub const EXPORTED_ANNOTATION: &str = "io.jbind.Exported";

/// Identity of a marker: an annotation, optionally with a documentation-tag
/// fallback.
///
/// Selection is an OR between "declaration carries the annotation" and
/// "declaration's doc text contains the tag as a substring". Specs without a
/// tag select on the annotation alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpec {
    pub annotation: String,
    pub doc_tag: Option<String>,
}

impl MarkerSpec {
    pub fn annotation(name: impl Into<String>) -> Self {
        Self {
            annotation: name.into(),
            doc_tag: None,
        }
    }

    pub fn with_doc_tag(mut self, tag: impl Into<String>) -> Self {
        self.doc_tag = Some(tag.into());
        self
    }

    /// Marker selecting data-bound constructors (annotation or doc tag).
    pub fn bound_constructor() -> Self {
        Self::annotation(BOUND_CONSTRUCTOR_ANNOTATION).with_doc_tag(BOUND_CONSTRUCTOR_DOC_TAG)
    }

    /// Marker selecting exported members (annotation only).
    pub fn exported() -> Self {
        Self::annotation(EXPORTED_ANNOTATION)
    }

    /// True when the declaration described by `annotations` and `doc` is
    /// selected by this marker.
    pub fn selects(&self, annotations: &[Annotation], doc: Option<&str>) -> bool {
        if annotations
            .iter()
            .any(|annotation| self.matches_annotation(annotation))
        {
            return true;
        }

        match (&self.doc_tag, doc) {
            (Some(tag), Some(text)) => text.contains(tag.as_str()),
            _ => false,
        }
    }

    /// Hosts record annotations either fully qualified or by simple name;
    /// accept both spellings of the configured identity.
    fn matches_annotation(&self, annotation: &Annotation) -> bool {
        let qualified = annotation.qualified_name();
        if qualified == self.annotation {
            return true;
        }
        annotation.simple_name() == self.simple_name()
    }

    fn simple_name(&self) -> &str {
        self.annotation
            .rsplit('.')
            .next()
            .unwrap_or(self.annotation.as_str())
    }
}
