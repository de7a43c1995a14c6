use crate::annotation::Annotation;
use crate::name::QualifiedName;
use serde::{Deserialize, Serialize};

/// All root type declarations visited in one compiler pass.
///
/// Nested types hang off their enclosing root; they are not repeated at the
/// batch level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub roots: Vec<TypeDecl>,
}

impl Batch {
    pub fn new(roots: Vec<TypeDecl>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every type declaration in the batch, roots first, then nested types
    /// depth-first in declaration order.
    pub fn all_types(&self) -> Vec<&TypeDecl> {
        let mut collected = Vec::new();
        for root in &self.roots {
            collect_types(root, &mut collected);
        }
        collected
    }
}

fn collect_types<'a>(decl: &'a TypeDecl, into: &mut Vec<&'a TypeDecl>) {
    into.push(decl);
    for nested in &decl.nested_types {
        collect_types(nested, into);
    }
}

/// A class-like declaration with its enclosed members and nested types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: QualifiedName,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
    #[serde(default)]
    pub nested_types: Vec<TypeDecl>,
}

impl TypeDecl {
    pub fn new(name: impl Into<QualifiedName>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            doc: None,
            constructors: Vec::new(),
            members: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_nested(mut self, nested: TypeDecl) -> Self {
        self.nested_types.push(nested);
        self
    }

    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// Field or method kind marker for members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Field,
    Method,
}

/// A field or method enclosed directly in a type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDecl {
    pub kind: MemberKind,
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl MemberDecl {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Field,
            name: name.into(),
            annotations: Vec::new(),
            doc: None,
        }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Method,
            name: name.into(),
            annotations: Vec::new(),
            doc: None,
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// A constructor with its ordered parameter list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl ConstructorDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterDecl { name: name.into() });
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Parameter names in declaration order. Duplicates are preserved.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .map(|parameter| parameter.name.as_str())
            .collect()
    }
}

/// A single constructor parameter. Only the simple name survives erasure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
}
