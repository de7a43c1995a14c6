use serde::{Deserialize, Serialize};

/// Annotation applied to a declaration, as seen by the compiler front end.
///
/// Hosts may record either the simple spelling (`Exported`) or the fully
/// qualified one (`com.acme.bind.Exported`); matching accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: AnnotationName,
}

impl Annotation {
    pub fn new(spelling: &str) -> Self {
        Self {
            name: AnnotationName::parse(spelling),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn qualified_name(&self) -> String {
        self.name.qualified_name()
    }
}

/// Annotation name broken into package segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationName {
    pub segments: Vec<String>,
}

impl AnnotationName {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn parse(spelling: &str) -> Self {
        Self {
            segments: spelling.split('.').map(str::to_string).collect(),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn qualified_name(&self) -> String {
        self.segments.join(".")
    }
}
