use serde::{Deserialize, Serialize};
use std::fmt;

/// Dot-qualified type name broken into package and nesting segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    pub segments: Vec<String>,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a `.`-separated spelling such as `com.acme.Widget`.
    pub fn parse(spelling: &str) -> Self {
        Self {
            segments: spelling.split('.').map(str::to_string).collect(),
        }
    }

    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn qualified(&self) -> String {
        self.segments.join(".")
    }

    /// Name of a declaration nested directly inside this one.
    pub fn child(&self, simple_name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(simple_name.into());
        Self { segments }
    }

    pub fn split_package(&self) -> (Option<String>, String) {
        if self.segments.len() <= 1 {
            return (None, self.simple_name().to_string());
        }

        let package = self.segments[..self.segments.len() - 1].join(".");
        (Some(package), self.simple_name().to_string())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

impl From<&str> for QualifiedName {
    fn from(spelling: &str) -> Self {
        Self::parse(spelling)
    }
}
