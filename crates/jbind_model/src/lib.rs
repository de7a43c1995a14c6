// jbind_model - Declaration tree consumed by the binding-metadata processor
//! This crate defines the read-only declaration tree handed to the processor
//! once per compiler pass: root types with their members, constructors,
//! nested types, annotations, and documentation comments.
//!
//! The tree is plain data. Hosts assemble it from whatever compiler front end
//! they embed; the processor only reads it and retains no ownership beyond
//! the current pass.

pub mod annotation;
pub mod declaration;
pub mod name;

pub use annotation::*;
pub use declaration::*;
pub use name::*;
