//! # Typescribe
//!
//! Type-name rendering for code-generation templates.
//!
//! Typescribe converts an in-memory description of a data type, possibly
//! composite (pointer, by-ref, array, nullable, generic), into a
//! syntactically valid type-name string for a target language's grammar.
//! Template hosts splice the returned string verbatim into generated source.
//!
//! ## Features
//!
//! - **Descriptor trees** - Immutable, pre-resolved type descriptors built
//!   once at the boundary by a host adapter
//! - **Fixed-priority classification** - Pointer, by-ref, array, nullable,
//!   generic, simple, with the nullable rule applied before the general
//!   generic rule
//! - **Per-language renderers** - A small formatter contract composed with
//!   one shared recursion engine; the C# renderer ships in the box
//! - **Identity-keyed aliases** - Keyword spellings (`int`, `string`, …)
//!   looked up by type identity, never by name string
//!
//! ## Quick Start
//!
//! ```
//! use typescribe::prelude::*;
//!
//! let list_of_nullable_int = TypeDescriptor::generic(
//!     TypeIdentity::new("System.Collections.Generic", "List`1"),
//!     vec![TypeDescriptor::nullable(TypeDescriptor::simple(
//!         well_known::int32(),
//!     ))],
//!     false,
//! );
//!
//! assert_eq!(friendly_name(&list_of_nullable_int), "List<int?>");
//! ```
//!
//! ## Crate Organization
//!
//! - [`descriptor`] - Type identities, descriptor trees, classification,
//!   parameter descriptors
//! - [`render`] - The formatter contract, the resolution engine, and the C#
//!   renderer with its alias table

pub mod prelude;

/// Type identities, descriptor trees, classification, and parameters.
pub mod descriptor {
    pub use typescribe_descriptor::*;
}

/// Formatter contract, resolution engine, and language renderers.
pub mod render {
    pub use typescribe_render::*;
}
