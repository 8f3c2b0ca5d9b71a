//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use typescribe::prelude::*;
//! ```

// Descriptor types
pub use typescribe_descriptor::{
    Classification, ParameterDescriptor, ParameterDirection, TypeDescriptor, TypeIdentity,
    well_known,
};

// Rendering types
pub use typescribe_render::{
    CSharpFormatter, RenderError, TypeFormatter, TypeNameProvider, friendly_name,
    qualified_friendly_name, strip_arity_suffix,
};
