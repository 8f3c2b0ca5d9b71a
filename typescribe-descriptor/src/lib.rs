//! # Typescribe Descriptor
//!
//! Type descriptor model for type-name rendering.
//!
//! This crate provides:
//! - Stable type identities with well-known core-library constructors
//! - Immutable type descriptor trees (pointer, by-ref, array, nullable,
//!   generic composites)
//! - Classification of descriptors in fixed priority order
//! - Parameter descriptors with passing direction
//!
//! Descriptor trees are built once per formatting request by a boundary
//! adapter from host type metadata and are never mutated afterwards.

pub mod descriptor;
pub mod identity;
pub mod parameter;

pub use descriptor::{Classification, TypeDescriptor};
pub use identity::{CORE_ASSEMBLY, TypeIdentity, well_known};
pub use parameter::{ParameterDescriptor, ParameterDirection};
