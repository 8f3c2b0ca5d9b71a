//! Parameter descriptors.
//!
//! Parameters carry the passing direction separately from the type shape:
//! an `out` parameter surfaces in metadata as a by-ref type plus an
//! out-attribute, so adapters fold both facts into a single
//! [`ParameterDirection`].

use crate::descriptor::TypeDescriptor;

/// Passing direction of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterDirection {
    /// Passed by value.
    #[default]
    In,
    /// Passed by reference, readable and writable by the callee.
    Ref,
    /// Passed by reference, written by the callee.
    Out,
}

/// One parameter of an operation: name, type, and passing direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    parameter_type: TypeDescriptor,
    direction: ParameterDirection,
}

impl ParameterDescriptor {
    /// Creates a by-value parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            direction: ParameterDirection::In,
        }
    }

    /// Sets the passing direction.
    #[must_use]
    pub fn with_direction(mut self, direction: ParameterDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter type.
    #[must_use]
    pub fn parameter_type(&self) -> &TypeDescriptor {
        &self.parameter_type
    }

    /// Returns the passing direction.
    #[must_use]
    pub fn direction(&self) -> ParameterDirection {
        self.direction
    }

    /// Returns true if the parameter is passed as `ref`.
    #[must_use]
    pub fn is_ref(&self) -> bool {
        self.direction == ParameterDirection::Ref
    }

    /// Returns true if the parameter is passed as `out`.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.direction == ParameterDirection::Out
    }

    /// Returns true if the parameter is passed as either `ref` or `out`.
    #[must_use]
    pub fn is_out_or_ref(&self) -> bool {
        self.is_out() || self.is_ref()
    }
}
