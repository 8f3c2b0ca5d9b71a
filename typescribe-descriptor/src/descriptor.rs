//! Type descriptors and classification.
//!
//! A [`TypeDescriptor`] is an immutable tree describing one possibly
//! composite type. Boundary adapters build the tree once per formatting
//! request from host type metadata; the rendering engine walks it and never
//! queries a live type system.

use crate::identity::TypeIdentity;

/// Immutable tree node describing one type.
///
/// There is deliberately no `Nullable` variant: at the raw-metadata level an
/// optional value type is a generic instantiation of the reserved
/// ``System.Nullable`1`` definition, and [`TypeDescriptor::classification`]
/// derives nullable-ness from that identity. Jagged arrays are `Array`
/// descriptors whose element is itself an `Array` descriptor; rectangular
/// multi-dimensional arrays carry a rank of 2 or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Plain named type: primitives, plain value or reference types, open
    /// generic definitions encountered as leaves, and enumerations.
    Simple {
        /// Identity of the type.
        identity: TypeIdentity,
    },
    /// Pointer to an element type.
    Pointer {
        /// The pointee type.
        element: Box<TypeDescriptor>,
    },
    /// By-reference passing of an element type.
    ByRef {
        /// The referenced type.
        element: Box<TypeDescriptor>,
    },
    /// Array of an element type.
    Array {
        /// The element type.
        element: Box<TypeDescriptor>,
        /// Number of dimensions; 1 is single-dimensional, 2 or more is
        /// rectangular.
        rank: u32,
    },
    /// Closed generic instantiation.
    Generic {
        /// Identity of the open generic definition, arity suffix included
        /// (e.g. ``List`1``).
        definition: TypeIdentity,
        /// Fully resolved type arguments in declaration order.
        arguments: Vec<TypeDescriptor>,
        /// Whether the closed instantiation is a value type. Raw metadata
        /// fact consumed by the nullable classification rule.
        is_value_type: bool,
    },
}

impl TypeDescriptor {
    /// Creates a simple descriptor.
    #[must_use]
    pub fn simple(identity: TypeIdentity) -> Self {
        Self::Simple { identity }
    }

    /// Creates a pointer descriptor.
    #[must_use]
    pub fn pointer(element: TypeDescriptor) -> Self {
        Self::Pointer {
            element: Box::new(element),
        }
    }

    /// Creates a by-ref descriptor.
    #[must_use]
    pub fn by_ref(element: TypeDescriptor) -> Self {
        Self::ByRef {
            element: Box::new(element),
        }
    }

    /// Creates an array descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is zero. A rank-0 array cannot come from well-formed
    /// metadata; producing one is a bug in the adapter that built the tree.
    #[must_use]
    pub fn array(element: TypeDescriptor, rank: u32) -> Self {
        assert!(rank >= 1, "array rank must be at least 1");
        Self::Array {
            element: Box::new(element),
            rank,
        }
    }

    /// Creates a closed generic instantiation descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `arguments` is empty. A closed instantiation always carries
    /// at least one argument; an empty list is a bug in the adapter.
    #[must_use]
    pub fn generic(
        definition: TypeIdentity,
        arguments: Vec<TypeDescriptor>,
        is_value_type: bool,
    ) -> Self {
        assert!(
            !arguments.is_empty(),
            "generic instantiation must carry at least one argument"
        );
        Self::Generic {
            definition,
            arguments,
            is_value_type,
        }
    }

    /// Creates the optional-value instantiation of an underlying type.
    ///
    /// Shorthand for a [`TypeDescriptor::Generic`] over the reserved
    /// ``System.Nullable`1`` definition.
    #[must_use]
    pub fn nullable(underlying: TypeDescriptor) -> Self {
        Self::Generic {
            definition: crate::identity::well_known::nullable_definition(),
            arguments: vec![underlying],
            is_value_type: true,
        }
    }

    /// Determines which rendering rule applies to this descriptor.
    ///
    /// Classifications are evaluated in fixed priority order: Pointer,
    /// ByRef, Array, Nullable, Generic, Simple. The order matters for the
    /// nullable rule: a nullable value is simultaneously a generic
    /// instantiation at the raw-metadata level, so Nullable must be tested
    /// before the general Generic rule.
    #[must_use]
    pub fn classification(&self) -> Classification {
        match self {
            Self::Pointer { .. } => Classification::Pointer,
            Self::ByRef { .. } => Classification::ByRef,
            Self::Array { .. } => Classification::Array,
            Self::Generic {
                definition,
                arguments,
                is_value_type,
            } => {
                if *is_value_type && arguments.len() == 1 && definition.is_nullable_definition() {
                    Classification::Nullable
                } else {
                    Classification::Generic
                }
            }
            Self::Simple { .. } => Classification::Simple,
        }
    }

    /// Returns the identity of a simple descriptor, or the definition
    /// identity of a generic one.
    #[must_use]
    pub fn identity(&self) -> Option<&TypeIdentity> {
        match self {
            Self::Simple { identity } => Some(identity),
            Self::Generic { definition, .. } => Some(definition),
            _ => None,
        }
    }

    /// Returns the element descriptor of a pointer, by-ref, or array.
    #[must_use]
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Pointer { element } | Self::ByRef { element } | Self::Array { element, .. } => {
                Some(element)
            }
            _ => None,
        }
    }

    /// Returns true if this descriptor names the empty return type.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Simple { identity } if identity.is_void())
    }
}

/// Rendering rule selected for a descriptor.
///
/// Exactly one classification applies to any well-formed descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Plain named type.
    Simple,
    /// Pointer to an element type.
    Pointer,
    /// By-reference passing of an element type.
    ByRef,
    /// Array of an element type.
    Array,
    /// Optional-value instantiation over a value type.
    Nullable,
    /// Any other closed generic instantiation.
    Generic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::well_known;

    fn int32() -> TypeDescriptor {
        TypeDescriptor::simple(well_known::int32())
    }

    #[test]
    fn test_classify_simple() {
        assert_eq!(int32().classification(), Classification::Simple);
    }

    #[test]
    fn test_classify_pointer() {
        let descriptor = TypeDescriptor::pointer(int32());
        assert_eq!(descriptor.classification(), Classification::Pointer);
    }

    #[test]
    fn test_classify_by_ref() {
        let descriptor = TypeDescriptor::by_ref(int32());
        assert_eq!(descriptor.classification(), Classification::ByRef);
    }

    #[test]
    fn test_classify_array() {
        let descriptor = TypeDescriptor::array(int32(), 2);
        assert_eq!(descriptor.classification(), Classification::Array);
    }

    #[test]
    fn test_classify_nullable() {
        let descriptor = TypeDescriptor::nullable(int32());
        assert_eq!(descriptor.classification(), Classification::Nullable);
    }

    #[test]
    fn test_classify_generic() {
        let descriptor = TypeDescriptor::generic(
            TypeIdentity::new("System.Collections.Generic", "List`1"),
            vec![int32()],
            false,
        );
        assert_eq!(descriptor.classification(), Classification::Generic);
    }

    #[test]
    fn test_nullable_requires_value_type() {
        // A reference-type instantiation of the reserved definition cannot
        // come from a real runtime, but the rule must still reject it.
        let descriptor = TypeDescriptor::generic(
            well_known::nullable_definition(),
            vec![int32()],
            false,
        );
        assert_eq!(descriptor.classification(), Classification::Generic);
    }

    #[test]
    fn test_nullable_requires_arity_one() {
        let descriptor = TypeDescriptor::generic(
            well_known::nullable_definition(),
            vec![int32(), int32()],
            true,
        );
        assert_eq!(descriptor.classification(), Classification::Generic);
    }

    #[test]
    fn test_nullable_requires_reserved_definition() {
        let descriptor = TypeDescriptor::generic(
            TypeIdentity::new("MyApp", "Nullable`1"),
            vec![int32()],
            true,
        );
        assert_eq!(descriptor.classification(), Classification::Generic);
    }

    #[test]
    fn test_open_definition_as_leaf_is_simple() {
        let descriptor =
            TypeDescriptor::simple(TypeIdentity::new("System.Collections.Generic", "List`1"));
        assert_eq!(descriptor.classification(), Classification::Simple);
    }

    #[test]
    fn test_array_of_nullable_classifies_outside_in() {
        let descriptor = TypeDescriptor::array(TypeDescriptor::nullable(int32()), 1);
        assert_eq!(descriptor.classification(), Classification::Array);
        assert_eq!(
            descriptor.element_type().unwrap().classification(),
            Classification::Nullable
        );
    }

    #[test]
    #[should_panic(expected = "array rank")]
    fn test_array_rank_zero_panics() {
        let _ = TypeDescriptor::array(int32(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one argument")]
    fn test_generic_without_arguments_panics() {
        let _ = TypeDescriptor::generic(
            TypeIdentity::new("System.Collections.Generic", "List`1"),
            Vec::new(),
            false,
        );
    }

    #[test]
    fn test_is_void() {
        assert!(TypeDescriptor::simple(well_known::void()).is_void());
        assert!(!int32().is_void());
        assert!(!TypeDescriptor::pointer(int32()).is_void());
    }

    #[test]
    fn test_identity_accessor() {
        assert_eq!(int32().identity(), Some(&well_known::int32()));
        assert!(TypeDescriptor::pointer(int32()).identity().is_none());
    }
}
