//! The per-language formatting contract.

use typescribe_descriptor::{ParameterDirection, TypeIdentity};

/// Rendering operations implemented once per target language.
///
/// The resolution engine recurses into element and argument descriptors
/// first, so every operation receives its sub-parts as already-rendered
/// strings and only composes the outer syntax. Implementations are composed
/// with the shared engine by strategy composition
/// ([`TypeNameProvider::new`](crate::TypeNameProvider::new)).
pub trait TypeFormatter {
    /// Renders a plain named type.
    ///
    /// Implementations consult their alias table first; an alias is returned
    /// unconditionally, ignoring `include_namespace`. Otherwise the
    /// namespace-qualified name is returned when `include_namespace` is set,
    /// else the simple name.
    fn format_simple(&self, identity: &TypeIdentity, include_namespace: bool) -> String;

    /// Renders a pointer around an already-rendered element name.
    fn format_pointer(&self, element: &str) -> String;

    /// Renders by-reference passing around an already-rendered element name.
    ///
    /// Languages without a distinct by-ref type syntax return `element`
    /// unchanged; others may prepend a reference sigil.
    fn format_by_ref(&self, element: &str) -> String;

    /// Renders an array of the given rank around an already-rendered
    /// element name. Rank 1 is single-dimensional; rank 2 or more is
    /// rectangular.
    fn format_array(&self, element: &str, rank: u32) -> String;

    /// Renders an optional value around an already-rendered underlying type
    /// name.
    fn format_nullable(&self, element: &str) -> String;

    /// Renders a closed generic instantiation.
    ///
    /// `definition_name` arrives name-resolved (aliasing and namespace
    /// qualification already applied) but still carries the arity suffix.
    fn format_generic(&self, definition_name: &str, argument_names: &[String]) -> String;

    /// Renders one parameter from its direction, rendered type name, and
    /// parameter name.
    fn format_parameter(
        &self,
        direction: ParameterDirection,
        type_name: &str,
        parameter_name: &str,
    ) -> String;
}

/// Removes the trailing arity suffix from a generic definition name.
///
/// Definition names mark their generic parameter count with a backtick and
/// digit suffix (``List`1``, ``Dictionary`2``). The usable name is the
/// substring before the first backtick. Only the leaf type name carries the
/// suffix; enclosing namespace segments pass through untouched.
#[must_use]
pub fn strip_arity_suffix(name: &str) -> &str {
    name.split_once('`').map_or(name, |(stripped, _)| stripped)
}
