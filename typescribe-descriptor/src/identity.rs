//! Stable type identities.
//!
//! An identity names a type independently of any rendered spelling: the
//! namespace, the simple name, and the assembly the metadata came from.
//! Renderers key their alias tables on identities rather than on name
//! strings so a user-defined type that happens to share a simple name with a
//! core-library type never picks up the core alias.

/// Canonical core-library assembly used by the [`well_known`] constructors.
///
/// Host runtimes have shipped the core types from different assemblies over
/// the years (mscorlib, System.Runtime, System.Private.CoreLib). Adapters
/// should build core-library identities through [`well_known`] so every
/// component agrees on one spelling of the origin.
pub const CORE_ASSEMBLY: &str = "System.Runtime";

/// Identity of a named type: namespace, simple name, and assembly origin.
///
/// Equality and hashing cover the namespace-qualified name only. The
/// assembly is provenance: core-library types have moved between assemblies
/// across runtime generations, and two descriptors naming `System.Int32`
/// must compare equal regardless of which host assembly supplied the
/// metadata.
#[derive(Debug, Clone)]
pub struct TypeIdentity {
    namespace: Option<String>,
    name: String,
    assembly: Option<String>,
}

impl TypeIdentity {
    /// Creates an identity with a namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
            assembly: None,
        }
    }

    /// Creates an identity in the global (empty) namespace.
    #[must_use]
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            assembly: None,
        }
    }

    /// Sets the assembly origin.
    #[must_use]
    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = Some(assembly.into());
        self
    }

    /// Returns the simple (unqualified) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the assembly origin, if known.
    #[must_use]
    pub fn assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    /// Returns the namespace-qualified name.
    ///
    /// Types in the global namespace qualify to their simple name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }

    /// Returns true if this identity names the empty return type.
    #[must_use]
    pub fn is_void(&self) -> bool {
        *self == well_known::void()
    }

    /// Returns true if this identity names the reserved optional-value
    /// generic definition (``System.Nullable`1``).
    #[must_use]
    pub fn is_nullable_definition(&self) -> bool {
        *self == well_known::nullable_definition()
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.name == other.name
    }
}

impl Eq for TypeIdentity {}

impl std::hash::Hash for TypeIdentity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.name.hash(state);
    }
}

impl std::fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}.{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Constructors for the well-known core-library identities.
///
/// Alias tables and boundary adapters both build core identities here so
/// alias lookup is keyed on one agreed identity per type.
pub mod well_known {
    use super::{CORE_ASSEMBLY, TypeIdentity};

    fn system(name: &str) -> TypeIdentity {
        TypeIdentity::new("System", name).with_assembly(CORE_ASSEMBLY)
    }

    /// `System.Void`, the empty return type.
    #[must_use]
    pub fn void() -> TypeIdentity {
        system("Void")
    }

    /// `System.Boolean`.
    #[must_use]
    pub fn boolean() -> TypeIdentity {
        system("Boolean")
    }

    /// `System.Char`.
    #[must_use]
    pub fn char() -> TypeIdentity {
        system("Char")
    }

    /// `System.String`.
    #[must_use]
    pub fn string() -> TypeIdentity {
        system("String")
    }

    /// `System.Single`, the 32-bit IEEE floating-point type.
    #[must_use]
    pub fn single() -> TypeIdentity {
        system("Single")
    }

    /// `System.Double`, the 64-bit IEEE floating-point type.
    #[must_use]
    pub fn double() -> TypeIdentity {
        system("Double")
    }

    /// `System.Decimal`, the fixed-precision decimal type.
    #[must_use]
    pub fn decimal() -> TypeIdentity {
        system("Decimal")
    }

    /// `System.SByte`, the signed 8-bit integer.
    #[must_use]
    pub fn sbyte() -> TypeIdentity {
        system("SByte")
    }

    /// `System.Int16`.
    #[must_use]
    pub fn int16() -> TypeIdentity {
        system("Int16")
    }

    /// `System.Int32`.
    #[must_use]
    pub fn int32() -> TypeIdentity {
        system("Int32")
    }

    /// `System.Int64`.
    #[must_use]
    pub fn int64() -> TypeIdentity {
        system("Int64")
    }

    /// `System.Byte`, the unsigned 8-bit integer.
    #[must_use]
    pub fn byte() -> TypeIdentity {
        system("Byte")
    }

    /// `System.UInt16`.
    #[must_use]
    pub fn uint16() -> TypeIdentity {
        system("UInt16")
    }

    /// `System.UInt32`.
    #[must_use]
    pub fn uint32() -> TypeIdentity {
        system("UInt32")
    }

    /// `System.UInt64`.
    #[must_use]
    pub fn uint64() -> TypeIdentity {
        system("UInt64")
    }

    /// `System.DateTime`, the calendar date-time value type.
    #[must_use]
    pub fn date_time() -> TypeIdentity {
        system("DateTime")
    }

    /// `System.Guid`, the universally unique identifier value type.
    #[must_use]
    pub fn guid() -> TypeIdentity {
        system("Guid")
    }

    /// `System.TimeSpan`, the duration value type.
    #[must_use]
    pub fn time_span() -> TypeIdentity {
        system("TimeSpan")
    }

    /// ``System.Nullable`1``, the reserved optional-value generic
    /// definition.
    #[must_use]
    pub fn nullable_definition() -> TypeIdentity {
        system("Nullable`1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let identity = TypeIdentity::new("Bar", "Foo");
        assert_eq!(identity.qualified_name(), "Bar.Foo");
        assert_eq!(identity.name(), "Foo");
    }

    #[test]
    fn test_global_namespace() {
        let identity = TypeIdentity::global("Foo");
        assert_eq!(identity.qualified_name(), "Foo");
        assert_eq!(identity.namespace(), None);
    }

    #[test]
    fn test_equality_ignores_assembly() {
        let a = TypeIdentity::new("System", "Int32").with_assembly("mscorlib");
        let b = well_known::int32();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_requires_namespace() {
        let user = TypeIdentity::new("MyApp", "Int32");
        assert_ne!(user, well_known::int32());
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(well_known::int32(), "int");

        let from_mscorlib = TypeIdentity::new("System", "Int32").with_assembly("mscorlib");
        assert_eq!(map.get(&from_mscorlib), Some(&"int"));
    }

    #[test]
    fn test_is_void() {
        assert!(well_known::void().is_void());
        assert!(!well_known::int32().is_void());
        assert!(!TypeIdentity::global("Void").is_void());
    }

    #[test]
    fn test_is_nullable_definition() {
        assert!(well_known::nullable_definition().is_nullable_definition());
        assert!(!well_known::int32().is_nullable_definition());
        assert!(!TypeIdentity::new("MyApp", "Nullable`1").is_nullable_definition());
    }

    #[test]
    fn test_display() {
        assert_eq!(well_known::int32().to_string(), "System.Int32");
        assert_eq!(TypeIdentity::global("Foo").to_string(), "Foo");
    }

    #[test]
    fn test_well_known_carry_core_assembly() {
        assert_eq!(well_known::string().assembly(), Some(CORE_ASSEMBLY));
    }
}
