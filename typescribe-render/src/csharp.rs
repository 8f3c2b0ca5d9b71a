//! C# surface-syntax renderer.

use std::collections::HashMap;
use std::sync::LazyLock;

use typescribe_descriptor::{ParameterDirection, TypeDescriptor, TypeIdentity, well_known};

use crate::formatter::{TypeFormatter, strip_arity_suffix};
use crate::provider::TypeNameProvider;

/// Keyword spellings for the well-known core-library types.
///
/// Built once on first use and read-only thereafter. Keyed by identity, not
/// by name string, so a user type that shares a simple name with a core type
/// never picks up the keyword.
static ALIASES: LazyLock<HashMap<TypeIdentity, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (well_known::void(), "void"),
        (well_known::char(), "char"),
        (well_known::string(), "string"),
        (well_known::boolean(), "bool"),
        (well_known::single(), "float"),
        (well_known::double(), "double"),
        (well_known::decimal(), "decimal"),
        (well_known::sbyte(), "sbyte"),
        (well_known::int16(), "short"),
        (well_known::int32(), "int"),
        (well_known::int64(), "long"),
        (well_known::byte(), "byte"),
        (well_known::uint16(), "ushort"),
        (well_known::uint32(), "uint"),
        (well_known::uint64(), "ulong"),
        (well_known::date_time(), "DateTime"),
        (well_known::guid(), "Guid"),
        (well_known::time_span(), "TimeSpan"),
    ])
});

/// Renders type names in C# syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpFormatter;

impl CSharpFormatter {
    /// Creates the C# formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TypeFormatter for CSharpFormatter {
    fn format_simple(&self, identity: &TypeIdentity, include_namespace: bool) -> String {
        if let Some(alias) = ALIASES.get(identity) {
            return (*alias).to_string();
        }

        if include_namespace {
            identity.qualified_name()
        } else {
            identity.name().to_string()
        }
    }

    fn format_pointer(&self, element: &str) -> String {
        format!("{element}*")
    }

    fn format_by_ref(&self, element: &str) -> String {
        // No by-ref type syntax in this grammar; the passing direction is
        // the parameter renderer's concern.
        element.to_string()
    }

    fn format_array(&self, element: &str, rank: u32) -> String {
        // Rectangular ranks share one bracket pair. Jagged arrays arrive as
        // arrays of arrays and render recursively.
        format!("{element}[{}]", ",".repeat((rank - 1) as usize))
    }

    fn format_nullable(&self, element: &str) -> String {
        format!("{element}?")
    }

    fn format_generic(&self, definition_name: &str, argument_names: &[String]) -> String {
        format!(
            "{}<{}>",
            strip_arity_suffix(definition_name),
            argument_names.join(", ")
        )
    }

    fn format_parameter(
        &self,
        direction: ParameterDirection,
        type_name: &str,
        parameter_name: &str,
    ) -> String {
        match direction {
            ParameterDirection::In => format!("{type_name} {parameter_name}"),
            ParameterDirection::Ref => format!("ref {type_name} {parameter_name}"),
            ParameterDirection::Out => format!("out {type_name} {parameter_name}"),
        }
    }
}

/// Returns the C# friendly name of a type, namespaces omitted.
#[must_use]
pub fn friendly_name(descriptor: &TypeDescriptor) -> String {
    TypeNameProvider::new(CSharpFormatter).type_name(descriptor, false)
}

/// Returns the C# friendly name of a type, namespaces included.
#[must_use]
pub fn qualified_friendly_name(descriptor: &TypeDescriptor) -> String {
    TypeNameProvider::new(CSharpFormatter).type_name(descriptor, true)
}
