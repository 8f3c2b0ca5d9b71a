//! The shared type-name resolution engine.

use typescribe_descriptor::{Classification, ParameterDescriptor, TypeDescriptor};

use crate::error::{RenderError, Result};
use crate::formatter::TypeFormatter;

/// Resolves descriptor trees to type-name strings through a
/// [`TypeFormatter`].
///
/// The engine owns the recursion and the classification dispatch; the
/// formatter owns the surface syntax. Resolution is a pure synchronous
/// computation over an immutable tree, so one provider can serve concurrent
/// callers without locking.
///
/// Recursion depth equals the nesting depth of the descriptor. Descriptors
/// are owned trees, so cyclic inputs cannot be constructed in safe code.
pub struct TypeNameProvider<F> {
    formatter: F,
}

impl<F: TypeFormatter> TypeNameProvider<F> {
    /// Creates a provider around a formatter.
    #[must_use]
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Resolves a descriptor supplied by a boundary adapter.
    ///
    /// This is the checked entry point for adapters that may fail to
    /// produce a descriptor from host metadata.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingDescriptor`] if `descriptor` is
    /// `None`.
    pub fn try_type_name(
        &self,
        descriptor: Option<&TypeDescriptor>,
        include_namespace: bool,
    ) -> Result<String> {
        let descriptor = descriptor.ok_or(RenderError::MissingDescriptor)?;
        tracing::trace!(include_namespace, "resolving type name");
        Ok(self.type_name(descriptor, include_namespace))
    }

    /// Resolves a descriptor to its rendered type name.
    ///
    /// Sub-descriptors are fully resolved inside-out before the outer
    /// formatter operation runs: element first for pointer, by-ref, array,
    /// and nullable; every argument first (in declaration order) for
    /// generic. Nested composites therefore render correctly without any
    /// combination special-cases.
    #[must_use]
    pub fn type_name(&self, descriptor: &TypeDescriptor, include_namespace: bool) -> String {
        match descriptor {
            TypeDescriptor::Simple { identity } => {
                self.formatter.format_simple(identity, include_namespace)
            }
            TypeDescriptor::Pointer { element } => {
                let element = self.type_name(element, include_namespace);
                self.formatter.format_pointer(&element)
            }
            TypeDescriptor::ByRef { element } => {
                let element = self.type_name(element, include_namespace);
                self.formatter.format_by_ref(&element)
            }
            TypeDescriptor::Array { element, rank } => {
                let element = self.type_name(element, include_namespace);
                self.formatter.format_array(&element, *rank)
            }
            TypeDescriptor::Generic {
                definition,
                arguments,
                ..
            } => {
                if descriptor.classification() == Classification::Nullable {
                    let underlying = self.type_name(&arguments[0], include_namespace);
                    self.formatter.format_nullable(&underlying)
                } else {
                    let definition_name =
                        self.formatter.format_simple(definition, include_namespace);
                    let argument_names: Vec<String> = arguments
                        .iter()
                        .map(|argument| self.type_name(argument, include_namespace))
                        .collect();
                    self.formatter
                        .format_generic(&definition_name, &argument_names)
                }
            }
        }
    }

    /// Renders one parameter: direction keyword, type name, parameter name.
    #[must_use]
    pub fn parameter(&self, parameter: &ParameterDescriptor, include_namespace: bool) -> String {
        let type_name = self.type_name(parameter.parameter_type(), include_namespace);
        self.formatter
            .format_parameter(parameter.direction(), &type_name, parameter.name())
    }

    /// Renders a parameter list in declaration order, comma-separated.
    #[must_use]
    pub fn parameter_list(
        &self,
        parameters: &[ParameterDescriptor],
        include_namespace: bool,
    ) -> String {
        parameters
            .iter()
            .map(|parameter| self.parameter(parameter, include_namespace))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typescribe_descriptor::{ParameterDirection, TypeIdentity, well_known};

    /// Metadata-flavored formatter with spellings that diverge from C#:
    /// CLR-style primitive names and an explicit by-ref sigil.
    struct MetadataFormatter;

    impl TypeFormatter for MetadataFormatter {
        fn format_simple(&self, identity: &TypeIdentity, include_namespace: bool) -> String {
            if *identity == well_known::int32() {
                return "int32".to_string();
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
            format!("{element}&")
        }

        fn format_array(&self, element: &str, rank: u32) -> String {
            format!("{element}[{}]", ",".repeat((rank - 1) as usize))
        }

        fn format_nullable(&self, element: &str) -> String {
            format!("{element}?")
        }

        fn format_generic(&self, definition_name: &str, argument_names: &[String]) -> String {
            format!(
                "{}<{}>",
                crate::formatter::strip_arity_suffix(definition_name),
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
                ParameterDirection::Ref | ParameterDirection::Out => {
                    format!("{type_name}& {parameter_name}")
                }
            }
        }
    }

    fn provider() -> TypeNameProvider<MetadataFormatter> {
        TypeNameProvider::new(MetadataFormatter)
    }

    fn int32() -> TypeDescriptor {
        TypeDescriptor::simple(well_known::int32())
    }

    #[test]
    fn test_divergent_simple_spelling() {
        assert_eq!(provider().type_name(&int32(), false), "int32");
        assert_eq!(provider().type_name(&int32(), true), "int32");
    }

    #[test]
    fn test_by_ref_sigil() {
        let descriptor = TypeDescriptor::by_ref(int32());
        assert_eq!(provider().type_name(&descriptor, false), "int32&");
    }

    #[test]
    fn test_nested_composite_recursion() {
        // int32?[]*, a pointer to an array of nullables
        let descriptor = TypeDescriptor::pointer(TypeDescriptor::array(
            TypeDescriptor::nullable(int32()),
            1,
        ));
        assert_eq!(provider().type_name(&descriptor, false), "int32?[]*");
    }

    #[test]
    fn test_missing_descriptor_fails() {
        assert_eq!(
            provider().try_type_name(None, false),
            Err(RenderError::MissingDescriptor)
        );
    }

    #[test]
    fn test_try_type_name_resolves_present_descriptor() {
        assert_eq!(
            provider().try_type_name(Some(&int32()), false),
            Ok("int32".to_string())
        );
    }

    #[test]
    fn test_parameter_list() {
        let parameters = vec![
            ParameterDescriptor::new("count", int32()),
            ParameterDescriptor::new("total", int32()).with_direction(ParameterDirection::Ref),
        ];
        assert_eq!(
            provider().parameter_list(&parameters, false),
            "int32 count, int32& total"
        );
    }

    #[test]
    fn test_empty_parameter_list() {
        assert_eq!(provider().parameter_list(&[], false), "");
    }
}
