//! Descriptor builders for benchmarks.

use typescribe_descriptor::{TypeDescriptor, TypeIdentity, well_known};

/// Builds a descriptor nested `depth` composites deep, cycling through
/// array, generic, nullable, and pointer wrappers around an `int` leaf.
#[must_use]
pub fn deeply_nested(depth: u32) -> TypeDescriptor {
    let mut descriptor = TypeDescriptor::simple(well_known::int32());

    for level in 0..depth {
        descriptor = match level % 4 {
            0 => TypeDescriptor::array(descriptor, 1),
            1 => TypeDescriptor::generic(
                TypeIdentity::new("System.Collections.Generic", "List`1"),
                vec![descriptor],
                false,
            ),
            2 => TypeDescriptor::nullable(descriptor),
            _ => TypeDescriptor::pointer(descriptor),
        };
    }

    descriptor
}

/// Builds a generic instantiation with `arity` arguments, each a distinct
/// simple type.
#[must_use]
pub fn wide_generic(arity: u32) -> TypeDescriptor {
    let definition = TypeIdentity::new("Benchmarks", format!("Tuple`{arity}"));
    let arguments = (0..arity)
        .map(|index| TypeDescriptor::simple(TypeIdentity::new("Benchmarks", format!("Arg{index}"))))
        .collect();

    TypeDescriptor::generic(definition, arguments, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typescribe_render::friendly_name;

    #[test]
    fn test_deeply_nested_renders() {
        // array → generic → nullable → pointer, inside out
        assert_eq!(friendly_name(&deeply_nested(4)), "List<int[]>?*");
    }

    #[test]
    fn test_wide_generic_renders() {
        assert_eq!(friendly_name(&wide_generic(2)), "Tuple<Arg0, Arg1>");
    }
}
