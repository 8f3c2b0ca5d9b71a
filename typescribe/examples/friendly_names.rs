//! Example rendering C# type names from descriptor trees.
//!
//! Run with: `cargo run --example friendly_names`

use typescribe::prelude::*;

fn main() {
    // Dictionary<string, List<int?>>
    let descriptor = TypeDescriptor::generic(
        TypeIdentity::new("System.Collections.Generic", "Dictionary`2"),
        vec![
            TypeDescriptor::simple(well_known::string()),
            TypeDescriptor::generic(
                TypeIdentity::new("System.Collections.Generic", "List`1"),
                vec![TypeDescriptor::nullable(TypeDescriptor::simple(
                    well_known::int32(),
                ))],
                false,
            ),
        ],
        false,
    );

    println!("unqualified: {}", friendly_name(&descriptor));
    println!("qualified:   {}", qualified_friendly_name(&descriptor));

    // TryParse-style signature
    let provider = TypeNameProvider::new(CSharpFormatter::new());
    let parameters = [
        ParameterDescriptor::new("input", TypeDescriptor::simple(well_known::string())),
        ParameterDescriptor::new(
            "result",
            TypeDescriptor::by_ref(TypeDescriptor::simple(well_known::int32())),
        )
        .with_direction(ParameterDirection::Out),
    ];

    println!("parameters:  {}", provider.parameter_list(&parameters, false));
}
