//! Struct, exception and union declaration rendering.

use thriftflow_ast::StructDef;

use crate::flow::types::TypeMapper;
use crate::options::GenOptions;

/// Renders struct-shaped definitions as exact object type aliases.
///
/// Exactness (no properties beyond those listed) mirrors the wire schema:
/// a value with extra fields would not survive a round trip.
#[derive(Debug)]
pub struct StructGenerator<'a> {
    mapper: &'a TypeMapper<'a>,
    options: &'a GenOptions,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(mapper: &'a TypeMapper<'a>, options: &'a GenOptions) -> Self {
        Self { mapper, options }
    }

    /// Renders a struct or exception as one exported exact object type.
    ///
    /// Fields appear in declaration order; optional fields carry a `?`
    /// before the type separator.
    #[must_use]
    pub fn generate_struct(&self, def: &StructDef) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "export type {} = {{|\n",
            self.options.apply_name(&def.name)
        ));
        for field in &def.fields {
            let marker = if field.is_optional() { "?" } else { "" };
            output.push_str(&format!(
                "  {}{}: {};\n",
                field.name,
                marker,
                self.mapper.convert(&field.ty)
            ));
        }
        output.push_str("|};");
        output
    }

    /// Renders a union as one single-field exact object per field, joined
    /// by `|`; a union with no fields renders as the empty exact object.
    ///
    /// This models "exactly one branch present", not "all optional".
    #[must_use]
    pub fn generate_union(&self, def: &StructDef) -> String {
        let name = self.options.apply_name(&def.name);
        if def.fields.is_empty() {
            return format!("export type {name} = {{||}};");
        }

        let alternatives: Vec<String> = def
            .fields
            .iter()
            .map(|field| {
                format!(
                    "{{| {}: {} |}}",
                    field.name,
                    self.mapper.convert(&field.ty)
                )
            })
            .collect();
        format!("export type {name} = {};", alternatives.join(" | "))
    }
}
