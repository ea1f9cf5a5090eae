//! Enum declaration rendering.

use thriftflow_ast::EnumDef;

use crate::options::GenOptions;

/// Renders enums as paired key-union and value-union type aliases.
///
/// Some callers key enum-valued fields by the programmatic value, others by
/// the symbolic name; the policy option decides which union receives the
/// enum's plain name so call sites need not rename either way.
#[derive(Debug)]
pub struct EnumGenerator<'a> {
    options: &'a GenOptions,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(options: &'a GenOptions) -> Self {
        Self { options }
    }

    /// Renders the two exported aliases for one enum.
    ///
    /// Value literals use the explicit value when declared, otherwise the
    /// member's zero-based position.
    #[must_use]
    pub fn generate(&self, def: &EnumDef) -> String {
        let name = self.options.apply_name(&def.name);
        let resolved = def.resolved_values();

        let value_union = resolved
            .iter()
            .map(|(_, value)| value.to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        let key_union = resolved
            .iter()
            .map(|(key, _)| format!("\"{key}\""))
            .collect::<Vec<_>>()
            .join(" | ");

        if self.options.values_as_primary() {
            format!(
                "export type {name} = {value_union};\nexport type {name}Keys = {key_union};"
            )
        } else {
            format!(
                "export type {name}Values = {value_union};\nexport type {name} = {key_union};"
            )
        }
    }
}
