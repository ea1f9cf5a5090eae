//! Constant declaration rendering.

use thriftflow_ast::{ConstDef, ConstValue};

use crate::flow::types::TypeMapper;
use crate::options::GenOptions;

/// Renders constants as explicitly typed `export const` bindings.
#[derive(Debug)]
pub struct ConstGenerator<'a> {
    mapper: &'a TypeMapper<'a>,
    options: &'a GenOptions,
}

impl<'a> ConstGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(mapper: &'a TypeMapper<'a>, options: &'a GenOptions) -> Self {
        Self { mapper, options }
    }

    /// Renders one constant binding.
    #[must_use]
    pub fn generate(&self, def: &ConstDef) -> String {
        format!(
            "export const {}: {} = {};",
            self.options.apply_name(&def.name),
            self.mapper.convert(&def.ty),
            render_literal(&def.value)
        )
    }
}

/// Renders a literal: strings are re-quoted exactly once, anything else is
/// emitted verbatim.
fn render_literal(value: &ConstValue) -> String {
    match value {
        ConstValue::Str(text) => {
            format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
        }
        ConstValue::Literal(text) => text.clone(),
    }
}
