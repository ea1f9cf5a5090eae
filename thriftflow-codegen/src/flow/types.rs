//! Type reference to Flow type expression conversion.

use std::collections::HashMap;

use thriftflow_ast::{Definition, PrimitiveType, TypeRef};

use crate::options::GenOptions;

/// Name-to-definition index over one file's top-level definitions.
///
/// Built once per generation call and dropped with it.
#[derive(Debug)]
pub struct DefIndex<'a> {
    by_name: HashMap<&'a str, &'a Definition>,
}

impl<'a> DefIndex<'a> {
    /// Builds the index from a file's definitions.
    #[must_use]
    pub fn new(definitions: &'a [Definition]) -> Self {
        let by_name = definitions
            .iter()
            .map(|definition| (definition.name(), definition))
            .collect();
        Self { by_name }
    }

    /// Looks up a definition by declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Definition> {
        self.by_name.get(name).copied()
    }

    /// Returns true if `name` resolves to an enum in this file.
    ///
    /// Only the current file is consulted; an enum defined in an included
    /// file is not detected here and its references render through the
    /// named fallback instead.
    #[must_use]
    pub fn is_enum(&self, name: &str) -> bool {
        self.get(name).is_some_and(Definition::is_enum)
    }
}

/// Converts type references into Flow type expressions.
///
/// Conversion is pure and total: unresolvable names degrade to the named
/// fallback instead of failing.
#[derive(Debug)]
pub struct TypeMapper<'a> {
    index: &'a DefIndex<'a>,
    options: &'a GenOptions,
}

impl<'a> TypeMapper<'a> {
    /// Creates a mapper over one file's definition index.
    #[must_use]
    pub fn new(index: &'a DefIndex<'a>, options: &'a GenOptions) -> Self {
        Self { index, options }
    }

    /// Renders one type reference as a Flow type expression.
    ///
    /// Precedence, first match wins: container, enum reference, map,
    /// annotated i64, primitive table, named fallback.
    #[must_use]
    pub fn convert(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::List(elem) | TypeRef::Set(elem) => {
                format!("{}[]", self.convert(elem))
            }
            TypeRef::Named(name) if self.index.is_enum(name) => {
                // The enum's plain type is only the key union; values live
                // under the companion export, which is what `$Keys` needs.
                format!("$Keys<typeof {}>", self.enum_value_export(name))
            }
            TypeRef::Map(key, value) => {
                format!("{{[{}]: {}}}", self.convert(key), self.convert(value))
            }
            TypeRef::Primitive {
                ty: PrimitiveType::I64,
                annotations,
            } => match annotations.js_type() {
                Some("Long") => "Long".to_string(),
                Some("Date") => "Date".to_string(),
                _ => "Buffer".to_string(),
            },
            TypeRef::Primitive { ty, .. } => primitive_expr(*ty).to_string(),
            TypeRef::Named(name) => self.options.apply_name(name),
        }
    }

    /// Name of the companion export carrying an enum's value union.
    fn enum_value_export(&self, name: &str) -> String {
        let transformed = self.options.apply_name(name);
        if self.options.values_as_primary() {
            transformed
        } else {
            format!("{transformed}Values")
        }
    }
}

/// Fixed primitive-to-Flow lookup table.
const fn primitive_expr(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::Bool => "boolean",
        PrimitiveType::Byte
        | PrimitiveType::I16
        | PrimitiveType::I32
        | PrimitiveType::Double => "number",
        PrimitiveType::I64 | PrimitiveType::Binary => "Buffer",
        PrimitiveType::Str => "string",
        PrimitiveType::Void => "void",
    }
}
