//! Typedef declaration rendering.

use thriftflow_ast::TypedefDef;

use crate::flow::types::TypeMapper;
use crate::options::GenOptions;

/// Renders typedefs as exported type aliases.
#[derive(Debug)]
pub struct TypedefGenerator<'a> {
    mapper: &'a TypeMapper<'a>,
    options: &'a GenOptions,
}

impl<'a> TypedefGenerator<'a> {
    /// Creates a new typedef generator.
    #[must_use]
    pub fn new(mapper: &'a TypeMapper<'a>, options: &'a GenOptions) -> Self {
        Self { mapper, options }
    }

    /// Renders one typedef alias.
    #[must_use]
    pub fn generate(&self, def: &TypedefDef) -> String {
        format!(
            "export type {} = {};",
            self.options.apply_name(&def.name),
            self.mapper.convert(&def.ty)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::types::DefIndex;
    use thriftflow_ast::{PrimitiveType, TypeRef};

    #[test]
    fn test_typedef_alias() {
        let options = GenOptions::default();
        let index = DefIndex::new(&[]);
        let mapper = TypeMapper::new(&index, &options);
        let def = TypedefDef::new("UserId", TypeRef::primitive(PrimitiveType::Str));

        assert_eq!(
            TypedefGenerator::new(&mapper, &options).generate(&def),
            "export type UserId = string;"
        );
    }

    #[test]
    fn test_typedef_of_container() {
        let options = GenOptions::default();
        let index = DefIndex::new(&[]);
        let mapper = TypeMapper::new(&index, &options);
        let def = TypedefDef::new(
            "Tags",
            TypeRef::list(TypeRef::primitive(PrimitiveType::Str)),
        );

        assert_eq!(
            TypedefGenerator::new(&mapper, &options).generate(&def),
            "export type Tags = string[];"
        );
    }

    #[test]
    fn test_transform_consistency_between_alias_and_reference() {
        // The same transform rewrites the alias name and the referenced
        // name, so declaration and usage sites agree.
        let options = GenOptions::new().transform_name(Box::new(|name| format!("T{name}")));
        let index = DefIndex::new(&[]);
        let mapper = TypeMapper::new(&index, &options);
        let def = TypedefDef::new("Alias", TypeRef::named("Target"));

        assert_eq!(
            TypedefGenerator::new(&mapper, &options).generate(&def),
            "export type TAlias = TTarget;"
        );
    }
}
