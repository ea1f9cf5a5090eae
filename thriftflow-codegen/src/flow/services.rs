//! Service declaration rendering.

use thriftflow_ast::{FunctionDef, ServiceDef};

use crate::flow::types::TypeMapper;
use crate::options::GenOptions;

/// Renders services as exact objects of function types.
#[derive(Debug)]
pub struct ServiceGenerator<'a> {
    mapper: &'a TypeMapper<'a>,
    options: &'a GenOptions,
}

impl<'a> ServiceGenerator<'a> {
    /// Creates a new service generator.
    #[must_use]
    pub fn new(mapper: &'a TypeMapper<'a>, options: &'a GenOptions) -> Self {
        Self { mapper, options }
    }

    /// Renders one service as an exported exact object type whose
    /// properties are the service's functions.
    #[must_use]
    pub fn generate(&self, def: &ServiceDef) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "export type {} = {{|\n",
            self.options.apply_name(&def.name)
        ));
        for function in &def.functions {
            output.push_str(&format!(
                "  {}: {};\n",
                function.name,
                self.function_expr(function)
            ));
        }
        output.push_str("|};");
        output
    }

    /// Renders a function-type expression `(param: T, ...) => R`.
    ///
    /// Parameters never carry optional markers.
    fn function_expr(&self, function: &FunctionDef) -> String {
        let params: Vec<String> = function
            .params
            .iter()
            .map(|param| format!("{}: {}", param.name, self.mapper.convert(&param.ty)))
            .collect();
        format!(
            "({}) => {}",
            params.join(", "),
            self.mapper.convert(&function.result)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::types::DefIndex;
    use thriftflow_ast::{Field, PrimitiveType, TypeRef};

    fn render(def: &ServiceDef) -> String {
        let options = GenOptions::default();
        let index = DefIndex::new(&[]);
        let mapper = TypeMapper::new(&index, &options);
        ServiceGenerator::new(&mapper, &options).generate(def)
    }

    #[test]
    fn test_service_functions() {
        let mut add = FunctionDef::new("add", TypeRef::primitive(PrimitiveType::I32));
        add.add_param(Field::new("a", TypeRef::primitive(PrimitiveType::I32)));
        add.add_param(Field::new("b", TypeRef::primitive(PrimitiveType::I32)));

        let mut def = ServiceDef::new("Calculator");
        def.add_function(add);

        assert_eq!(
            render(&def),
            "export type Calculator = {|\n  add: (a: number, b: number) => number;\n|};"
        );
    }

    #[test]
    fn test_void_return_and_no_params() {
        let mut def = ServiceDef::new("Health");
        def.add_function(FunctionDef::new(
            "ping",
            TypeRef::primitive(PrimitiveType::Void),
        ));

        assert_eq!(
            render(&def),
            "export type Health = {|\n  ping: () => void;\n|};"
        );
    }

    #[test]
    fn test_param_optional_flag_not_marked() {
        let mut lookup = FunctionDef::new("lookup", TypeRef::primitive(PrimitiveType::Str));
        lookup.add_param(Field::new("key", TypeRef::primitive(PrimitiveType::Str)).optional());

        let mut def = ServiceDef::new("Store");
        def.add_function(lookup);

        let output = render(&def);
        assert!(output.contains("lookup: (key: string) => string;"));
        assert!(!output.contains('?'));
    }

    #[test]
    fn test_empty_service() {
        let def = ServiceDef::new("Idle");
        assert_eq!(render(&def), "export type Idle = {|\n|};");
    }
}
