//! AST node definitions for resolved Thrift IDL documents.
//!
//! These types form the contract with the external IDL parser: the parser
//! produces one `Definition` list per file, already reference-resolved
//! across includes, and the generation pass consumes them read-only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level definition variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Definition {
    /// Struct definition.
    Struct(StructDef),
    /// Exception definition (struct-shaped).
    Exception(StructDef),
    /// Union definition (struct-shaped; exactly one branch present).
    Union(StructDef),
    /// Enum definition.
    Enum(EnumDef),
    /// Typedef (type alias) definition.
    Typedef(TypedefDef),
    /// Service definition.
    Service(ServiceDef),
    /// Constant definition.
    Const(ConstDef),
    /// String enum definition (legacy construct, not rendered).
    Senum(SenumDef),
}

impl Definition {
    /// Returns the declared name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(s) | Self::Exception(s) | Self::Union(s) => &s.name,
            Self::Enum(e) => &e.name,
            Self::Typedef(t) => &t.name,
            Self::Service(s) => &s.name,
            Self::Const(c) => &c.name,
            Self::Senum(s) => &s.name,
        }
    }

    /// Returns a lowercase label for the definition kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::Exception(_) => "exception",
            Self::Union(_) => "union",
            Self::Enum(_) => "enum",
            Self::Typedef(_) => "typedef",
            Self::Service(_) => "service",
            Self::Const(_) => "const",
            Self::Senum(_) => "senum",
        }
    }

    /// Returns true if this is an enum definition.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

/// Struct-shaped definition body, shared by structs, exceptions and unions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    /// Declared name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl StructDef {
    /// Creates a struct body with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field, preserving declaration order.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }
}

/// Field within a struct, exception, union or parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Requiredness as declared in the IDL.
    pub requiredness: Requiredness,
}

impl Field {
    /// Creates a field with default requiredness.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            requiredness: Requiredness::Default,
        }
    }

    /// Marks the field `optional`.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    /// Marks the field `required`.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    /// Returns true if the field was declared `optional`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.requiredness, Requiredness::Optional)
    }
}

/// Field requiredness keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Requiredness {
    /// Explicitly `required`.
    Required,
    /// Explicitly `optional`.
    Optional,
    /// No requiredness keyword.
    #[default]
    Default,
}

/// A type reference: primitive, named cross-reference, or container.
///
/// Containers own their element references by value; named references are
/// non-owning lookup keys into a file's definition list. Recursive types are
/// always referenced by name, so the reference graph is acyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    /// Built-in primitive, possibly annotated.
    Primitive {
        /// Primitive tag.
        ty: PrimitiveType,
        /// Annotations attached to this reference.
        annotations: Annotations,
    },
    /// Reference to a definition by name, possibly in another file.
    Named(String),
    /// `list<T>`.
    List(Box<TypeRef>),
    /// `set<T>`.
    Set(Box<TypeRef>),
    /// `map<K, V>`.
    Map(Box<TypeRef>, Box<TypeRef>),
}

impl TypeRef {
    /// Creates an unannotated primitive reference.
    #[must_use]
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive {
            ty,
            annotations: Annotations::new(),
        }
    }

    /// Creates an annotated primitive reference.
    #[must_use]
    pub fn annotated(ty: PrimitiveType, annotations: Annotations) -> Self {
        Self::Primitive { ty, annotations }
    }

    /// Creates a named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a `list<elem>` reference.
    #[must_use]
    pub fn list(elem: Self) -> Self {
        Self::List(Box::new(elem))
    }

    /// Creates a `set<elem>` reference.
    #[must_use]
    pub fn set(elem: Self) -> Self {
        Self::Set(Box::new(elem))
    }

    /// Creates a `map<key, value>` reference.
    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }
}

/// Thrift base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// `bool`.
    Bool,
    /// `byte` / `i8`.
    Byte,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `double`.
    Double,
    /// `string`.
    Str,
    /// `binary`.
    Binary,
    /// `void` (function results only).
    Void,
}

/// Annotation metadata attached to a type reference, e.g.
/// `i64 (js.type = "Long")`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations(HashMap<String, String>);

impl Annotations {
    /// Creates an empty annotation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an annotation key/value pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up an annotation value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the `js.type` annotation value, if any.
    #[must_use]
    pub fn js_type(&self) -> Option<&str> {
        self.get("js.type")
    }
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Declared name.
    pub name: String,
    /// Members in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    /// Creates an enum with no members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds a member, preserving declaration order.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Resolves each member to its effective integer value: the explicit
    /// value when declared, otherwise the member's zero-based position.
    #[must_use]
    pub fn resolved_values(&self) -> Vec<(&str, i64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(position, value)| {
                let resolved = value.value.map_or(position as i64, i64::from);
                (value.name.as_str(), resolved)
            })
            .collect()
    }
}

/// One enum member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Member name.
    pub name: String,
    /// Explicit integer value, if declared.
    pub value: Option<i32>,
}

impl EnumValue {
    /// Creates a member without an explicit value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a member with an explicit value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }
}

/// Typedef (type alias) definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedefDef {
    /// Declared alias name.
    pub name: String,
    /// Aliased type.
    pub ty: TypeRef,
}

impl TypedefDef {
    /// Creates a typedef.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Service definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDef {
    /// Declared name.
    pub name: String,
    /// Functions in declaration order.
    pub functions: Vec<FunctionDef>,
}

impl ServiceDef {
    /// Creates a service with no functions.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Adds a function, preserving declaration order.
    pub fn add_function(&mut self, function: FunctionDef) {
        self.functions.push(function);
    }
}

/// One service function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Function name.
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<Field>,
    /// Return type.
    pub result: TypeRef,
}

impl FunctionDef {
    /// Creates a function with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, result: TypeRef) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            result,
        }
    }

    /// Adds a parameter, preserving declaration order.
    pub fn add_param(&mut self, param: Field) {
        self.params.push(param);
    }
}

/// Constant definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDef {
    /// Declared name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Literal value.
    pub value: ConstValue,
}

impl ConstDef {
    /// Creates a constant.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
        }
    }
}

/// Constant literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    /// String literal (unquoted content).
    Str(String),
    /// Any other literal, carried as its verbatim source text.
    Literal(String),
}

/// String enum definition (legacy `senum` construct).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenumDef {
    /// Declared name.
    pub name: String,
    /// String values in declaration order.
    pub values: Vec<String>,
}

impl SenumDef {
    /// Creates a string enum with no values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_name() {
        let def = Definition::Struct(StructDef::new("Point"));
        assert_eq!(def.name(), "Point");

        let def = Definition::Enum(EnumDef::new("Color"));
        assert_eq!(def.name(), "Color");

        let def = Definition::Const(ConstDef::new(
            "MAX",
            TypeRef::primitive(PrimitiveType::I32),
            ConstValue::Literal("10".to_string()),
        ));
        assert_eq!(def.name(), "MAX");
    }

    #[test]
    fn test_definition_kind_name() {
        let def = Definition::Senum(SenumDef::new("Legacy"));
        assert_eq!(def.kind_name(), "senum");

        let def = Definition::Union(StructDef::new("Either"));
        assert_eq!(def.kind_name(), "union");
    }

    #[test]
    fn test_definition_is_enum() {
        assert!(Definition::Enum(EnumDef::new("Color")).is_enum());
        assert!(!Definition::Struct(StructDef::new("Color")).is_enum());
    }

    #[test]
    fn test_field_requiredness() {
        let field = Field::new("name", TypeRef::primitive(PrimitiveType::Str));
        assert!(!field.is_optional());

        let field = field.optional();
        assert!(field.is_optional());
        assert_eq!(field.requiredness, Requiredness::Optional);

        let field = Field::new("id", TypeRef::primitive(PrimitiveType::I32)).required();
        assert!(!field.is_optional());
        assert_eq!(field.requiredness, Requiredness::Required);
    }

    #[test]
    fn test_annotations_js_type() {
        let mut annotations = Annotations::new();
        assert_eq!(annotations.js_type(), None);

        annotations.insert("js.type", "Long");
        assert_eq!(annotations.js_type(), Some("Long"));
        assert_eq!(annotations.get("js.type"), Some("Long"));
        assert_eq!(annotations.get("missing"), None);
    }

    #[test]
    fn test_type_ref_builders() {
        let nested = TypeRef::list(TypeRef::list(TypeRef::primitive(PrimitiveType::Str)));
        match nested {
            TypeRef::List(inner) => match *inner {
                TypeRef::List(_) => {}
                other => panic!("expected nested list, got {other:?}"),
            },
            other => panic!("expected list, got {other:?}"),
        }

        let map = TypeRef::map(
            TypeRef::primitive(PrimitiveType::Str),
            TypeRef::named("Value"),
        );
        assert!(matches!(map, TypeRef::Map(_, _)));
    }

    #[test]
    fn test_resolved_values_positional() {
        let mut def = EnumDef::new("Color");
        def.add_value(EnumValue::new("RED"));
        def.add_value(EnumValue::new("GREEN"));
        def.add_value(EnumValue::new("BLUE"));

        assert_eq!(
            def.resolved_values(),
            vec![("RED", 0), ("GREEN", 1), ("BLUE", 2)]
        );
    }

    #[test]
    fn test_resolved_values_explicit_mixed() {
        let mut def = EnumDef::new("Status");
        def.add_value(EnumValue::with_value("OK", 200));
        def.add_value(EnumValue::new("PENDING"));
        def.add_value(EnumValue::with_value("GONE", 410));

        // Members without an explicit value resolve to their position, not
        // to the previous value plus one.
        assert_eq!(
            def.resolved_values(),
            vec![("OK", 200), ("PENDING", 1), ("GONE", 410)]
        );
    }

    #[test]
    fn test_service_builders() {
        let mut function = FunctionDef::new("ping", TypeRef::primitive(PrimitiveType::Void));
        function.add_param(Field::new("seq", TypeRef::primitive(PrimitiveType::I32)));

        let mut service = ServiceDef::new("Health");
        service.add_function(function);

        assert_eq!(service.functions.len(), 1);
        assert_eq!(service.functions[0].params[0].name, "seq");
    }
}
