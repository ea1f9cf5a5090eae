//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use thriftflow::prelude::*;
//! ```

// AST contract
pub use thriftflow_ast::{
    Annotations, ConstDef, ConstValue, Definition, EnumDef, EnumValue, Field, FunctionDef,
    IdlFile, IdlSet, PrimitiveType, Requiredness, SenumDef, ServiceDef, StructDef, TypeRef,
    TypedefDef,
};

// Generation engine
pub use thriftflow_codegen::{
    CodegenError, FlowGenerator, GenOptions, NameTransform, generate_file, relative_module_path,
    transforms,
};
