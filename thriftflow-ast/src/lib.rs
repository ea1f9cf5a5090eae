//! # Thriftflow AST
//!
//! Typed AST contract for resolved Thrift IDL documents.
//!
//! This crate provides:
//! - Definition variants for every top-level IDL construct
//! - Type references (primitives, named cross-references, containers)
//! - The resolved, order-preserving file set produced by the external parser
//!
//! Parsing IDL source text is not part of this crate; an external parser
//! produces these values (optionally across a process boundary, since every
//! node is serde-serializable) and the generator consumes them read-only.

pub mod ast;
pub mod set;

pub use ast::{
    Annotations, ConstDef, ConstValue, Definition, EnumDef, EnumValue, Field, FunctionDef,
    PrimitiveType, Requiredness, SenumDef, ServiceDef, StructDef, TypeRef, TypedefDef,
};
pub use set::{IdlFile, IdlSet};
