//! # Thriftflow
//!
//! Flow type declarations generated from Thrift IDL schemas.
//!
//! Thriftflow turns a parsed, reference-resolved Thrift document into
//! `export type` declarations in the Flow dialect, so values crossing a
//! Thrift serialization boundary get compile-time type checking on the
//! JavaScript side.
//!
//! ## Quick Start
//!
//! ```ignore
//! use thriftflow::prelude::*;
//!
//! // The external parser hands over a resolved file set.
//! let set: IdlSet = parse_entry("/idl/service.thrift")?;
//!
//! let options = GenOptions::new().with_source(true);
//! let document = generate_file(&set, Path::new("/idl/service.thrift"), &options)?;
//! // Hand `document` to the formatting/output layer.
//! ```
//!
//! ## Crate Organization
//!
//! - [`ast`] - Typed AST contract produced by the external IDL parser
//! - [`codegen`] - Type mapping and declaration generation

pub mod prelude;

/// Typed AST contract produced by the external IDL parser.
pub mod ast {
    pub use thriftflow_ast::*;
}

/// Type mapping and declaration generation.
pub mod codegen {
    pub use thriftflow_codegen::*;
}

// Re-export commonly used items at the crate root
pub use thriftflow_ast::{Definition, Field, IdlFile, IdlSet, PrimitiveType, TypeRef};
pub use thriftflow_codegen::{CodegenError, FlowGenerator, GenOptions, generate_file};
