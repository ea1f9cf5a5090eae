//! # Thriftflow Codegen
//!
//! Flow type-declaration generation from resolved Thrift IDL documents.
//!
//! This crate provides:
//! - Type reference to Flow type expression conversion
//! - Per-definition declaration rendering (structs, exceptions, unions,
//!   enums, typedefs, services, constants)
//! - Document assembly with header and cross-file import blocks
//!
//! Generation is a pure function of the resolved file set and the option
//! values; reading IDL text and writing output files belong to the
//! surrounding layer.

use std::path::Path;

use thriftflow_ast::IdlSet;

pub mod error;
pub mod flow;
pub mod generator;
pub mod options;
pub mod transforms;

pub use error::CodegenError;
pub use generator::{FlowGenerator, relative_module_path};
pub use options::{GenOptions, NameTransform};

/// Generates the Flow declaration document for one entry file.
///
/// # Arguments
/// * `set` - Resolved file set produced by the external parser
/// * `entry` - Absolute path of the entry file within the set
/// * `options` - Generation options
///
/// # Returns
/// The complete document text, ready for the caller's formatting and
/// output layer.
///
/// # Errors
/// Returns `CodegenError` if the entry file is missing from the set or a
/// path cannot be rendered as UTF-8.
pub fn generate_file(
    set: &IdlSet,
    entry: &Path,
    options: &GenOptions,
) -> Result<String, CodegenError> {
    FlowGenerator::new(set, options).generate(entry)
}
