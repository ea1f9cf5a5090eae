//! Document generation for one entry IDL file.

use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use thriftflow_ast::{Definition, IdlFile, IdlSet};

use crate::error::CodegenError;
use crate::flow::{
    ConstGenerator, DefIndex, EnumGenerator, ServiceGenerator, StructGenerator, TypeMapper,
    TypedefGenerator,
};
use crate::options::GenOptions;

/// Generates one Flow declaration document per entry IDL file.
///
/// Holds no state across calls: each `generate` reads the shared immutable
/// file set and options, so callers may generate several entry files
/// concurrently from the same generator.
#[derive(Debug)]
pub struct FlowGenerator<'a> {
    set: &'a IdlSet,
    options: &'a GenOptions,
}

impl<'a> FlowGenerator<'a> {
    /// Creates a generator over a resolved file set.
    #[must_use]
    pub fn new(set: &'a IdlSet, options: &'a GenOptions) -> Self {
        Self { set, options }
    }

    /// Generates the complete document for `entry`.
    ///
    /// The document is the header block, one namespace import per other
    /// resolved file, then one declaration block per definition in file
    /// order, all separated by blank lines. Unsupported definition kinds
    /// are dropped with a warning and never abort the run.
    ///
    /// # Errors
    /// Returns [`CodegenError::EntryNotFound`] if `entry` is not part of
    /// the resolved file set, or [`CodegenError::NonUtf8Path`] if a path
    /// cannot be emitted as UTF-8.
    pub fn generate(&self, entry: &Path) -> Result<String, CodegenError> {
        let file = self
            .set
            .get(entry)
            .ok_or_else(|| CodegenError::EntryNotFound {
                path: entry.to_path_buf(),
            })?;

        let mut blocks = vec![self.header(file)?];
        if let Some(imports) = self.imports(file)? {
            blocks.push(imports);
        }

        let index = DefIndex::new(&file.definitions);
        let mapper = TypeMapper::new(&index, self.options);
        let structs = StructGenerator::new(&mapper, self.options);
        let enums = EnumGenerator::new(self.options);
        let services = ServiceGenerator::new(&mapper, self.options);
        let consts = ConstGenerator::new(&mapper, self.options);
        let typedefs = TypedefGenerator::new(&mapper, self.options);

        for definition in &file.definitions {
            let block = match definition {
                Definition::Struct(def) | Definition::Exception(def) => {
                    structs.generate_struct(def)
                }
                Definition::Union(def) => structs.generate_union(def),
                Definition::Enum(def) => enums.generate(def),
                Definition::Typedef(def) => typedefs.generate(def),
                Definition::Service(def) => services.generate(def),
                Definition::Const(def) => consts.generate(def),
                Definition::Senum(def) => {
                    tracing::warn!(
                        "Skipping unsupported {} definition '{}' in {}",
                        definition.kind_name(),
                        def.name,
                        file.path.display()
                    );
                    continue;
                }
            };
            if !block.is_empty() {
                blocks.push(block);
            }
        }

        let mut document = blocks.join("\n\n");
        document.push('\n');
        Ok(document)
    }

    /// Renders the header comment block: the dialect marker, a generation
    /// timestamp, and optionally the resolved source path.
    fn header(&self, file: &IdlFile) -> Result<String, CodegenError> {
        let mut output = String::from("// @flow\n");
        output.push_str(&format!(
            "// Generated by thriftflow at {}",
            Utc::now().to_rfc2822()
        ));
        if self.options.source_disclosed() {
            let path = utf8_path(&file.path)?;
            output.push_str(&format!("\n// Source: {path}"));
        }
        Ok(output)
    }

    /// Renders one namespace import per resolved file other than the
    /// entry, in file-set order, bound to the file's base name and pointing
    /// at that file's generated output module.
    fn imports(&self, entry: &IdlFile) -> Result<Option<String>, CodegenError> {
        let entry_dir = entry.path.parent().unwrap_or_else(|| Path::new(""));
        let mut lines = Vec::new();
        for file in self.set.iter() {
            if file.path == entry.path {
                continue;
            }
            let binding = file.stem().ok_or_else(|| CodegenError::NonUtf8Path {
                path: file.path.clone(),
            })?;
            let module = relative_module_path(entry_dir, &file.path)?;
            lines.push(format!("import * as {binding} from '{module}';"));
        }

        if lines.is_empty() {
            Ok(None)
        } else {
            Ok(Some(lines.join("\n")))
        }
    }
}

/// Computes the generated-module path for `target` relative to `entry_dir`:
/// the IDL extension is stripped, and a bare file name gains a `./` prefix.
///
/// # Errors
/// Returns [`CodegenError::NonUtf8Path`] if the computed path is not valid
/// UTF-8.
pub fn relative_module_path(entry_dir: &Path, target: &Path) -> Result<String, CodegenError> {
    let module = relative_path(entry_dir, target).with_extension("");
    let text = utf8_path(&module)?.to_string();
    if module.components().count() == 1 {
        Ok(format!("./{text}"))
    } else {
        Ok(text)
    }
}

/// Computes `target` relative to `base` by stripping the longest common
/// component prefix and backing out of the remainder.
fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base_components: Vec<Component<'_>> = base.components().collect();
    let target_components: Vec<Component<'_>> = target.components().collect();

    let common = base_components
        .iter()
        .zip(&target_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &target_components[common..] {
        relative.push(component);
    }
    relative
}

fn utf8_path(path: &Path) -> Result<&str, CodegenError> {
    path.to_str().ok_or_else(|| CodegenError::NonUtf8Path {
        path: path.to_path_buf(),
    })
}
