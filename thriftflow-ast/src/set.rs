//! Resolved file set handed over by the external parser.
//!
//! The parser resolves `include` statements transitively and enumerates
//! every reachable file exactly once. The enumeration order is preserved
//! here because generated import blocks follow it verbatim.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ast::Definition;

/// One resolved IDL file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlFile {
    /// Absolute path of the source file.
    pub path: PathBuf,
    /// Top-level definitions in file order.
    pub definitions: Vec<Definition>,
}

impl IdlFile {
    /// Creates a file with no definitions.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            definitions: Vec::new(),
        }
    }

    /// Adds a definition, preserving file order.
    pub fn add_definition(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    /// Returns the file's base name without extension, if UTF-8.
    #[must_use]
    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|stem| stem.to_str())
    }
}

/// All files reachable from one entry file, in parser enumeration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdlSet {
    /// Files in parser enumeration order.
    pub files: Vec<IdlFile>,
    /// Path lookup map (built as files are added).
    #[serde(skip)]
    index: HashMap<PathBuf, usize>,
}

impl IdlSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, preserving parser enumeration order.
    pub fn add_file(&mut self, file: IdlFile) {
        let position = self.files.len();
        self.index.insert(file.path.clone(), position);
        self.files.push(file);
    }

    /// Looks up a file by absolute path.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&IdlFile> {
        self.index.get(path).map(|&position| &self.files[position])
    }

    /// Returns true if the set contains `path`.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    /// Iterates files in parser enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &IdlFile> {
        self.files.iter()
    }

    /// Returns the number of files in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the set holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Rebuilds the path index from the files vector.
    ///
    /// Required after deserializing a set or mutating `files` directly.
    pub fn build_index(&mut self) {
        self.index.clear();
        for (position, file) in self.files.iter().enumerate() {
            self.index.insert(file.path.clone(), position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StructDef;

    fn file(path: &str) -> IdlFile {
        IdlFile::new(path)
    }

    #[test]
    fn test_add_and_get() {
        let mut set = IdlSet::new();
        set.add_file(file("/idl/entry.thrift"));
        set.add_file(file("/idl/shared.thrift"));

        assert!(set.contains(Path::new("/idl/entry.thrift")));
        assert!(set.get(Path::new("/idl/missing.thrift")).is_none());
        let shared = set
            .get(Path::new("/idl/shared.thrift"))
            .expect("shared file present");
        assert_eq!(shared.path, Path::new("/idl/shared.thrift"));
    }

    #[test]
    fn test_order_preserved() {
        let mut set = IdlSet::new();
        set.add_file(file("/idl/b.thrift"));
        set.add_file(file("/idl/a.thrift"));
        set.add_file(file("/idl/c.thrift"));

        let order: Vec<&Path> = set.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(
            order,
            vec![
                Path::new("/idl/b.thrift"),
                Path::new("/idl/a.thrift"),
                Path::new("/idl/c.thrift"),
            ]
        );
    }

    #[test]
    fn test_build_index_after_direct_mutation() {
        let mut set = IdlSet::new();
        set.files.push(file("/idl/entry.thrift"));
        assert!(set.get(Path::new("/idl/entry.thrift")).is_none());

        set.build_index();
        assert!(set.get(Path::new("/idl/entry.thrift")).is_some());
    }

    #[test]
    fn test_stem() {
        let file = IdlFile::new("/idl/sub/common.thrift");
        assert_eq!(file.stem(), Some("common"));
    }

    #[test]
    fn test_file_definitions_ordered() {
        let mut file = IdlFile::new("/idl/entry.thrift");
        file.add_definition(Definition::Struct(StructDef::new("B")));
        file.add_definition(Definition::Struct(StructDef::new("A")));

        let names: Vec<&str> = file.definitions.iter().map(Definition::name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
