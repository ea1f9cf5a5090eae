//! Error types for declaration generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for generation operations.
///
/// Type mapping and per-definition rendering never fail; errors arise only
/// at the call boundary, before any rendering starts.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Entry file missing from the resolved file set.
    #[error("entry file '{}' not present in the resolved file set", .path.display())]
    EntryNotFound {
        /// Entry path requested by the caller.
        path: PathBuf,
    },

    /// Path not representable as UTF-8 in emitted text.
    #[error("path '{}' is not valid UTF-8", .path.display())]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
}
