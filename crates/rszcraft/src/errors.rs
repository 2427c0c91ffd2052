//! Error types for schema declaration and the type registry.

use std::path::PathBuf;

use thiserror::Error;

use crate::field::Width;

/// Errors produced while declaring fields on a [crate::schema::Schema].
///
/// All of these are programmer errors in a concrete record definition; they
/// surface at declaration time and never at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclareError {
    /// Field name is already declared on this schema.
    #[error("duplicate field name: {0}")]
    DuplicateField(String),
    /// Field name is empty.
    #[error("empty field name")]
    EmptyFieldName,
    /// A list entry count cannot be stored in the given width.
    #[error("list entry count cannot be stored as {0:?}")]
    InvalidCountWidth(Width),
    /// Alignment boundary of zero bits.
    #[error("alignment boundary must be non-zero")]
    ZeroAlignment,
}

/// Errors produced when loading or querying the type registry.
///
/// Load-time variants mean the decode pipeline cannot run at all; callers
/// treat them as fatal at process start.
#[derive(Debug, Error)]
pub enum TypeMapError {
    /// Registry resource could not be read.
    #[error("cannot read type registry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Registry resource is not a flat JSON object of strings.
    #[error("malformed type registry: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Registry key is neither a decimal nor a hexadecimal type code.
    #[error("bad type code key: {0:?}")]
    BadTypeCode(String),
    /// Two registry keys normalize to the same code.
    #[error("duplicate type code: {0:#010x}")]
    DuplicateTypeCode(u32),
    /// Lookup of a code with no registry entry.
    #[error("unknown type code: {0:#010x}")]
    UnknownTypeCode(u32),
}
