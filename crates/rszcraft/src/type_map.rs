//! Registry mapping 32-bit type codes to schema-type names.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::TypeMapError;

/// Read-only mapping from a type code embedded in the file to the name of
/// the schema that decodes the referenced sub-record.
///
/// Built once at process start from a JSON resource and never mutated, so
/// concurrent decode operations may share a reference without locking.
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: HashMap<u32, String>,
}

impl TypeMap {
    /// Parses the registry resource: a flat JSON object whose keys are type
    /// codes (decimal or hexadecimal strings) and whose values are
    /// schema-type names.
    pub fn from_json_str(json: &str) -> Result<Self, TypeMapError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (key, name) in raw {
            let code = parse_type_code(&key).ok_or(TypeMapError::BadTypeCode(key))?;
            if entries.insert(code, name).is_some() {
                return Err(TypeMapError::DuplicateTypeCode(code));
            }
        }
        Ok(TypeMap { entries })
    }

    /// Reads and parses the registry file. The whole decode pipeline is
    /// unusable without it, so callers treat a failure here as fatal at
    /// startup; the error names the resource that could not be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TypeMapError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TypeMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolves a type code to the schema-type name to instantiate.
    pub fn lookup(&self, code: u32) -> Result<&str, TypeMapError> {
        self.entries
            .get(&code)
            .map(String::as_str)
            .ok_or(TypeMapError::UnknownTypeCode(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A `0x` prefix forces hexadecimal. Plain digits are decimal; anything else
/// is tried as bare hexadecimal, the keying used by community type dumps.
fn parse_type_code(key: &str) -> Option<u32> {
    if let Some(hex) = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    key.parse::<u32>()
        .ok()
        .or_else(|| u32::from_str_radix(key, 16).ok())
}
