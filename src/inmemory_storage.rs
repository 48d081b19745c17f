use crate::error::{FilterError, Result};
use crate::storage::FieldStorage;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage backend: a map of structure name to field map.
///
/// Ignores the expiry hint (entries live until overwritten or the process
/// exits). Useful for process-local filters and as the test double for
/// the networked backends.
#[derive(Default)]
pub struct InMemoryStorage {
    structs: RwLock<HashMap<String, HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied fields within a structure. Handy in tests to
    /// observe collision overwrites directly.
    pub fn field_count(&self, structure: &str) -> Result<usize> {
        let structs = self
            .structs
            .read()
            .map_err(|e| FilterError::StorageError(e.to_string()))?;
        Ok(structs.get(structure).map_or(0, HashMap::len))
    }
}

impl FieldStorage for InMemoryStorage {
    fn read_field(
        &self,
        structure: &str,
        field: &str,
    ) -> Result<Option<Vec<u8>>> {
        let structs = self
            .structs
            .read()
            .map_err(|e| FilterError::StorageError(e.to_string()))?;
        Ok(structs
            .get(structure)
            .and_then(|fields| fields.get(field))
            .cloned())
    }

    fn write_field(
        &self,
        structure: &str,
        field: &str,
        value: &[u8],
        _expiry_secs: u64,
    ) -> Result<()> {
        let mut structs = self
            .structs
            .write()
            .map_err(|e| FilterError::StorageError(e.to_string()))?;
        structs
            .entry(structure.to_string())
            .or_default()
            .insert(field.to_string(), value.to_vec());
        Ok(())
    }
}
