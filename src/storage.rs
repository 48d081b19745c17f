use crate::error::Result;

/// Minimal storage contract the dual bloom filter drives.
///
/// Backends expose exactly two operations, both scoped to a named
/// structure (a Redis hash, an in-memory map, ...). The filter passes its
/// own id as the structure name, so filters with distinct ids can never
/// observe each other's slots even on a shared backend.
///
/// Both methods take `&self`; interior mutability and any serialization
/// of concurrent writers are the backend's concern.
pub trait FieldStorage: Send + Sync {
    /// Returns the bytes stored under `field` within `structure`, or
    /// `Ok(None)` if the field was never written (or has expired).
    /// Absence is a normal outcome, never an error.
    fn read_field(
        &self,
        structure: &str,
        field: &str,
    ) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `field` within `structure`, unconditionally
    /// overwriting any prior value. `expiry_secs` is an expiration hint
    /// in seconds, `0` meaning none; backends without expiration support
    /// ignore it.
    fn write_field(
        &self,
        structure: &str,
        field: &str,
        value: &[u8],
        expiry_secs: u64,
    ) -> Result<()>;
}

// Lets several filters share one backend instance.
impl<T: FieldStorage + ?Sized> FieldStorage for std::sync::Arc<T> {
    fn read_field(
        &self,
        structure: &str,
        field: &str,
    ) -> Result<Option<Vec<u8>>> {
        (**self).read_field(structure, field)
    }

    fn write_field(
        &self,
        structure: &str,
        field: &str,
        value: &[u8],
        expiry_secs: u64,
    ) -> Result<()> {
        (**self).write_field(structure, field, value, expiry_secs)
    }
}
