use crate::error::{FilterError, Result};
use crate::hash::{HashFunction, default_hash_function};
use crate::storage::FieldStorage;
use derive_builder::Builder;
use tracing::debug;

/// Configuration for a dual bloom filter instance.
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct FilterConfig {
    /// Filter identity; also the storage structure name, which namespaces
    /// this filter's slots from other filters sharing the same backend.
    pub id: String,

    /// Number of distinct storage slots the filter may use. Fixed at
    /// construction; resizing would orphan existing entries.
    #[builder(default = "1_000_000")]
    pub capacity: u64,

    /// Expiration hint in seconds forwarded to the storage backend on
    /// every write. `0` means no expiration. The filter itself holds no
    /// expiration state.
    #[builder(default = "0")]
    pub expiry_secs: u64,

    /// Hash function mapping element bytes to a 64-bit digest.
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(FilterError::InvalidConfig(
                "Filter id must be non-empty".into(),
            ));
        }
        if self.capacity == 0 {
            return Err(FilterError::InvalidConfig(
                "Capacity must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Dual bloom filter: a probabilistic set-membership structure with no
/// false positives but some degree of false negatives. The filter never
/// reports having seen an element it has not, but may report not having
/// seen an element it has. These properties are dual to a usual bloom
/// filter's, hence the name.
///
/// Each element hashes to one of `capacity` slots in the storage backend,
/// and the slot stores the full element bytes. A membership test re-reads
/// the slot and compares content byte-for-byte, which is what rules out
/// false positives. Two elements colliding into one slot resolve by last
/// write wins; the earlier element becomes indistinguishable from "never
/// added".
///
/// Slots live in the backend under the structure named by the filter's
/// id, with the decimal slot index as the field key, so filters with
/// distinct ids never interfere even on a shared store.
pub struct DualBloomFilter<S: FieldStorage> {
    config: FilterConfig,
    storage: S,
}

impl<S: FieldStorage> DualBloomFilter<S> {
    pub fn new(config: FilterConfig, storage: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, storage })
    }

    /// Slot index for the element: 64-bit digest modulo capacity.
    fn index(&self, element: &[u8]) -> u64 {
        (self.config.hash_function)(element) % self.config.capacity
    }

    /// Storage field key for the element, the decimal slot index.
    fn field_key(&self, element: &[u8]) -> String {
        self.index(element).to_string()
    }

    /// Probabilistic set membership test. `Ok(true)` guarantees the
    /// element was previously added and still occupies its slot.
    /// `Ok(false)` means never added, evicted by a colliding later add,
    /// or expired by the backend; the three are indistinguishable.
    /// Storage failures are propagated verbatim, never read as absence.
    pub fn has(&self, element: &[u8]) -> Result<bool> {
        let field = self.field_key(element);
        let stored = self.storage.read_field(&self.config.id, &field)?;
        let found = stored.as_deref() == Some(element);
        debug!(
            id = %self.config.id,
            slot = %field,
            occupied = stored.is_some(),
            found,
            "membership test"
        );
        Ok(found)
    }

    /// Adds an element, unconditionally overwriting whatever occupies its
    /// slot. No read-before-write; last write wins on collision.
    pub fn add(&self, element: &[u8]) -> Result<()> {
        let field = self.field_key(element);
        debug!(id = %self.config.id, slot = %field, "add element");
        self.storage.write_field(
            &self.config.id,
            &field,
            element,
            self.config.expiry_secs,
        )
    }

    /// Replaces the hash function. Elements already stored were keyed by
    /// the old function, so from this filter's perspective swapping is
    /// equivalent to a full reset; stale slots linger in storage until
    /// overwritten or expired.
    pub fn set_hash_function(&mut self, hash_function: HashFunction) {
        self.config.hash_function = hash_function;
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn capacity(&self) -> u64 {
        self.config.capacity
    }
}

impl<S: FieldStorage> std::fmt::Debug for DualBloomFilter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DualBloomFilter {{ id: {}, capacity: {}, expiry_secs: {} }}",
            self.config.id, self.config.capacity, self.config.expiry_secs
        )
    }
}
