//! Dual bloom filter with pluggable key-value storage backends.
//!
//! A dual bloom filter answers set-membership tests with no false
//! positives but some degree of false negatives, the dual of a classical
//! bloom filter's guarantees. Instead of bit arrays it stores whole
//! elements in a keyed backend, one element per slot:
//!
//! Insertion:
//!     * Hash the element with the configured 64-bit hash function and
//!       reduce modulo capacity to get a slot.
//!     * Write the element bytes into that slot, overwriting whatever
//!       was there (last write wins on collision).
//! Query:
//!     * Hash to the same slot and read it back.
//!     * Report membership only if the stored bytes equal the queried
//!       element exactly, which is why a positive answer is definite.
//! Expiration:
//!     * Delegated entirely to the backend via a per-filter hint; the
//!       filter holds no expiration state of its own.
//!
//! The storage contract is two methods ([`FieldStorage`]), satisfied by
//! the built-in in-memory map and, behind the `redis` feature, a Redis
//! hash per filter.
//!
//! ```
//! use dual_bloom_rs::{DualBloomFilter, FilterConfigBuilder, InMemoryStorage};
//!
//! let config = FilterConfigBuilder::default()
//!     .id("example".to_string())
//!     .capacity(10_000)
//!     .build()
//!     .unwrap();
//! let filter = DualBloomFilter::new(config, InMemoryStorage::new()).unwrap();
//!
//! filter.add(b"element").unwrap();
//! assert!(filter.has(b"element").unwrap());
//! assert!(!filter.has(b"non-member element").unwrap());
//! ```

mod error;
mod filter;
mod hash;
mod inmemory_storage;
#[cfg(feature = "redis")]
mod redis_storage;
mod storage;

pub use error::{FilterError, Result};
pub use filter::{
    DualBloomFilter, FilterConfig, FilterConfigBuilder,
    FilterConfigBuilderError,
};
pub use hash::{HashFunction, default_hash_function, hash_fnv64, hash_murmur64};
pub use inmemory_storage::InMemoryStorage;
#[cfg(feature = "redis")]
pub use redis_storage::RedisStorage;
pub use storage::FieldStorage;
