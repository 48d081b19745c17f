use fnv::FnvHasher;
use murmur3::murmur3_x64_128;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the hash function used in the dual bloom filter.
///
/// The function takes the raw element bytes and produces a 64-bit digest,
/// which the filter reduces modulo its capacity to a slot index. A fresh
/// hasher is constructed and discarded inside each call, so no hash state
/// ever leaks between elements and the function is safe to call from any
/// number of threads at once.
///
/// Being a plain `fn`, hash functions can be swapped on a live filter via
/// [`crate::DualBloomFilter::set_hash_function`]. Swapping does not rehash
/// elements already in storage; their slots become unreachable under the
/// new function.
pub type HashFunction = fn(&[u8]) -> u64;

/// FNV-1a 64-bit digest of the element.
pub fn hash_fnv64(element: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(element);
    hasher.finish()
}

/// Murmur3 x64 digest folded down to 64 bits. Slower than FNV but with
/// better distribution on short or similar keys.
pub fn hash_murmur64(element: &[u8]) -> u64 {
    let mut cursor = Cursor::new(element);
    let h = murmur3_x64_128(&mut cursor, 0)
        .expect("Failed to compute Murmur3 hash");
    (h >> 64) as u64 ^ h as u64
}

pub fn default_hash_function(element: &[u8]) -> u64 {
    hash_fnv64(element)
}
