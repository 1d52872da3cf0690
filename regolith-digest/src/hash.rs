//! Pluggable 32-bit hash primitives.
//!
//! Noise generators never hash bytes themselves; they go through the
//! [`HashPrimitive`] contract so the digest algorithm can be swapped without
//! touching the sampling code. Two adapters are provided: [`Md5Hash`], a
//! keyed primitive built on the `md5` crate, and [`Crc32c`], a fast
//! non-cryptographic checksum.
//!
//! A primitive is configured once (with or without a key) and then treated
//! as immutable; `hash` takes `&self` and has no side effects, so a given
//! primitive always maps the same bytes to the same digest.

/// Contract for digesting an ordered byte sequence into 32 bits.
pub trait HashPrimitive {
    /// Digest `bytes` into a 32-bit value.
    ///
    /// Must be a pure function of `bytes` and the primitive's own
    /// configuration (key material), so that generator output stays
    /// reproducible across calls, instances, and processes.
    fn hash(&self, bytes: &[u8]) -> u32;
}

/// Keyed MD5 primitive, truncated to the first four digest bytes.
///
/// The key bytes are fed to the context ahead of the payload on every call,
/// so `hash(data)` equals the leading 32 bits (big-endian) of
/// `md5(key || data)`. An empty key gives plain MD5.
#[derive(Debug, Clone, Default)]
pub struct Md5Hash {
    key: Vec<u8>,
}

impl Md5Hash {
    /// Create an unkeyed primitive (plain MD5, truncated).
    #[must_use]
    pub const fn unkeyed() -> Self {
        Self { key: Vec::new() }
    }

    /// Create a primitive keyed with the given byte sequence.
    #[must_use]
    pub fn keyed(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }
}

impl HashPrimitive for Md5Hash {
    fn hash(&self, bytes: &[u8]) -> u32 {
        let mut ctx = md5::Context::new();
        ctx.consume(&self.key);
        ctx.consume(bytes);
        let digest = ctx.finalize().0;
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}

/// CRC-32C (Castagnoli) primitive.
///
/// Keying folds the key into the rolling CRC state up front, so
/// `hash(data)` equals `crc32c(key || data)` without re-hashing the key
/// bytes on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32c {
    state: u32,
}

impl Crc32c {
    /// Create an unkeyed primitive.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    /// Create a primitive keyed with the given byte sequence.
    #[must_use]
    pub fn keyed(key: &[u8]) -> Self {
        Self {
            state: crc32c::crc32c(key),
        }
    }
}

impl HashPrimitive for Crc32c {
    fn hash(&self, bytes: &[u8]) -> u32 {
        crc32c::crc32c_append(self.state, bytes)
    }
}
