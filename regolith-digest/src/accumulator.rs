//! Typed-token digest accumulation.
//!
//! A noise sample starts life as a handful of typed values (coordinates,
//! lattice indices, seed bytes). The [`DigestAccumulator`] serializes each
//! one to a canonical byte form, buffers them in push order, and hands the
//! whole sequence to a [`HashPrimitive`] in one shot. Push order is
//! significant: generators always push x before y, and fixtures depend on
//! the exact byte forms documented on each `push_*` method.

use std::io::Write;

use crate::hash::HashPrimitive;

/// Reusable token buffer in front of a 32-bit hash primitive.
///
/// One accumulator is owned per generator instance and recycled across
/// samples: [`begin`](Self::begin) clears it, the `push_*` methods append,
/// and [`finalize`](Self::finalize) hashes the buffer and re-arms it. The
/// buffer is deliberately an owned field rather than shared state, which is
/// why sampling takes `&mut self` all the way up: interleaved pushes from
/// two threads would corrupt the token sequence.
#[derive(Debug, Clone)]
pub struct DigestAccumulator<H> {
    hasher: H,
    buf: Vec<u8>,
}

impl<H: HashPrimitive> DigestAccumulator<H> {
    /// Create an empty accumulator in front of `hasher`.
    #[must_use]
    pub const fn new(hasher: H) -> Self {
        Self {
            hasher,
            buf: Vec::new(),
        }
    }

    /// Discard any buffered tokens.
    ///
    /// [`finalize`](Self::finalize) already re-arms the accumulator, but
    /// generators call this at the top of every sample anyway so a poisoned
    /// buffer from an earlier panic cannot leak into the next digest.
    pub fn begin(&mut self) {
        self.buf.clear();
    }

    /// Append a float token: `f:` + 16 hex digits of the IEEE 754 bit
    /// pattern + `;`.
    ///
    /// Serializing the bit pattern rather than a decimal rendering keeps
    /// full precision, so two doubles collide only when they are
    /// bit-identical (or both canonicalized below). The non-finite cases
    /// collapse to fixed forms: any NaN becomes `f:nan;`, the infinities
    /// `f:inf;` and `f:-inf;`, keeping those inputs deterministic.
    pub fn push_f64(&mut self, value: f64) {
        if value.is_nan() {
            self.buf.extend_from_slice(b"f:nan;");
        } else if value == f64::INFINITY {
            self.buf.extend_from_slice(b"f:inf;");
        } else if value == f64::NEG_INFINITY {
            self.buf.extend_from_slice(b"f:-inf;");
        } else {
            let _ = write!(self.buf, "f:{:016x};", value.to_bits());
        }
    }

    /// Append an integer token: `i:` + 16 hex digits of the two's-complement
    /// bit pattern + `;`.
    pub fn push_i64(&mut self, value: i64) {
        let _ = write!(self.buf, "i:{:016x};", value as u64);
    }

    /// Append a byte-string token: `s:` + decimal length + `:` + the raw
    /// bytes + `;`.
    ///
    /// The length prefix keeps token boundaries unambiguous; without it,
    /// pushing `"ab"` then `"c"` would buffer the same bytes as `"a"` then
    /// `"bc"`.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let _ = write!(self.buf, "s:{}:", bytes.len());
        self.buf.extend_from_slice(bytes);
        self.buf.push(b';');
    }

    /// Hash the buffered token sequence, clear the buffer, and return the
    /// 32-bit digest.
    pub fn finalize(&mut self) -> u32 {
        let digest = self.hasher.hash(&self.buf);
        self.buf.clear();
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{Crc32c, Md5Hash};

    fn acc() -> DigestAccumulator<Crc32c> {
        DigestAccumulator::new(Crc32c::new())
    }

    #[test]
    fn finalize_rearms_the_buffer() {
        let mut digest = acc();
        digest.push_f64(0.25);
        digest.push_f64(-3.5);
        let first = digest.finalize();

        digest.push_f64(0.25);
        digest.push_f64(-3.5);
        assert_eq!(digest.finalize(), first);
    }

    #[test]
    fn begin_discards_buffered_tokens() {
        let mut digest = acc();
        digest.push_i64(999);
        digest.begin();
        digest.push_f64(1.0);
        let scrubbed = digest.finalize();

        digest.push_f64(1.0);
        assert_eq!(digest.finalize(), scrubbed);
    }

    #[test]
    fn push_order_is_significant() {
        let mut digest = acc();
        digest.push_f64(1.0);
        digest.push_f64(2.0);
        let xy = digest.finalize();

        digest.push_f64(2.0);
        digest.push_f64(1.0);
        assert_ne!(digest.finalize(), xy);
    }

    #[test]
    fn byte_tokens_cannot_alias() {
        let mut digest = acc();
        digest.push_bytes(b"ab");
        digest.push_bytes(b"c");
        let split_early = digest.finalize();

        digest.push_bytes(b"a");
        digest.push_bytes(b"bc");
        assert_ne!(digest.finalize(), split_early);
    }

    #[test]
    fn distinct_doubles_never_collide() {
        let mut digest = acc();
        digest.push_f64(0.1);
        let tenth = digest.finalize();

        // Nearest neighbor one ulp away must serialize differently.
        digest.push_f64(f64::from_bits(0.1_f64.to_bits() + 1));
        assert_ne!(digest.finalize(), tenth);
    }

    #[test]
    fn nan_collapses_to_one_form() {
        let mut digest = acc();
        digest.push_f64(f64::NAN);
        let canonical = digest.finalize();

        // A NaN with a different payload still hashes identically.
        digest.push_f64(f64::from_bits(0x7FF8_0000_0000_0001));
        assert_eq!(digest.finalize(), canonical);
    }

    #[test]
    fn infinities_are_distinct() {
        let mut digest = acc();
        digest.push_f64(f64::INFINITY);
        let positive = digest.finalize();

        digest.push_f64(f64::NEG_INFINITY);
        assert_ne!(digest.finalize(), positive);
    }

    #[test]
    fn works_with_either_primitive() {
        let mut crc = acc();
        let mut md5 = DigestAccumulator::new(Md5Hash::unkeyed());
        crc.push_f64(0.5);
        md5.push_f64(0.5);
        // Same token bytes, different primitives, both deterministic.
        assert_eq!(crc.finalize(), crc.hasher.hash(b"f:3fe0000000000000;"));
        assert_eq!(md5.finalize(), md5.hasher.hash(b"f:3fe0000000000000;"));
    }
}
