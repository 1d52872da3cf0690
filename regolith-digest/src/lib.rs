//! Hashing substrate for the regolith noise engine.
//!
//! This crate provides the deterministic plumbing the noise generators are
//! built on:
//!
//! - [`DigestAccumulator`] - typed-token buffering with a begin / push /
//!   finalize protocol
//! - [`HashPrimitive`] - the pluggable 32-bit hash contract, with
//!   [`Md5Hash`] (keyed) and [`Crc32c`] (non-cryptographic) adapters
//! - [`LatticeMix`] - the integer avalanche-mix contract, with [`FxMix`]
//!   as the default implementation
//!
//! Everything here is pure computation: no I/O, no global state, and
//! bit-identical output for identical input on every platform.

pub mod accumulator;
pub mod hash;
pub mod mix;

pub use accumulator::DigestAccumulator;
pub use hash::{Crc32c, HashPrimitive, Md5Hash};
pub use mix::{FxMix, LatticeMix};
