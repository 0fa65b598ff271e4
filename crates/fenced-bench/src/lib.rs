//! Benchmark fixtures for fenced buffers.
//!
//! - [`REFERENCE_LEN`]: element count used by the access benchmarks
//! - [`filled`]: an owned buffer with `buf[i] == i`
//! - [`scattered_indices`]: a deterministic, cache-unfriendly visiting order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fenced_buffer::{BoundedBuffer, OwnedBuffer};

/// Element count for the reference access profile (64K `u64`s, 512KB).
pub const REFERENCE_LEN: usize = 64 * 1024;

/// An owned buffer of `len` elements where element `i` holds `i`.
pub fn filled(len: usize) -> OwnedBuffer<u64> {
    BoundedBuffer::from_fn(len, |i| i as u64)
}

/// Every index in `0..len` exactly once, visited with a large odd stride so
/// consecutive accesses land far apart.
///
/// The stride is coprime with any power-of-two `len`, which makes the
/// sequence a permutation for those lengths.
pub fn scattered_indices(len: usize) -> Vec<usize> {
    const STRIDE: usize = 7919;
    (0..len).map(|i| (i * STRIDE) % len.max(1)).collect()
}
