//! Fenced: fixed-size contiguous buffers with checked access and
//! scope-bound release.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fenced sub-crates. For most users, adding `fenced` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fenced::prelude::*;
//!
//! // Owned: allocated here, zero-initialised, released at end of scope.
//! let mut buf: OwnedBuffer<i32> = BoundedBuffer::new(5);
//! *at_mut!(buf, 2) = 42;
//! assert_eq!(get!(buf, 2), 42);
//! assert_eq!(buf.len(), 5);
//! assert_eq!(buf.byte_size(), 20);
//!
//! // Wrapped: the caller keeps ownership; only access is checked.
//! let mut region = vec![0u8; 10];
//! {
//!     let mut view = BoundedBuffer::wrap(&mut region);
//!     view.set(9, 1);
//!     assert!(view.try_at(10).is_err());
//! }
//! assert_eq!(region[9], 1);
//! ```
//!
//! An out-of-range access such as `at!(buf, 5)` above writes
//!
//! ```text
//! src/main.rs:12:6: buffer overflow: index [5] is out of range [0-4]
//! src/main.rs:12:6: function: demo::main
//! ```
//!
//! to stderr and aborts the process.
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `fenced-buffer` | `BoundedBuffer`, `BoundedView`, accessor macros |
//! | [`types`] | `fenced-core` | Index types, access sites, errors, config, fatal path |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Version of this crate, e.g. `"0.1.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bounded buffers and accessor macros (`fenced-buffer`).
pub use fenced_buffer as buffer;

/// Index types, access sites, errors, config, and the fatal path
/// (`fenced-core`).
pub use fenced_core as types;

pub use fenced_buffer::{at, at_mut, get};

/// Common imports for typical fenced usage.
///
/// ```rust
/// use fenced::prelude::*;
/// ```
pub mod prelude {
    pub use fenced_buffer::{at, at_mut, get};
    pub use fenced_buffer::{BoundedBuffer, BoundedView, OwnedBuffer, Ownership};
    pub use fenced_core::{BoundsError, BufferConfig, BufferIndex, ViolationPolicy};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::VERSION, "0.1.0");
    }

    #[test]
    fn prelude_covers_owned_and_wrapped_use() {
        let mut owned: OwnedBuffer<u32> = BoundedBuffer::new(2);
        *at_mut!(owned, 1) = 3;

        let mut backing = [1u32, 2];
        let view = BoundedBuffer::wrap(&mut backing);

        assert_eq!(get!(owned, 1) + get!(view, 1), 5);
        assert_eq!(view.ownership(), Ownership::Wrapped);

        let table = [10u32, 20];
        let shared = BoundedView::wrap(&table);
        assert_eq!(get!(shared, 1) + shared.get(0), 30);
        assert_eq!(
            owned.try_at(-2),
            Err(BoundsError { index: -2, len: 2 })
        );
    }
}
