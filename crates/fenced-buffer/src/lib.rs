//! Fixed-size, bounds-checked buffers with scope-bound release.
//!
//! A [`BoundedBuffer`] is a contiguous run of `len` elements of `T`. The
//! element count is fixed when the buffer is created and every indexed
//! access is checked against it. An out-of-range index is a programmer
//! error: the process writes a diagnostic to stderr and aborts (see
//! [`fenced_core::fatal`]).
//!
//! # Ownership modes
//!
//! ```text
//! BoundedBuffer<'a, T>
//! ├── Owned   (Box<[T]>, allocated here, released on drop)
//! └── Wrapped (&'a mut [T], caller's memory, never released here)
//! ```
//!
//! - **Owned:** [`BoundedBuffer::new`], [`BoundedBuffer::from_fn`], or
//!   `From<Vec<T>>` / `From<Box<[T]>>` / `From<[T; N]>`. The memory is
//!   released exactly once, when the buffer goes out of scope.
//! - **Wrapped:** [`BoundedBuffer::wrap`] over a slice, or the `unsafe`
//!   [`BoundedBuffer::from_raw_parts`] over a raw pointer. Wrapping adds
//!   bounds checks only; the caller keeps ownership.
//!
//! Memory that can only be lent shared (`&[T]`, `*const T`) gets a
//! read-only [`BoundedView`] through [`BoundedView::wrap`],
//! [`BoundedView::from_raw_parts`], or [`BoundedBuffer::view`].
//!
//! # Access
//!
//! | Form | On violation |
//! |------|--------------|
//! | [`at!`] / [`at_mut!`] / [`get!`] | fatal, reports location and enclosing function |
//! | [`BoundedBuffer::at`] / `buf[i]` / [`BoundedBuffer::get`] | fatal, reports location; function from a backtrace when symbols are present |
//! | [`BoundedBuffer::try_at`] | returns [`BoundsError`] |
//!
//! Indices may be any primitive integer; negative indices are rejected the
//! same way as indices past the end.
//!
//! # Safety
//!
//! `unsafe` is confined to `raw.rs`, which turns a caller-asserted
//! `(pointer, len)` pair into a wrapped buffer or view. Everything else is
//! safe code over `Box<[T]>`, `&mut [T]` and `&[T]`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod access;
pub mod buffer;
mod macros;
mod raw;
mod view;

pub use buffer::{BoundedBuffer, Ownership, OwnedBuffer};
pub use view::BoundedView;
pub use fenced_core::{
    AccessSite, AllocError, BoundsError, BufferConfig, BufferIndex, ViolationPolicy,
};

#[doc(hidden)]
pub mod __private {
    pub use fenced_core::access_site;
    pub use fenced_core::fatal::out_of_bounds;
}
