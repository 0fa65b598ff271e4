//! Core types for fenced buffers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces every checked access needs regardless of how the buffer's memory
//! is owned:
//!
//! - [`BufferIndex`]: signed and unsigned integer indices, so that a
//!   negative index is representable and rejected like an overflow.
//! - [`AccessSite`]: where an access happened (file, line, column and,
//!   when captured by macro, the enclosing function).
//! - [`BoundsError`] / [`AllocError`]: the two failure kinds.
//! - [`BufferConfig`] / [`ViolationPolicy`]: how a failure terminates.
//! - [`fatal`]: the single path every failure takes to stderr and abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod caller;
pub mod config;
pub mod error;
pub mod fatal;
pub mod index;
pub mod site;

pub use config::{BufferConfig, ViolationPolicy};
pub use error::{AllocError, BoundsError};
pub use fatal::Diagnostic;
pub use index::BufferIndex;
pub use site::AccessSite;
