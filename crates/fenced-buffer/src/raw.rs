//! Wrapping raw, externally owned memory.
//!
//! This is the only module in the crate with `unsafe` code. It turns a
//! caller-asserted `(pointer, len)` pair into a wrapped buffer, or into a
//! read-only view when the pointer is `*const`. The element
//! count cannot be recovered from a pointer, so it is trusted, not checked:
//! every later access is bounds-checked against the count the caller gave
//! here, and is only as sound as that count.

#![allow(unsafe_code)]

use std::ptr::NonNull;

use fenced_core::{fatal, AccessSite, BufferConfig};

use crate::buffer::BoundedBuffer;
use crate::view::BoundedView;

impl<'a, T> BoundedBuffer<'a, T> {
    /// Wrap `len` elements starting at `data`.
    ///
    /// A null `data` is fatal.
    ///
    /// # Safety
    ///
    /// The caller asserts, and this function does not verify, that for the
    /// whole of `'a`:
    ///
    /// - `data` is aligned for `T` and points to `len` consecutive,
    ///   initialised values of `T` inside a single allocation;
    /// - nothing else reads or writes that memory except through the
    ///   returned buffer;
    /// - `len * size_of::<T>()` does not exceed `isize::MAX`.
    ///
    /// The memory is never released through the returned buffer; the caller
    /// keeps that responsibility.
    #[track_caller]
    pub unsafe fn from_raw_parts(data: *mut T, len: usize) -> Self {
        // SAFETY: forwarded verbatim; same contract.
        unsafe { Self::from_raw_parts_with_config(data, len, BufferConfig::default()) }
    }

    /// [`from_raw_parts`](Self::from_raw_parts) with an explicit config.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts).
    #[track_caller]
    pub unsafe fn from_raw_parts_with_config(
        data: *mut T,
        len: usize,
        config: BufferConfig,
    ) -> Self {
        let Some(data) = NonNull::new(data) else {
            fatal::null_region(AccessSite::caller(), config);
        };
        debug_assert!(data.as_ptr().is_aligned(), "misaligned buffer region");
        // SAFETY: non-null checked above; alignment, extent, initialisation
        // and exclusivity are the caller's contract.
        let region = unsafe { std::slice::from_raw_parts_mut(data.as_ptr(), len) };
        Self::wrap(region).configured(config)
    }
}

impl<'a, T> BoundedView<'a, T> {
    /// View `len` elements starting at `data`.
    ///
    /// A null `data` is fatal.
    ///
    /// # Safety
    ///
    /// The caller asserts, and this function does not verify, that for the
    /// whole of `'a`:
    ///
    /// - `data` is aligned for `T` and points to `len` consecutive,
    ///   initialised values of `T` inside a single allocation;
    /// - nothing writes that memory;
    /// - `len * size_of::<T>()` does not exceed `isize::MAX`.
    #[track_caller]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        // SAFETY: forwarded verbatim; same contract.
        unsafe { Self::from_raw_parts_with_config(data, len, BufferConfig::default()) }
    }

    /// [`from_raw_parts`](Self::from_raw_parts) with an explicit config.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts).
    #[track_caller]
    pub unsafe fn from_raw_parts_with_config(
        data: *const T,
        len: usize,
        config: BufferConfig,
    ) -> Self {
        let Some(data) = NonNull::new(data.cast_mut()) else {
            fatal::null_region(AccessSite::caller(), config);
        };
        debug_assert!(data.as_ptr().is_aligned(), "misaligned buffer region");
        // SAFETY: non-null checked above; alignment, extent, initialisation
        // and the absence of writers are the caller's contract.
        let region = unsafe { std::slice::from_raw_parts(data.as_ptr().cast_const(), len) };
        Self::wrap(region).configured(config)
    }
}
