//! The bounded buffer type: construction, ownership, and introspection.
//!
//! Checked element access lives in `access.rs`; raw-pointer wrapping lives
//! in `raw.rs`.
//!
//! # Release
//!
//! An owned buffer's memory is a `Box<[T]>` held by value. It is released
//! when the buffer is dropped, which happens exactly once: at the end of
//! the declaring scope on fall-through, early return, `?` propagation, or
//! panic unwind. Moving the buffer moves that obligation with it. There is
//! no public `free`, so release cannot be issued twice or forgotten.
//!
//! A wrapped buffer holds `&'a mut [T]`. Dropping it ends the borrow and
//! nothing else: the elements are not dropped and the memory is not
//! released.

use std::fmt;
use std::mem;
use std::slice;

use fenced_core::{fatal, AccessSite, AllocError, BufferConfig};

/// Whether a buffer owns its memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// Allocated by the buffer and released when it is dropped.
    Owned,
    /// Borrowed from the caller; never released by the buffer.
    Wrapped,
}

pub(crate) enum Storage<'a, T> {
    Owned(Box<[T]>),
    Wrapped(&'a mut [T]),
}

/// A fixed-size contiguous buffer with checked indexed access.
///
/// `len` and the element size are fixed at construction. There is no
/// push, pop, or resize.
pub struct BoundedBuffer<'a, T> {
    pub(crate) storage: Storage<'a, T>,
    pub(crate) config: BufferConfig,
}

/// A buffer that owns its memory.
///
/// Owned constructors return `BoundedBuffer<'a, T>` for any `'a`, so
/// buffers of borrowed elements can be written `BoundedBuffer<'_, T>`.
pub type OwnedBuffer<T> = BoundedBuffer<'static, T>;

impl<'a, T: Default> BoundedBuffer<'a, T> {
    /// Allocate `len` elements, each set to `T::default()` (zero for every
    /// numeric type).
    ///
    /// Allocation failure is fatal under the default [`BufferConfig`].
    #[track_caller]
    pub fn new(len: usize) -> Self {
        Self::with_config(len, BufferConfig::default())
    }

    /// [`new`](Self::new) with an explicit config.
    #[track_caller]
    pub fn with_config(len: usize, config: BufferConfig) -> Self {
        Self::from_fn_with_config(len, config, |_| T::default())
    }
}

impl<'a, T> BoundedBuffer<'a, T> {
    /// Allocate `len` elements, element `i` initialised to `init(i)`.
    #[track_caller]
    pub fn from_fn(len: usize, init: impl FnMut(usize) -> T) -> Self {
        Self::from_fn_with_config(len, BufferConfig::default(), init)
    }

    /// [`from_fn`](Self::from_fn) with an explicit config.
    #[track_caller]
    pub fn from_fn_with_config(
        len: usize,
        config: BufferConfig,
        init: impl FnMut(usize) -> T,
    ) -> Self {
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            fatal::alloc_failed(
                AllocError::for_request(len, mem::size_of::<T>()),
                AccessSite::caller(),
                config,
            );
        }
        data.extend((0..len).map(init));
        Self {
            storage: Storage::Owned(data.into_boxed_slice()),
            config,
        }
    }
}

impl<'a, T> BoundedBuffer<'a, T> {
    /// Wrap caller-owned memory. No allocation; never released here.
    pub fn wrap(region: &'a mut [T]) -> Self {
        Self {
            storage: Storage::Wrapped(region),
            config: BufferConfig::default(),
        }
    }

    /// Replace this buffer's config.
    pub fn configured(mut self, config: BufferConfig) -> Self {
        self.config = config;
        self
    }

    /// This buffer's config.
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Whether the memory is owned or wrapped.
    pub fn ownership(&self) -> Ownership {
        match self.storage {
            Storage::Owned(_) => Ownership::Owned,
            Storage::Wrapped(_) => Ownership::Wrapped,
        }
    }

    /// `true` if dropping this buffer releases its memory.
    pub fn is_owned(&self) -> bool {
        self.ownership() == Ownership::Owned
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// `true` if the buffer has no elements (every index is out of range).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes per element.
    #[inline]
    pub const fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Total bytes spanned: `len() * element_size()`.
    #[inline]
    pub fn byte_size(&self) -> usize {
        mem::size_of_val(self.as_slice())
    }

    /// All elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Owned(data) => &data[..],
            Storage::Wrapped(data) => &data[..],
        }
    }

    /// All elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Owned(data) => &mut data[..],
            Storage::Wrapped(data) => &mut data[..],
        }
    }

    /// Pointer to the first element. Never null; dangling (but aligned) for
    /// an empty buffer.
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// A wrapped view of this buffer's memory, for handing to functions
    /// that take `BoundedBuffer<'_, T>` regardless of ownership.
    ///
    /// The view inherits this buffer's config. Dropping it releases
    /// nothing.
    pub fn view_mut(&mut self) -> BoundedBuffer<'_, T> {
        let config = self.config;
        BoundedBuffer::wrap(self.as_mut_slice()).configured(config)
    }

    /// Give up automatic release.
    ///
    /// An owned buffer's memory is leaked and lives for the rest of the
    /// program; a wrapped buffer just returns its borrow.
    pub fn leak(self) -> &'a mut [T] {
        match self.storage {
            Storage::Owned(data) => Box::leak(data),
            Storage::Wrapped(data) => data,
        }
    }

    /// Take the elements out as a boxed slice.
    ///
    /// Owned storage is handed over without copying; wrapped storage is
    /// cloned into a new allocation.
    pub fn into_boxed_slice(self) -> Box<[T]>
    where
        T: Clone,
    {
        match self.storage {
            Storage::Owned(data) => data,
            Storage::Wrapped(data) => data.to_vec().into_boxed_slice(),
        }
    }

    /// Deep copy into a new owned buffer with the same config.
    pub fn to_owned_buffer<'b>(&self) -> BoundedBuffer<'b, T>
    where
        T: Clone,
    {
        BoundedBuffer::from(self.as_slice().to_vec()).configured(self.config)
    }
}

impl<'a, T> From<Vec<T>> for BoundedBuffer<'a, T> {
    fn from(data: Vec<T>) -> Self {
        Self::from(data.into_boxed_slice())
    }
}

impl<'a, T> From<Box<[T]>> for BoundedBuffer<'a, T> {
    fn from(data: Box<[T]>) -> Self {
        Self {
            storage: Storage::Owned(data),
            config: BufferConfig::default(),
        }
    }
}

impl<'a, T, const N: usize> From<[T; N]> for BoundedBuffer<'a, T> {
    fn from(data: [T; N]) -> Self {
        Self::from(Box::<[T]>::from(data))
    }
}

impl<'a, T> From<&'a mut [T]> for BoundedBuffer<'a, T> {
    fn from(region: &'a mut [T]) -> Self {
        Self::wrap(region)
    }
}

impl<'b, T> IntoIterator for &'b BoundedBuffer<'_, T> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b, T> IntoIterator for &'b mut BoundedBuffer<'_, T> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for BoundedBuffer<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedBuffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("ownership", &self.ownership())
            .field("len", &self.len())
            .field("element_size", &self.element_size())
            .field("data", &self.as_slice())
            .finish()
    }
}
