//! Read-only bounded views over shared memory.
//!
//! A [`BoundedView`] is the shared counterpart of a wrapped
//! [`BoundedBuffer`]: it borrows `&'a [T]`, so it can cover memory the
//! caller cannot or will not lend exclusively (a `static` table, a region
//! another view already reads). It never owns or releases anything and
//! offers no mutable access.

use std::fmt;
use std::ops::Index;
use std::slice;

use fenced_core::{fatal, AccessSite, BoundsError, BufferConfig, BufferIndex};

use crate::access::locate;
use crate::buffer::BoundedBuffer;

/// A fixed-size, read-only view with checked indexed access.
pub struct BoundedView<'a, T> {
    pub(crate) data: &'a [T],
    pub(crate) config: BufferConfig,
}

impl<'a, T> BoundedView<'a, T> {
    /// View caller-owned memory. No allocation; never released here.
    pub fn wrap(region: &'a [T]) -> Self {
        Self {
            data: region,
            config: BufferConfig::default(),
        }
    }

    /// Replace this view's config.
    pub fn configured(mut self, config: BufferConfig) -> Self {
        self.config = config;
        self
    }

    /// This view's config.
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes per element.
    #[inline]
    pub const fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Total bytes spanned.
    #[inline]
    pub fn byte_size(&self) -> usize {
        std::mem::size_of_val(self.data)
    }

    /// All elements, for the full borrow `'a`.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Validate `index` and convert it to an element offset.
    #[inline]
    pub fn check<I: BufferIndex>(&self, index: I) -> Result<usize, BoundsError> {
        locate(index, self.len())
    }

    /// Reference to element `index`, or the violation.
    #[inline]
    pub fn try_at<I: BufferIndex>(&self, index: I) -> Result<&'a T, BoundsError> {
        let offset = self.check(index)?;
        Ok(&self.data[offset])
    }

    /// Reference to element `index`. Fatal if out of range.
    #[inline]
    #[track_caller]
    pub fn at<I: BufferIndex>(&self, index: I) -> &'a T {
        match self.check(index) {
            Ok(offset) => &self.data[offset],
            Err(err) => fatal::out_of_bounds(err, AccessSite::caller(), self.config),
        }
    }

    /// Copy of element `index`. Fatal if out of range.
    #[inline]
    #[track_caller]
    pub fn get<I: BufferIndex>(&self, index: I) -> T
    where
        T: Copy,
    {
        *self.at(index)
    }
}

impl<T> BoundedBuffer<'_, T> {
    /// A read-only view of this buffer's memory with the same config.
    pub fn view(&self) -> BoundedView<'_, T> {
        BoundedView::wrap(self.as_slice()).configured(self.config)
    }
}

impl<T> Clone for BoundedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BoundedView<'_, T> {}

impl<'a, T> From<&'a [T]> for BoundedView<'a, T> {
    fn from(region: &'a [T]) -> Self {
        Self::wrap(region)
    }
}

impl<T, I: BufferIndex> Index<I> for BoundedView<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &T {
        self.at(index)
    }
}

impl<'a, T> IntoIterator for BoundedView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedView")
            .field("len", &self.len())
            .field("element_size", &self.element_size())
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::OwnedBuffer;

    use super::*;

    static TABLE: [u16; 4] = [1, 1, 2, 3];

    #[test]
    fn views_static_memory() {
        let view = BoundedView::wrap(&TABLE);
        assert_eq!(view.len(), 4);
        assert_eq!(view.byte_size(), 8);
        assert_eq!(view.get(3), 3);
        assert_eq!(view.try_at(4), Err(BoundsError { index: 4, len: 4 }));
    }

    #[test]
    fn views_can_alias() {
        let data = vec![5i32, 6, 7];
        let first = BoundedView::wrap(&data);
        let second = first;
        assert_eq!(first[0usize] + second[2usize], 12);
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn buffer_view_inherits_config() {
        let mut buf: OwnedBuffer<u8> = BoundedBuffer::with_config(2, BufferConfig::panicking());
        buf.set(1, 9);
        let view = buf.view();
        assert_eq!(view.config(), BufferConfig::panicking());
        assert_eq!(*crate::at!(view, 1), 9);
        assert_eq!(view.iter().copied().sum::<u8>(), 9);
    }

    #[test]
    #[should_panic(expected = "index [-1] is out of range [0-3]")]
    fn negative_index_is_fatal() {
        let view = BoundedView::wrap(&TABLE).configured(BufferConfig::panicking());
        view.get(-1);
    }

    #[test]
    #[should_panic(expected = "function: fenced_buffer::view::tests::macro_violation_names_function")]
    fn macro_violation_names_function() {
        let view = BoundedView::wrap(&TABLE[..0]).configured(BufferConfig::panicking());
        let _value = crate::get!(view, 0);
    }
}
