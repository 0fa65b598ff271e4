//! Checked element access.
//!
//! Every access validates `0 <= index < len` before touching memory. The
//! fatal forms hand a violation to [`fenced_core::fatal`] together with the
//! caller's location and this buffer's config; the `try_` forms return the
//! [`BoundsError`] instead.

use std::ops::{Index, IndexMut};

use fenced_core::{fatal, AccessSite, BoundsError, BufferIndex};

use crate::buffer::BoundedBuffer;

/// Validate `index` against `len` and convert it to an element offset.
#[inline]
pub(crate) fn locate<I: BufferIndex>(index: I, len: usize) -> Result<usize, BoundsError> {
    match index.to_offset() {
        Some(offset) if offset < len => Ok(offset),
        _ => Err(BoundsError {
            index: index.to_raw(),
            len,
        }),
    }
}

impl<T> BoundedBuffer<'_, T> {
    /// Validate `index` and convert it to an element offset.
    #[inline]
    pub fn check<I: BufferIndex>(&self, index: I) -> Result<usize, BoundsError> {
        locate(index, self.len())
    }

    /// Reference to element `index`, or the violation.
    #[inline]
    pub fn try_at<I: BufferIndex>(&self, index: I) -> Result<&T, BoundsError> {
        let offset = self.check(index)?;
        Ok(&self.as_slice()[offset])
    }

    /// Mutable reference to element `index`, or the violation.
    #[inline]
    pub fn try_at_mut<I: BufferIndex>(&mut self, index: I) -> Result<&mut T, BoundsError> {
        let offset = self.check(index)?;
        Ok(&mut self.as_mut_slice()[offset])
    }

    /// Reference to element `index`.
    ///
    /// An out-of-range index is fatal: the diagnostic names the caller's
    /// location, the index, and the valid range. The enclosing function is
    /// looked up from a backtrace at that point; [`at!`](crate::at) captures
    /// it at compile time instead.
    #[inline]
    #[track_caller]
    pub fn at<I: BufferIndex>(&self, index: I) -> &T {
        match self.check(index) {
            Ok(offset) => &self.as_slice()[offset],
            Err(err) => fatal::out_of_bounds(err, AccessSite::caller(), self.config),
        }
    }

    /// Mutable reference to element `index`. Fatal if out of range.
    #[inline]
    #[track_caller]
    pub fn at_mut<I: BufferIndex>(&mut self, index: I) -> &mut T {
        match self.check(index) {
            Ok(offset) => &mut self.as_mut_slice()[offset],
            Err(err) => fatal::out_of_bounds(err, AccessSite::caller(), self.config),
        }
    }

    /// [`at`](Self::at) reporting an explicit site on violation.
    #[inline]
    pub fn at_from<I: BufferIndex>(&self, index: I, site: AccessSite) -> &T {
        match self.check(index) {
            Ok(offset) => &self.as_slice()[offset],
            Err(err) => fatal::out_of_bounds(err, site, self.config),
        }
    }

    /// [`at_mut`](Self::at_mut) reporting an explicit site on violation.
    #[inline]
    pub fn at_mut_from<I: BufferIndex>(&mut self, index: I, site: AccessSite) -> &mut T {
        match self.check(index) {
            Ok(offset) => &mut self.as_mut_slice()[offset],
            Err(err) => fatal::out_of_bounds(err, site, self.config),
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

    /// Overwrite element `index`. Fatal if out of range.
    #[inline]
    #[track_caller]
    pub fn set<I: BufferIndex>(&mut self, index: I, value: T) {
        *self.at_mut(index) = value;
    }
}

impl<T, I: BufferIndex> Index<I> for BoundedBuffer<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &T {
        self.at(index)
    }
}

impl<T, I: BufferIndex> IndexMut<I> for BoundedBuffer<'_, T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut T {
        self.at_mut(index)
    }
}
