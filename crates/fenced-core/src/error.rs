//! Failure kinds for buffer construction and access.
//!
//! Both are fatal through the checked API; they exist as values so that the
//! `try_*` accessors can return them and so the fatal path has one thing to
//! format.

use std::error::Error;
use std::fmt;

/// An index outside `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsError {
    /// The rejected index, sign preserved.
    pub index: i128,
    /// Element count of the buffer that rejected it.
    pub len: usize,
}

impl BoundsError {
    /// Highest valid index, or `None` for an empty buffer.
    pub fn last_valid(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_valid() {
            Some(last) => write!(
                f,
                "buffer overflow: index [{}] is out of range [0-{last}]",
                self.index
            ),
            None => write!(
                f,
                "buffer overflow: index [{}] is out of range (buffer is empty)",
                self.index
            ),
        }
    }
}

impl Error for BoundsError {}

/// Backing memory for an owned buffer could not be obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// `len * element_size` does not fit in the address space.
    CapacityOverflow {
        /// Requested element count.
        len: usize,
        /// Bytes per element.
        element_size: usize,
    },
    /// The allocator returned no memory.
    OutOfMemory {
        /// Requested element count.
        len: usize,
        /// Bytes per element.
        element_size: usize,
    },
}

impl AllocError {
    /// Classify a failed request for `len` elements of `element_size` bytes.
    ///
    /// A request whose byte count exceeds `isize::MAX` can never be
    /// satisfied and is a capacity overflow; anything else is OOM.
    pub fn for_request(len: usize, element_size: usize) -> Self {
        let overflows = len
            .checked_mul(element_size)
            .is_none_or(|bytes| bytes > isize::MAX as usize);
        if overflows {
            Self::CapacityOverflow { len, element_size }
        } else {
            Self::OutOfMemory { len, element_size }
        }
    }

    /// Requested element count.
    pub fn requested_len(&self) -> usize {
        match self {
            Self::CapacityOverflow { len, .. } | Self::OutOfMemory { len, .. } => *len,
        }
    }

    /// Bytes per element.
    pub fn element_size(&self) -> usize {
        match self {
            Self::CapacityOverflow { element_size, .. }
            | Self::OutOfMemory { element_size, .. } => *element_size,
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::CapacityOverflow { .. } => "capacity overflow",
            Self::OutOfMemory { .. } => "out of memory",
        };
        write!(
            f,
            "allocation failed: {} elements of {} bytes ({reason})",
            self.requested_len(),
            self.element_size()
        )
    }
}

impl Error for AllocError {}
