//! Integer types accepted as buffer indices.

/// An integer usable as a buffer index.
///
/// Implemented for every primitive integer up to 64 bits plus `isize` and
/// `usize`. Indices are widened to `i128` so that negative values survive
/// into diagnostics instead of wrapping to a huge unsigned number.
pub trait BufferIndex: Copy {
    /// The index widened to `i128`, sign preserved.
    fn to_raw(self) -> i128;

    /// The index as an element offset, or `None` if it is negative or does
    /// not fit in `usize`.
    fn to_offset(self) -> Option<usize> {
        usize::try_from(self.to_raw()).ok()
    }
}

macro_rules! impl_buffer_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BufferIndex for $ty {
                #[inline]
                fn to_raw(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_buffer_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
