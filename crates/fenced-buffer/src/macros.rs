//! Accessor macros that report the enclosing function on violation.

/// Checked shared access that reports file, line, column, and enclosing
/// function on violation.
///
/// ```
/// use fenced_buffer::{at, BoundedBuffer};
///
/// let buf = BoundedBuffer::from([1, 2, 3]);
/// assert_eq!(*at!(buf, 2), 3);
/// ```
#[macro_export]
macro_rules! at {
    ($buffer:expr, $index:expr $(,)?) => {{
        let index = $index;
        let buffer = &$buffer;
        match buffer.try_at(index) {
            ::core::result::Result::Ok(element) => element,
            ::core::result::Result::Err(err) => $crate::__private::out_of_bounds(
                err,
                $crate::__private::access_site!(),
                buffer.config(),
            ),
        }
    }};
}

/// Checked mutable access; see [`at!`].
///
/// The index is evaluated before the buffer is borrowed, so it may read the
/// buffer itself.
///
/// ```
/// use fenced_buffer::{at_mut, BoundedBuffer, OwnedBuffer};
///
/// let mut buf: OwnedBuffer<i32> = BoundedBuffer::new(5);
/// *at_mut!(buf, 2) = 42;
/// assert_eq!(buf.get(2), 42);
/// *at_mut!(buf, buf.len() - 1) = 7;
/// ```
#[macro_export]
macro_rules! at_mut {
    ($buffer:expr, $index:expr $(,)?) => {{
        let index = $index;
        let buffer = &mut $buffer;
        let config = buffer.config();
        match buffer.try_at_mut(index) {
            ::core::result::Result::Ok(element) => element,
            ::core::result::Result::Err(err) => $crate::__private::out_of_bounds(
                err,
                $crate::__private::access_site!(),
                config,
            ),
        }
    }};
}

/// Checked read of a `Copy` element; see [`at!`].
#[macro_export]
macro_rules! get {
    ($buffer:expr, $index:expr $(,)?) => {
        *$crate::at!($buffer, $index)
    };
}
