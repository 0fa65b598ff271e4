//! Source locations attached to checked accesses.

use std::fmt;
use std::panic::Location;

/// Where a checked access (or allocation) was requested.
///
/// Method-style accessors build this from [`Location::caller`] through
/// `#[track_caller]`; the enclosing function is not recoverable that way
/// and stays `None` until the fatal path looks it up (see
/// [`Diagnostic::resolve_caller`](crate::fatal::Diagnostic::resolve_caller)).
/// The accessor macros fill in all fields, using
/// [`function_name!`](crate::function_name) for the enclosing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessSite {
    /// Source file of the access.
    pub file: &'static str,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Path of the enclosing function, if it was captured.
    pub function: Option<&'static str>,
}

impl AccessSite {
    /// Site of the caller of the current `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Site for an explicit [`Location`], with no enclosing function.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
            function: None,
        }
    }

    /// Attach the enclosing function name.
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// The enclosing function, or `"<unknown>"`.
    pub fn function_or_unknown(&self) -> &'static str {
        self.function.unwrap_or("<unknown>")
    }
}

impl fmt::Display for AccessSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Full path of the function this macro is expanded in.
///
/// Closures are reported as their enclosing function.
///
/// ```
/// fn locate() -> &'static str {
///     fenced_core::function_name!()
/// }
/// assert!(locate().ends_with("locate"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __fenced_here() {}
        fn __fenced_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let mut name = __fenced_type_name_of(__fenced_here);
        name = name.strip_suffix("::__fenced_here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// An [`AccessSite`] for the point where this macro is expanded, including
/// the enclosing function.
#[macro_export]
macro_rules! access_site {
    () => {
        $crate::site::AccessSite {
            file: ::core::file!(),
            line: ::core::line!(),
            column: ::core::column!(),
            function: ::core::option::Option::Some($crate::function_name!()),
        }
    };
}
