//! The fatal path: format a diagnostic, write it to stderr, terminate.
//!
//! Every bounds violation and allocation failure ends here. The output is
//! two lines, each prefixed with the access site:
//!
//! ```text
//! src/main.rs:12:5: buffer overflow: index [3] is out of range [0-2]
//! src/main.rs:12:5: function: demo::fill
//! ```
//!
//! Sites captured by the accessor macros already carry the function. For
//! the rest it is looked up in a backtrace taken here, on the way out.

use std::borrow::Cow;
use std::fmt;

use crate::caller;
use crate::config::{BufferConfig, ViolationPolicy};
use crate::error::{AllocError, BoundsError};
use crate::site::AccessSite;

/// A formatted fatal diagnostic.
///
/// The same text is written to stderr under [`ViolationPolicy::Abort`] and
/// used as the panic message under [`ViolationPolicy::Panic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the failing operation was requested.
    pub site: AccessSite,
    /// Enclosing function of the site, or `"<unknown>"`.
    pub function: Cow<'static, str>,
    /// The failure, already rendered.
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic for an out-of-range index.
    pub fn bounds(err: &BoundsError, site: AccessSite) -> Self {
        Self::new(site, err.to_string())
    }

    /// Diagnostic for a failed owned allocation.
    pub fn alloc(err: &AllocError, site: AccessSite) -> Self {
        Self::new(site, err.to_string())
    }

    /// Diagnostic with a free-form message.
    pub fn new(site: AccessSite, message: String) -> Self {
        Self {
            site,
            function: Cow::Borrowed(site.function_or_unknown()),
            message,
        }
    }

    /// Fill in the enclosing function from a backtrace when the site did
    /// not capture it.
    ///
    /// Costly; meant for the fatal path. Leaves `"<unknown>"` in place when
    /// the binary has no debug symbols or no frame matches the site.
    pub fn resolve_caller(mut self) -> Self {
        if self.site.function.is_none() {
            if let Some(name) = caller::function_at(self.site.file, self.site.line) {
                self.function = Cow::Owned(name);
            }
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.site, self.message)?;
        write!(f, "{}: function: {}", self.site, self.function)
    }
}

/// Terminate according to `config`.
///
/// Never returns. Under `Abort` the diagnostic is written to stderr first;
/// under `Panic` it becomes the panic payload and the panic hook prints it.
#[cold]
#[inline(never)]
pub fn terminate(diagnostic: &Diagnostic, config: BufferConfig) -> ! {
    match config.on_violation {
        ViolationPolicy::Abort => {
            eprintln!("{diagnostic}");
            std::process::abort()
        }
        ViolationPolicy::Panic => panic!("{diagnostic}"),
    }
}

/// Report an out-of-range index and terminate.
#[cold]
#[inline(never)]
pub fn out_of_bounds(err: BoundsError, site: AccessSite, config: BufferConfig) -> ! {
    terminate(&Diagnostic::bounds(&err, site).resolve_caller(), config)
}

/// Report a failed allocation and terminate.
#[cold]
#[inline(never)]
pub fn alloc_failed(err: AllocError, site: AccessSite, config: BufferConfig) -> ! {
    terminate(&Diagnostic::alloc(&err, site).resolve_caller(), config)
}

/// Report a null pointer passed as a buffer region and terminate.
#[cold]
#[inline(never)]
pub fn null_region(site: AccessSite, config: BufferConfig) -> ! {
    let diagnostic =
        Diagnostic::new(site, "null pointer passed as buffer region".to_owned()).resolve_caller();
    terminate(&diagnostic, config)
}
