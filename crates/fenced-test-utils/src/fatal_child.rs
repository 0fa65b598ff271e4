//! Observe process aborts by re-running a single test in a child process.
//!
//! The parent test calls [`run`] with its own name; the child re-enters the
//! same test, sees [`is_child`] return `true`, and performs the fatal
//! operation. The parent then inspects the child's exit status and stderr.
//!
//! ```ignore
//! #[test]
//! fn overflow_aborts() {
//!     if fatal_child::is_child("overflow_aborts") {
//!         let buf: OwnedBuffer<i32> = BoundedBuffer::new(3);
//!         buf.at(3);
//!         unreachable!();
//!     }
//!     let outcome = fatal_child::run("overflow_aborts");
//!     outcome.assert_bounds_abort(3, 3);
//! }
//! ```

use std::env;
use std::process::{Command, ExitStatus};

use fenced_core::BoundsError;

/// Environment variable naming the test the child should execute.
pub const CHILD_ENV: &str = "FENCED_FATAL_CHILD";

/// `true` inside the child spawned by [`run`] for `test_name`.
pub fn is_child(test_name: &str) -> bool {
    env::var(CHILD_ENV).is_ok_and(|name| name == test_name)
}

/// Result of a child run.
#[derive(Debug)]
pub struct FatalOutcome {
    pub status: ExitStatus,
    pub stderr: String,
}

impl FatalOutcome {
    /// `true` if the child was terminated by `abort`.
    pub fn aborted(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            self.status.signal() == Some(6)
        }
        #[cfg(not(unix))]
        {
            !self.status.success()
        }
    }

    /// Assert the child aborted with a bounds diagnostic for `index` into a
    /// buffer of `len` elements.
    pub fn assert_bounds_abort(&self, index: i128, len: usize) {
        assert!(self.aborted(), "child did not abort: {self:?}");
        let expected = BoundsError { index, len }.to_string();
        assert!(
            self.stderr.contains(&expected),
            "stderr missing {expected:?}:\n{}",
            self.stderr
        );
        assert!(
            self.stderr.contains(": function: "),
            "stderr missing function line:\n{}",
            self.stderr
        );
    }
}

/// Run the test `test_name` of the current test binary in a child process.
///
/// Output capture is disabled in the child so that the diagnostic written
/// just before `abort` reaches the pipe.
pub fn run(test_name: &str) -> FatalOutcome {
    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .output()
        .expect("spawn child test process");
    FatalOutcome {
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
