//! Per-buffer configuration.

/// How a fatal failure terminates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViolationPolicy {
    /// Write the diagnostic to stderr and abort the process.
    ///
    /// No unwinding, no destructors, no chance for a caller to swallow the
    /// failure.
    #[default]
    Abort,
    /// Panic with the diagnostic as the message.
    ///
    /// The failure unwinds, so owned buffers on the stack are still released
    /// and the panic can be observed at a thread boundary.
    Panic,
}

/// Configuration for a single buffer.
///
/// Set at construction and inherited by views borrowed from the buffer.
/// There is no process-wide setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferConfig {
    /// What happens on a bounds violation or allocation failure.
    ///
    /// Default: [`ViolationPolicy::Abort`].
    pub on_violation: ViolationPolicy,
}

impl BufferConfig {
    /// Default violation policy.
    pub const DEFAULT_POLICY: ViolationPolicy = ViolationPolicy::Abort;

    /// Config with the given violation policy.
    pub const fn new(on_violation: ViolationPolicy) -> Self {
        Self { on_violation }
    }

    /// Config that panics instead of aborting.
    pub const fn panicking() -> Self {
        Self::new(ViolationPolicy::Panic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_abort() {
        assert_eq!(BufferConfig::default().on_violation, ViolationPolicy::Abort);
        assert_eq!(BufferConfig::DEFAULT_POLICY, ViolationPolicy::Abort);
    }

    #[test]
    fn panicking_sets_panic_policy() {
        assert_eq!(BufferConfig::panicking().on_violation, ViolationPolicy::Panic);
    }
}
