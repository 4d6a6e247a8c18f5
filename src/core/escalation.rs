//! What happens after a fatal or panic log call has been written

use std::fmt;

/// Exit code used by [`EscalationPolicy::Terminate`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// Escalation strategy injected into every severity logger
///
/// The record is always written before the policy runs, so the message is
/// not lost when the process goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscalationPolicy {
    /// Exit the process with [`FATAL_EXIT_CODE`]
    #[default]
    Terminate,
    /// Panic with the logged message
    Panic,
    /// Only log
    LogOnly,
}

/// Which family of helper asked for escalation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationKind {
    Fatal,
    Panic,
}

impl EscalationPolicy {
    /// Run the policy for `message`
    ///
    /// Returns only under [`EscalationPolicy::LogOnly`].
    pub fn escalate(&self, message: &str) {
        match self {
            EscalationPolicy::Terminate => std::process::exit(FATAL_EXIT_CODE),
            EscalationPolicy::Panic => panic!("{}", message),
            EscalationPolicy::LogOnly => {}
        }
    }
}

/// Policies applied by the two helper families of a logger
///
/// By default fatal helpers terminate and panic helpers panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalation {
    pub on_fatal: EscalationPolicy,
    pub on_panic: EscalationPolicy,
}

impl Escalation {
    /// Same policy for both families; handy for tests and embedding
    pub const fn uniform(policy: EscalationPolicy) -> Self {
        Self {
            on_fatal: policy,
            on_panic: policy,
        }
    }

    pub fn policy_for(&self, kind: EscalationKind) -> EscalationPolicy {
        match kind {
            EscalationKind::Fatal => self.on_fatal,
            EscalationKind::Panic => self.on_panic,
        }
    }
}

impl Default for Escalation {
    fn default() -> Self {
        Self {
            on_fatal: EscalationPolicy::Terminate,
            on_panic: EscalationPolicy::Panic,
        }
    }
}

impl fmt::Display for EscalationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EscalationPolicy::Terminate => "terminate",
            EscalationPolicy::Panic => "panic",
            EscalationPolicy::LogOnly => "log-only",
        };
        f.write_str(name)
    }
}
