//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging through a
//! [`LoggingFacade`](crate::LoggingFacade) with `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use rust_tracelog::prelude::*;
//! use rust_tracelog::info;
//!
//! let (stderr, buffer) = Sink::memory();
//! let facade = LoggingFacade::builder().stderr(stderr).build();
//!
//! // Basic logging
//! info!(facade, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(facade, "Server listening on port {}", port);
//!
//! assert!(buffer.contents().ends_with("INFO: Server listening on port 8080"));
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use rust_tracelog::prelude::*;
/// # let facade = LoggingFacade::builder().stderr(Sink::Discard).build();
/// use rust_tracelog::log;
/// log!(facade, Severity::Info, "Simple message");
/// log!(facade, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($facade:expr, $severity:expr, $($arg:tt)+) => {
        $facade.log_fmt($severity, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// Discarded unless the facade runs at the `DEVEL` level.
///
/// ```
/// # use rust_tracelog::prelude::*;
/// # let facade = LoggingFacade::builder().level(VerbosityLevel::Devel).stdout(Sink::Discard).build();
/// use rust_tracelog::debug;
/// debug!(facade, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::core::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::core::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_tracelog::prelude::*;
/// # let facade = LoggingFacade::builder().stderr(Sink::Discard).build();
/// use rust_tracelog::warning;
/// warning!(facade, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::core::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::core::Severity::Error, $($arg)+)
    };
}

/// Log through a [`SeverityLogger`](crate::SeverityLogger), then escalate.
///
/// What happens after the record is written depends on the logger's
/// [`Escalation`](crate::Escalation); by default the process exits.
///
/// ```
/// # use rust_tracelog::prelude::*;
/// # let facade = LoggingFacade::builder()
/// #     .stderr(Sink::Discard)
/// #     .escalation(Escalation::uniform(EscalationPolicy::LogOnly))
/// #     .build();
/// use rust_tracelog::fatal;
/// let logger = facade.logger(Severity::Error);
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(format_args!($($arg)+))
    };
}
