//! Fatal error reporting
//!
//! Unrecoverable conditions end the process with a nonzero status after
//! printing `<program>: <message>` to stderr.

use std::fmt;
use std::process;

use crate::error::EvalError;

/// Exit status for a division or modulo by zero
pub const EXIT_DIVISION_BY_ZERO: i32 = 1;

/// Exit status for a call with an unknown name, wrong arity or wrong operand types
pub const EXIT_MALFORMED_CALL: i32 = 2;

const DEFAULT_PROGRAM_NAME: &str = "scalar";

/// A fatal condition: the status to exit with and the message to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub exit_code: i32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(exit_code: i32, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Print the diagnostic to stderr and terminate the process
    pub fn report(self) -> ! {
        tracing::error!(exit_code = self.exit_code, "{}", self.message);
        eprintln!("{}", self);
        process::exit(self.exit_code)
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", program_name(), self.message)
    }
}

impl From<&EvalError> for Diagnostic {
    fn from(err: &EvalError) -> Self {
        let exit_code = if err.is_malformed_call() {
            EXIT_MALFORMED_CALL
        } else {
            EXIT_DIVISION_BY_ZERO
        };
        Diagnostic::new(exit_code, err.to_string())
    }
}

/// Report a fatal condition and exit: `fatal!(code, "format", args...)`
#[macro_export]
macro_rules! fatal {
    ($code:expr, $($arg:tt)+) => {
        $crate::fatal::Diagnostic::new($code, format!($($arg)+)).report()
    };
}

/// Exit with status 1 unless `cond` holds
pub fn ensure(cond: bool) {
    if !cond {
        tracing::error!("assertion failed");
        process::exit(1);
    }
}

/// Print `msg` to stderr and exit with status 1 unless `cond` holds
pub fn ensure_msg(cond: bool, msg: &str) {
    if !cond {
        tracing::error!("assertion failed: {}", msg);
        eprintln!("{}", msg);
        process::exit(1);
    }
}
