//! Process-level error type with stable exit codes.
//!
//! Exit code conventions:
//!
//! - `2`: invalid request/usage (bad flags, malformed dates, contract violations)
//! - `3`: dataset problems (unreadable file, malformed/invalid records)
//! - `4`: internal invariant failures

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// A caller-side contract violation (exit code 2).
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// A dataset/loader problem (exit code 3).
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// An internal invariant failure (exit code 4).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
