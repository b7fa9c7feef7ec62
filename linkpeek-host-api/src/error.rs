//! Error types shared across the host boundary

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque numeric status code returned by host capability calls.
///
/// The host defines the meaning of every value except [`ErrorCode::OK`];
/// plugin code only forwards codes back into
/// [`HostFunctions::error_message`](crate::HostFunctions::error_message)
/// for a human-readable rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// The host's success status.
    pub const OK: ErrorCode = ErrorCode(0);

    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Failures plugin-side code reports before they are flattened into the
/// neutral return values the host ABI expects.
#[derive(Error, Debug)]
pub enum PluginError {
    /// A host capability call reported a non-OK status code.
    #[error("host call failed with code {0}")]
    HostCall(ErrorCode),
}
