//! Plugin identity and host log severities

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static plugin metadata the host reads once at load time.
///
/// Set at process start and read-only thereafter; the event bridge owns it
/// for the lifetime of the loaded plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginIdentity {
    name: String,
    author: String,
    version: String,
}

impl PluginIdentity {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            version: version.into(),
        }
    }

    /// Plugin name, also used as the module tag on host log entries.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Version string (semver).
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Severity of an entry on the host's log surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Unrecoverable faults; the highest severity the host knows.
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Critical => "Critical",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::Debug => "Debug",
        };
        f.write_str(name)
    }
}
