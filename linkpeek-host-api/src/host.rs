//! The capability table the host hands to a plugin at load time.

use crate::error::ErrorCode;
use crate::types::LogLevel;

/// Callbacks the host provides for plugins to call back into it.
///
/// The table is registered once when the plugin is loaded and treated as
/// read-only afterward; plugin code holds it behind an `Arc` and never
/// mutates host state except through these calls. Production code binds
/// this to the real client's function table; tests bind an in-memory fake.
pub trait HostFunctions: Send + Sync {
    /// Write an entry to the host's log surface.
    ///
    /// `module` tags the entry with its origin (plugins pass their own
    /// name); `id` is the server connection the entry relates to, or 0.
    fn log_message(&self, text: &str, severity: LogLevel, module: &str, id: u64);

    /// Print a rich-text line into the currently focused chat tab.
    fn print_message_to_current_tab(&self, text: &str);

    /// Version string of the client library the host runs on.
    fn client_lib_version(&self) -> Result<String, ErrorCode>;

    /// Human-readable text for a host status code.
    ///
    /// The lookup itself can fail; callers fall back to rendering the
    /// numeric code.
    fn error_message(&self, code: ErrorCode) -> Result<String, ErrorCode>;

    /// The identifier the host assigned to this plugin at load time.
    fn plugin_id(&self) -> String;
}
