//! linkpeek-host-api - host ABI abstraction for linkpeek chat-client plugins
//!
//! The chat client loads plugins through a closed, C-level calling
//! convention and hands each one a table of callback functions. This crate
//! models that boundary for plugin code: the capability table is the
//! [`HostFunctions`] trait, the static metadata the host reads at load time
//! is [`PluginIdentity`], and the values the host passes into event entry
//! points are [`TextMessageEvent`] and [`LogEvent`].
//!
//! Production code binds [`HostFunctions`] to the real client's function
//! table; tests bind an in-memory fake and assert on the recorded calls.
//!
//! Every entry point the host can invoke must be wrapped with
//! [`guard::contained`] so that an internal fault is logged through the
//! host's own log surface and flattened into the entry point's neutral
//! return value instead of unwinding into the host process.
//!
//! # Example
//!
//! ```ignore
//! use linkpeek_host_api::{guard, HostFunctions, LogLevel};
//!
//! fn on_some_event(host: &dyn HostFunctions) -> i32 {
//!     guard::contained(Some(host), "my-plugin", 0, || {
//!         host.log_message("event handled", LogLevel::Debug, "my-plugin", 0);
//!         0
//!     })
//! }
//! ```

pub mod error;
pub mod event;
pub mod guard;
pub mod host;
pub mod types;

pub use error::{ErrorCode, PluginError};
pub use event::{LogEvent, TextMessageEvent};
pub use host::HostFunctions;
pub use types::{LogLevel, PluginIdentity};
