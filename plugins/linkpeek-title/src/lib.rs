//! linkpeek-title: chat plugin that announces the HTML title of posted links
//!
//! When a text message arrives, the plugin strips inline formatting markup,
//! looks for the first absolute URL, fetches the page, and prints the
//! document title back into the current chat tab. Client log records are
//! mirrored into the chat tab as well.
//!
//! The host boundary is modeled by `linkpeek-host-api`: the host invokes
//! the entry points on [`EventBridge`] and the bridge calls back through
//! the injected capability table. No failure below an entry point ever
//! reaches the host; a dead link degrades to a warning on the host's log
//! surface, nothing more.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use linkpeek_title::EventBridge;
//!
//! let mut bridge = EventBridge::register(host_table());
//! if bridge.init() {
//!     // host delivers events...
//! }
//! bridge.shutdown();
//! ```

pub mod bridge;
pub mod links;
pub mod sanitize;
pub mod title;

pub use bridge::{BridgeState, EventBridge, PLUGIN_AUTHOR, PLUGIN_NAME, PLUGIN_VERSION};
pub use title::{TitleError, TitleResolver};
