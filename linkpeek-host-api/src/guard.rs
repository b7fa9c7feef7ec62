//! Containment for host-invoked entry points.
//!
//! A single uncontained fault inside a plugin unwinds into the host process
//! and takes the whole client down with it. Every entry point the host can
//! invoke is therefore routed through [`contained`], which intercepts the
//! unwind at the call boundary, reports it, and hands the host the entry
//! point's neutral return value instead.

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};

use crate::host::HostFunctions;
use crate::types::LogLevel;

/// Run one entry-point body, converting any panic into `fallback`.
///
/// On unwind, the fault description and a captured backtrace are written to
/// the host's log surface at [`LogLevel::Critical`] when a capability table
/// is available. Before registration there is nowhere safe to report to, so
/// the fault is absorbed; only the internal tracing channel sees it.
pub fn contained<T>(
    host: Option<&dyn HostFunctions>,
    module: &str,
    fallback: T,
    f: impl FnOnce() -> T,
) -> T {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            let description = panic_text(payload.as_ref());
            tracing::error!(module, panic = %description, "contained entry-point fault");
            if let Some(host) = host {
                let backtrace = Backtrace::force_capture();
                host.log_message(
                    &format!("{description}\n{backtrace}"),
                    LogLevel::Critical,
                    module,
                    0,
                );
            }
            fallback
        }
    }
}

/// Best-effort text of a panic payload.
fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
