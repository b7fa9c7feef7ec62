//! The event bridge between the chat host and the link-title handler.
//!
//! The host drives the plugin through four entry points: `init`,
//! `shutdown`, `on_text_message`, and `on_log_message`. Each one is wrapped
//! by [`guard::contained`] so nothing below it can unwind into the host
//! process. All externally visible effects go through the injected
//! [`HostFunctions`] table.

use std::sync::Arc;

use linkpeek_host_api::{
    guard, HostFunctions, LogEvent, LogLevel, PluginError, PluginIdentity, TextMessageEvent,
};

use crate::links;
use crate::sanitize;
use crate::title::TitleResolver;

/// Plugin name the host shows next to log entries.
pub const PLUGIN_NAME: &str = "linkpeek";
pub const PLUGIN_AUTHOR: &str = "linkpeek contributors";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Neutral return the host expects from the text-message entry point.
const HANDLED: i32 = 0;

/// Where the bridge sits in its host-driven lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeState {
    /// Registered against the host's capability table, not yet initialized.
    Loaded,
    /// The init handshake succeeded; events are expected.
    Initialized,
    /// The shutdown notice was delivered.
    ShutDown,
}

/// The plugin-side half of the host callback boundary.
pub struct EventBridge {
    identity: PluginIdentity,
    host: Arc<dyn HostFunctions>,
    resolver: TitleResolver,
    state: BridgeState,
}

impl EventBridge {
    /// Register the plugin against the host's capability table.
    ///
    /// The table reference stays valid between load and unload; the bridge
    /// holds it read-only and never mutates host state except through it.
    pub fn register(host: Arc<dyn HostFunctions>) -> Self {
        Self {
            identity: PluginIdentity::new(PLUGIN_NAME, PLUGIN_AUTHOR, PLUGIN_VERSION),
            host,
            resolver: TitleResolver::new(),
            state: BridgeState::Loaded,
        }
    }

    /// Static metadata the host reads at load time.
    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    /// Host lifecycle: initialize the plugin.
    ///
    /// Succeeds iff the host's client-lib version can be queried. On
    /// failure the bridge stays non-functional but intact; the host may
    /// unload it in response to the `false` return.
    pub fn init(&mut self) -> bool {
        let host = Arc::clone(&self.host);
        guard::contained(Some(host.as_ref()), PLUGIN_NAME, false, || {
            match self.try_init() {
                Ok(version) => {
                    self.log(
                        &format!(
                            "init: plugin {} running on client lib {version}",
                            self.host.plugin_id()
                        ),
                        LogLevel::Debug,
                    );
                    true
                }
                Err(PluginError::HostCall(code)) => {
                    let detail = self
                        .host
                        .error_message(code)
                        .unwrap_or_else(|_| format!("Error code {code}"));
                    self.log(
                        &format!("could not query client lib version: {detail}"),
                        LogLevel::Critical,
                    );
                    false
                }
            }
        })
    }

    fn try_init(&mut self) -> Result<String, PluginError> {
        let version = self
            .host
            .client_lib_version()
            .map_err(PluginError::HostCall)?;
        self.state = BridgeState::Initialized;
        Ok(version)
    }

    /// Host lifecycle: the plugin is about to be unloaded.
    ///
    /// Best-effort notice only; must not fail the host even with
    /// inconsistent internal state.
    pub fn shutdown(&mut self) {
        let host = Arc::clone(&self.host);
        guard::contained(Some(host.as_ref()), PLUGIN_NAME, (), || {
            self.log("shutdown", LogLevel::Debug);
            self.state = BridgeState::ShutDown;
        });
    }

    /// Host event: a text message arrived in a channel or private chat.
    ///
    /// Never signals failure to the host; every internal outcome maps to
    /// the neutral code.
    pub fn on_text_message(&self, event: &TextMessageEvent) -> i32 {
        guard::contained(Some(self.host.as_ref()), PLUGIN_NAME, HANDLED, || {
            self.handle_text(event);
            HANDLED
        })
    }

    fn handle_text(&self, event: &TextMessageEvent) {
        let text = sanitize::strip_markup(&event.message);
        let Some(url) = links::find_first_url(&text) else {
            return;
        };

        tracing::debug!(plugin = PLUGIN_NAME, %url, "resolving link title");
        match self.resolver.resolve(&url) {
            Ok(Some(title)) => self
                .host
                .print_message_to_current_tab(&render_title(&title)),
            Ok(None) => self.log(&format!("no title found at {url}"), LogLevel::Warning),
            Err(err) => self.log(&err.to_string(), LogLevel::Warning),
        }
    }

    /// Host event: the client wrote a log record; mirror it into the
    /// current chat tab.
    pub fn on_log_message(&self, event: &LogEvent) {
        guard::contained(Some(self.host.as_ref()), PLUGIN_NAME, (), || {
            self.host
                .print_message_to_current_tab(&render_log_line(event));
        });
    }

    fn log(&self, message: &str, severity: LogLevel) {
        self.host.log_message(message, severity, self.identity.name(), 0);
    }
}

/// Chat line announcing a resolved title.
///
/// The markup must match the host renderer byte for byte.
fn render_title(title: &str) -> String {
    format!("[B]Title:[/B] {title}")
}

/// Chat line mirroring one client log record.
fn render_log_line(event: &LogEvent) -> String {
    format!(
        "[COLOR=gray][I]{}[/I]\t{}\t[B]{}[/B]\t{}[/COLOR]",
        event.timestamp, event.severity, event.channel, event.message
    )
}
