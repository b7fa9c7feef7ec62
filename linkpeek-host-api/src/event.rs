//! Event values the host passes into plugin entry points.
//!
//! Both types are transient: the host creates one per callback, the plugin
//! consumes it synchronously, and nothing is retained after the call
//! returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::LogLevel;

/// An incoming chat text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMessageEvent {
    /// Handle of the server connection the message arrived on.
    pub server_connection_id: u64,

    /// Host-defined addressing mode (server, channel, or private chat).
    pub target_mode: u16,

    /// Recipient id within the addressing mode.
    pub to_id: u16,

    /// Sender's client id on this connection.
    pub from_id: u16,

    /// Sender's display name.
    pub from_name: String,

    /// Sender's stable unique identifier.
    pub from_uid: String,

    /// Raw message body, possibly carrying inline formatting markup.
    pub message: String,

    /// True when this client sent the message itself.
    pub self_originated: bool,
}

/// A log record the client emitted on its own log surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// The bare log message.
    pub message: String,

    /// Severity the client assigned to the record.
    pub severity: LogLevel,

    /// Originating channel (subsystem) name.
    pub channel: String,

    /// Numeric id of the log record.
    pub id: u64,

    /// When the record was written.
    pub timestamp: DateTime<Utc>,

    /// The line as the client itself rendered it.
    pub rendered_line: String,
}
