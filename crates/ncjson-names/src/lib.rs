//! Name-registry extension codecs for a raw JSON-RPC client.
//!
//! This crate teaches an [`ncjson::CommandRegistry`] four non-standard
//! methods spoken by name-registry RPC servers: `name_show`, `name_sync`,
//! `name_scan`, and `name_filter`. Each method gets a typed command with the
//! exact positional-array request encoding the server expects, plus a reply
//! parser that turns the loosely-typed JSON responses back into validated
//! typed values.
//!
//! # Architecture
//!
//! - [`commands`]: typed commands implementing [`ncjson::RpcCommand`]
//! - [`reply`]: reply records, the `name_sync` event sum type, and parsers
//! - [`register`]: one-time registry wiring
//!
//! # Example
//!
//! ```
//! use ncjson::{CommandRegistry, RpcCommand};
//! use ncjson_names::{NameShowCmd, register_name_commands};
//! use serde_json::json;
//!
//! let mut registry = CommandRegistry::new();
//! register_name_commands(&mut registry)?;
//!
//! let cmd = NameShowCmd::new(json!(1), "d/example")?;
//! let bytes = cmd.serialize_request()?;
//! assert_eq!(
//!     bytes,
//!     br#"{"id":1,"method":"name_show","params":["d/example"]}"#
//! );
//! # Ok::<(), ncjson::Error>(())
//! ```

pub mod commands;
pub mod register;
pub mod reply;

// Re-export command types
pub use commands::{
    METHOD_NAME_FILTER, METHOD_NAME_SCAN, METHOD_NAME_SHOW, METHOD_NAME_SYNC, NameFilterCmd,
    NameScanCmd, NameShowCmd, NameSyncCmd,
};

// Re-export reply types and parsers
pub use reply::{
    NameFilterReply, NameInfo, NameScanReply, NameShowReply, NameSyncEvent, NameSyncReply,
    parse_name_filter_reply, parse_name_scan_reply, parse_name_show_reply, parse_name_sync_reply,
};

// Re-export registration
pub use register::register_name_commands;
