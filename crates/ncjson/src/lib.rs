//! Generic raw JSON-RPC envelope and custom-command registry.
//!
//! This crate provides the envelope types and the extension mechanism that
//! protocol-extension crates plug their codecs into. It carries no
//! transport: a host client owns the connection, request dispatch, and
//! response correlation, and uses the registry here to route envelopes to
//! the right codec by method name.
//!
//! # Architecture
//!
//! - [`envelope`]: `RawCmd` / `RawReply` request and response envelopes
//! - [`command`]: the [`RpcCommand`] capability trait for typed commands
//! - [`registry`]: method-name-keyed [`CommandRegistry`] for codec dispatch
//! - [`error`]: unified error type and `Result` alias
//!
//! # Example
//!
//! ```
//! use ncjson::{CommandRegistry, Error, RawCmd};
//! use serde_json::Value;
//! use std::any::Any;
//!
//! fn uptime_reply_parser(result: &Value) -> ncjson::Result<Box<dyn Any + Send>> {
//!     let secs = result
//!         .as_u64()
//!         .ok_or_else(|| Error::protocol("uptime reply must be a number"))?;
//!     Ok(Box::new(secs))
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register_custom_cmd("uptime", None, uptime_reply_parser, "uptime")?;
//! assert!(registry.contains("uptime"));
//! # Ok::<(), ncjson::Error>(())
//! ```

pub mod command;
pub mod envelope;
pub mod error;
pub mod registry;

// Re-export the capability trait
pub use command::RpcCommand;

// Re-export envelope types
pub use envelope::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, RawCmd,
    RawReply, RpcError, check_id,
};

// Re-export error types
pub use error::{Error, Result};

// Re-export registry types
pub use registry::{CommandRegistry, ReplyParser, RequestParser};
