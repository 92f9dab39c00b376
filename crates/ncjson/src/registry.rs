//! Custom-command registry.
//!
//! Hosts register one codec entry per non-standard RPC method: an optional
//! request parser (only methods the host can also receive need one), a reply
//! parser, and a human-readable usage string. The transport then dispatches
//! incoming envelopes and reply payloads by method name.
//!
//! Registration is one-time startup wiring; the registry is not mutated
//! afterwards, so a populated registry can be shared freely across threads.

use std::any::Any;
use std::collections::HashMap;

use serde_json::Value;

use crate::command::RpcCommand;
use crate::envelope::{RawCmd, RawReply};
use crate::error::{Error, Result};

/// Parses an incoming request envelope into a typed command
pub type RequestParser = fn(&RawCmd) -> Result<Box<dyn RpcCommand>>;

/// Parses a reply `result` payload into a typed, type-erased reply value
pub type ReplyParser = fn(&Value) -> Result<Box<dyn Any + Send>>;

struct CustomCmd {
    request_parser: Option<RequestParser>,
    reply_parser: ReplyParser,
    usage: &'static str,
}

/// Method-name-keyed registry of custom command codecs
#[derive(Default)]
pub struct CommandRegistry {
    cmds: HashMap<String, CustomCmd>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom command codec under its method name.
    ///
    /// Pass `None` for `request_parser` if the host only ever issues the
    /// method and never receives it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRegistered`] if the method name is taken;
    /// double registration is a configuration error, not something to
    /// silently overwrite.
    pub fn register_custom_cmd(
        &mut self,
        method: &str,
        request_parser: Option<RequestParser>,
        reply_parser: ReplyParser,
        usage: &'static str,
    ) -> Result<()> {
        if self.cmds.contains_key(method) {
            return Err(Error::AlreadyRegistered(method.to_string()));
        }

        tracing::debug!(method, usage, "registered custom RPC command");
        self.cmds.insert(
            method.to_string(),
            CustomCmd {
                request_parser,
                reply_parser,
                usage,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.cmds.contains_key(method)
    }

    /// Usage string for a registered method.
    #[must_use]
    pub fn usage(&self, method: &str) -> Option<&'static str> {
        self.cmds.get(method).map(|c| c.usage)
    }

    /// Parse an incoming request envelope into a typed command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] for unregistered methods,
    /// [`Error::NotReceivable`] for methods registered reply-only, and the
    /// parser's own error for malformed parameters.
    pub fn parse_request(&self, raw: &RawCmd) -> Result<Box<dyn RpcCommand>> {
        let cmd = self
            .cmds
            .get(&raw.method)
            .ok_or_else(|| Error::UnknownMethod(raw.method.clone()))?;

        let parser = cmd
            .request_parser
            .ok_or_else(|| Error::NotReceivable(raw.method.clone()))?;

        parser(raw)
    }

    /// Parse a response envelope for the given method.
    ///
    /// A populated `error` member takes precedence over `result`; a missing
    /// `result` is handed to the parser as JSON null.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] for unregistered methods,
    /// [`Error::Rpc`] when the envelope carries an error member, and the
    /// parser's own error for malformed result payloads.
    pub fn parse_reply(&self, method: &str, reply: &RawReply) -> Result<Box<dyn Any + Send>> {
        let cmd = self
            .cmds
            .get(method)
            .ok_or_else(|| Error::UnknownMethod(method.to_string()))?;

        if let Some(err) = &reply.error {
            return Err(Error::Rpc {
                code: err.code,
                message: err.message.clone(),
            });
        }

        let result = reply.result.as_ref().unwrap_or(&Value::Null);
        (cmd.reply_parser)(result)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods: Vec<&str> = self.cmds.keys().map(String::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("CommandRegistry")
            .field("methods", &methods)
            .finish()
    }
}
