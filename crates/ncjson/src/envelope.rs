//! Raw JSON-RPC envelope types.
//!
//! This module provides the generic request and response envelopes used by
//! bitcoin-family RPC servers: a request is `{id, method, params}` with an
//! ordered positional parameter array, and a response is `{result, error,
//! id}`. Parameter order is part of the wire contract; reordering breaks the
//! remote server's parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// Generic RPC request envelope with positional parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCmd {
    pub id: Value,
    pub method: String,
    pub params: Vec<Value>,
}

impl RawCmd {
    /// Build a request envelope.
    ///
    /// The id is passed through to the server and echoed back unexamined,
    /// but it must be a wire-representable id type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the id is not a JSON string, number,
    /// or null.
    pub fn new(id: Value, method: impl Into<String>, params: Vec<Value>) -> Result<Self> {
        check_id(&id)?;
        Ok(Self {
            id,
            method: method.into(),
            params,
        })
    }
}

/// Generic RPC response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReply {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
    pub id: Value,
}

impl RawReply {
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
            id,
        }
    }

    #[must_use]
    pub fn failure(id: Value, error: RpcError) -> Self {
        Self {
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// RPC error object carried in a response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RPC error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

/// Validate a request correlation id.
///
/// # Errors
///
/// Returns [`Error::InvalidId`] for arrays, objects, and booleans; the wire
/// protocol only carries string, number, and null ids.
pub fn check_id(id: &Value) -> Result<()> {
    match id {
        Value::Null | Value::String(_) | Value::Number(_) => Ok(()),
        other => Err(Error::InvalidId(other.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_cmd_serialization() {
        let cmd = RawCmd::new(json!(1), "name_show", vec![json!("d/example")]).unwrap();
        let wire = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            wire,
            r#"{"id":1,"method":"name_show","params":["d/example"]}"#
        );
    }

    #[test]
    fn test_raw_cmd_preserves_param_order() {
        let cmd = RawCmd::new(json!("a"), "name_filter", vec![json!("d/.*"), json!(0), json!(100)])
            .unwrap();
        let wire = serde_json::to_value(&cmd).unwrap();
        assert_eq!(wire["params"], json!(["d/.*", 0, 100]));
    }

    #[test]
    fn test_raw_cmd_roundtrip() {
        let cmd = RawCmd::new(json!("req-7"), "name_sync", vec![json!("00ff"), json!(3)]).unwrap();
        let wire = serde_json::to_string(&cmd).unwrap();
        let parsed: RawCmd = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, cmd);
    }

    #[test]
    fn test_check_id_accepts_string_number_null() {
        assert!(check_id(&json!("abc")).is_ok());
        assert!(check_id(&json!(42)).is_ok());
        assert!(check_id(&json!(1.5)).is_ok());
        assert!(check_id(&Value::Null).is_ok());
    }

    #[test]
    fn test_check_id_rejects_compound_and_bool() {
        assert!(matches!(check_id(&json!([1, 2])), Err(Error::InvalidId(_))));
        assert!(matches!(
            check_id(&json!({"k": "v"})),
            Err(Error::InvalidId(_))
        ));
        assert!(matches!(check_id(&json!(true)), Err(Error::InvalidId(_))));
    }

    #[test]
    fn test_raw_cmd_new_rejects_bad_id() {
        let err = RawCmd::new(json!([1]), "name_show", vec![]).unwrap_err();
        assert!(err.to_string().contains("invalid request id"));
    }

    #[test]
    fn test_raw_reply_success_parse() {
        let wire = r#"{"result":{"ok":true},"error":null,"id":1}"#;
        let reply: RawReply = serde_json::from_str(wire).unwrap();
        assert_eq!(reply.result, Some(json!({"ok": true})));
        assert!(reply.error.is_none());
        assert_eq!(reply.id, json!(1));
    }

    #[test]
    fn test_raw_reply_error_parse() {
        let wire = r#"{"result":null,"error":{"code":-32601,"message":"Method not found"},"id":1}"#;
        let reply: RawReply = serde_json::from_str(wire).unwrap();
        assert!(reply.result.is_none());
        let err = reply.error.unwrap();
        assert_eq!(err.code, METHOD_NOT_FOUND);
        assert_eq!(err.message, "Method not found");
    }

    #[test]
    fn test_raw_reply_missing_members() {
        // Some servers omit null members entirely
        let wire = r#"{"id":"x"}"#;
        let reply: RawReply = serde_json::from_str(wire).unwrap();
        assert!(reply.result.is_none());
        assert!(reply.error.is_none());
    }

    #[test]
    fn test_rpc_error_display() {
        let err = RpcError::new(INVALID_PARAMS, "bad params");
        assert_eq!(err.to_string(), "RPC error -32602: bad params");
    }

    #[test]
    fn test_raw_reply_constructors() {
        let ok = RawReply::success(json!(1), json!("v"));
        assert_eq!(ok.result, Some(json!("v")));
        assert!(ok.error.is_none());

        let failed = RawReply::failure(json!(1), RpcError::new(PARSE_ERROR, "Parse error"));
        assert!(failed.result.is_none());
        assert_eq!(failed.error.unwrap().code, PARSE_ERROR);
    }
}
