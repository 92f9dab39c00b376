//! Error types for the ncjson crate.
//!
//! This module provides a unified error type for envelope construction,
//! request/reply (de)serialization, and registry operations.

use serde_json::Value;

/// Unified error type for raw RPC operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request id is not representable on the wire. Ids are echoed back
    /// by the server unexamined, but must be a JSON string, number, or null.
    #[error("invalid request id (must be a string, number, or null): {0}")]
    InvalidId(Value),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wrong number of parameters for '{method}': expected {expected}, got {got}")]
    WrongParamCount {
        method: &'static str,
        expected: usize,
        got: usize,
    },

    /// The remote peer sent data that does not conform to the expected
    /// shape for a given method.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The remote peer answered with a populated error member.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    #[error("method already registered: {0}")]
    AlreadyRegistered(String),

    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// The method is registered reply-only and cannot be parsed as an
    /// incoming request.
    #[error("method '{0}' is not receivable as a request")]
    NotReceivable(String),
}

impl Error {
    /// Build a `Protocol` error from any displayable message.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_id_display() {
        let err = Error::InvalidId(json!({"nested": true}));
        assert!(err.to_string().contains("invalid request id"));
        assert!(err.to_string().contains("nested"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<Value>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_wrong_param_count_display() {
        let err = Error::WrongParamCount {
            method: "name_show",
            expected: 1,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "wrong number of parameters for 'name_show': expected 1, got 3"
        );
    }

    #[test]
    fn test_protocol_factory() {
        let err = Error::protocol("first argument 'name' must be a string");
        match err {
            Error::Protocol(msg) => assert!(msg.contains("'name'")),
            _ => panic!("Expected Protocol error"),
        }
    }

    #[test]
    fn test_rpc_error_display() {
        let err = Error::Rpc {
            code: -32601,
            message: "Method not found".to_string(),
        };
        assert!(err.to_string().contains("-32601"));
        assert!(err.to_string().contains("Method not found"));
    }

    #[test]
    fn test_not_receivable_display() {
        let err = Error::NotReceivable("name_sync".to_string());
        assert!(err.to_string().contains("name_sync"));
        assert!(err.to_string().contains("not receivable"));
    }

    #[test]
    fn test_result_type_alias() {
        #[allow(clippy::unnecessary_wraps)]
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
