//! The RPC command capability.
//!
//! Every concrete command kind implements [`RpcCommand`]: it knows its
//! correlation id, its constant method name, and how to lower itself into
//! the generic [`RawCmd`] envelope. Serialization to wire bytes is provided
//! on top of that lowering.

use serde_json::Value;

use crate::envelope::RawCmd;
use crate::error::Result;

/// A typed RPC request that can be lowered to the generic envelope
pub trait RpcCommand: std::fmt::Debug + Send {
    /// Correlation identifier, echoed back by the server unexamined.
    fn id(&self) -> &Value;

    /// Constant wire method name.
    fn method(&self) -> &'static str;

    /// Build the generic request envelope with positional parameters in the
    /// method's documented order.
    ///
    /// # Errors
    ///
    /// Returns an error if envelope construction rejects the command's id.
    fn to_raw(&self) -> Result<RawCmd>;

    /// Serialize the command to wire bytes.
    ///
    /// # Errors
    ///
    /// Propagates envelope-construction failures from [`RpcCommand::to_raw`]
    /// and JSON serialization failures unreinterpreted.
    fn serialize_request(&self) -> Result<Vec<u8>> {
        let raw = self.to_raw()?;
        Ok(serde_json::to_vec(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct PingCmd {
        id: Value,
    }

    impl RpcCommand for PingCmd {
        fn id(&self) -> &Value {
            &self.id
        }

        fn method(&self) -> &'static str {
            "ping"
        }

        fn to_raw(&self) -> Result<RawCmd> {
            RawCmd::new(self.id.clone(), self.method(), vec![])
        }
    }

    #[test]
    fn test_default_serialize_request() {
        let cmd = PingCmd { id: json!(9) };
        let bytes = cmd.serialize_request().unwrap();
        let wire: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(wire, json!({"id": 9, "method": "ping", "params": []}));
    }

    #[test]
    fn test_serialize_request_propagates_bad_id() {
        let cmd = PingCmd { id: json!(false) };
        assert!(cmd.serialize_request().is_err());
    }

    #[test]
    fn test_commands_are_object_safe() {
        let cmd: Box<dyn RpcCommand> = Box::new(PingCmd { id: json!(1) });
        assert_eq!(cmd.method(), "ping");
        assert_eq!(*cmd.id(), json!(1));
    }
}
