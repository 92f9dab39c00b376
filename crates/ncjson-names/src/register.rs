//! Registry wiring for the name-registry extension methods.
//!
//! Hosts call [`register_name_commands`] once during startup, before any
//! encode/decode traffic. Only `name_show` gets a request parser; the other
//! three methods are outbound-only and are registered reply-only.

use std::any::Any;

use serde_json::Value;

use ncjson::{CommandRegistry, RawCmd, Result, RpcCommand};

use crate::commands::{
    METHOD_NAME_FILTER, METHOD_NAME_SCAN, METHOD_NAME_SHOW, METHOD_NAME_SYNC, NameShowCmd,
};
use crate::reply::{
    parse_name_filter_reply, parse_name_scan_reply, parse_name_show_reply, parse_name_sync_reply,
};

/// Register all four name-registry methods with a command registry.
///
/// # Errors
///
/// Returns [`ncjson::Error::AlreadyRegistered`] if any of the method names
/// is already taken; registering this extension twice is a configuration
/// error.
pub fn register_name_commands(registry: &mut CommandRegistry) -> Result<()> {
    registry.register_custom_cmd(
        METHOD_NAME_SHOW,
        Some(show_request_parser),
        show_reply_parser,
        "name_show <name>",
    )?;
    registry.register_custom_cmd(
        METHOD_NAME_SYNC,
        None,
        sync_reply_parser,
        "name_sync <block-hash> <count> <wait?>",
    )?;
    registry.register_custom_cmd(
        METHOD_NAME_SCAN,
        None,
        scan_reply_parser,
        "name_scan <from> <count>",
    )?;
    registry.register_custom_cmd(
        METHOD_NAME_FILTER,
        None,
        filter_reply_parser,
        "name_filter <regexp> <maxage> <from> <count>",
    )?;
    Ok(())
}

fn show_request_parser(raw: &RawCmd) -> Result<Box<dyn RpcCommand>> {
    Ok(Box::new(NameShowCmd::from_raw(raw)?))
}

fn show_reply_parser(result: &Value) -> Result<Box<dyn Any + Send>> {
    Ok(Box::new(parse_name_show_reply(result)?))
}

fn sync_reply_parser(result: &Value) -> Result<Box<dyn Any + Send>> {
    Ok(Box::new(parse_name_sync_reply(result)?))
}

fn scan_reply_parser(result: &Value) -> Result<Box<dyn Any + Send>> {
    Ok(Box::new(parse_name_scan_reply(result)?))
}

fn filter_reply_parser(result: &Value) -> Result<Box<dyn Any + Send>> {
    Ok(Box::new(parse_name_filter_reply(result)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncjson::Error;

    #[test]
    fn test_registers_all_methods() {
        let mut registry = CommandRegistry::new();
        register_name_commands(&mut registry).unwrap();

        for method in [
            METHOD_NAME_SHOW,
            METHOD_NAME_SYNC,
            METHOD_NAME_SCAN,
            METHOD_NAME_FILTER,
        ] {
            assert!(registry.contains(method), "missing {method}");
        }
    }

    #[test]
    fn test_usage_strings() {
        let mut registry = CommandRegistry::new();
        register_name_commands(&mut registry).unwrap();

        assert_eq!(registry.usage(METHOD_NAME_SHOW), Some("name_show <name>"));
        assert_eq!(
            registry.usage(METHOD_NAME_SYNC),
            Some("name_sync <block-hash> <count> <wait?>")
        );
        assert_eq!(
            registry.usage(METHOD_NAME_SCAN),
            Some("name_scan <from> <count>")
        );
        assert_eq!(
            registry.usage(METHOD_NAME_FILTER),
            Some("name_filter <regexp> <maxage> <from> <count>")
        );
    }

    #[test]
    fn test_double_registration_is_an_error() {
        let mut registry = CommandRegistry::new();
        register_name_commands(&mut registry).unwrap();

        let err = register_name_commands(&mut registry).unwrap_err();
        assert!(matches!(err, Error::AlreadyRegistered(m) if m == METHOD_NAME_SHOW));
    }
}
