//! Typed commands for the name-registry RPC methods.
//!
//! Each command lowers to the generic envelope with its parameters in the
//! exact positional order the remote server documents. Field contents are
//! not semantically validated here; the wire encoding performs no semantic
//! validation either, so callers are trusted to supply well-formed
//! arguments.
//!
//! Only `name_show` can also be parsed from an incoming request envelope
//! ([`NameShowCmd::from_raw`]). The other three methods are only ever issued
//! by this side, so they deliberately expose no decode surface at all.

use serde_json::Value;

use ncjson::{Error, RawCmd, Result, RpcCommand, check_id};

pub const METHOD_NAME_SHOW: &str = "name_show";
pub const METHOD_NAME_SYNC: &str = "name_sync";
pub const METHOD_NAME_SCAN: &str = "name_scan";
pub const METHOD_NAME_FILTER: &str = "name_filter";

/// `name_show <name>` — look up the current value of a single name
#[derive(Debug, Clone, PartialEq)]
pub struct NameShowCmd {
    id: Value,
    pub name: String,
}

impl NameShowCmd {
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the id is not wire-representable.
    pub fn new(id: Value, name: impl Into<String>) -> Result<Self> {
        check_id(&id)?;
        Ok(Self {
            id,
            name: name.into(),
        })
    }

    /// Parse an incoming `name_show` request envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongParamCount`] unless exactly one parameter is
    /// present, and [`Error::Protocol`] if it is not a JSON string.
    pub fn from_raw(raw: &RawCmd) -> Result<Self> {
        if raw.params.len() != 1 {
            return Err(Error::WrongParamCount {
                method: METHOD_NAME_SHOW,
                expected: 1,
                got: raw.params.len(),
            });
        }

        let name: String = serde_json::from_value(raw.params[0].clone()).map_err(|e| {
            Error::protocol(format!("first argument 'name' must be a string: {e}"))
        })?;

        Self::new(raw.id.clone(), name)
    }
}

impl RpcCommand for NameShowCmd {
    fn id(&self) -> &Value {
        &self.id
    }

    fn method(&self) -> &'static str {
        METHOD_NAME_SHOW
    }

    fn to_raw(&self) -> Result<RawCmd> {
        RawCmd::new(self.id.clone(), self.method(), vec![Value::from(self.name.clone())])
    }
}

/// `name_sync <block-hash> <count> <wait?>` — fetch name events since a block
#[derive(Debug, Clone, PartialEq)]
pub struct NameSyncCmd {
    id: Value,
    pub block_hash: String,
    pub count: i64,
    pub wait: bool,
}

impl NameSyncCmd {
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the id is not wire-representable.
    pub fn new(id: Value, block_hash: impl Into<String>, count: i64, wait: bool) -> Result<Self> {
        check_id(&id)?;
        Ok(Self {
            id,
            block_hash: block_hash.into(),
            count,
            wait,
        })
    }
}

impl RpcCommand for NameSyncCmd {
    fn id(&self) -> &Value {
        &self.id
    }

    fn method(&self) -> &'static str {
        METHOD_NAME_SYNC
    }

    fn to_raw(&self) -> Result<RawCmd> {
        RawCmd::new(
            self.id.clone(),
            self.method(),
            vec![
                Value::from(self.block_hash.clone()),
                Value::from(self.count),
                Value::from(self.wait),
            ],
        )
    }
}

/// `name_scan <from> <count>` — list names in order starting from a name
#[derive(Debug, Clone, PartialEq)]
pub struct NameScanCmd {
    id: Value,
    pub from: String,
    pub count: i64,
}

impl NameScanCmd {
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the id is not wire-representable.
    pub fn new(id: Value, from: impl Into<String>, count: i64) -> Result<Self> {
        check_id(&id)?;
        Ok(Self {
            id,
            from: from.into(),
            count,
        })
    }
}

impl RpcCommand for NameScanCmd {
    fn id(&self) -> &Value {
        &self.id
    }

    fn method(&self) -> &'static str {
        METHOD_NAME_SCAN
    }

    fn to_raw(&self) -> Result<RawCmd> {
        RawCmd::new(
            self.id.clone(),
            self.method(),
            vec![Value::from(self.from.clone()), Value::from(self.count)],
        )
    }
}

/// `name_filter <regexp> <maxage> <from> <count>` — list names matching a regexp
#[derive(Debug, Clone, PartialEq)]
pub struct NameFilterCmd {
    id: Value,
    pub regexp: String,
    pub max_age: i64,
    pub from: i64,
    pub count: i64,
}

impl NameFilterCmd {
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the id is not wire-representable.
    pub fn new(
        id: Value,
        regexp: impl Into<String>,
        max_age: i64,
        from: i64,
        count: i64,
    ) -> Result<Self> {
        check_id(&id)?;
        Ok(Self {
            id,
            regexp: regexp.into(),
            max_age,
            from,
            count,
        })
    }
}

impl RpcCommand for NameFilterCmd {
    fn id(&self) -> &Value {
        &self.id
    }

    fn method(&self) -> &'static str {
        METHOD_NAME_FILTER
    }

    fn to_raw(&self) -> Result<RawCmd> {
        RawCmd::new(
            self.id.clone(),
            self.method(),
            vec![
                Value::from(self.regexp.clone()),
                Value::from(self.max_age),
                Value::from(self.from),
                Value::from(self.count),
            ],
        )
    }
}
