//! Reply shapes for the name-registry RPC methods.
//!
//! Record replies use lenient partial decoding: fields absent from the
//! payload take their zero value and unknown extra fields are ignored, the
//! same tolerance the remote server's own clients apply. `name_sync` replies
//! are stricter because their event arrays are position-dependent: a
//! malformed element fails the whole parse.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use ncjson::{Error, Result};

/// Reply to `name_show`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameShowReply {
    pub name: String,
    pub value: String,
    pub height: i64,
    pub expires_in: i64,
    pub expired: bool,
    pub address: String,
    pub txid: String,
    pub vout: u32,
}

/// One item of a `name_scan` or `name_filter` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameInfo {
    pub name: String,
    pub value: String,
    pub txid: String,
    pub address: String,
    pub height: i64,
    pub expires_in: i64,
    pub expired: bool,
}

pub type NameScanReply = Vec<NameInfo>;
pub type NameFilterReply = Vec<NameInfo>;
pub type NameSyncReply = Vec<NameSyncEvent>;

/// One element of a `name_sync` reply.
///
/// On the wire this is a heterogeneous array tagged by a string in its
/// first slot, e.g. `["update", "d/example", "newvalue"]` or
/// `["atblock", "00ff...", 12345]`. Tags this client does not know are kept
/// as [`NameSyncEvent::Unknown`] so newer servers do not break the parse.
#[derive(Debug, Clone, PartialEq)]
pub enum NameSyncEvent {
    FirstUpdate { name: String, value: String },
    Update { name: String, value: String },
    AtBlock { hash: String, height: i64 },
    Unknown { tag: String },
}

impl NameSyncEvent {
    /// Wire tag in the event's first array slot.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::FirstUpdate { .. } => "firstupdate",
            Self::Update { .. } => "update",
            Self::AtBlock { .. } => "atblock",
            Self::Unknown { tag } => tag,
        }
    }

    /// Decode one event from its wire array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the value is not a non-empty array
    /// with a string tag, or if a known tag lacks its required trailing
    /// fields or carries fields of the wrong JSON type.
    pub fn from_value(v: &Value) -> Result<Self> {
        let parts = v
            .as_array()
            .ok_or_else(|| malformed("element is not an array"))?;

        let tag = parts
            .first()
            .ok_or_else(|| malformed("element is empty"))?
            .as_str()
            .ok_or_else(|| malformed("tag is not a string"))?;

        match tag {
            "firstupdate" | "update" => {
                let name = parts
                    .get(1)
                    .and_then(Value::as_str)
                    .ok_or_else(|| malformed("name field missing or not a string"))?;
                let value = parts
                    .get(2)
                    .and_then(Value::as_str)
                    .ok_or_else(|| malformed("value field missing or not a string"))?;

                if tag == "firstupdate" {
                    Ok(Self::FirstUpdate {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                } else {
                    Ok(Self::Update {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                }
            }
            "atblock" => {
                let hash = parts
                    .get(1)
                    .and_then(Value::as_str)
                    .ok_or_else(|| malformed("block hash missing or not a string"))?;
                let height = parts
                    .get(2)
                    .and_then(Value::as_f64)
                    .ok_or_else(|| malformed("block height missing or not a number"))?;

                // The wire carries heights as JSON numbers; fractional
                // heights truncate toward zero.
                #[allow(clippy::cast_possible_truncation)]
                let height = height as i64;

                Ok(Self::AtBlock {
                    hash: hash.to_string(),
                    height,
                })
            }
            other => Ok(Self::Unknown {
                tag: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for NameSyncEvent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        Self::from_value(&v).map_err(serde::de::Error::custom)
    }
}

fn malformed(detail: &str) -> Error {
    Error::protocol(format!("malformed name_sync event: {detail}"))
}

/// Parse a `name_show` reply payload.
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the payload is not a JSON object.
pub fn parse_name_show_reply(result: &Value) -> Result<NameShowReply> {
    serde_json::from_value(result.clone())
        .map_err(|e| Error::protocol(format!("malformed name_show reply: {e}")))
}

/// Parse a `name_sync` reply payload.
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the payload is not an array or any
/// element is a malformed event.
pub fn parse_name_sync_reply(result: &Value) -> Result<NameSyncReply> {
    let items = result
        .as_array()
        .ok_or_else(|| Error::protocol("name_sync reply is not an array"))?;
    items.iter().map(NameSyncEvent::from_value).collect()
}

/// Parse a `name_scan` reply payload.
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the payload is not an array of objects.
pub fn parse_name_scan_reply(result: &Value) -> Result<NameScanReply> {
    parse_name_list(result, "name_scan")
}

/// Parse a `name_filter` reply payload.
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the payload is not an array of objects.
pub fn parse_name_filter_reply(result: &Value) -> Result<NameFilterReply> {
    parse_name_list(result, "name_filter")
}

fn parse_name_list(result: &Value, method: &str) -> Result<Vec<NameInfo>> {
    serde_json::from_value(result.clone())
        .map_err(|e| Error::protocol(format!("malformed {method} reply: {e}")))
}
