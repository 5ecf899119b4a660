use crate::errors::DeployError;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Transaction id with its logical time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxLtId {
    pub id: String,
    pub lt: u64,
}

impl TxLtId {
    pub fn new<T: Into<String>>(id: T, lt: u64) -> Self { Self { id: id.into(), lt } }

    /// Extracts `id` and `lt` from a transaction object returned by the SDK
    pub fn from_tx_json(tx: &Value) -> Result<Self, DeployError> {
        let id = match tx.get("id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => return Err(DeployError::wrong_response("transaction.id", tx)),
        };
        let lt = match tx.get("lt") {
            Some(Value::String(lt)) => parse_lt(lt)?,
            Some(Value::Number(lt)) => match lt.as_u64() {
                Some(lt) => lt,
                None => return Err(DeployError::InvalidLT(lt.to_string())),
            },
            _ => return Err(DeployError::wrong_response("transaction.lt", tx)),
        };
        Ok(Self { id, lt })
    }
}

impl Display for TxLtId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}:{}", self.lt, self.id) }
}

/// Accepts both `0x`-prefixed hex (GraphQL big-int format) and decimal
pub fn parse_lt(lt: &str) -> Result<u64, DeployError> {
    let parsed = match lt.strip_prefix("0x").or_else(|| lt.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => lt.parse::<u64>(),
    };
    parsed.map_err(|err| DeployError::InvalidLT(format!("'{lt}': {err}")))
}

/// Renders lt the way GraphQL filters expect big-int values
pub fn format_lt(lt: u64) -> String { format!("{lt:#x}") }
