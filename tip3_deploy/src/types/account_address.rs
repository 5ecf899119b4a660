use crate::errors::DeployError;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Raw account address: `<workchain>:<64 hex chars>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountAddress {
    pub workchain: i32,
    pub hash: [u8; 32],
}

impl AccountAddress {
    pub const ZERO: Self = Self::new(0, [0; 32]);

    pub const fn new(workchain: i32, hash: [u8; 32]) -> Self { Self { workchain, hash } }

    pub fn from_hash_bytes(workchain: i32, bytes: &[u8]) -> Result<Self, DeployError> {
        let hash: [u8; 32] = match bytes.try_into() {
            Ok(hash) => hash,
            Err(_) => {
                return Err(DeployError::InvalidAddress(format!("expected 32 bytes hash, got {}", bytes.len())));
            }
        };
        Ok(Self::new(workchain, hash))
    }

    pub fn hash_hex(&self) -> String { hex::encode(self.hash) }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}:{}", self.workchain, self.hash_hex()) }
}

impl FromStr for AccountAddress {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((wc_str, hash_str)) = s.split_once(':') else {
            return Err(DeployError::InvalidAddress(format!("expecting 'workchain:hex' format, got '{s}'")));
        };
        let workchain = match wc_str.parse::<i32>() {
            Ok(wc) => wc,
            Err(err) => return Err(DeployError::InvalidAddress(format!("bad workchain in '{s}': {err}"))),
        };
        if hash_str.len() != 64 {
            return Err(DeployError::InvalidAddress(format!("expecting 64 hex chars after ':', got '{s}'")));
        }
        let bytes = hex::decode(hash_str).map_err(|err| DeployError::InvalidAddress(format!("'{s}': {err}")))?;
        Self::from_hash_bytes(workchain, &bytes)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AccountAddress::from_str(&String::deserialize(deserializer)?).map_err(Error::custom)
    }
}
