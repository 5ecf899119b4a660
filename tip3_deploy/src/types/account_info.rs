use serde::{Deserialize, Serialize};

/// Account snapshot returned by the `blockchain.account.info` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// decimal string, nano-units
    pub balance: String,
    /// base64 BOC with the full account state (code and data)
    pub boc: String,
}
