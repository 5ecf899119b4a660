use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[macro_export]
macro_rules! bail_deploy {
    ($($arg:tt)*) => {
        return Err($crate::errors::DeployError::Custom(format!($($arg)*)))
    };
}

pub type DeployResult<T> = Result<T, DeployError>;

/// SDK processing error: the client failed to fetch the next shard block.
/// On a local node it almost always means the node is not running.
pub const SDK_ERR_FETCH_BLOCK_FAILED: u32 = 504;
/// SDK net error: `wait_for_collection` timeout reached
pub const SDK_ERR_WAIT_FOR_TIMEOUT: u32 = 607;

#[derive(Error, Debug)]
pub enum DeployError {
    // SDK
    #[error("SdkError: code: {code}, msg: {msg}")]
    Sdk { code: u32, msg: String },
    #[error("SdkWrongResponse: {field} is missing or malformed in {raw}")]
    SdkWrongResponse { field: &'static str, raw: String },
    #[error("WaitTimeout: account {address} wasn't updated after lt {lt} within {timeout:?}")]
    WaitTimeout { address: String, lt: u64, timeout: Duration },

    // Keys
    #[error("KeysFileMissing: please place {0} file with keys in the expected location")]
    KeysFileMissing(PathBuf),
    #[error("InvalidKeys: {0}")]
    InvalidKeys(String),

    // Data
    #[error("InvalidAddress: {0}")]
    InvalidAddress(String),
    #[error("InvalidLT: {0}")]
    InvalidLT(String),
    #[error("AccountNotFound: account {0} doesn't exist")]
    AccountNotFound(String),

    // Contracts
    #[error("UnknownAbiFunction: {function} is not declared in {contract} ABI")]
    UnknownAbiFunction { contract: String, function: String },
    #[error("MissingContractImage: {0} has no image, can't build deploy message")]
    MissingContractImage(String),
    #[error("ArtifactReadError: {path}: {err}")]
    ArtifactRead { path: PathBuf, err: std::io::Error },

    // Config
    #[error("ConfigError: {0}")]
    Config(String),

    #[error("CustomError: {0}")]
    Custom(String),

    #[error("{0}")]
    IO(#[from] std::io::Error),
    #[error("{0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("{0}")]
    FromHex(#[from] hex::FromHexError),
    #[error("{0}")]
    Base64(#[from] base64::DecodeError),
    #[error("{0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl DeployError {
    pub fn sdk<T: ToString>(code: u32, msg: T) -> Self {
        DeployError::Sdk {
            code,
            msg: msg.to_string(),
        }
    }

    pub fn wrong_response(field: &'static str, raw: &serde_json::Value) -> Self {
        DeployError::SdkWrongResponse {
            field,
            raw: raw.to_string(),
        }
    }

    pub fn sdk_code(&self) -> Option<u32> {
        match self {
            DeployError::Sdk { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_network_unreachable(&self) -> bool { self.sdk_code() == Some(SDK_ERR_FETCH_BLOCK_FAILED) }
}
