use crate::client::DEFAULT_WAIT_TIMEOUT;
use crate::errors::{DeployError, DeployResult};
use crate::types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEPLOY_CONF_LOCAL_NODE: &str = include_str!("../resources/deploy_config/local_node.json");
pub const DEPLOY_CONF_PATH_ENV: &str = "TIP3_DEPLOY_CONFIG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub endpoints: Vec<String>,
    pub giver: GiverConfig,
    pub token_root: TokenRootConfig,
    pub hello_wallet: HelloWalletConfig,
    /// nano-units sent from the giver to the token root address before deploy
    pub funding_value: u128,
    #[serde(default = "default_wait_timeout_ms")]
    pub wait_timeout_ms: u64,
    /// relative artifact paths resolve against it
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiverConfig {
    pub address: AccountAddress,
    pub abi_path: PathBuf,
    pub keys_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRootConfig {
    pub abi_path: PathBuf,
    pub tvc_path: PathBuf,
    /// base64 BOC of the token wallet code
    pub wallet_code_path: PathBuf,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub root_owner: AccountAddress,
    pub deployer: AccountAddress,
    pub initial_supply_to: AccountAddress,
    pub initial_supply: u128,
    pub deploy_wallet_value: u128,
    pub mint_disabled: bool,
    pub burn_by_root_disabled: bool,
    pub burn_paused: bool,
    pub remaining_gas_to: AccountAddress,
    /// random one is generated if not set
    pub random_nonce: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloWalletConfig {
    pub abi_path: PathBuf,
}

impl DeployConfig {
    pub fn new(json: &str, base_dir: &Path) -> DeployResult<Self> {
        let mut config: DeployConfig = serde_json::from_str(json)?;
        config.base_dir = base_dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> DeployResult<Self> {
        let path = path.as_ref();
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        DeployConfig::new(&std::fs::read_to_string(path)?, base_dir)
    }

    /// Takes `TIP3_DEPLOY_CONFIG_PATH` from env if set and the file exists,
    /// otherwise uses built-in config for a local node
    pub fn new_default() -> DeployResult<Self> {
        if let Ok(path) = std::env::var(DEPLOY_CONF_PATH_ENV) {
            if Path::new(&path).exists() {
                log::info!("Using deploy config from {path}");
                return DeployConfig::from_path(&path);
            }
            log::warn!("env_var {DEPLOY_CONF_PATH_ENV} is set, but path {path} is not available");
        } else {
            log::info!("env_var {DEPLOY_CONF_PATH_ENV} is not set, using default local node config");
        }
        DeployConfig::new(DEPLOY_CONF_LOCAL_NODE, &builtin_resources_dir())
    }

    pub fn to_json(&self) -> DeployResult<String> { Ok(serde_json::to_string_pretty(self)?) }

    pub fn wait_timeout(&self) -> Duration { Duration::from_millis(self.wait_timeout_ms) }

    /// Absolute paths are kept as is
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match path.is_absolute() {
            true => path.to_path_buf(),
            false => self.base_dir.join(path),
        }
    }

    fn validate(&self) -> DeployResult<()> {
        if self.endpoints.is_empty() {
            return Err(DeployError::Config("'endpoints' must not be empty".to_string()));
        }
        if self.funding_value == 0 {
            return Err(DeployError::Config("'funding_value' must be positive".to_string()));
        }
        if self.token_root.symbol.is_empty() {
            return Err(DeployError::Config("'token_root.symbol' must not be empty".to_string()));
        }
        Ok(())
    }
}

pub fn builtin_resources_dir() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources") }

fn default_wait_timeout_ms() -> u64 { DEFAULT_WAIT_TIMEOUT.as_millis() as u64 }
