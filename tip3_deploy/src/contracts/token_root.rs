use crate::client::{CallResult, DeployClient};
use crate::config::{DeployConfig, TokenRootConfig};
use crate::contracts::{ContractArtifact, read_base64_file};
use crate::errors::DeployResult;
use crate::provider::{DeployParams, MessageParams};
use crate::types::{AccountAddress, KeyPair};
use serde_json::{Value, json};

/// TIP-3 token root deployer.
/// The address depends on image, initial data and deployer keys, so the same
/// `TokenRoot` and keys always give the same address.
pub struct TokenRoot {
    client: DeployClient,
    artifact: ContractArtifact,
    wallet_code: String,
    params: TokenRootConfig,
    random_nonce: u64,
}

impl TokenRoot {
    pub fn new(client: DeployClient, artifact: ContractArtifact, wallet_code: String, params: TokenRootConfig) -> Self {
        let random_nonce = params.random_nonce.unwrap_or_else(rand::random);
        Self {
            client,
            artifact,
            wallet_code,
            params,
            random_nonce,
        }
    }

    pub fn from_config(client: DeployClient, config: &DeployConfig) -> DeployResult<Self> {
        let root = &config.token_root;
        let tvc_path = config.resolve(&root.tvc_path);
        let artifact = ContractArtifact::from_paths("TokenRoot", &config.resolve(&root.abi_path), Some(&tvc_path))?;
        let wallet_code = read_base64_file(&config.resolve(&root.wallet_code_path))?;
        Ok(Self::new(client, artifact, wallet_code, root.clone()))
    }

    pub fn random_nonce(&self) -> u64 { self.random_nonce }

    pub fn deploy_params(&self, keys: &KeyPair) -> DeployResult<MessageParams> {
        let deploy = DeployParams {
            tvc: self.artifact.tvc()?.to_string(),
            initial_data: self.initial_data(),
        };
        let params = MessageParams::deploy(self.artifact.abi.clone(), deploy, self.constructor_input());
        Ok(params.with_keys(keys.clone()))
    }

    /// Deploy address, no network access
    pub async fn calc_address(&self, keys: &KeyPair) -> DeployResult<AccountAddress> {
        let address = self.client.calc_address(&self.deploy_params(keys)?).await?;
        log::info!("Token root contract is: {address}");
        Ok(address)
    }

    /// The address must hold enough funds before this call
    pub async fn deploy(&self, keys: &KeyPair) -> DeployResult<CallResult> {
        log::info!("Deploying {} ({}) token root", self.params.name, self.params.symbol);
        let result = self.client.process_message(&self.deploy_params(keys)?).await?;
        log::info!("Success. Contract was deployed, tx: {}", result.tx);
        Ok(result)
    }

    fn initial_data(&self) -> Value {
        let params = &self.params;
        json!({
            "deployer_": params.deployer.to_string(),
            "randomNonce_": self.random_nonce.to_string(),
            "rootOwner_": params.root_owner.to_string(),
            "name_": params.name,
            "symbol_": params.symbol,
            "decimals_": params.decimals,
            "walletCode_": self.wallet_code,
        })
    }

    fn constructor_input(&self) -> Value {
        let params = &self.params;
        json!({
            "initialSupplyTo": params.initial_supply_to.to_string(),
            "initialSupply": params.initial_supply.to_string(),
            "deployWalletValue": params.deploy_wallet_value.to_string(),
            "mintDisabled": params.mint_disabled,
            "burnByRootDisabled": params.burn_by_root_disabled,
            "burnPaused": params.burn_paused,
            "remainingGasTo": params.remaining_gas_to.to_string(),
        })
    }
}
