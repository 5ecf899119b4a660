use crate::client::{CallResult, DeployClient};
use crate::config::DeployConfig;
use crate::contracts::{AbiContract, ContractAbi};
use crate::errors::DeployResult;
use crate::types::{AccountAddress, KeyPair};
use serde_json::json;
use std::sync::Arc;

/// Pre-funded faucet of test networks
pub struct Giver {
    client: DeployClient,
    address: AccountAddress,
    abi: Arc<ContractAbi>,
    keys: KeyPair,
}

impl Giver {
    pub fn new(client: DeployClient, address: AccountAddress, abi: Arc<ContractAbi>, keys: KeyPair) -> Self {
        Self {
            client,
            address,
            abi,
            keys,
        }
    }

    pub fn from_config(client: DeployClient, config: &DeployConfig) -> DeployResult<Self> {
        let giver = &config.giver;
        let abi = ContractAbi::from_path("GiverV2", config.resolve(&giver.abi_path))?;
        let keys = KeyPair::from_file(config.resolve(&giver.keys_path))?;
        Ok(Self::new(client, giver.address.clone(), Arc::new(abi), keys))
    }

    /// Sends `value` nano-units to `dest` with `bounce = false`, so the funds stay on a not yet deployed account
    pub async fn send_tokens(&self, dest: &AccountAddress, value: u128) -> DeployResult<CallResult> {
        log::info!("Transferring {value} tokens from giver to {dest}");
        let input = json!({
            "dest": dest.to_string(),
            "value": value.to_string(),
            "bounce": false,
        });
        let params = self.call_params("sendTransaction", input).with_keys(self.keys.clone());
        let result = self.process_call(params).await?;
        log::info!("Success. Tokens were transferred, tx: {}", result.tx);
        Ok(result)
    }
}

impl AbiContract for Giver {
    fn client(&self) -> &DeployClient { &self.client }
    fn address(&self) -> &AccountAddress { &self.address }
    fn abi(&self) -> &Arc<ContractAbi> { &self.abi }
}
