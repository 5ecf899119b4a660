use crate::client::DeployClient;
use crate::config::DeployConfig;
use crate::contracts::{AbiContract, ContractAbi};
use crate::errors::DeployResult;
use crate::types::{AccountAddress, KeyPair};
use serde_json::json;
use std::sync::Arc;

pub struct HelloWallet {
    client: DeployClient,
    address: AccountAddress,
    abi: Arc<ContractAbi>,
}

impl HelloWallet {
    pub fn new(client: DeployClient, address: AccountAddress, abi: Arc<ContractAbi>) -> Self {
        Self { client, address, abi }
    }

    pub fn from_config(client: DeployClient, config: &DeployConfig, address: AccountAddress) -> DeployResult<Self> {
        let abi = ContractAbi::from_path("HelloWallet", config.resolve(&config.hello_wallet.abi_path))?;
        Ok(Self::new(client, address, Arc::new(abi)))
    }

    /// Signed `sendValue` call, returns the tx lt
    pub async fn send_value(&self, dest: &AccountAddress, amount: u128, keys: &KeyPair) -> DeployResult<u64> {
        log::info!("Sending {amount} tokens to {dest}");
        let input = json!({
            "dest": dest.to_string(),
            "amount": amount.to_string(),
            "bounce": false,
        });
        let params = self.call_params("sendValue", input).with_keys(keys.clone());
        let result = self.process_call(params).await?;
        log::info!("Success. Target account will receive: {} tokens", result.total_output);
        Ok(result.tx.lt)
    }
}

impl AbiContract for HelloWallet {
    fn client(&self) -> &DeployClient { &self.client }
    fn address(&self) -> &AccountAddress { &self.address }
    fn abi(&self) -> &Arc<ContractAbi> { &self.abi }
}
