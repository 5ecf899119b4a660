use crate::client::{CallResult, DeployClient};
use crate::contracts::ContractAbi;
use crate::errors::DeployResult;
use crate::provider::MessageParams;
use crate::types::{AccountAddress, AccountInfo};
use serde_json::{Value, json};
use std::sync::Arc;

/// Deployed contract with a known ABI
#[async_trait::async_trait]
pub trait AbiContract: Send + Sync {
    fn client(&self) -> &DeployClient;
    fn address(&self) -> &AccountAddress;
    fn abi(&self) -> &Arc<ContractAbi>;

    /// Unsigned call message
    fn call_params(&self, function_name: &str, input: Value) -> MessageParams {
        MessageParams::call(self.abi().clone(), self.address().clone(), function_name, input)
    }

    /// Calls the function with an unsigned external message and no arguments, returns the tx lt
    async fn run_on_chain(&self, function_name: &str) -> DeployResult<u64> {
        log::info!("Calling {}.{function_name} on {}", self.abi().name(), self.address());
        let result = self.client().process_message(&self.call_params(function_name, json!({}))).await?;
        log::info!("Success. TransactionId is: {}", result.tx.id);
        Ok(result.tx.lt)
    }

    async fn process_call(&self, params: MessageParams) -> DeployResult<CallResult> {
        self.client().process_message(&params).await
    }

    /// Runs the get-method on the given account state
    async fn run_get_method(&self, function_name: &str, account_boc: &str) -> DeployResult<Option<Value>> {
        let params = self.call_params(function_name, json!({}));
        self.client().run_get_method(&params, account_boc).await
    }

    /// Runs the get-method on a state which already includes the transaction with `lt`
    async fn run_get_method_after_lt(&self, function_name: &str, lt: u64) -> DeployResult<Option<Value>> {
        let account_boc = self.client().wait_for_account_update(self.address(), lt).await?;
        self.run_get_method(function_name, &account_boc).await
    }

    /// Runs the get-method on the latest known state
    async fn run_get_method_latest(&self, function_name: &str) -> DeployResult<Option<Value>> {
        let account = self.account().await?;
        self.run_get_method(function_name, &account.boc).await
    }

    async fn account(&self) -> DeployResult<AccountInfo> { self.client().get_account(self.address()).await }
}
