mod message_params;
mod sdk_provider;

pub use message_params::*;
pub use sdk_provider::*;

use crate::errors::DeployResult;
use crate::types::{AccountAddress, KeyPair};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Blockchain operations the deployer needs. One method per SDK call;
/// response parsing stays in `DeployClient`.
#[async_trait]
#[rustfmt::skip]
pub trait BlockchainProvider: Send + Sync + 'static {
    fn generate_sign_keys(&self) -> DeployResult<KeyPair>;
    /// returns base64-encoded bytes
    fn generate_random_bytes(&self, length: u32) -> DeployResult<String>;

    /// Encodes the message without sending it
    async fn encode_message(&self, params: &MessageParams) -> DeployResult<EncodedMessage>;
    /// Encodes, sends and waits for the message's transaction
    async fn process_message(&self, params: &MessageParams) -> DeployResult<ProcessedMessage>;

    /// Waits for the first object in `collection` matching `filter`, returns the requested `result` fields
    async fn wait_for_collection(&self, collection: Collection, filter: Value, result: &str, timeout: Duration) -> DeployResult<Value>;
    /// Raw GraphQL query, returns the whole response body
    async fn query(&self, query: &str, variables: Option<Value>) -> DeployResult<Value>;

    /// Executes the message locally on `account_boc`, returns decoded output of the called function
    async fn run_tvm(&self, message: &str, account_boc: &str, params: &MessageParams) -> DeployResult<Option<Value>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    pub address: AccountAddress,
    pub message: String,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedMessage {
    /// raw transaction object, `id` and `lt` fields are parsed by the client
    pub transaction: Value,
    /// value sent out by the transaction, nano-units
    pub total_output: u128,
    pub decoded_output: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Accounts,
    Transactions,
    Messages,
    Blocks,
}
