use crate::contracts::ContractAbi;
use crate::types::{AccountAddress, KeyPair};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessageSigner {
    /// unsigned external message, for functions without `pubkey` checks and for get-methods
    #[default]
    None,
    Keys(KeyPair),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    /// base64 contract image
    pub tvc: String,
    /// static variables
    pub initial_data: Value,
}

/// Everything needed to encode one external message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageParams {
    pub abi: Arc<ContractAbi>,
    /// None for deploy messages, the address is derived from the image
    pub address: Option<AccountAddress>,
    pub deploy: Option<DeployParams>,
    pub function_name: String,
    pub input: Value,
    pub signer: MessageSigner,
}

impl MessageParams {
    pub fn call<F: Into<String>>(abi: Arc<ContractAbi>, address: AccountAddress, function_name: F, input: Value) -> Self {
        Self {
            abi,
            address: Some(address),
            deploy: None,
            function_name: function_name.into(),
            input,
            signer: MessageSigner::None,
        }
    }

    pub fn deploy(abi: Arc<ContractAbi>, deploy: DeployParams, constructor_input: Value) -> Self {
        Self {
            abi,
            address: None,
            deploy: Some(deploy),
            function_name: "constructor".to_string(),
            input: constructor_input,
            signer: MessageSigner::None,
        }
    }

    pub fn with_signer(mut self, signer: MessageSigner) -> Self {
        self.signer = signer;
        self
    }

    pub fn with_keys(self, keys: KeyPair) -> Self { self.with_signer(MessageSigner::Keys(keys)) }
}
