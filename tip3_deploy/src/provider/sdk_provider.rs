use crate::errors::{DeployError, DeployResult};
use crate::provider::{BlockchainProvider, Collection, EncodedMessage, MessageParams, MessageSigner, ProcessedMessage};
use crate::types::{AccountAddress, KeyPair};
use async_trait::async_trait;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use ton_client::abi::{Abi, CallSet, DeploySet, ParamsOfEncodeMessage, Signer};
use ton_client::crypto::{KeyPair as SdkKeyPair, ParamsOfGenerateRandomBytes};
use ton_client::error::ClientError;
use ton_client::net::{NetworkConfig, ParamsOfQuery, ParamsOfWaitForCollection};
use ton_client::processing::{ParamsOfProcessMessage, ProcessingEvent};
use ton_client::tvm::ParamsOfRunTvm;
use ton_client::{ClientConfig, ClientContext};

/// `BlockchainProvider` backed by the Everscale SDK client
#[derive(Clone)]
pub struct SdkProvider {
    context: Arc<ClientContext>,
    endpoints: Vec<String>,
}

impl SdkProvider {
    pub fn new(endpoints: Vec<String>) -> DeployResult<Self> {
        if endpoints.is_empty() {
            return Err(DeployError::Config("at least one endpoint is required".to_string()));
        }
        log::info!("Creating SDK client with endpoints: {endpoints:?}");
        let config = ClientConfig {
            network: NetworkConfig {
                endpoints: Some(endpoints.clone()),
                ..Default::default()
            },
            ..Default::default()
        };
        let context = ClientContext::new(config)?;
        Ok(Self {
            context: Arc::new(context),
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &[String] { &self.endpoints }

    fn encode_params(params: &MessageParams) -> ParamsOfEncodeMessage {
        let deploy_set = params.deploy.as_ref().map(|deploy| DeploySet {
            tvc: Some(deploy.tvc.clone()),
            initial_data: Some(deploy.initial_data.clone()),
            ..Default::default()
        });
        ParamsOfEncodeMessage {
            abi: sdk_abi(params),
            address: params.address.as_ref().map(AccountAddress::to_string),
            deploy_set,
            call_set: CallSet::some_with_function_and_input(&params.function_name, params.input.clone()),
            signer: sdk_signer(&params.signer),
            ..Default::default()
        }
    }
}

#[async_trait]
impl BlockchainProvider for SdkProvider {
    fn generate_sign_keys(&self) -> DeployResult<KeyPair> {
        let keys = ton_client::crypto::generate_random_sign_keys(self.context.clone())?;
        Ok(KeyPair::new(keys.public, keys.secret))
    }

    fn generate_random_bytes(&self, length: u32) -> DeployResult<String> {
        let params = ParamsOfGenerateRandomBytes { length };
        Ok(ton_client::crypto::generate_random_bytes(self.context.clone(), params)?.bytes)
    }

    async fn encode_message(&self, params: &MessageParams) -> DeployResult<EncodedMessage> {
        let encoded = ton_client::abi::encode_message(self.context.clone(), Self::encode_params(params)).await?;
        Ok(EncodedMessage {
            address: AccountAddress::from_str(&encoded.address)?,
            message: encoded.message,
            message_id: encoded.message_id,
        })
    }

    async fn process_message(&self, params: &MessageParams) -> DeployResult<ProcessedMessage> {
        let sdk_params = ParamsOfProcessMessage {
            message_encode_params: Self::encode_params(params),
            send_events: false,
        };
        let no_events = |_: ProcessingEvent| futures_util::future::ready(());
        let processed = ton_client::processing::process_message(self.context.clone(), sdk_params, no_events).await?;
        Ok(ProcessedMessage {
            transaction: processed.transaction,
            total_output: u128::from(processed.fees.total_output),
            decoded_output: processed.decoded.and_then(|decoded| decoded.output),
        })
    }

    async fn wait_for_collection(
        &self,
        collection: Collection,
        filter: Value,
        result: &str,
        timeout: Duration,
    ) -> DeployResult<Value> {
        let params = ParamsOfWaitForCollection {
            collection: collection.to_string(),
            filter: Some(filter),
            result: result.to_string(),
            timeout: Some(timeout.as_millis().min(u32::MAX as u128) as u32),
        };
        Ok(ton_client::net::wait_for_collection(self.context.clone(), params).await?.result)
    }

    async fn query(&self, query: &str, variables: Option<Value>) -> DeployResult<Value> {
        let params = ParamsOfQuery {
            query: query.to_string(),
            variables,
        };
        Ok(ton_client::net::query(self.context.clone(), params).await?.result)
    }

    async fn run_tvm(&self, message: &str, account_boc: &str, params: &MessageParams) -> DeployResult<Option<Value>> {
        let sdk_params = ParamsOfRunTvm {
            message: message.to_string(),
            account: account_boc.to_string(),
            abi: Some(sdk_abi(params)),
            ..Default::default()
        };
        let result = ton_client::tvm::run_tvm(self.context.clone(), sdk_params).await?;
        Ok(result.decoded.and_then(|decoded| decoded.output))
    }
}

impl From<ClientError> for DeployError {
    fn from(err: ClientError) -> Self { DeployError::sdk(err.code, err.message) }
}

fn sdk_abi(params: &MessageParams) -> Abi { Abi::Json(params.abi.json().to_string()) }

fn sdk_signer(signer: &MessageSigner) -> Signer {
    match signer {
        MessageSigner::None => Signer::None,
        MessageSigner::Keys(keys) => Signer::Keys {
            keys: SdkKeyPair {
                public: keys.public.clone(),
                secret: keys.secret.clone(),
            },
        },
    }
}
