mod builder;

pub use builder::Builder;

use crate::errors::{DeployError, DeployResult, SDK_ERR_WAIT_FOR_TIMEOUT};
use crate::provider::{BlockchainProvider, Collection, MessageParams};
use crate::types::{AccountAddress, AccountInfo, KeyPair, TxLtId, format_lt};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// `wait_for_collection` timeout used unless configured, same as the SDK's own default
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(40);

const ACCOUNT_INFO_QUERY: &str = r#"
    query($address: String!) {
      blockchain {
        account(address: $address) {
          info {
            balance(format: DEC)
            boc
          }
        }
      }
    }"#;

/// Result of an on-chain call
#[derive(Debug, Clone, PartialEq)]
pub struct CallResult {
    pub tx: TxLtId,
    pub total_output: u128,
    pub decoded_output: Option<Value>,
}

#[derive(Clone)]
pub struct DeployClient {
    inner: Arc<Inner>,
}

impl DeployClient {
    pub fn builder(provider: impl BlockchainProvider) -> Builder { Builder::new(provider) }

    pub fn wait_timeout(&self) -> Duration { self.inner.wait_timeout }

    /// Random ed25519 key pair
    pub fn generate_keys(&self) -> DeployResult<KeyPair> {
        let keys = self.inner.provider.generate_sign_keys()?;
        log::info!("Generated key pair, public: {}", keys.public);
        Ok(keys)
    }

    /// Random address in the basic workchain
    pub fn gen_random_address(&self) -> DeployResult<AccountAddress> {
        let bytes = STANDARD.decode(self.inner.provider.generate_random_bytes(32)?)?;
        AccountAddress::from_hash_bytes(0, &bytes)
    }

    /// Address the message is sent to. For deploy messages it's derived from image, initial data and signer keys,
    /// no network access is needed.
    pub async fn calc_address(&self, params: &MessageParams) -> DeployResult<AccountAddress> {
        params.abi.ensure_function(&params.function_name)?;
        Ok(self.inner.provider.encode_message(params).await?.address)
    }

    /// Sends the message and waits for its transaction
    pub async fn process_message(&self, params: &MessageParams) -> DeployResult<CallResult> {
        params.abi.ensure_function(&params.function_name)?;
        log::debug!("Processing {}.{} message", params.abi.name(), params.function_name);
        let processed = self.inner.provider.process_message(params).await?;
        let tx = TxLtId::from_tx_json(&processed.transaction)?;
        log::debug!("{}.{} processed, tx: {tx}", params.abi.name(), params.function_name);
        Ok(CallResult {
            tx,
            total_output: processed.total_output,
            decoded_output: processed.decoded_output,
        })
    }

    /// Waits until the account's `last_trans_lt` is greater than `lt`, returns its BOC.
    /// `last_trans_lt` is the end of the last transaction's lt interval, so it is strictly
    /// greater than the lt of the transaction itself once that transaction is applied.
    pub async fn wait_for_account_update(&self, address: &AccountAddress, lt: u64) -> DeployResult<String> {
        log::info!("Waiting for account {address} update after lt {lt}");
        let filter = json!({
            "id": { "eq": address.to_string() },
            "last_trans_lt": { "gt": format_lt(lt) },
        });
        let started = Instant::now();
        let timeout = self.inner.wait_timeout;
        let account = match self.inner.provider.wait_for_collection(Collection::Accounts, filter, "boc", timeout).await {
            Ok(account) => account,
            Err(err) if err.sdk_code() == Some(SDK_ERR_WAIT_FOR_TIMEOUT) => {
                return Err(DeployError::WaitTimeout {
                    address: address.to_string(),
                    lt,
                    timeout,
                });
            }
            Err(err) => return Err(err),
        };
        let boc = match account.get("boc").and_then(Value::as_str) {
            Some(boc) => boc.to_string(),
            None => return Err(DeployError::wrong_response("account.boc", &account)),
        };
        log::info!("Account {address} was updated, it took {} sec", started.elapsed().as_secs());
        Ok(boc)
    }

    /// Latest balance and state BOC of the account
    pub async fn get_account(&self, address: &AccountAddress) -> DeployResult<AccountInfo> {
        let variables = json!({ "address": address.to_string() });
        let response = self.inner.provider.query(ACCOUNT_INFO_QUERY, Some(variables)).await?;
        let info = match response.pointer("/data/blockchain/account/info") {
            Some(Value::Null) | None => return Err(DeployError::AccountNotFound(address.to_string())),
            Some(info) => info,
        };
        serde_json::from_value(info.clone()).map_err(|_| DeployError::wrong_response("account.info", info))
    }

    /// Encodes the call and executes it locally on `account_boc`, nothing is sent to the network
    pub async fn run_get_method(&self, params: &MessageParams, account_boc: &str) -> DeployResult<Option<Value>> {
        params.abi.ensure_function(&params.function_name)?;
        let provider = &self.inner.provider;
        let encoded = provider.encode_message(params).await?;
        log::info!("Running {}.{} get-method locally", params.abi.name(), params.function_name);
        provider.run_tvm(&encoded.message, account_boc, params).await
    }
}

struct Inner {
    provider: Arc<dyn BlockchainProvider>,
    wait_timeout: Duration,
}
