use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Once};
use std::time::Duration;
use tip3_deploy::client::DeployClient;
use tip3_deploy::errors::{DeployError, DeployResult, SDK_ERR_WAIT_FOR_TIMEOUT};
use tip3_deploy::provider::{BlockchainProvider, Collection, EncodedMessage, MessageParams, ProcessedMessage};
use tip3_deploy::types::{AccountAddress, KeyPair, format_lt, parse_lt};

pub const TEST_SECRET: &str = "4242424242424242424242424242424242424242424242424242424242424242";
pub const DEPLOY_ADDRESS: &str = "0:d3f1a7c2b4e8a1d6c0b5f7e9a2c4d6e8f0a1b3c5d7e9f1a3b5c7d9e1f3a5b7c9";

static LOG: Once = Once::new();

pub fn init_logging() {
    LOG.call_once(|| {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(log4rs::encode::pattern::PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S%.6f)} {T:>15.15} {h({l:>5.5})} {t}:{L} - {m}{n}",
            )))
            .build();

        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Debug))
            .unwrap();

        log4rs::init_config(config).unwrap();
    })
}

pub fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/contracts").join(name)
}

#[derive(Debug, Clone)]
pub struct MockAccount {
    pub last_trans_lt: u64,
    pub balance: u128,
    pub boc: String,
}

#[derive(Default)]
pub struct MockState {
    /// "<action>:<function>" in call order
    pub calls: Vec<String>,
    pub processed: Vec<MessageParams>,
    pub accounts: HashMap<AccountAddress, MockAccount>,
    pub next_lt: u64,
    pub process_error: Option<(u32, String)>,
    pub wait_timeouts: Vec<Duration>,
}

/// In-memory chain: every processed message creates a transaction on the target account
/// and bumps its `last_trans_lt` past the transaction lt
#[derive(Clone)]
pub struct MockProvider {
    pub state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    pub fn new() -> Self {
        let state = MockState {
            next_lt: 1000,
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn client(&self) -> DeployClient {
        init_logging();
        DeployClient::builder(self.clone()).with_wait_timeout(Duration::from_millis(500)).build()
    }

    pub fn deploy_address() -> AccountAddress { AccountAddress::from_str(DEPLOY_ADDRESS).unwrap() }

    pub fn add_account(&self, address: &AccountAddress, last_trans_lt: u64, balance: u128) {
        let account = MockAccount {
            last_trans_lt,
            balance,
            boc: format!("boc:{address}:{last_trans_lt}"),
        };
        self.state.lock().accounts.insert(address.clone(), account);
    }

    pub fn fail_processing(&self, code: u32, msg: &str) { self.state.lock().process_error = Some((code, msg.to_string())); }

    pub fn calls(&self) -> Vec<String> { self.state.lock().calls.clone() }

    pub fn processed(&self) -> Vec<MessageParams> { self.state.lock().processed.clone() }

    pub fn account(&self, address: &AccountAddress) -> Option<MockAccount> {
        self.state.lock().accounts.get(address).cloned()
    }

    fn target(params: &MessageParams) -> AccountAddress {
        params.address.clone().unwrap_or_else(Self::deploy_address)
    }
}

#[async_trait::async_trait]
impl BlockchainProvider for MockProvider {
    fn generate_sign_keys(&self) -> DeployResult<KeyPair> {
        self.state.lock().calls.push("generate_sign_keys".to_string());
        KeyPair::from_secret_hex(TEST_SECRET)
    }

    fn generate_random_bytes(&self, length: u32) -> DeployResult<String> {
        Ok(STANDARD.encode(vec![7u8; length as usize]))
    }

    async fn encode_message(&self, params: &MessageParams) -> DeployResult<EncodedMessage> {
        self.state.lock().calls.push(format!("encode:{}", params.function_name));
        Ok(EncodedMessage {
            address: Self::target(params),
            message: format!("msg:{}", params.function_name),
            message_id: format!("id:{}", params.function_name),
        })
    }

    async fn process_message(&self, params: &MessageParams) -> DeployResult<ProcessedMessage> {
        let mut state = self.state.lock();
        state.calls.push(format!("process:{}", params.function_name));
        if let Some((code, msg)) = &state.process_error {
            return Err(DeployError::sdk(*code, msg));
        }
        state.processed.push(params.clone());

        let lt = state.next_lt;
        state.next_lt += 10;
        let total_output = ["value", "amount"]
            .iter()
            .find_map(|field| params.input.get(*field).and_then(Value::as_str))
            .map(|value| value.parse::<u128>().unwrap())
            .unwrap_or(0);

        let target = Self::target(params);
        let account = state.accounts.entry(target.clone()).or_insert(MockAccount {
            last_trans_lt: 0,
            balance: 0,
            boc: String::new(),
        });
        account.last_trans_lt = lt + 1;
        account.boc = format!("boc:{target}:{}", lt + 1);

        Ok(ProcessedMessage {
            transaction: json!({ "id": format!("tx{lt}"), "lt": format_lt(lt), "aborted": false }),
            total_output,
            decoded_output: None,
        })
    }

    async fn wait_for_collection(
        &self,
        collection: Collection,
        filter: Value,
        result: &str,
        timeout: Duration,
    ) -> DeployResult<Value> {
        assert_eq!(collection, Collection::Accounts);
        assert_eq!(result, "boc");
        let mut state = self.state.lock();
        state.wait_timeouts.push(timeout);
        let address = AccountAddress::from_str(filter["id"]["eq"].as_str().unwrap())?;
        let after_lt = parse_lt(filter["last_trans_lt"]["gt"].as_str().unwrap())?;
        match state.accounts.get(&address) {
            Some(account) if account.last_trans_lt > after_lt => Ok(json!({ "boc": account.boc })),
            _ => Err(DeployError::sdk(SDK_ERR_WAIT_FOR_TIMEOUT, "wait_for operation did not return anything")),
        }
    }

    async fn query(&self, query: &str, variables: Option<Value>) -> DeployResult<Value> {
        assert!(query.contains("balance(format: DEC)"));
        let variables = variables.unwrap();
        let address = AccountAddress::from_str(variables["address"].as_str().unwrap())?;
        let info = match self.state.lock().accounts.get(&address) {
            Some(account) => json!({ "balance": account.balance.to_string(), "boc": account.boc }),
            None => Value::Null,
        };
        Ok(json!({ "data": { "blockchain": { "account": { "info": info } } } }))
    }

    async fn run_tvm(&self, message: &str, account_boc: &str, params: &MessageParams) -> DeployResult<Option<Value>> {
        self.state.lock().calls.push(format!("run_tvm:{}", params.function_name));
        Ok(Some(json!({ "value0": format!("{message}@{account_boc}") })))
    }
}
