use crate::client::{DEFAULT_WAIT_TIMEOUT, DeployClient, Inner};
use crate::provider::BlockchainProvider;
use derive_setters::Setters;
use std::sync::Arc;
use std::time::Duration;

#[derive(Setters)]
#[setters(prefix = "with_")]
pub struct Builder {
    #[setters(skip)]
    provider: Arc<dyn BlockchainProvider>,
    /// `wait_for_account_update` gives up after this
    wait_timeout: Duration,
}

impl Builder {
    pub(super) fn new(provider: impl BlockchainProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn build(self) -> DeployClient {
        let inner = Inner {
            provider: self.provider,
            wait_timeout: self.wait_timeout,
        };
        DeployClient { inner: Arc::new(inner) }
    }
}
