use crate::client::{CallResult, DeployClient};
use crate::config::DeployConfig;
use crate::contracts::{Giver, TokenRoot};
use crate::errors::DeployResult;
use crate::types::{AccountAddress, KeyPair};

#[derive(Debug, Clone)]
pub struct TokenRootDeployment {
    pub keys: KeyPair,
    pub address: AccountAddress,
    pub funding: CallResult,
    pub deploy: CallResult,
}

/// Full deploy flow: fresh keys -> deploy address -> funds from giver -> deploy
pub async fn deploy_token_root(client: &DeployClient, config: &DeployConfig) -> DeployResult<TokenRootDeployment> {
    let giver = Giver::from_config(client.clone(), config)?;
    let token_root = TokenRoot::from_config(client.clone(), config)?;
    deploy_with(client, &giver, &token_root, config.funding_value).await
}

pub async fn deploy_with(
    client: &DeployClient,
    giver: &Giver,
    token_root: &TokenRoot,
    funding_value: u128,
) -> DeployResult<TokenRootDeployment> {
    let keys = client.generate_keys()?;
    let address = token_root.calc_address(&keys).await?;
    let funding = giver.send_tokens(&address, funding_value).await?;
    let deploy = token_root.deploy(&keys).await?;
    Ok(TokenRootDeployment {
        keys,
        address,
        funding,
        deploy,
    })
}
