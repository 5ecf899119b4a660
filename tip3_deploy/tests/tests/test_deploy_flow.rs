use crate::tests::utils::{MockProvider, TEST_SECRET, resource};
use serde_json::json;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tokio_test::assert_err;
use tip3_deploy::config::{DEPLOY_CONF_LOCAL_NODE, DeployConfig, builtin_resources_dir};
use tip3_deploy::contracts::{ContractAbi, ContractArtifact, Giver, TokenRoot};
use tip3_deploy::errors::DeployError;
use tip3_deploy::provider::MessageSigner;
use tip3_deploy::scenario::{deploy_token_root, deploy_with};
use tip3_deploy::types::{AccountAddress, KeyPair};

const FAKE_TVC: &str = "te6ccgEBAQEAAgAAAA==";

fn make_giver(provider: &MockProvider, config: &DeployConfig) -> anyhow::Result<Giver> {
    Ok(Giver::from_config(provider.client(), config)?)
}

fn make_token_root(provider: &MockProvider, config: &DeployConfig) -> anyhow::Result<TokenRoot> {
    let abi = ContractAbi::from_path("TokenRoot", resource("TokenRoot.abi.json"))?;
    let artifact = ContractArtifact::new(abi, Some(FAKE_TVC.to_string()));
    Ok(TokenRoot::new(provider.client(), artifact, FAKE_TVC.to_string(), config.token_root.clone()))
}

#[tokio::test]
async fn test_deploy_flow_order() -> anyhow::Result<()> {
    let provider = MockProvider::new();
    let config = DeployConfig::new(DEPLOY_CONF_LOCAL_NODE, &builtin_resources_dir())?;
    let giver = make_giver(&provider, &config)?;
    let token_root = make_token_root(&provider, &config)?;

    let deployment = deploy_with(&provider.client(), &giver, &token_root, config.funding_value).await?;

    assert_eq!(deployment.address, MockProvider::deploy_address());
    assert_eq!(deployment.keys, KeyPair::from_secret_hex(TEST_SECRET)?);
    assert_eq!(
        provider.calls(),
        vec![
            "generate_sign_keys",
            "encode:constructor",
            "process:sendTransaction",
            "process:constructor",
        ]
    );
    assert!(deployment.funding.tx.lt < deployment.deploy.tx.lt);
    assert_eq!(deployment.funding.total_output, 100_000_000_000);

    let processed = provider.processed();
    let funding = &processed[0];
    assert_eq!(funding.address, Some(config.giver.address.clone()));
    assert_eq!(
        funding.input,
        json!({
            "dest": MockProvider::deploy_address().to_string(),
            "value": "100000000000",
            "bounce": false,
        })
    );
    let giver_keys = KeyPair::from_file(resource("GiverV2.keys.json"))?;
    assert_eq!(funding.signer, MessageSigner::Keys(giver_keys));

    let deploy = &processed[1];
    assert_eq!(deploy.address, None);
    assert_eq!(deploy.signer, MessageSigner::Keys(deployment.keys.clone()));
    assert_eq!(deploy.deploy.as_ref().map(|d| d.tvc.as_str()), Some(FAKE_TVC));

    // deploy tx is applied to the derived address, funding tx to the giver
    assert!(provider.account(&config.giver.address).is_some());
    let account = provider.account(&deployment.address).ok_or_else(|| anyhow::anyhow!("no account"))?;
    assert_eq!(account.last_trans_lt, deployment.deploy.tx.lt + 1);
    Ok(())
}

#[tokio::test]
async fn test_deploy_stops_when_network_unreachable() -> anyhow::Result<()> {
    let provider = MockProvider::new();
    provider.fail_processing(504, "Fetch first block failed: Can not send http request");
    let config = DeployConfig::new(DEPLOY_CONF_LOCAL_NODE, &builtin_resources_dir())?;
    let giver = make_giver(&provider, &config)?;
    let token_root = make_token_root(&provider, &config)?;

    let err = deploy_with(&provider.client(), &giver, &token_root, config.funding_value).await.unwrap_err();
    assert!(err.is_network_unreachable());
    assert_eq!(provider.calls().iter().filter(|call| call.starts_with("process:")).count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_deploy_token_root_from_config_file() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join("tip3_deploy_test_deploy_from_config_file");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("TokenRoot.tvc"), FAKE_TVC)?;
    std::fs::write(dir.join("TokenWallet.code.boc"), FAKE_TVC)?;

    let mut json: serde_json::Value = serde_json::from_str(DEPLOY_CONF_LOCAL_NODE)?;
    json["giver"]["abi_path"] = json!(resource("GiverV2.abi.json"));
    json["giver"]["keys_path"] = json!(resource("GiverV2.keys.json"));
    json["token_root"]["abi_path"] = json!(resource("TokenRoot.abi.json"));
    json["token_root"]["tvc_path"] = json!("TokenRoot.tvc");
    json["token_root"]["wallet_code_path"] = json!("TokenWallet.code.boc");
    json["funding_value"] = json!(5_000_000_000u64);
    let config_path = dir.join("deploy.json");
    std::fs::write(&config_path, json.to_string())?;

    let config = DeployConfig::from_path(&config_path)?;
    let provider = MockProvider::new();
    let deployment = deploy_token_root(&provider.client(), &config).await?;
    assert_eq!(deployment.funding.total_output, 5_000_000_000);

    let processed = provider.processed();
    let initial_data = &processed[1].deploy.as_ref().ok_or_else(|| anyhow::anyhow!("no deploy set"))?.initial_data;
    assert_eq!(initial_data["walletCode_"], FAKE_TVC);
    Ok(())
}

#[tokio::test]
async fn test_deploy_token_root_requires_image() -> anyhow::Result<()> {
    let mut config = DeployConfig::new(DEPLOY_CONF_LOCAL_NODE, &builtin_resources_dir())?;
    config.token_root.tvc_path = Path::new("no_such_dir/TokenRoot.tvc").to_path_buf();
    let provider = MockProvider::new();

    let err = deploy_token_root(&provider.client(), &config).await.unwrap_err();
    assert!(matches!(err, DeployError::ArtifactRead { .. }));
    assert!(provider.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_giver_keys_file_missing() -> anyhow::Result<()> {
    let mut config = DeployConfig::new(DEPLOY_CONF_LOCAL_NODE, &builtin_resources_dir())?;
    config.giver.keys_path = "missing/GiverV2.keys.json".into();
    let provider = MockProvider::new();

    let Err(err) = Giver::from_config(provider.client(), &config) else {
        panic!("giver must not be created without keys");
    };
    assert!(matches!(err, DeployError::KeysFileMissing(path) if path.ends_with("missing/GiverV2.keys.json")));
    Ok(())
}

#[tokio::test]
async fn test_giver_send_tokens_to_random_address() -> anyhow::Result<()> {
    let provider = MockProvider::new();
    let client = provider.client();
    let config = DeployConfig::new(DEPLOY_CONF_LOCAL_NODE, &builtin_resources_dir())?;
    let giver = make_giver(&provider, &config)?;

    let dest = client.gen_random_address()?;
    assert_eq!(dest, AccountAddress::from_str(&format!("0:{}", "07".repeat(32)))?);

    let result = giver.send_tokens(&dest, 1_000).await?;
    assert_eq!(result.total_output, 1_000);
    assert_eq!(result.tx.id, format!("tx{}", result.tx.lt));
    // the message goes to the giver, the destination is only a call argument
    let processed = provider.processed();
    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0].address, Some(config.giver.address.clone()));
    assert_eq!(processed[0].input["dest"], dest.to_string());
    assert_eq!(processed[0].input["value"], "1000");
    assert_eq!(processed[0].input["bounce"], false);
    let giver_account = provider.account(&config.giver.address).ok_or_else(|| anyhow::anyhow!("no giver account"))?;
    assert_eq!(giver_account.last_trans_lt, result.tx.lt + 1);
    Ok(())
}

#[tokio::test]
async fn test_unknown_function_is_rejected_locally() -> anyhow::Result<()> {
    let provider = MockProvider::new();
    let client = provider.client();
    let abi = Arc::new(ContractAbi::from_path("GiverV2", resource("GiverV2.abi.json"))?);
    let params = tip3_deploy::provider::MessageParams::call(abi, AccountAddress::ZERO, "sendValue", json!({}));

    let err = assert_err!(client.process_message(&params).await);
    assert!(matches!(err, DeployError::UnknownAbiFunction { .. }));
    assert_err!(client.calc_address(&params).await);
    assert!(provider.calls().is_empty());
    Ok(())
}
