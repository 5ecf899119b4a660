use std::process::ExitCode;
use tip3_deploy::client::DeployClient;
use tip3_deploy::config::DeployConfig;
use tip3_deploy::errors::DeployError;
use tip3_deploy::provider::SdkProvider;
use tip3_deploy::scenario::deploy_token_root;

/*  Running against something other than a local node:
    - point TIP3_DEPLOY_CONFIG_PATH to your config (see tip3_deploy/resources/deploy_config/local_node.json)
    - set `endpoints` and `giver.address` there
    - put the giver keys to `giver.keys_path`
    TokenRoot.tvc is not shipped, place it where `token_root.tvc_path` points.
*/
async fn real_main() -> Result<(), DeployError> {
    let config = DeployConfig::new_default()?;
    let provider = SdkProvider::new(config.endpoints.clone())?;
    let client = DeployClient::builder(provider).with_wait_timeout(config.wait_timeout()).build();

    let deployment = deploy_token_root(&client, &config).await?;
    log::info!("Token root {} deployed by {:?}", deployment.address, deployment.keys);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    demos::init_logging()?;
    match real_main().await {
        Ok(()) => {
            log::info!("Normal exit");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_network_unreachable() => {
            log::error!(
                "Network is inaccessible. You have to start a local node using `everdev se start`.\n\
                 If the node runs on another port or ip, set `endpoints` to http://localhost:port \
                 or http://ip:port in the deploy config."
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            log::error!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
