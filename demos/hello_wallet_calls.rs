use std::str::FromStr;
use tip3_deploy::client::DeployClient;
use tip3_deploy::config::DeployConfig;
use tip3_deploy::contracts::{AbiContract, HelloWallet};
use tip3_deploy::provider::SdkProvider;
use tip3_deploy::types::{AccountAddress, KeyPair};

/* Plan:
    - call `touch` with an unsigned external message, remember the tx lt
    - wait until the account state includes that tx and run `getTimestamp` on it locally
    - send some value to a random address with a signed `sendValue` call
   Required env: HELLO_WALLET_ADDRESS, HELLO_WALLET_KEYS_PATH (keys the wallet was deployed with)
*/
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    demos::init_logging()?;
    let address = AccountAddress::from_str(&std::env::var("HELLO_WALLET_ADDRESS")?)?;
    let keys = KeyPair::from_file(std::env::var("HELLO_WALLET_KEYS_PATH")?)?;

    let config = DeployConfig::new_default()?;
    let provider = SdkProvider::new(config.endpoints.clone())?;
    let client = DeployClient::builder(provider).with_wait_timeout(config.wait_timeout()).build();
    let wallet = HelloWallet::from_config(client.clone(), &config, address)?;

    let account = wallet.account().await?;
    log::info!("HelloWallet {} balance: {}", wallet.address(), account.balance);

    let touch_lt = wallet.run_on_chain("touch").await?;
    let timestamp = wallet.run_get_method_after_lt("getTimestamp", touch_lt).await?;
    log::info!("getTimestamp output: {timestamp:?}");

    let dest = client.gen_random_address()?;
    let send_lt = wallet.send_value(&dest, 100_000_000, &keys).await?;
    log::info!("sendValue tx lt: {send_lt}");
    Ok(())
}
