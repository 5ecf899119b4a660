mod abi_contract;
mod contract_artifact;
mod giver;
mod hello_wallet;
mod token_root;

pub use abi_contract::*;
pub use contract_artifact::*;
pub use giver::*;
pub use hello_wallet::*;
pub use token_root::*;
