mod account_address;
mod account_info;
mod key_pair;
mod tx_lt_id;

pub use account_address::*;
pub use account_info::*;
pub use key_pair::*;
pub use tx_lt_id::*;
