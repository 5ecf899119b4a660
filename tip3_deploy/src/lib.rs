pub mod client;
pub mod config;
pub mod contracts;
pub mod errors;
pub mod provider;
pub mod scenario;
pub mod types;
