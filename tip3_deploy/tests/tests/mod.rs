mod test_deploy_flow;
pub mod utils;
