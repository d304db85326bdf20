use std::fs;

use alloy_primitives::Address;
use eyre::Result;
use serde::Deserialize;

use swapstitch_types::conv::parse_address;

fn default_cache_prefix() -> String {
    "swapstitch".to_string()
}

/// Per-deployment wiring: which network, which integration identity scopes
/// the approval cache, and the fixed router/helper addresses.
#[derive(Clone, Debug, Deserialize)]
pub struct TopologyConfig {
    pub chain_id: u64,
    pub integration: String,
    #[serde(default = "default_cache_prefix")]
    pub cache_prefix: String,
    /// Owner identity for allowance reads.
    pub router: String,
    /// Target of the approve call step.
    pub approve_helper: String,
}

impl TopologyConfig {
    pub fn load_from_file(file_name: String) -> Result<TopologyConfig> {
        let contents = fs::read_to_string(file_name)?;
        let config: TopologyConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn router_address(&self) -> Result<Address> {
        parse_address(&self.router)
    }

    pub fn approve_helper_address(&self) -> Result<Address> {
        parse_address(&self.approve_helper)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CONFIG: &str = r#"
chain_id = 1
integration = "OneInch"
router = "0x1111111254EEB25477B68fb85Ed929f73A960582"
approve_helper = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"
"#;

    #[test]
    fn test_parse() {
        let config: TopologyConfig = toml::from_str(CONFIG).unwrap();

        assert_eq!(config.chain_id, 1);
        assert_eq!(config.integration, "OneInch");
        assert_eq!(config.cache_prefix, "swapstitch");
        assert_eq!(config.router_address().unwrap(), "0x1111111254EEB25477B68fb85Ed929f73A960582".parse::<Address>().unwrap());
        assert_eq!(
            config.approve_helper_address().unwrap(),
            "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_bad_address_rejected() {
        let config: TopologyConfig = toml::from_str(
            r#"
chain_id = 56
integration = "x"
router = "not-an-address"
approve_helper = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"
"#,
        )
        .unwrap();

        assert!(config.router_address().is_err());
    }
}
