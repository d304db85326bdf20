use alloy_primitives::Address;

/// Cache set holding every approval fact for one network + integration:
/// `{prefix}_{chain_id}_{integration}_approves`, lower-cased.
pub fn approves_set_key(prefix: &str, chain_id: u64, integration: &str) -> String {
    format!("{}_{}_{}_approves", prefix, chain_id, integration).to_lowercase()
}

/// Element key for one (token, spender) pair, both addresses lower-cased.
pub fn approval_key(token: Address, spender: Address) -> String {
    format!("{}_{}", token, spender).to_lowercase()
}
