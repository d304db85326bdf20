use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use tracing::debug;

use swapstitch_abi::address_book::NativeToken;
use swapstitch_abi::IERC20;

use crate::keys::{approval_key, approves_set_key};
use crate::{AllowanceError, ApprovalStore, ChainQuery};

/// Answers "may `spender` move at least `amount` of `token` on behalf of the
/// configured owner" with at most one on-chain read per previously unseen
/// (token, spender) pair.
pub struct AllowanceOracle<S, Q> {
    store: S,
    query: Q,
    owner: Address,
    set_key: String,
}

impl<S: ApprovalStore, Q: ChainQuery> AllowanceOracle<S, Q> {
    pub fn new(store: S, query: Q, owner: Address, prefix: &str, chain_id: u64, integration: &str) -> Self {
        Self { store, query, owner, set_key: approves_set_key(prefix, chain_id, integration) }
    }

    pub fn set_key(&self) -> &str {
        &self.set_key
    }

    /// Cache check strictly precedes the on-chain read, which strictly
    /// precedes the cache write. A negative answer is never cached:
    /// allowance may be raised by an external approval later.
    pub async fn has_sufficient_allowance(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<bool, AllowanceError> {
        if NativeToken::is_native(token) {
            return Ok(true);
        }

        let element = approval_key(token, spender);
        if self.store.is_member(&self.set_key, &element).await.map_err(AllowanceError::Cache)? {
            return Ok(true);
        }

        let call_data: Bytes = IERC20::allowanceCall { owner: self.owner, spender }.abi_encode().into();
        let ret = self.query.call(token, call_data).await.map_err(AllowanceError::Query)?;
        let allowance = IERC20::allowanceCall::abi_decode_returns(&ret, false)?._0;
        debug!("allowance {} : owner {} spender {} token {} requested {}", allowance, self.owner, spender, token, amount);

        if allowance >= amount {
            self.store.add(&self.set_key, &element).await.map_err(AllowanceError::Cache)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
