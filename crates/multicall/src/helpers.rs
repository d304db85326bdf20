use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolInterface;
use chrono::Utc;

use swapstitch_abi::{IApproveHelper, IERC20};

pub const FRIENDLY_DEADLINE_OFFSET_SECS: u64 = 7 * 24 * 60 * 60;

pub struct EncoderHelper;

impl EncoderHelper {
    pub fn encode_erc20_transfer(to: Address, amount: U256) -> Bytes {
        IERC20::IERC20Calls::transfer(IERC20::transferCall { to, amount }).abi_encode().into()
    }

    pub fn encode_erc20_balance_of(account: Address) -> Bytes {
        IERC20::IERC20Calls::balanceOf(IERC20::balanceOfCall { account }).abi_encode().into()
    }

    pub fn encode_erc20_allowance(owner: Address, spender: Address) -> Bytes {
        IERC20::IERC20Calls::allowance(IERC20::allowanceCall { owner, spender }).abi_encode().into()
    }

    pub fn encode_erc20_approve(spender: Address, amount: U256) -> Bytes {
        IERC20::IERC20Calls::approve(IERC20::approveCall { spender, amount }).abi_encode().into()
    }

    pub fn encode_helper_approve(token: Address, spender: Address, amount: U256) -> Bytes {
        IApproveHelper::IApproveHelperCalls::approveToken(IApproveHelper::approveTokenCall { token, spender, amount })
            .abi_encode()
            .into()
    }
}

/// Far-future deadline for protocols that require one even though the real
/// enforcement happens at another layer. A bounded offset keeps the encoded
/// argument short; recomputed on every call since it is time-dependent.
pub fn friendly_deadline() -> U256 {
    U256::from(Utc::now().timestamp() as u64 + FRIENDLY_DEADLINE_OFFSET_SECS)
}

#[cfg(test)]
mod test {
    use alloy_sol_types::SolCall;

    use super::*;

    #[test]
    fn test_approve_selector() {
        let spender: Address = "0x1111111254EEB25477B68fb85Ed929f73A960582".parse().unwrap();
        let call_data = EncoderHelper::encode_erc20_approve(spender, U256::MAX);
        assert_eq!(call_data[..4], IERC20::approveCall::SELECTOR);
        // 4 byte selector + 2 abi words
        assert_eq!(call_data.len(), 4 + 32 * 2);
    }

    #[test]
    fn test_helper_approve_selector() {
        let token: Address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".parse().unwrap();
        let spender: Address = "0x1111111254EEB25477B68fb85Ed929f73A960582".parse().unwrap();
        let call_data = EncoderHelper::encode_helper_approve(token, spender, U256::MAX);
        assert_eq!(call_data[..4], IApproveHelper::approveTokenCall::SELECTOR);
        assert_eq!(call_data.len(), 4 + 32 * 3);
    }

    #[test]
    fn test_friendly_deadline_bounds() {
        let now = Utc::now().timestamp() as u64;
        let deadline = friendly_deadline();

        assert!(deadline >= U256::from(now + FRIENDLY_DEADLINE_OFFSET_SECS));
        assert!(deadline <= U256::from(now + FRIENDLY_DEADLINE_OFFSET_SECS + 60));
    }
}
