//! Ingestion boundary for route-provider payloads. Callers constructing a
//! [`crate::SwapRequest`] from wire-format strings go through these parsers
//! first, so malformed input is rejected before any cache or chain I/O.

use alloy_primitives::{Address, U256};
use eyre::{eyre, Result};

/// Parses a non-negative decimal amount string into a U256. Rejects
/// anything but plain ASCII digits.
pub fn parse_amount(value: &str) -> Result<U256> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(eyre!("INVALID_AMOUNT"));
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| eyre!("INVALID_AMOUNT"))
}

pub fn parse_address(value: &str) -> Result<Address> {
    value.trim().parse().map_err(|_| eyre!("INVALID_ADDRESS"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0").unwrap(), U256::ZERO);
        assert_eq!(parse_amount(" 1000 ").unwrap(), U256::from(1000));
        assert_eq!(
            parse_amount("115792089237316195423570985008687907853269984665640564039457584007913129639935").unwrap(),
            U256::MAX
        );

        assert!(parse_amount("").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("1.5").is_err());
        assert!(parse_amount("0x10").is_err());
        assert!(parse_amount("ten").is_err());
    }

    #[test]
    fn test_parse_address() {
        assert!(parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").is_ok());
        assert!(parse_address("0x123").is_err());
        assert!(parse_address("").is_err());
    }
}
