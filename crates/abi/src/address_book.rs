use alloy_primitives::{address, Address};

#[non_exhaustive]
pub struct NativeToken;

impl NativeToken {
    /// Pseudo-address aggregators use to denote the chain's base currency.
    pub const ETH: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

    /// Native transfers have no approval concept.
    pub fn is_native(address: Address) -> bool {
        address == Self::ETH || address == Address::ZERO
    }
}

#[non_exhaustive]
pub struct Token;

impl Token {
    pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
    pub const USDT: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");
    pub const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
}

#[non_exhaustive]
pub struct Periphery;

impl Periphery {
    pub const AGGREGATION_ROUTER: Address = address!("1111111254eeb25477b68fb85ed929f73a960582");
}
