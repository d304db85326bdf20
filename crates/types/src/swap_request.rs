use alloy_primitives::{Address, Bytes, U256};

use crate::CallStep;

/// Externally constructed swap input: the swap payload is already encoded
/// by the route provider, composition only wraps it into a call sequence.
#[derive(Clone, Debug)]
pub struct SwapRequest {
    pub src_token: Address,
    pub src_amount: U256,
    pub dst_token: Address,
    pub dst_amount: U256,
    pub swap_to: Address,
    pub call_data: Bytes,
    pub spender: Option<Address>,
    pub network_fee: U256,
    pub pre_calls: Vec<CallStep>,
}

impl SwapRequest {
    pub fn new(
        src_token: Address,
        src_amount: U256,
        dst_token: Address,
        dst_amount: U256,
        swap_to: Address,
        call_data: &Bytes,
    ) -> SwapRequest {
        SwapRequest {
            src_token,
            src_amount,
            dst_token,
            dst_amount,
            swap_to,
            call_data: call_data.clone(),
            spender: None,
            network_fee: U256::ZERO,
            pre_calls: Vec::new(),
        }
    }

    pub fn set_spender(&mut self, spender: Address) -> &mut Self {
        self.spender = Some(spender);
        self
    }

    pub fn set_network_fee(&mut self, network_fee: U256) -> &mut Self {
        self.network_fee = network_fee;
        self
    }

    pub fn add_pre_call(&mut self, step: CallStep) -> &mut Self {
        self.pre_calls.push(step);
        self
    }

    /// Effective spender: the explicit one when set, the swap target otherwise.
    pub fn spender_or_target(&self) -> Address {
        self.spender.unwrap_or(self.swap_to)
    }
}
