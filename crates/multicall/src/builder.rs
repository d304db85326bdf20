use alloy_primitives::{Address, U256};
use eyre::Result;
use tracing::debug;

use swapstitch_abi::address_book::NativeToken;
use swapstitch_allowance::{AllowanceOracle, ApprovalStore, ChainQuery};
use swapstitch_types::{CallSequence, CallStep, SwapRequest};

use crate::helpers::EncoderHelper;

/// Assembles the ordered call list for one swap: caller pre-calls, then an
/// approval step when the oracle reports insufficient allowance, then the
/// swap call itself carrying the native value.
pub struct CallSequenceBuilder<S, Q> {
    oracle: AllowanceOracle<S, Q>,
    approve_to: Address,
}

impl<S: ApprovalStore, Q: ChainQuery> CallSequenceBuilder<S, Q> {
    pub fn new(oracle: AllowanceOracle<S, Q>, approve_to: Address) -> Self {
        Self { oracle, approve_to }
    }

    pub async fn build(&self, request: &SwapRequest) -> Result<CallSequence> {
        let spender = request.spender_or_target();

        let mut sequence = CallSequence::new();
        sequence.network_fee = request.network_fee;

        for step in request.pre_calls.iter() {
            sequence.add(step.clone());
        }

        if !self.oracle.has_sufficient_allowance(request.src_token, spender, request.src_amount).await? {
            // max approval, one approve transaction per pair
            let call_data = EncoderHelper::encode_helper_approve(request.src_token, spender, U256::MAX);
            sequence.add(CallStep::new_call(self.approve_to, &call_data));
            debug!("approve step added : token {} spender {}", request.src_token, spender);
        }

        let mut swap_value = request.network_fee;
        if NativeToken::is_native(request.src_token) {
            swap_value += request.src_amount;
        }
        sequence.add(CallStep::new_call_with_value(request.swap_to, &request.call_data, swap_value));

        Ok(sequence)
    }
}
