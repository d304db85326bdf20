use alloy_primitives::{Address, Bytes, U256};

/// One invocation of an atomic multi-call transaction: target, raw call
/// payload and the native value attached to the call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallStep {
    pub to: Address,
    pub call_data: Bytes,
    pub value: U256,
}

impl CallStep {
    pub fn new(to: Address, call_data: &Bytes, value: U256) -> CallStep {
        CallStep { to, call_data: call_data.clone(), value }
    }

    pub fn new_call(to: Address, call_data: &Bytes) -> CallStep {
        CallStep::new(to, call_data, U256::ZERO)
    }

    pub fn new_call_with_value(to: Address, call_data: &Bytes, value: U256) -> CallStep {
        CallStep::new(to, call_data, value)
    }
}

/// Ordered list of call steps plus the pass-through network fee. Ordering is
/// significant: an approval must land before the swap call that consumes it.
#[derive(Clone, Debug, Default)]
pub struct CallSequence {
    pub steps: Vec<CallStep>,
    pub network_fee: U256,
}

impl CallSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, step: CallStep) -> &mut Self {
        self.steps.push(step);
        self
    }

    pub fn get(&self, idx: usize) -> Option<&CallStep> {
        self.steps.get(idx)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of native value over all steps.
    pub fn total_value(&self) -> U256 {
        self.steps.iter().fold(U256::ZERO, |acc, s| acc + s.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_order_and_value() {
        let to: Address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".parse().unwrap();
        let buf = Bytes::from(vec![0x33, 0x33, 0x44, 0x55]);

        let mut sequence = CallSequence::new();
        sequence.add(CallStep::new_call(to, &buf));
        sequence.add(CallStep::new_call_with_value(to, &buf, U256::from(1000)));

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.get(0).unwrap().value, U256::ZERO);
        assert_eq!(sequence.get(1).unwrap().value, U256::from(1000));
        assert_eq!(sequence.total_value(), U256::from(1000));
    }
}
