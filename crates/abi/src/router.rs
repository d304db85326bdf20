use alloy_sol_types::sol;

sol! {
    /// Router-side helper that issues ERC-20 approvals on behalf of the
    /// executor contract. The approve step of a call sequence targets this
    /// contract, not the token directly.
    #[derive(Debug, PartialEq, Eq)]
    interface IApproveHelper {
        function approveToken(address token, address spender, uint256 amount) external returns (bool);
    }
}
