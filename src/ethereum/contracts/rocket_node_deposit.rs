//! RocketNodeDeposit contract bindings.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IRocketNodeDeposit {
        function getNodeDepositCredit(address _nodeOperator) external view returns (uint256);

        function deposit(
            uint256 _bondAmount,
            uint256 _minimumNodeFee,
            bytes calldata _validatorPubkey,
            bytes calldata _validatorSignature,
            bytes32 _depositDataRoot,
            uint256 _salt,
            address _expectedMinipoolAddress
        ) external payable;
    }
}
