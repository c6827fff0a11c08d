//! RocketTokenRETH contract bindings.

use alloy::sol;

// rETH-specific methods. The ERC-20 surface is bound through `IERC20`.
sol! {
    #[sol(rpc)]
    interface IRocketTokenRETH {
        function getEthValue(uint256 _rethAmount) external view returns (uint256);
        function getRethValue(uint256 _ethAmount) external view returns (uint256);
        function getExchangeRate() external view returns (uint256);
        function getTotalCollateral() external view returns (uint256);
        function getCollateralRate() external view returns (uint256);

        function burn(uint256 _rethAmount) external;
    }
}
