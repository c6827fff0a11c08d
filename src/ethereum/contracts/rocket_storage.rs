//! RocketStorage registry contract bindings.

use alloy::sol;

// RocketStorage key/value registry. Only the address lookup is needed.
sol! {
    #[sol(rpc)]
    interface IRocketStorage {
        function getAddress(bytes32 _key) external view returns (address);
    }
}
