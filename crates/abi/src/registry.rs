use alloy::sol;

sol! {
    /// Entry point for crowdsales hosted behind an exec id.
    ///
    /// The calldata is the ABI-encoded call of the target application.
    #[sol(rpc)]
    interface IRegistryExec {
        function exec(bytes32 exec_id, bytes calldata app_calldata) external payable returns (bool success);
    }
}
