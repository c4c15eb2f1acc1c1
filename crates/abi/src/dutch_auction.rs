// src/dutch_auction.rs
use alloy::sol;

/// Read surface of the registry-hosted Dutch auction idx contract.
pub const IDX: &[&str] = &[
    "function getAdmin(address exec_storage, bytes32 exec_id) view returns (address admin)",
    "function getCrowdsaleInfo(address exec_storage, bytes32 exec_id) view returns (uint256 wei_raised, address team_wallet, uint256 minimum_contribution, bool is_initialized, bool is_finalized, bool burn_excess)",
    "function getTokenInfo(address exec_storage, bytes32 exec_id) view returns (bytes32 token_name, bytes32 token_symbol, uint256 token_decimals, uint256 total_supply)",
    "function getCrowdsaleStatus(address exec_storage, bytes32 exec_id) view returns (uint256 start_rate, uint256 end_rate, uint256 current_rate, uint256 sale_duration, uint256 time_remaining, uint256 tokens_remaining, bool is_whitelisted)",
    "function getCrowdsaleStartAndEndTimes(address exec_storage, bytes32 exec_id) view returns (uint256 start_time, uint256 end_time)",
    "function getCrowdsaleWhitelist(address exec_storage, bytes32 exec_id) view returns (uint256 num_whitelisted, address[] whitelist)",
    "function getWhitelistStatus(address exec_storage, bytes32 exec_id, address buyer) view returns (uint256 minimum_purchase_amt, uint256 max_tokens_remaining)",
    "function getTokensSold(address exec_storage, bytes32 exec_id) view returns (uint256 tokens_sold)",
    "function isCrowdsaleFull(address exec_storage, bytes32 exec_id) view returns (bool is_crowdsale_full, uint256 max_sellable)",
];

/// Read surface of a standalone Dutch auction proxy.
pub const PROXY: &[&str] = &[
    "function getAdmin() view returns (address)",
    "function getCrowdsaleInfo() view returns (uint256, address, uint256, bool, bool, bool)",
    "function getCrowdsaleStatus() view returns (uint256, uint256, uint256, uint256, uint256, uint256, bool)",
    "function getCrowdsaleStartAndEndTimes() view returns (uint256, uint256)",
    "function getCrowdsaleWhitelist() view returns (uint256, address[])",
    "function getWhitelistStatus(address buyer) view returns (uint256, uint256)",
    "function getTokensSold() view returns (uint256)",
    "function isCrowdsaleFull() view returns (bool, uint256)",
];

sol! {
    /// Owner-only entrypoints of a Dutch auction crowdsale.
    #[sol(rpc)]
    interface IDutchAuctionManager {
        function finalizeCrowdsale() external;
        function updateGlobalMinContribution(uint256 new_min_contribution) external;
    }
}
