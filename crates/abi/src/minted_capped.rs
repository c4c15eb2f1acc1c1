// src/minted_capped.rs
use alloy::sol;

/// Read surface of the registry-hosted minted-capped idx contract.
///
/// Every accessor takes `(exec_storage, exec_id)` ahead of its own arguments.
pub const IDX: &[&str] = &[
    "function getAdmin(address exec_storage, bytes32 exec_id) view returns (address admin)",
    "function getCrowdsaleInfo(address exec_storage, bytes32 exec_id) view returns (uint256 wei_raised, address team_wallet, bool is_initialized, bool is_finalized)",
    "function getTokenInfo(address exec_storage, bytes32 exec_id) view returns (bytes32 token_name, bytes32 token_symbol, uint256 token_decimals, uint256 total_supply)",
    "function getCrowdsaleStartAndEndTimes(address exec_storage, bytes32 exec_id) view returns (uint256 start_time, uint256 end_time)",
    "function isCrowdsaleFull(address exec_storage, bytes32 exec_id) view returns (bool is_crowdsale_full, uint256 max_sellable)",
    "function getCrowdsaleTierList(address exec_storage, bytes32 exec_id) view returns (bytes32[] crowdsale_tiers)",
    "function getCrowdsaleTier(address exec_storage, bytes32 exec_id, uint256 tier_index) view returns (bytes32 tier_name, uint256 tier_sell_cap, uint256 tier_price, uint256 tier_min, uint256 tier_duration, bool duration_is_modifiable, bool is_whitelisted)",
    "function getTierStartAndEndDates(address exec_storage, bytes32 exec_id, uint256 tier_index) view returns (uint256 tier_start, uint256 tier_end)",
    "function getTierWhitelist(address exec_storage, bytes32 exec_id, uint256 tier_index) view returns (uint256 num_whitelisted, address[] whitelist)",
    "function getWhitelistStatus(address exec_storage, bytes32 exec_id, uint256 tier_index, address buyer) view returns (uint256 minimum_purchase_amt, uint256 max_tokens_remaining)",
    "function getReservedTokenDestinationList(address exec_storage, bytes32 exec_id) view returns (uint256 num_destinations, address[] reserved_destinations)",
    "function getReservedDestinationInfo(address exec_storage, bytes32 exec_id, address destination) view returns (uint256 destination_list_index, uint256 num_tokens, uint256 num_percent, uint256 percent_decimals)",
];

/// Read surface of a standalone minted-capped proxy.
///
/// Outputs are unnamed and there is no combined token info accessor.
pub const PROXY: &[&str] = &[
    "function getAdmin() view returns (address)",
    "function getCrowdsaleInfo() view returns (uint256, address, bool, bool)",
    "function getCrowdsaleStartAndEndTimes() view returns (uint256, uint256)",
    "function isCrowdsaleFull() view returns (bool, uint256)",
    "function getCrowdsaleTierList() view returns (bytes32[])",
    "function getCrowdsaleTier(uint256 tier_index) view returns (bytes32, uint256, uint256, uint256, uint256, bool, bool)",
    "function getTierStartAndEndDates(uint256 tier_index) view returns (uint256, uint256)",
    "function getTierWhitelist(uint256 tier_index) view returns (uint256, address[])",
    "function getWhitelistStatus(uint256 tier_index, address buyer) view returns (uint256, uint256)",
    "function getReservedTokenDestinationList() view returns (uint256, address[])",
    "function getReservedDestinationInfo(address destination) view returns (uint256, uint256, uint256, uint256)",
];

sol! {
    /// Owner-only entrypoints of a minted-capped crowdsale.
    #[sol(rpc)]
    interface IMintedCappedManager {
        function finalizeCrowdsaleAndToken() external;
        function updateTierDuration(uint256 tier_index, uint256 new_duration) external;
        function updateTierMinimum(uint256 tier_index, uint256 new_minimum) external;
    }
}
