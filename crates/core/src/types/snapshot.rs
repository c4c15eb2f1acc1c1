use alloy::primitives::{Address, U256};
use serde::Serialize;

use super::{amount::TokenAmount, family::CrowdsaleFamily, tier::TierValues};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhitelistEntry {
    pub address: Address,
    pub min_contribution: U256,
    pub max_tokens_remaining: U256,
}

/// One pricing phase of a sale, merged from its data, dates and whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierRecord {
    pub name: String,
    pub sell_cap: U256,
    pub price: U256,
    pub min_contribution: U256,
    pub duration: u64,
    pub duration_is_modifiable: bool,
    pub is_whitelisted: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub whitelist: Vec<WhitelistEntry>,
    /// Only reported by Dutch auctions.
    pub tokens_sold: Option<U256>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationDimension {
    Tokens,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservedAllocation {
    pub address: Address,
    pub dimension: AllocationDimension,
    pub value: TokenAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

/// Sale-wide start and end, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaleWindow {
    pub start_time: u64,
    pub end_time: u64,
}

impl SaleWindow {
    // Evaluated independently of `has_ended`; a zero-length window at `now`
    // reports both.
    pub fn has_started(&self, now_ms: u64) -> bool {
        self.start_time.saturating_mul(1000) >= now_ms
    }

    pub fn has_ended(&self, now_ms: u64) -> bool {
        self.end_time.saturating_mul(1000) <= now_ms
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrowdsaleSnapshot {
    pub family: CrowdsaleFamily,
    pub wei_raised: U256,
    pub team_wallet: Address,
    pub is_initialized: bool,
    pub is_finalized: bool,
    pub minimum_contribution: Option<U256>,
    pub burn_excess: Option<bool>,
    pub window: SaleWindow,
    pub token: TokenInfo,
    pub tiers: Vec<TierRecord>,
    pub reserved_allocations: Vec<ReservedAllocation>,
}

impl CrowdsaleSnapshot {
    /// Flat per-tier admin view, captured as the baseline for edits.
    pub fn tier_values(&self) -> Vec<TierValues> {
        self.tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| TierValues::from_record(index, tier, &self.token))
            .collect()
    }
}
