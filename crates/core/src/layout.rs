//! Per-family accessor tables: which accessor to call and where each field
//! sits in its output tuple when the ABI does not name it.

/// A field of an accessor's output tuple and its positional fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndex {
    pub name: &'static str,
    pub position: usize,
}

const fn field(name: &'static str, position: usize) -> FieldIndex {
    FieldIndex { name, position }
}

pub mod accessor {
    pub const GET_ADMIN: &str = "getAdmin";
    pub const GET_CROWDSALE_INFO: &str = "getCrowdsaleInfo";
    pub const GET_TOKEN_INFO: &str = "getTokenInfo";
    pub const GET_CROWDSALE_START_AND_END_TIMES: &str = "getCrowdsaleStartAndEndTimes";
    pub const IS_CROWDSALE_FULL: &str = "isCrowdsaleFull";
    pub const GET_CROWDSALE_TIER_LIST: &str = "getCrowdsaleTierList";
    pub const GET_CROWDSALE_TIER: &str = "getCrowdsaleTier";
    pub const GET_TIER_START_AND_END_DATES: &str = "getTierStartAndEndDates";
    pub const GET_TIER_WHITELIST: &str = "getTierWhitelist";
    pub const GET_WHITELIST_STATUS: &str = "getWhitelistStatus";
    pub const GET_RESERVED_TOKEN_DESTINATION_LIST: &str = "getReservedTokenDestinationList";
    pub const GET_RESERVED_DESTINATION_INFO: &str = "getReservedDestinationInfo";
    pub const GET_CROWDSALE_STATUS: &str = "getCrowdsaleStatus";
    pub const GET_CROWDSALE_WHITELIST: &str = "getCrowdsaleWhitelist";
    pub const GET_TOKENS_SOLD: &str = "getTokensSold";
    pub const NAME: &str = "name";
    pub const SYMBOL: &str = "symbol";
    pub const DECIMALS: &str = "decimals";
    pub const TOTAL_SUPPLY: &str = "totalSupply";
}

pub const ADMIN: &[FieldIndex] = &[field("admin", 0)];

pub const TOKEN_INFO: &[FieldIndex] = &[
    field("token_name", 0),
    field("token_symbol", 1),
    field("token_decimals", 2),
    field("total_supply", 3),
];

pub const SALE_TIMES: &[FieldIndex] = &[field("start_time", 0), field("end_time", 1)];

pub const CROWDSALE_FULL: &[FieldIndex] =
    &[field("is_crowdsale_full", 0), field("max_sellable", 1)];

pub const TIER_LIST: &[FieldIndex] = &[field("crowdsale_tiers", 0)];

pub const TIER_DATA: &[FieldIndex] = &[
    field("tier_name", 0),
    field("tier_sell_cap", 1),
    field("tier_price", 2),
    field("tier_min", 3),
    field("tier_duration", 4),
    field("duration_is_modifiable", 5),
    field("is_whitelisted", 6),
];

pub const TIER_DATES: &[FieldIndex] = &[field("tier_start", 0), field("tier_end", 1)];

pub const WHITELIST: &[FieldIndex] = &[field("num_whitelisted", 0), field("whitelist", 1)];

pub const RESERVED_DESTINATIONS: &[FieldIndex] = &[
    field("num_destinations", 0),
    field("reserved_destinations", 1),
];

pub const DESTINATION_INFO: &[FieldIndex] = &[
    field("destination_list_index", 0),
    field("num_tokens", 1),
    field("num_percent", 2),
    field("percent_decimals", 3),
];

pub const CROWDSALE_STATUS: &[FieldIndex] = &[
    field("start_rate", 0),
    field("end_rate", 1),
    field("current_rate", 2),
    field("sale_duration", 3),
    field("time_remaining", 4),
    field("tokens_remaining", 5),
    field("is_whitelisted", 6),
];

pub const TOKENS_SOLD: &[FieldIndex] = &[field("tokens_sold", 0)];

/// Single-output accessors used when `getTokenInfo` is missing.
pub const TOKEN_NAME: &[FieldIndex] = &[field("token_name", 0)];
pub const TOKEN_SYMBOL: &[FieldIndex] = &[field("token_symbol", 0)];
pub const TOKEN_DECIMALS: &[FieldIndex] = &[field("token_decimals", 0)];
pub const TOKEN_TOTAL_SUPPLY: &[FieldIndex] = &[field("total_supply", 0)];

/// Tuples whose layout differs between contract families.
#[derive(Debug)]
pub struct FamilyLayout {
    pub crowdsale_info: &'static [FieldIndex],
    pub whitelist_status: &'static [FieldIndex],
}

pub static MINTED_CAPPED: FamilyLayout = FamilyLayout {
    crowdsale_info: &[
        field("wei_raised", 0),
        field("team_wallet", 1),
        field("is_initialized", 2),
        field("is_finalized", 3),
    ],
    // FIXME: max_tokens_remaining falls back to position 0, the slot of
    // minimum_purchase_amt. Check the contract's output order before moving
    // it to 1.
    whitelist_status: &[field("minimum_purchase_amt", 0), field("max_tokens_remaining", 0)],
};

pub static DUTCH_AUCTION: FamilyLayout = FamilyLayout {
    crowdsale_info: &[
        field("wei_raised", 0),
        field("team_wallet", 1),
        field("minimum_contribution", 2),
        field("is_initialized", 3),
        field("is_finalized", 4),
        field("burn_excess", 5),
    ],
    whitelist_status: &[field("minimum_purchase_amt", 0), field("max_tokens_remaining", 1)],
};
