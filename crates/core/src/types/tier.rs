use serde::Serialize;

use super::{
    amount::TokenAmount,
    snapshot::{TierRecord, TokenInfo},
};

/// Editable fields of one tier as the admin view holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierValues {
    pub index: usize,
    pub start_time: u64,
    pub end_time: u64,
    pub min_cap: TokenAmount,
    pub updatable: bool,
    pub is_whitelisted: bool,
}

impl TierValues {
    pub fn from_record(index: usize, record: &TierRecord, token: &TokenInfo) -> Self {
        Self {
            index,
            start_time: record.start_time,
            end_time: record.end_time,
            min_cap: TokenAmount::new(record.min_contribution, token.decimals),
            updatable: record.duration_is_modifiable,
            is_whitelisted: record.is_whitelisted,
        }
    }

    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}
