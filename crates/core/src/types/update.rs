use alloy::primitives::U256;
use serde::Serialize;

use super::amount::TokenAmount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    EndTime,
    MinCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Timestamp(u64),
    Amount(TokenAmount),
}

/// A single edited field that has to be pushed to the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    pub key: FieldKey,
    pub new_value: FieldValue,
    pub tier: usize,
}

/// A chain-mutating call against the managed crowdsale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrowdsaleCall {
    Finalize,
    UpdateTierDuration { tier: usize, duration: u64 },
    UpdateTierMinimum { tier: usize, minimum: U256 },
    UpdateGlobalMinContribution { minimum: U256 },
}

impl CrowdsaleCall {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Finalize => "finalize",
            Self::UpdateTierDuration { .. } => "updateTierDuration",
            Self::UpdateTierMinimum { .. } => "updateTierMinimum",
            Self::UpdateGlobalMinContribution { .. } => "updateGlobalMinContribution",
        }
    }
}
