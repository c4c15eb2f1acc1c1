use alloy::primitives::Address;
use serde::Serialize;

use crate::types::{snapshot::SaleWindow, tier::TierValues, update::FieldUpdate};

/// Live answer to "is the sale sold out?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleCapacity {
    Full,
    Available,
    /// The accessor failed; treated as not finalizable.
    Unknown,
}

/// Values re-read from the chain right before deriving readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusProbe {
    pub window: SaleWindow,
    pub is_finalized: bool,
    pub capacity: SaleCapacity,
    pub owner_is_current_user: bool,
}

pub struct ReadinessInputs<'a> {
    pub probe: &'a StatusProbe,
    pub initial_tiers: &'a [TierValues],
    pub pending_updates: &'a [FieldUpdate],
    pub loading: bool,
    pub now_ms: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadinessState {
    pub owner_is_current_user: bool,
    pub has_started: bool,
    pub has_ended: bool,
    pub is_updatable: bool,
    pub is_whitelisted: bool,
    pub is_finalized: bool,
    pub can_finalize: bool,
    pub can_save: bool,
    pub display_save: bool,
    pub finalize_enabled: bool,
    pub can_edit_tiers: bool,
    pub can_edit_min_cap: bool,
}

/// Addresses compare by value, so checksum casing never matters.
pub fn is_owner(admin: Address, account: Address) -> bool {
    admin == account
}

pub fn can_finalize(is_finalized: bool, has_ended: bool, capacity: SaleCapacity) -> bool {
    if is_finalized {
        return false;
    }

    match capacity {
        SaleCapacity::Unknown => false,
        SaleCapacity::Full => true,
        SaleCapacity::Available => has_ended,
    }
}

impl ReadinessState {
    pub fn derive(inputs: &ReadinessInputs<'_>) -> Self {
        let probe = inputs.probe;
        let owner = probe.owner_is_current_user;
        let has_started = probe.window.has_started(inputs.now_ms);
        let has_ended = probe.window.has_ended(inputs.now_ms);
        let is_finalized = probe.is_finalized;
        let is_updatable = inputs.initial_tiers.iter().any(|tier| tier.updatable);
        let is_whitelisted = inputs.initial_tiers.iter().any(|tier| tier.is_whitelisted);
        let can_finalize = can_finalize(is_finalized, has_ended, probe.capacity);

        Self {
            owner_is_current_user: owner,
            has_started,
            has_ended,
            is_updatable,
            is_whitelisted,
            is_finalized,
            can_finalize,
            can_save: !inputs.loading
                && owner
                && !inputs.pending_updates.is_empty()
                && !has_ended,
            display_save: owner && !has_ended && (!is_finalized || !can_finalize),
            finalize_enabled: owner && !is_finalized && can_finalize && !has_ended,
            can_edit_tiers: owner && !can_finalize && !is_finalized,
            can_edit_min_cap: owner && !has_ended && !is_whitelisted && !is_finalized,
        }
    }
}
