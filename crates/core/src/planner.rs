use tracing::debug;

use crate::{
    error::TransactionError,
    types::{
        family::CrowdsaleFamily,
        tier::TierValues,
        update::{CrowdsaleCall, FieldKey, FieldUpdate, FieldValue},
    },
    validation::validate_tiers,
};

/// Move a tier's end time and shift every later tier behind it.
///
/// Later tiers keep their duration; each starts where the previous one ends.
pub fn cascade_end_time(tiers: &mut [TierValues], index: usize, new_end: u64) {
    let Some(tier) = tiers.get_mut(index) else {
        return;
    };
    tier.end_time = new_end;

    let mut previous_end = new_end;
    for next in tiers.iter_mut().skip(index + 1) {
        let duration = next.duration();
        next.start_time = previous_end;
        next.end_time = previous_end.saturating_add(duration);
        previous_end = next.end_time;
    }
}

/// Fields that differ from their load-time values, in tier order.
///
/// A single invalid tier empties the whole plan.
pub fn plan_updates(initial: &[TierValues], current: &[TierValues], now_ms: u64) -> Vec<FieldUpdate> {
    if let Err(err) = validate_tiers(initial, current, now_ms) {
        debug!(%err, "edited tiers are not valid, nothing to update");
        return Vec::new();
    }

    initial
        .iter()
        .filter_map(|tier| current.get(tier.index).map(|edited| (tier, edited)))
        .flat_map(|(tier, edited)| {
            let end_time = (tier.updatable && edited.end_time != tier.end_time).then(|| FieldUpdate {
                key: FieldKey::EndTime,
                new_value: FieldValue::Timestamp(edited.end_time),
                tier: tier.index,
            });
            let min_cap = (edited.min_cap != tier.min_cap).then(|| FieldUpdate {
                key: FieldKey::MinCap,
                new_value: FieldValue::Amount(edited.min_cap),
                tier: tier.index,
            });
            end_time.into_iter().chain(min_cap)
        })
        .collect()
}

/// Translate planned field updates into contract calls for `family`.
pub fn to_calls(
    family: CrowdsaleFamily,
    updates: &[FieldUpdate],
    current: &[TierValues],
) -> Result<Vec<CrowdsaleCall>, TransactionError> {
    updates
        .iter()
        .map(|update| match (family, update.key, update.new_value) {
            (CrowdsaleFamily::MintedCapped, FieldKey::EndTime, FieldValue::Timestamp(end)) => {
                let start = current.get(update.tier).map_or(0, |tier| tier.start_time);
                Ok(CrowdsaleCall::UpdateTierDuration {
                    tier: update.tier,
                    duration: end.saturating_sub(start),
                })
            }
            (CrowdsaleFamily::MintedCapped, FieldKey::MinCap, FieldValue::Amount(min_cap)) => {
                Ok(CrowdsaleCall::UpdateTierMinimum {
                    tier: update.tier,
                    minimum: min_cap.raw(),
                })
            }
            (CrowdsaleFamily::DutchAuction, FieldKey::MinCap, FieldValue::Amount(min_cap)) => {
                Ok(CrowdsaleCall::UpdateGlobalMinContribution {
                    minimum: min_cap.raw(),
                })
            }
            _ => Err(TransactionError::Unsupported {
                family: family.name(),
                call: match update.key {
                    FieldKey::EndTime => "endTime",
                    FieldKey::MinCap => "minCap",
                },
            }),
        })
        .collect()
}
