use crate::{error::TierValidationError, types::tier::TierValues};

pub fn validate_tier(
    initial: &TierValues,
    current: &TierValues,
    previous: Option<&TierValues>,
    now_ms: u64,
) -> Result<(), TierValidationError> {
    let tier = current.index;

    if current.end_time <= current.start_time {
        return Err(TierValidationError::EndNotAfterStart { tier });
    }

    if let Some(previous) = previous {
        if current.start_time < previous.end_time {
            return Err(TierValidationError::OverlapsPrevious { tier });
        }
    }

    if current.end_time != initial.end_time && current.end_time.saturating_mul(1000) <= now_ms {
        return Err(TierValidationError::EndInPast { tier });
    }

    Ok(())
}

/// Validate every tier captured at load time against its edited values.
pub fn validate_tiers(
    initial: &[TierValues],
    current: &[TierValues],
    now_ms: u64,
) -> Result<(), TierValidationError> {
    for tier in initial {
        let edited = current
            .get(tier.index)
            .ok_or(TierValidationError::Missing { tier: tier.index })?;
        let previous = tier
            .index
            .checked_sub(1)
            .and_then(|index| current.get(index));

        validate_tier(tier, edited, previous, now_ms)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::amount::TokenAmount;

    fn tier(index: usize, start_time: u64, end_time: u64) -> TierValues {
        TierValues {
            index,
            start_time,
            end_time,
            min_cap: TokenAmount::zero(18),
            updatable: true,
            is_whitelisted: false,
        }
    }

    #[test]
    fn accepts_contiguous_tiers() {
        let tiers = vec![tier(0, 100, 200), tier(1, 200, 300)];
        assert_eq!(validate_tiers(&tiers, &tiers, 150_000), Ok(()));
    }

    #[test]
    fn rejects_inverted_window() {
        let initial = tier(0, 100, 200);
        let current = tier(0, 100, 90);
        assert_eq!(
            validate_tier(&initial, &current, None, 0),
            Err(TierValidationError::EndNotAfterStart { tier: 0 })
        );
    }

    #[test]
    fn rejects_overlap_with_previous_tier() {
        let initial = vec![tier(0, 100, 200), tier(1, 200, 300)];
        let current = vec![tier(0, 100, 250), tier(1, 200, 300)];
        assert_eq!(
            validate_tiers(&initial, &current, 0),
            Err(TierValidationError::OverlapsPrevious { tier: 1 })
        );
    }

    #[test]
    fn edited_end_time_must_be_in_the_future() {
        let initial = tier(0, 100, 500);
        let current = tier(0, 100, 200);
        assert_eq!(
            validate_tier(&initial, &current, None, 300_000),
            Err(TierValidationError::EndInPast { tier: 0 })
        );

        // An untouched end time in the past is not an edit.
        assert_eq!(validate_tier(&initial, &initial, None, 600_000), Ok(()));
    }
}
