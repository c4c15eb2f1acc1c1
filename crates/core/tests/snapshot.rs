mod common;

use alloy::{dyn_abi::DynSolValue, primitives::U256};
use common::*;
use crowdsale_core::{
    AllocationDimension, CrowdsaleFamily, Error, RawResult, ReadError, SnapshotError,
    build_snapshot, fetch_tier_count,
};

#[tokio::test]
async fn minted_capped_snapshot_keeps_only_buyers_with_allocation_left() {
    let reader = minted_capped_reader(false);

    let tier_count = fetch_tier_count(&reader, CrowdsaleFamily::MintedCapped)
        .await
        .unwrap();
    let snapshot = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, tier_count)
        .await
        .unwrap();

    assert_eq!(snapshot.tiers.len(), 2);
    assert_eq!(snapshot.tiers[0].name, "Presale");
    assert_eq!(snapshot.tiers[0].whitelist.len(), 1);
    assert_eq!(snapshot.tiers[0].whitelist[0].address, BUYER);
    assert_eq!(
        snapshot.tiers[0].whitelist[0].max_tokens_remaining,
        U256::from(500u64)
    );
    assert!(snapshot.tiers[1].whitelist.is_empty());
    assert_eq!(
        (snapshot.tiers[1].start_time, snapshot.tiers[1].end_time),
        (2_000, 3_000)
    );
    assert_eq!(snapshot.team_wallet, WALLET);
    assert_eq!(snapshot.minimum_contribution, None);
}

#[tokio::test]
async fn reserved_destination_contributes_both_dimensions() {
    let reader = minted_capped_reader(false);

    let snapshot = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, 2)
        .await
        .unwrap();

    let allocations = &snapshot.reserved_allocations;
    assert_eq!(allocations.len(), 2);
    assert_eq!(allocations[0].address, DESTINATION);
    assert_eq!(allocations[0].dimension, AllocationDimension::Tokens);
    assert_eq!(allocations[0].value.to_string(), "1000");
    assert_eq!(allocations[1].dimension, AllocationDimension::Percentage);
    assert_eq!(allocations[1].value.to_string(), "1.5");
}

fn raw(value: U256) -> DynSolValue {
    DynSolValue::Uint(value, 256)
}

/// One open tier and one reserved destination, with raw amounts as given.
fn single_tier_reader(decimals: u64, tier_min: U256, reserved_tokens: U256) -> MockReader {
    MockReader::default()
        .respond_positional(
            "getCrowdsaleInfo",
            vec![
                uint(0),
                DynSolValue::Address(WALLET),
                DynSolValue::Bool(true),
                DynSolValue::Bool(false),
            ],
        )
        .respond_positional(
            "getTokenInfo",
            vec![word("Token"), word("TKN"), uint(decimals), uint(0)],
        )
        .respond_positional("getCrowdsaleStartAndEndTimes", vec![uint(1_000), uint(2_000)])
        .respond(
            "getCrowdsaleTier",
            vec![uint(0)],
            RawResult::positional(vec![
                word("Only"),
                uint(1),
                uint(1),
                raw(tier_min),
                uint(1_000),
                DynSolValue::Bool(true),
                DynSolValue::Bool(false),
            ]),
        )
        .respond(
            "getTierStartAndEndDates",
            vec![uint(0)],
            RawResult::positional(vec![uint(1_000), uint(2_000)]),
        )
        .respond_positional(
            "getReservedTokenDestinationList",
            vec![uint(1), addresses(&[DESTINATION])],
        )
        .respond(
            "getReservedDestinationInfo",
            vec![DynSolValue::Address(DESTINATION)],
            RawResult::positional(vec![uint(0), raw(reserved_tokens), uint(0), uint(0)]),
        )
}

#[tokio::test]
async fn amounts_beyond_u128_keep_every_base_unit() {
    // 100 billion tokens at 18 decimals.
    let amount = U256::from(10u64).pow(U256::from(29u64));
    let reader = single_tier_reader(18, amount, amount);

    let snapshot = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, 1)
        .await
        .unwrap();

    let allocation = &snapshot.reserved_allocations[0];
    assert_eq!(allocation.dimension, AllocationDimension::Tokens);
    assert_eq!(allocation.value.raw(), amount);
    assert_eq!(allocation.value.to_string(), "100000000000");

    let tiers = snapshot.tier_values();
    assert_eq!(tiers[0].min_cap.raw(), amount);
    assert_eq!(tiers[0].min_cap.to_string(), "100000000000");
}

#[tokio::test]
async fn tokens_with_thirty_decimals_still_build() {
    let reader = single_tier_reader(30, U256::from(5u64), U256::from(5u64));

    let snapshot = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, 1)
        .await
        .unwrap();

    assert_eq!(snapshot.token.decimals, 30);
    assert_eq!(
        snapshot.reserved_allocations[0].value.to_string(),
        "0.000000000000000000000000000005"
    );
    assert_eq!(
        snapshot.tier_values()[0].min_cap.to_string(),
        "0.000000000000000000000000000005"
    );
}

#[tokio::test]
async fn tier_list_that_is_not_a_list_aborts_the_build() {
    let reader = MockReader::default().respond_positional("getCrowdsaleTierList", vec![uint(2)]);

    let err = fetch_tier_count(&reader, CrowdsaleFamily::MintedCapped)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SnapshotError::InvalidField {
            accessor: "getCrowdsaleTierList",
            field: "crowdsale_tiers"
        }
    ));
}

#[tokio::test]
async fn dutch_auction_assembles_token_info_from_metadata_accessors() {
    let reader = dutch_auction_reader();

    let snapshot = build_snapshot(&reader, CrowdsaleFamily::DutchAuction, 1)
        .await
        .unwrap();

    assert_eq!(snapshot.token.name, "Auction Token");
    assert_eq!(snapshot.token.symbol, "AUC");
    assert_eq!(snapshot.token.decimals, 18);
    assert_eq!(snapshot.token.total_supply, U256::from(7_000_000u64));
    assert!(!reader.calls().contains(&"getTokenInfo".to_owned()));
}

#[tokio::test]
async fn dutch_auction_is_a_single_synthetic_tier() {
    let reader = dutch_auction_reader();

    let snapshot = build_snapshot(&reader, CrowdsaleFamily::DutchAuction, 1)
        .await
        .unwrap();

    assert_eq!(snapshot.tiers.len(), 1);
    let tier = &snapshot.tiers[0];
    assert_eq!(tier.sell_cap, U256::from(10_000u64));
    assert_eq!(tier.price, U256::from(550u64));
    assert_eq!(tier.min_contribution, U256::from(1_000u64));
    assert_eq!(tier.tokens_sold, Some(U256::from(6_000u64)));
    assert!(!tier.duration_is_modifiable);
    assert_eq!((tier.start_time, tier.end_time), (1_000, 3_000));
    assert_eq!(tier.whitelist.len(), 1);
    assert_eq!(tier.whitelist[0].min_contribution, U256::from(10u64));
    assert_eq!(snapshot.burn_excess, Some(true));
    assert!(snapshot.reserved_allocations.is_empty());
}

#[tokio::test]
async fn failing_accessor_aborts_the_build() {
    let reader = minted_capped_reader(false).respond(
        "getCrowdsaleTier",
        vec![uint(2)],
        RawResult::positional(vec![word("Ghost")]),
    );

    // Tier 2 has no dates, so the build must fail instead of returning two tiers.
    let err = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, 3)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SnapshotError::Read(ReadError::MissingAccessor(ref name)) if name == "getTierStartAndEndDates"
    ));
}

#[tokio::test]
async fn unnamed_minted_capped_whitelist_status_reads_slot_zero_for_both_fields() {
    let reader = MockReader::default()
        .respond_positional(
            "getCrowdsaleInfo",
            vec![
                uint(0),
                DynSolValue::Address(WALLET),
                DynSolValue::Bool(true),
                DynSolValue::Bool(false),
            ],
        )
        .respond_positional("getTokenInfo", vec![word("Token"), word("TKN"), uint(0), uint(0)])
        .respond_positional("getCrowdsaleStartAndEndTimes", vec![uint(1_000), uint(2_000)])
        .respond(
            "getCrowdsaleTier",
            vec![uint(0)],
            RawResult::positional(vec![
                word("Only"),
                uint(1),
                uint(1),
                uint(0),
                uint(1_000),
                DynSolValue::Bool(false),
                DynSolValue::Bool(true),
            ]),
        )
        .respond(
            "getTierStartAndEndDates",
            vec![uint(0)],
            RawResult::positional(vec![uint(1_000), uint(2_000)]),
        )
        .respond(
            "getTierWhitelist",
            vec![uint(0)],
            RawResult::positional(vec![uint(1), addresses(&[STRANGER])]),
        )
        .respond(
            "getWhitelistStatus",
            vec![uint(0), DynSolValue::Address(STRANGER)],
            RawResult::positional(vec![uint(40), uint(900)]),
        )
        .respond_positional("getReservedTokenDestinationList", vec![uint(0), addresses(&[])]);

    let snapshot = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, 1)
        .await
        .unwrap();

    let entry = &snapshot.tiers[0].whitelist[0];
    assert_eq!(entry.min_contribution, U256::from(40u64));
    assert_eq!(entry.max_tokens_remaining, U256::from(40u64));
}

#[tokio::test]
async fn missing_decimals_is_reported() {
    let reader = MockReader::default()
        .respond_positional("getCrowdsaleInfo", vec![uint(0)])
        .respond_positional("getTokenInfo", vec![DynSolValue::String("Token".into())]);

    let err = build_snapshot(&reader, CrowdsaleFamily::MintedCapped, 0)
        .await
        .map_err(Error::from)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Snapshot(SnapshotError::MissingField {
            accessor: "getTokenInfo",
            field: "token_decimals"
        })
    ));
}
