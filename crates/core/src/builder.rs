//! Assembles a [`CrowdsaleSnapshot`] from a sequence of accessor reads.
//!
//! Every read goes through the normalizer with the table for that accessor,
//! so proxies with unnamed outputs and registry contracts with named outputs
//! produce the same records. Reads are strictly sequential in tier and
//! destination order, and the first failing read aborts the whole build.

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use tracing::{debug, trace};

use crate::{
    error::{ReadError, SnapshotError},
    layout::{
        CROWDSALE_STATUS, DESTINATION_INFO, FamilyLayout, FieldIndex, RESERVED_DESTINATIONS,
        SALE_TIMES, TIER_DATA, TIER_DATES, TIER_LIST, TOKEN_DECIMALS, TOKEN_INFO, TOKEN_NAME,
        TOKEN_SYMBOL, TOKEN_TOTAL_SUPPLY, TOKENS_SOLD, WHITELIST, accessor::*,
    },
    normalize::{NormalizedRecord, normalize},
    reader::ContractReader,
    types::{
        amount::TokenAmount,
        family::CrowdsaleFamily,
        snapshot::{
            AllocationDimension, CrowdsaleSnapshot, ReservedAllocation, SaleWindow, TierRecord,
            TokenInfo, WhitelistEntry,
        },
    },
};

/// Label of the synthetic tier a Dutch auction is presented as.
pub const AUCTION_TIER_NAME: &str = "Tier 1";

pub(crate) async fn read<R>(
    reader: &R,
    accessor: &str,
    args: &[DynSolValue],
    table: &[FieldIndex],
) -> Result<NormalizedRecord, ReadError>
where
    R: ContractReader + ?Sized,
{
    let raw = reader.read(accessor, args).await?;
    Ok(normalize(&raw, table))
}

fn index_arg(index: usize) -> DynSolValue {
    DynSolValue::Uint(U256::from(index), 256)
}

fn seconds(record: &NormalizedRecord, field: &str) -> u64 {
    record.uint(field).unwrap_or_default().saturating_to::<u64>()
}

fn amount(record: &NormalizedRecord, field: &str) -> U256 {
    record.uint(field).unwrap_or_default()
}

/// Number of tiers to read. Dutch auctions always have exactly one.
pub async fn fetch_tier_count<R>(reader: &R, family: CrowdsaleFamily) -> Result<usize, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    match family {
        CrowdsaleFamily::DutchAuction => Ok(1),
        CrowdsaleFamily::MintedCapped => {
            let list = read(reader, GET_CROWDSALE_TIER_LIST, &[], TIER_LIST).await?;
            list.list_len("crowdsale_tiers").ok_or(SnapshotError::InvalidField {
                accessor: GET_CROWDSALE_TIER_LIST,
                field: "crowdsale_tiers",
            })
        }
    }
}

pub async fn build_snapshot<R>(
    reader: &R,
    family: CrowdsaleFamily,
    tier_count: usize,
) -> Result<CrowdsaleSnapshot, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    debug!(family = family.name(), tier_count, "building crowdsale snapshot");

    let layout = family.layout();
    let info = read(reader, GET_CROWDSALE_INFO, &[], layout.crowdsale_info).await?;
    let token = fetch_token_info(reader).await?;
    let window = fetch_sale_window(reader).await?;

    let (tiers, reserved_allocations) = match family {
        CrowdsaleFamily::MintedCapped => {
            let tiers = fetch_tiers(reader, layout, tier_count).await?;
            let reserved = fetch_reserved_allocations(reader, &token).await?;
            (tiers, reserved)
        }
        CrowdsaleFamily::DutchAuction => {
            let tier = fetch_auction_tier(reader, layout, &info, window).await?;
            (vec![tier], Vec::new())
        }
    };

    debug!(
        tiers = tiers.len(),
        reserved = reserved_allocations.len(),
        "crowdsale snapshot built"
    );

    Ok(CrowdsaleSnapshot {
        family,
        wei_raised: amount(&info, "wei_raised"),
        team_wallet: info.address("team_wallet").unwrap_or_default(),
        is_initialized: info.boolean("is_initialized").unwrap_or_default(),
        is_finalized: info.boolean("is_finalized").unwrap_or_default(),
        minimum_contribution: info.uint("minimum_contribution"),
        burn_excess: info.boolean("burn_excess"),
        window,
        token,
        tiers,
        reserved_allocations,
    })
}

/// Token metadata, from `getTokenInfo` or else the four ERC-20 accessors.
pub async fn fetch_token_info<R>(reader: &R) -> Result<TokenInfo, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    let (source, record) = if reader.has_accessor(GET_TOKEN_INFO) {
        (GET_TOKEN_INFO, read(reader, GET_TOKEN_INFO, &[], TOKEN_INFO).await?)
    } else {
        debug!("no combined token accessor, reading token metadata individually");
        let mut record = NormalizedRecord::default();
        for (accessor, table) in [
            (NAME, TOKEN_NAME),
            (SYMBOL, TOKEN_SYMBOL),
            (DECIMALS, TOKEN_DECIMALS),
            (TOTAL_SUPPLY, TOKEN_TOTAL_SUPPLY),
        ] {
            record = record.merge(read(reader, accessor, &[], table).await?);
        }
        (DECIMALS, record)
    };

    let decimals = record
        .uint("token_decimals")
        .ok_or(SnapshotError::MissingField {
            accessor: source,
            field: "token_decimals",
        })?;
    let decimals = u8::try_from(decimals).map_err(|_| SnapshotError::InvalidField {
        accessor: source,
        field: "token_decimals",
    })?;

    Ok(TokenInfo {
        name: record.text("token_name").unwrap_or_default(),
        symbol: record.text("token_symbol").unwrap_or_default(),
        decimals,
        total_supply: amount(&record, "total_supply"),
    })
}

pub async fn fetch_sale_window<R>(reader: &R) -> Result<SaleWindow, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    let times = read(reader, GET_CROWDSALE_START_AND_END_TIMES, &[], SALE_TIMES).await?;
    Ok(SaleWindow {
        start_time: seconds(&times, "start_time"),
        end_time: seconds(&times, "end_time"),
    })
}

async fn fetch_tiers<R>(
    reader: &R,
    layout: &FamilyLayout,
    tier_count: usize,
) -> Result<Vec<TierRecord>, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    let mut tiers = Vec::with_capacity(tier_count);

    for index in 0..tier_count {
        let args = [index_arg(index)];
        let data = read(reader, GET_CROWDSALE_TIER, &args, TIER_DATA).await?;
        let dates = read(reader, GET_TIER_START_AND_END_DATES, &args, TIER_DATES).await?;
        let is_whitelisted = data.boolean("is_whitelisted").unwrap_or_default();

        let whitelist = if is_whitelisted {
            let list = read(reader, GET_TIER_WHITELIST, &args, WHITELIST).await?;
            let addresses = list.addresses("whitelist").unwrap_or_default();
            trace!(tier = index, ?addresses, "tier whitelist");
            fetch_whitelist(reader, addresses, Some(index), layout.whitelist_status).await?
        } else {
            Vec::new()
        };

        tiers.push(TierRecord {
            name: data.text("tier_name").unwrap_or_default(),
            sell_cap: amount(&data, "tier_sell_cap"),
            price: amount(&data, "tier_price"),
            min_contribution: amount(&data, "tier_min"),
            duration: seconds(&data, "tier_duration"),
            duration_is_modifiable: data.boolean("duration_is_modifiable").unwrap_or_default(),
            is_whitelisted,
            start_time: seconds(&dates, "tier_start"),
            end_time: seconds(&dates, "tier_end"),
            whitelist,
            tokens_sold: None,
        });
    }

    Ok(tiers)
}

/// Per-address status for `addresses`; entries with nothing left to buy are dropped.
async fn fetch_whitelist<R>(
    reader: &R,
    addresses: Vec<Address>,
    tier: Option<usize>,
    status_table: &[FieldIndex],
) -> Result<Vec<WhitelistEntry>, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    let mut entries = Vec::new();

    for address in addresses {
        let mut args: Vec<DynSolValue> = tier.map(index_arg).into_iter().collect();
        args.push(DynSolValue::Address(address));

        let status = read(reader, GET_WHITELIST_STATUS, &args, status_table).await?;
        let max_tokens_remaining = amount(&status, "max_tokens_remaining");
        if max_tokens_remaining.is_zero() {
            trace!(%address, "skipping exhausted whitelist entry");
            continue;
        }

        entries.push(WhitelistEntry {
            address,
            min_contribution: amount(&status, "minimum_purchase_amt"),
            max_tokens_remaining,
        });
    }

    Ok(entries)
}

async fn fetch_reserved_allocations<R>(
    reader: &R,
    token: &TokenInfo,
) -> Result<Vec<ReservedAllocation>, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    let list = read(
        reader,
        GET_RESERVED_TOKEN_DESTINATION_LIST,
        &[],
        RESERVED_DESTINATIONS,
    )
    .await?;
    let destinations = list.addresses("reserved_destinations").unwrap_or_default();

    let mut allocations = Vec::new();
    for address in destinations {
        let info = read(
            reader,
            GET_RESERVED_DESTINATION_INFO,
            &[DynSolValue::Address(address)],
            DESTINATION_INFO,
        )
        .await?;

        let num_tokens = amount(&info, "num_tokens");
        if !num_tokens.is_zero() {
            allocations.push(ReservedAllocation {
                address,
                dimension: AllocationDimension::Tokens,
                value: TokenAmount::new(num_tokens, token.decimals),
            });
        }

        let num_percent = amount(&info, "num_percent");
        if !num_percent.is_zero() {
            let percent_decimals = u8::try_from(amount(&info, "percent_decimals")).map_err(|_| {
                SnapshotError::InvalidField {
                    accessor: GET_RESERVED_DESTINATION_INFO,
                    field: "percent_decimals",
                }
            })?;
            allocations.push(ReservedAllocation {
                address,
                dimension: AllocationDimension::Percentage,
                value: TokenAmount::new(num_percent, percent_decimals),
            });
        }
    }

    Ok(allocations)
}

/// The auction's global status folded into a single tier.
async fn fetch_auction_tier<R>(
    reader: &R,
    layout: &FamilyLayout,
    info: &NormalizedRecord,
    window: SaleWindow,
) -> Result<TierRecord, SnapshotError>
where
    R: ContractReader + ?Sized,
{
    let status = read(reader, GET_CROWDSALE_STATUS, &[], CROWDSALE_STATUS).await?;
    let list = read(reader, GET_CROWDSALE_WHITELIST, &[], WHITELIST).await?;
    let sold = read(reader, GET_TOKENS_SOLD, &[], TOKENS_SOLD).await?;

    let tokens_sold = amount(&sold, "tokens_sold");
    let is_whitelisted = status.boolean("is_whitelisted").unwrap_or_default();

    let whitelist = if is_whitelisted {
        let addresses = list.addresses("whitelist").unwrap_or_default();
        fetch_whitelist(reader, addresses, None, layout.whitelist_status).await?
    } else {
        Vec::new()
    };

    Ok(TierRecord {
        name: AUCTION_TIER_NAME.to_owned(),
        sell_cap: amount(&status, "tokens_remaining").saturating_add(tokens_sold),
        price: amount(&status, "current_rate"),
        min_contribution: amount(info, "minimum_contribution"),
        duration: seconds(&status, "sale_duration"),
        duration_is_modifiable: false,
        is_whitelisted,
        start_time: window.start_time,
        end_time: window.end_time,
        whitelist,
        tokens_sold: Some(tokens_sold),
    })
}
