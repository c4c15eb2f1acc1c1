#![allow(dead_code)]

use std::sync::Mutex;

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, B256, FixedBytes, U256, address},
};
use async_trait::async_trait;
use crowdsale_core::{
    ChainWriter, ContractReader, CrowdsaleCall, Notice, Presenter, RawResult, ReadError,
    TransactionError,
};

pub const OWNER: Address = address!("0x00000000000000000000000000000000000000a1");
pub const STRANGER: Address = address!("0x00000000000000000000000000000000000000b2");
pub const WALLET: Address = address!("0x00000000000000000000000000000000000000c3");
pub const BUYER: Address = address!("0x00000000000000000000000000000000000000d4");
pub const EXHAUSTED_BUYER: Address = address!("0x00000000000000000000000000000000000000d5");
pub const DESTINATION: Address = address!("0x00000000000000000000000000000000000000e6");

pub fn uint(value: u64) -> DynSolValue {
    DynSolValue::Uint(U256::from(value), 256)
}

pub fn word(text: &str) -> DynSolValue {
    let mut bytes = [0u8; 32];
    bytes[..text.len()].copy_from_slice(text.as_bytes());
    DynSolValue::FixedBytes(FixedBytes::from(bytes), 32)
}

pub fn addresses(items: &[Address]) -> DynSolValue {
    DynSolValue::Array(items.iter().copied().map(DynSolValue::Address).collect())
}

/// Canned accessor responses keyed by accessor name and call arguments.
#[derive(Default)]
pub struct MockReader {
    responses: Vec<(String, Vec<DynSolValue>, RawResult)>,
    calls: Mutex<Vec<String>>,
}

impl MockReader {
    pub fn respond(mut self, accessor: &str, args: Vec<DynSolValue>, result: RawResult) -> Self {
        self.responses.push((accessor.to_owned(), args, result));
        self
    }

    pub fn respond_positional(self, accessor: &str, values: Vec<DynSolValue>) -> Self {
        self.respond(accessor, Vec::new(), RawResult::positional(values))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContractReader for MockReader {
    fn has_accessor(&self, name: &str) -> bool {
        self.responses.iter().any(|(accessor, _, _)| accessor == name)
    }

    async fn read(&self, accessor: &str, args: &[DynSolValue]) -> Result<RawResult, ReadError> {
        self.calls.lock().unwrap().push(accessor.to_owned());
        self.responses
            .iter()
            .find(|(name, expected, _)| name == accessor && expected.as_slice() == args)
            .map(|(_, _, result)| result.clone())
            .ok_or_else(|| ReadError::MissingAccessor(accessor.to_owned()))
    }
}

/// Records submitted calls; optionally reverts the n-th one.
#[derive(Default)]
pub struct RecordingWriter {
    submitted: Mutex<Vec<CrowdsaleCall>>,
    revert_at: Option<usize>,
}

impl RecordingWriter {
    pub fn reverting_at(index: usize) -> Self {
        Self {
            submitted: Mutex::default(),
            revert_at: Some(index),
        }
    }

    pub fn submitted(&self) -> Vec<CrowdsaleCall> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainWriter for RecordingWriter {
    async fn submit(&self, call: &CrowdsaleCall) -> Result<B256, TransactionError> {
        let mut submitted = self.submitted.lock().unwrap();
        let index = submitted.len();
        submitted.push(call.clone());

        let tx_hash = B256::with_last_byte(index as u8 + 1);
        if self.revert_at == Some(index) {
            return Err(TransactionError::Reverted { tx_hash });
        }
        Ok(tx_hash)
    }
}

#[async_trait]
impl<'a> ChainWriter for &'a RecordingWriter {
    async fn submit(&self, call: &CrowdsaleCall) -> Result<B256, TransactionError> {
        (**self).submit(call).await
    }
}

pub struct RecordingPresenter {
    confirm: bool,
    notices: Mutex<Vec<Notice>>,
    loading: Mutex<Vec<bool>>,
}

impl RecordingPresenter {
    pub fn confirming(confirm: bool) -> Self {
        Self {
            confirm,
            notices: Mutex::default(),
            loading: Mutex::default(),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn loading_changes(&self) -> Vec<bool> {
        self.loading.lock().unwrap().clone()
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn confirm_finalize(&self) -> bool {
        self.confirm
    }

    fn loading(&self, active: bool) {
        self.loading.lock().unwrap().push(active);
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Two-tier minted-capped sale: tier 0 whitelisted, 3 token decimals.
///
/// Sale runs from 1000 to 3000; tier 0 ends at 2000.
pub fn minted_capped_reader(is_finalized: bool) -> MockReader {
    MockReader::default()
        .respond_positional("getAdmin", vec![DynSolValue::Address(OWNER)])
        .respond_positional(
            "getCrowdsaleTierList",
            vec![DynSolValue::Array(vec![word("Presale"), word("Main")])],
        )
        .respond_positional(
            "getCrowdsaleInfo",
            vec![
                uint(5_000),
                DynSolValue::Address(WALLET),
                DynSolValue::Bool(true),
                DynSolValue::Bool(is_finalized),
            ],
        )
        .respond_positional(
            "getTokenInfo",
            vec![
                DynSolValue::String("Sale Token".into()),
                DynSolValue::String("SALE".into()),
                uint(3),
                uint(1_000_000_000),
            ],
        )
        .respond_positional("getCrowdsaleStartAndEndTimes", vec![uint(1_000), uint(3_000)])
        .respond(
            "getCrowdsaleTier",
            vec![uint(0)],
            RawResult::positional(vec![
                word("Presale"),
                uint(100_000),
                uint(10),
                uint(2_000),
                uint(1_000),
                DynSolValue::Bool(true),
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
            RawResult::positional(vec![uint(2), addresses(&[BUYER, EXHAUSTED_BUYER])]),
        )
        .respond(
            "getWhitelistStatus",
            vec![uint(0), DynSolValue::Address(BUYER)],
            RawResult::from_outputs(
                vec![uint(20), uint(500)],
                ["minimum_purchase_amt", "max_tokens_remaining"],
            ),
        )
        .respond(
            "getWhitelistStatus",
            vec![uint(0), DynSolValue::Address(EXHAUSTED_BUYER)],
            RawResult::from_outputs(
                vec![uint(20), uint(0)],
                ["minimum_purchase_amt", "max_tokens_remaining"],
            ),
        )
        .respond(
            "getCrowdsaleTier",
            vec![uint(1)],
            RawResult::positional(vec![
                word("Main"),
                uint(200_000),
                uint(20),
                uint(0),
                uint(1_000),
                DynSolValue::Bool(true),
                DynSolValue::Bool(false),
            ]),
        )
        .respond(
            "getTierStartAndEndDates",
            vec![uint(1)],
            RawResult::positional(vec![uint(2_000), uint(3_000)]),
        )
        .respond_positional(
            "getReservedTokenDestinationList",
            vec![uint(1), addresses(&[DESTINATION])],
        )
        .respond(
            "getReservedDestinationInfo",
            vec![DynSolValue::Address(DESTINATION)],
            RawResult::positional(vec![uint(0), uint(1_000_000), uint(15), uint(1)]),
        )
        .respond_positional("isCrowdsaleFull", vec![DynSolValue::Bool(false), uint(0)])
}

/// Whitelisted Dutch auction behind a proxy without `getTokenInfo`.
pub fn dutch_auction_reader() -> MockReader {
    MockReader::default()
        .respond_positional("getAdmin", vec![DynSolValue::Address(OWNER)])
        .respond_positional(
            "getCrowdsaleInfo",
            vec![
                uint(9_000),
                DynSolValue::Address(WALLET),
                uint(1_000),
                DynSolValue::Bool(true),
                DynSolValue::Bool(false),
                DynSolValue::Bool(true),
            ],
        )
        .respond_positional("name", vec![DynSolValue::String("Auction Token".into())])
        .respond_positional("symbol", vec![DynSolValue::String("AUC".into())])
        .respond_positional("decimals", vec![uint(18)])
        .respond_positional("totalSupply", vec![uint(7_000_000)])
        .respond_positional(
            "getCrowdsaleStatus",
            vec![
                uint(1_000),
                uint(100),
                uint(550),
                uint(2_000),
                uint(600),
                uint(4_000),
                DynSolValue::Bool(true),
            ],
        )
        .respond_positional("getCrowdsaleStartAndEndTimes", vec![uint(1_000), uint(3_000)])
        .respond_positional("getCrowdsaleWhitelist", vec![uint(1), addresses(&[BUYER])])
        .respond(
            "getWhitelistStatus",
            vec![DynSolValue::Address(BUYER)],
            RawResult::positional(vec![uint(10), uint(500)]),
        )
        .respond_positional("getTokensSold", vec![uint(6_000)])
        .respond_positional("isCrowdsaleFull", vec![DynSolValue::Bool(true), uint(10_000)])
}
