use alloy::{
    contract,
    primitives::B256,
    providers::PendingTransactionError,
    transports::TransportError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("no chain connectivity: {0}")]
    Connectivity(#[from] TransportError),

    #[error("network {chain_id} is not supported")]
    InvalidNetwork { chain_id: u64 },

    #[error("{0:?} is neither an exec id nor a proxy address")]
    InvalidPointer(String),

    #[error("{0} must be configured for exec id crowdsales")]
    MissingRegistryAddress(&'static str),
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("contract call failed: {0}")]
    Contract(#[from] contract::Error),

    #[error("accessor {0} is not part of the contract interface")]
    MissingAccessor(String),

    #[error("failed to parse contract interface: {0}")]
    Abi(String),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("{accessor} returned no value for {field}")]
    MissingField {
        accessor: &'static str,
        field: &'static str,
    },

    #[error("{accessor} returned an out of range value for {field}")]
    InvalidField {
        accessor: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("{0:?} is not a decimal amount")]
    Malformed(String),

    #[error("amount can not be negative")]
    Negative,

    #[error("amount has more than {decimals} decimals")]
    NotRepresentable { decimals: u8 },

    #[error("amount does not fit in 256 bits with {decimals} decimals")]
    Overflow { decimals: u8 },
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("failed to send transaction: {0}")]
    Transport(#[from] TransportError),

    #[error("pending transaction error: {0}")]
    Pending(#[from] PendingTransactionError),

    #[error("transaction reverted: {tx_hash:?}")]
    Reverted { tx_hash: B256 },

    #[error("{family} crowdsales have no method for {call}")]
    Unsupported {
        family: &'static str,
        call: &'static str,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("current account is not the crowdsale owner")]
    NotOwner,

    #[error("crowdsale is already finalized")]
    AlreadyFinalized,

    #[error("crowdsale can not be finalized yet")]
    CannotFinalize,

    #[error("nothing to save")]
    NothingToSave,

    #[error("crowdsale has ended")]
    SaleEnded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierValidationError {
    #[error("tier {tier} ends before it starts")]
    EndNotAfterStart { tier: usize },

    #[error("tier {tier} starts before the previous tier ends")]
    OverlapsPrevious { tier: usize },

    #[error("tier {tier} end time is in the past")]
    EndInPast { tier: usize },

    #[error("tier {tier} has no edited values")]
    Missing { tier: usize },
}
