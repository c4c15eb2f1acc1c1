use std::str::FromStr;

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, B256, Bytes},
    providers::Provider,
    sol_types::SolCall,
};
use crowdsale_abi::IRegistryExec;
use tracing::debug;

use crate::{error::EnvironmentError, types::family::CrowdsaleFamily};

/// Mainnet, Ropsten, Rinkeby, Kovan and the local dev chain.
pub const KNOWN_NETWORKS: &[u64] = &[1, 3, 4, 42, 12_648_430];

/// How the crowdsale was identified by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdsalePointer {
    ExecId(B256),
    Proxy(Address),
}

impl CrowdsalePointer {
    pub fn parse(text: &str) -> Result<Self, EnvironmentError> {
        let text = text.trim();
        let invalid = || EnvironmentError::InvalidPointer(text.to_owned());

        if !text.starts_with("0x") && !text.starts_with("0X") {
            return Err(invalid());
        }

        match text.len() {
            66 => B256::from_str(text)
                .map(Self::ExecId)
                .map_err(|_| invalid()),
            42 => Address::from_str(text)
                .map(Self::Proxy)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for CrowdsalePointer {
    type Err = EnvironmentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

pub fn validate_network(chain_id: u64, allowed: &[u64]) -> Result<(), EnvironmentError> {
    if allowed.contains(&chain_id) {
        Ok(())
    } else {
        Err(EnvironmentError::InvalidNetwork { chain_id })
    }
}

/// Ask the node for its chain id and check it against `allowed`.
pub async fn check_network<P>(provider: &P, allowed: &[u64]) -> Result<u64, EnvironmentError>
where
    P: Provider,
{
    let chain_id = provider.get_chain_id().await?;
    debug!(chain_id, "connected to network");
    validate_network(chain_id, allowed)?;
    Ok(chain_id)
}

/// Registry contracts needed to reach a crowdsale hosted behind an exec id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryAddresses {
    pub idx: Option<Address>,
    pub abstract_storage: Option<Address>,
    pub registry_exec: Option<Address>,
}

/// Resolved read and write addressing for one crowdsale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdsaleTarget {
    Registry {
        exec_id: B256,
        idx: Address,
        abstract_storage: Address,
        registry_exec: Address,
    },
    Proxy {
        address: Address,
    },
}

impl CrowdsaleTarget {
    pub fn resolve(
        pointer: CrowdsalePointer,
        registry: &RegistryAddresses,
    ) -> Result<Self, EnvironmentError> {
        match pointer {
            CrowdsalePointer::Proxy(address) => Ok(Self::Proxy { address }),
            CrowdsalePointer::ExecId(exec_id) => Ok(Self::Registry {
                exec_id,
                idx: registry
                    .idx
                    .ok_or(EnvironmentError::MissingRegistryAddress("idx"))?,
                abstract_storage: registry
                    .abstract_storage
                    .ok_or(EnvironmentError::MissingRegistryAddress("abstract_storage"))?,
                registry_exec: registry
                    .registry_exec
                    .ok_or(EnvironmentError::MissingRegistryAddress("registry_exec"))?,
            }),
        }
    }

    /// Contract answering the read-only accessors.
    pub fn read_address(&self) -> Address {
        match self {
            Self::Registry { idx, .. } => *idx,
            Self::Proxy { address } => *address,
        }
    }

    /// Arguments every accessor call starts with.
    pub fn read_prefix(&self) -> Vec<DynSolValue> {
        match self {
            Self::Registry {
                exec_id,
                abstract_storage,
                ..
            } => vec![
                DynSolValue::Address(*abstract_storage),
                DynSolValue::FixedBytes(*exec_id, 32),
            ],
            Self::Proxy { .. } => Vec::new(),
        }
    }

    pub fn read_signatures(&self, family: CrowdsaleFamily) -> Vec<&'static str> {
        match self {
            Self::Registry { .. } => family.idx_signatures().to_vec(),
            Self::Proxy { .. } => family.proxy_signatures(),
        }
    }

    /// Contract that receives owner transactions.
    pub fn write_address(&self) -> Address {
        match self {
            Self::Registry { registry_exec, .. } => *registry_exec,
            Self::Proxy { address } => *address,
        }
    }

    /// Route application calldata through the registry when needed.
    pub fn wrap_calldata(&self, app_calldata: Bytes) -> Bytes {
        match self {
            Self::Registry { exec_id, .. } => IRegistryExec::execCall {
                exec_id: *exec_id,
                app_calldata,
            }
            .abi_encode()
            .into(),
            Self::Proxy { .. } => app_calldata,
        }
    }
}
