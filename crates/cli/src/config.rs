use std::{
    env, fs,
    path::{Path, PathBuf},
};

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use crowdsale_core::{
    AmountError, CrowdsaleFamily, CrowdsalePointer, CrowdsaleTarget, EnvironmentError,
    KNOWN_NETWORKS, RegistryAddresses, TierValues, TokenAmount, cascade_end_time,
};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "manage.toml";
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

#[derive(Debug, Deserialize, PartialEq)]
pub struct ManageConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    pub crowdsale: CrowdsaleConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct NetworkConfig {
    pub rpc_url: Option<String>,
    #[serde(default = "default_chain_ids")]
    pub chain_ids: Vec<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            chain_ids: default_chain_ids(),
        }
    }
}

fn default_chain_ids() -> Vec<u64> {
    KNOWN_NETWORKS.to_vec()
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct CrowdsaleConfig {
    pub family: CrowdsaleFamily,
    /// Exec id or proxy address.
    pub pointer: String,
    pub idx: Option<Address>,
    pub abstract_storage: Option<Address>,
    pub registry_exec: Option<Address>,
}

impl CrowdsaleConfig {
    pub fn target(&self) -> Result<CrowdsaleTarget, EnvironmentError> {
        let pointer = CrowdsalePointer::parse(&self.pointer)?;
        CrowdsaleTarget::resolve(
            pointer,
            &RegistryAddresses {
                idx: self.idx,
                abstract_storage: self.abstract_storage,
                registry_exec: self.registry_exec,
            },
        )
    }
}

/// Tier edits applied on top of the values loaded from chain.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct EditsConfig {
    #[serde(default, rename = "tier")]
    pub tiers: Vec<TierEdit>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct TierEdit {
    pub index: usize,
    pub end_time: Option<u64>,
    /// Display units, parsed with the token's decimals.
    pub min_cap: Option<String>,
}

impl EditsConfig {
    /// Edited copy of `initial`. End time edits cascade to later tiers.
    pub fn apply(&self, initial: &[TierValues]) -> Result<Vec<TierValues>, ConfigError> {
        let mut current = initial.to_vec();
        let mut edits: Vec<&TierEdit> = self.tiers.iter().collect();
        edits.sort_by_key(|edit| edit.index);

        for edit in edits {
            if let Some(end_time) = edit.end_time {
                cascade_end_time(&mut current, edit.index, end_time);
            }
            if let (Some(min_cap), Some(tier)) = (&edit.min_cap, current.get_mut(edit.index)) {
                tier.min_cap = TokenAmount::parse(min_cap, tier.min_cap.decimals()).map_err(
                    |source| ConfigError::InvalidMinCap {
                        tier: edit.index,
                        source,
                    },
                )?;
            }
        }

        Ok(current)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("missing rpc url: pass --rpc-url, set CROWDSALE_RPC_URL or add network.rpc_url")]
    MissingRpcUrl,
    #[error("missing signer: set {PRIVATE_KEY_ENV}")]
    MissingPrivateKey,
    #[error("{PRIVATE_KEY_ENV} is not a valid private key")]
    InvalidPrivateKey,
    #[error("invalid min_cap for tier {tier}: {source}")]
    InvalidMinCap { tier: usize, source: AmountError },
}

fn load_toml<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ManageConfig, ConfigError> {
    load_toml(path.as_ref())
}

pub fn load_edits(path: impl AsRef<Path>) -> Result<EditsConfig, ConfigError> {
    load_toml(path.as_ref())
}

pub fn resolve_rpc_url(flag: Option<String>, config: &ManageConfig) -> Result<String, ConfigError> {
    flag.or_else(|| config.network.rpc_url.clone())
        .ok_or(ConfigError::MissingRpcUrl)
}

pub fn signer_from_env() -> Result<PrivateKeySigner, ConfigError> {
    let key = env::var(PRIVATE_KEY_ENV).map_err(|_| ConfigError::MissingPrivateKey)?;
    key.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPrivateKey)
}
