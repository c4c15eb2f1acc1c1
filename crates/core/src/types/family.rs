use serde::{Deserialize, Serialize};

use crate::layout::{DUTCH_AUCTION, FamilyLayout, MINTED_CAPPED};

/// Contract family of a deployed crowdsale.
///
/// Fixed once the target contract is identified; it selects the accessor set
/// and the positional layout of every tuple read from the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrowdsaleFamily {
    MintedCapped,
    DutchAuction,
}

impl CrowdsaleFamily {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MintedCapped => "minted-capped",
            Self::DutchAuction => "dutch-auction",
        }
    }

    pub fn layout(&self) -> &'static FamilyLayout {
        match self {
            Self::MintedCapped => &MINTED_CAPPED,
            Self::DutchAuction => &DUTCH_AUCTION,
        }
    }

    /// Read signatures for a registry-hosted idx contract.
    pub fn idx_signatures(&self) -> &'static [&'static str] {
        match self {
            Self::MintedCapped => crowdsale_abi::minted_capped::IDX,
            Self::DutchAuction => crowdsale_abi::dutch_auction::IDX,
        }
    }

    /// Read signatures for a standalone proxy, token metadata accessors included.
    pub fn proxy_signatures(&self) -> Vec<&'static str> {
        let family = match self {
            Self::MintedCapped => crowdsale_abi::minted_capped::PROXY,
            Self::DutchAuction => crowdsale_abi::dutch_auction::PROXY,
        };
        family
            .iter()
            .chain(crowdsale_abi::erc20::TOKEN_METADATA)
            .copied()
            .collect()
    }
}
