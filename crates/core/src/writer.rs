use alloy::{
    network::TransactionBuilder,
    primitives::{Address, B256, Bytes, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use async_trait::async_trait;
use crowdsale_abi::{IDutchAuctionManager, IMintedCappedManager};
use tracing::debug;

use crate::{
    environment::CrowdsaleTarget,
    error::TransactionError,
    types::{family::CrowdsaleFamily, update::CrowdsaleCall},
};

/// Percentage applied to the node's gas estimate.
pub const GAS_LIMIT_PERCENT: u64 = 110;

pub fn gas_limit(estimated: u64) -> u64 {
    estimated.saturating_mul(GAS_LIMIT_PERCENT) / 100
}

/// Submits owner transactions and waits for them to be mined.
#[async_trait]
pub trait ChainWriter: Send + Sync {
    async fn submit(&self, call: &CrowdsaleCall) -> Result<B256, TransactionError>;
}

/// ABI-encode `call` for the family's contract.
pub fn encode_call(family: CrowdsaleFamily, call: &CrowdsaleCall) -> Result<Bytes, TransactionError> {
    let unsupported = || TransactionError::Unsupported {
        family: family.name(),
        call: call.name(),
    };

    let encoded = match (family, call) {
        (CrowdsaleFamily::MintedCapped, CrowdsaleCall::Finalize) => {
            IMintedCappedManager::finalizeCrowdsaleAndTokenCall {}.abi_encode()
        }
        (CrowdsaleFamily::DutchAuction, CrowdsaleCall::Finalize) => {
            IDutchAuctionManager::finalizeCrowdsaleCall {}.abi_encode()
        }
        (CrowdsaleFamily::MintedCapped, CrowdsaleCall::UpdateTierDuration { tier, duration }) => {
            IMintedCappedManager::updateTierDurationCall {
                tier_index: U256::from(*tier),
                new_duration: U256::from(*duration),
            }
            .abi_encode()
        }
        (CrowdsaleFamily::MintedCapped, CrowdsaleCall::UpdateTierMinimum { tier, minimum }) => {
            IMintedCappedManager::updateTierMinimumCall {
                tier_index: U256::from(*tier),
                new_minimum: *minimum,
            }
            .abi_encode()
        }
        (CrowdsaleFamily::DutchAuction, CrowdsaleCall::UpdateGlobalMinContribution { minimum }) => {
            IDutchAuctionManager::updateGlobalMinContributionCall {
                new_min_contribution: *minimum,
            }
            .abi_encode()
        }
        _ => return Err(unsupported()),
    };

    Ok(encoded.into())
}

pub struct RpcWriter<P>
where
    P: Provider + Clone,
{
    provider: P,
    target: CrowdsaleTarget,
    family: CrowdsaleFamily,
    from: Address,
}

impl<P> RpcWriter<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P, target: CrowdsaleTarget, family: CrowdsaleFamily, from: Address) -> Self {
        Self {
            provider,
            target,
            family,
            from,
        }
    }
}

#[async_trait]
impl<P> ChainWriter for RpcWriter<P>
where
    P: Provider + Clone,
{
    async fn submit(&self, call: &CrowdsaleCall) -> Result<B256, TransactionError> {
        let calldata = self.target.wrap_calldata(encode_call(self.family, call)?);
        let request = TransactionRequest::default()
            .with_from(self.from)
            .with_to(self.target.write_address())
            .with_input(calldata);

        let estimated = self.provider.estimate_gas(request.clone()).await?;
        let limit = gas_limit(estimated);
        debug!(call = call.name(), estimated, limit, "sending transaction");

        let receipt = self
            .provider
            .send_transaction(request.with_gas_limit(limit))
            .await?
            .get_receipt()
            .await?;

        if !receipt.status() {
            return Err(TransactionError::Reverted {
                tx_hash: receipt.transaction_hash,
            });
        }

        Ok(receipt.transaction_hash)
    }
}
