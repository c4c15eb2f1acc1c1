pub mod finalize;
pub mod save;
pub mod status;

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use alloy::{primitives::Address, providers::Provider};
use crowdsale_core::{CrowdsaleClient, Presenter, RpcReader, RpcWriter};
use eyre::Result;

use crate::config::ManageConfig;

pub type RpcClient<P> = CrowdsaleClient<RpcReader<P>, RpcWriter<P>>;

/// Client for the configured crowdsale; transactions are sent from `account`.
pub fn manage_client<P>(
    provider: P,
    config: &ManageConfig,
    account: Address,
    presenter: Arc<dyn Presenter>,
) -> Result<RpcClient<P>>
where
    P: Provider + Clone,
{
    let family = config.crowdsale.family;
    let target = config.crowdsale.target()?;
    let reader = RpcReader::new(provider.clone(), &target, family)?;
    let writer = RpcWriter::new(provider, target, family, account);
    Ok(CrowdsaleClient::new(reader, writer, family, presenter))
}

pub fn now_ms() -> Result<u64> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(u64::try_from(elapsed.as_millis())?)
}
