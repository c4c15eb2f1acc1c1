use std::sync::Arc;

use alloy::{primitives::Address, providers::ProviderBuilder};
use crowdsale_core::{NoOpPresenter, Session, check_network};
use eyre::Result;
use serde::Serialize;

use super::{manage_client, now_ms};
use crate::config::ManageConfig;

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub chain_id: u64,
    #[serde(flatten)]
    pub session: Session,
}

pub async fn status(config: &ManageConfig, rpc_url: &str, account: Address) -> Result<StatusOutput> {
    let provider = ProviderBuilder::new().connect(rpc_url).await?;
    let chain_id = check_network(&provider, &config.network.chain_ids).await?;

    let client = manage_client(provider, config, account, Arc::new(NoOpPresenter))?;
    let session = client.load(account, now_ms()?).await?;

    Ok(StatusOutput { chain_id, session })
}
