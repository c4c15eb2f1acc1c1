use std::sync::Arc;

use alloy::{providers::ProviderBuilder, signers::local::PrivateKeySigner};
use crowdsale_core::{FinalizeOutcome, check_network};
use eyre::Result;

use super::{manage_client, now_ms};
use crate::{config::ManageConfig, presenter::TerminalPresenter};

pub async fn finalize(
    config: &ManageConfig,
    rpc_url: &str,
    signer: PrivateKeySigner,
    assume_yes: bool,
) -> Result<FinalizeOutcome> {
    let account = signer.address();
    let provider = ProviderBuilder::new().wallet(signer).connect(rpc_url).await?;
    check_network(&provider, &config.network.chain_ids).await?;

    let presenter = Arc::new(TerminalPresenter::new(assume_yes));
    let client = manage_client(provider, config, account, presenter)?;

    let now = now_ms()?;
    let mut session = client.load(account, now).await?;
    Ok(client.finalize(&mut session, now).await?)
}
