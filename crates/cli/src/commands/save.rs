use std::sync::Arc;

use alloy::{providers::ProviderBuilder, signers::local::PrivateKeySigner};
use crowdsale_core::{FieldValue, SaveOutcome, check_network, plan_updates};
use eyre::Result;

use super::{manage_client, now_ms};
use crate::{
    config::{EditsConfig, ManageConfig},
    presenter::{TerminalPresenter, confirm},
};

/// Apply `edits` to the loaded tiers and push the differences.
///
/// Returns `None` when the operator declines.
pub async fn save(
    config: &ManageConfig,
    rpc_url: &str,
    signer: PrivateKeySigner,
    edits: &EditsConfig,
    assume_yes: bool,
) -> Result<Option<SaveOutcome>> {
    let account = signer.address();
    let provider = ProviderBuilder::new().wallet(signer).connect(rpc_url).await?;
    check_network(&provider, &config.network.chain_ids).await?;

    let presenter = Arc::new(TerminalPresenter::new(assume_yes));
    let client = manage_client(provider, config, account, presenter)?;

    let now = now_ms()?;
    let session = client.load(account, now).await?;
    let current = edits.apply(&session.initial_tiers)?;

    let planned = plan_updates(&session.initial_tiers, &current, now);
    for update in &planned {
        let value = match update.new_value {
            FieldValue::Timestamp(end_time) => end_time.to_string(),
            FieldValue::Amount(min_cap) => min_cap.to_string(),
        };
        eprintln!("tier {}: {:?} -> {value}", update.tier, update.key);
    }

    if !planned.is_empty()
        && !confirm(format!("Send {} transaction(s)?", planned.len()), assume_yes).await
    {
        return Ok(None);
    }

    Ok(Some(client.save(&session, &current, now).await?))
}
