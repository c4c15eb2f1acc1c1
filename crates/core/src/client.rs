use std::sync::Arc;

use alloy::primitives::{Address, B256};
use futures::{TryStreamExt, stream};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::{
    builder::{build_snapshot, fetch_sale_window, fetch_tier_count, read},
    error::{ActionError, Error, TransactionError},
    layout::{ADMIN, CROWDSALE_FULL, accessor::*},
    planner::{plan_updates, to_calls},
    presenter::{Notice, Presenter},
    reader::ContractReader,
    readiness::{
        ReadinessInputs, ReadinessState, SaleCapacity, StatusProbe, can_finalize, is_owner,
    },
    types::{
        family::CrowdsaleFamily,
        snapshot::CrowdsaleSnapshot,
        tier::TierValues,
        update::{CrowdsaleCall, FieldUpdate},
    },
    writer::ChainWriter,
};

/// Everything loaded for one crowdsale view. Replaced wholesale on reload.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub account: Address,
    pub snapshot: CrowdsaleSnapshot,
    pub initial_tiers: Vec<TierValues>,
    pub probe: StatusProbe,
    pub readiness: ReadinessState,
}

impl Session {
    /// Record a mined finalize on top of the status read just before it.
    fn mark_finalized(&mut self, probe: StatusProbe, now_ms: u64) {
        self.probe = StatusProbe {
            is_finalized: true,
            ..probe
        };
        self.readiness = ReadinessState::derive(&ReadinessInputs {
            probe: &self.probe,
            initial_tiers: &self.initial_tiers,
            pending_updates: &[],
            loading: false,
            now_ms,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeOutcome {
    Finalized { tx_hash: B256 },
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub updates: Vec<FieldUpdate>,
    pub tx_hashes: Vec<B256>,
}

pub struct CrowdsaleClient<R, W>
where
    R: ContractReader,
    W: ChainWriter,
{
    reader: R,
    writer: W,
    family: CrowdsaleFamily,
    presenter: Arc<dyn Presenter>,
}

impl<R, W> CrowdsaleClient<R, W>
where
    R: ContractReader,
    W: ChainWriter,
{
    pub fn new(reader: R, writer: W, family: CrowdsaleFamily, presenter: Arc<dyn Presenter>) -> Self {
        Self {
            reader,
            writer,
            family,
            presenter,
        }
    }

    pub fn family(&self) -> CrowdsaleFamily {
        self.family
    }

    pub async fn fetch_admin(&self) -> Result<Address, Error> {
        let record = read(&self.reader, GET_ADMIN, &[], ADMIN).await?;
        Ok(record.address("admin").unwrap_or_default())
    }

    pub async fn check_owner(&self, account: Address) -> Result<bool, Error> {
        let admin = self.fetch_admin().await?;
        debug!(%admin, %account, "checking crowdsale ownership");
        Ok(is_owner(admin, account))
    }

    /// Live sold-out check. Failures degrade to [`SaleCapacity::Unknown`].
    pub async fn query_capacity(&self) -> SaleCapacity {
        match read(&self.reader, IS_CROWDSALE_FULL, &[], CROWDSALE_FULL).await {
            Ok(record) => match record.boolean("is_crowdsale_full") {
                Some(true) => SaleCapacity::Full,
                Some(false) => SaleCapacity::Available,
                None => {
                    warn!("isCrowdsaleFull returned no flag");
                    SaleCapacity::Unknown
                }
            },
            Err(err) => {
                error!(%err, "sold-out check failed, finalize stays disabled");
                SaleCapacity::Unknown
            }
        }
    }

    /// Re-read the values that can change between snapshot refreshes.
    pub async fn probe_status(&self, account: Address) -> Result<StatusProbe, Error> {
        let info = read(
            &self.reader,
            GET_CROWDSALE_INFO,
            &[],
            self.family.layout().crowdsale_info,
        )
        .await?;
        let window = fetch_sale_window(&self.reader).await?;
        let capacity = self.query_capacity().await;
        let owner_is_current_user = self.check_owner(account).await?;

        Ok(StatusProbe {
            window,
            is_finalized: info.boolean("is_finalized").unwrap_or_default(),
            capacity,
            owner_is_current_user,
        })
    }

    pub async fn load(&self, account: Address, now_ms: u64) -> Result<Session, Error> {
        self.presenter.loading(true);
        let result = self.build_session(account, now_ms).await;
        self.presenter.loading(false);

        let session = result.inspect_err(|err| error!(%err, "failed to load crowdsale"))?;
        if !session.probe.owner_is_current_user {
            self.presenter.notify(Notice::NotOwner);
        }

        Ok(session)
    }

    async fn build_session(&self, account: Address, now_ms: u64) -> Result<Session, Error> {
        let owner_is_current_user = self.check_owner(account).await?;
        let tier_count = fetch_tier_count(&self.reader, self.family).await?;
        let snapshot = build_snapshot(&self.reader, self.family, tier_count).await?;
        let initial_tiers = snapshot.tier_values();
        let capacity = self.query_capacity().await;

        let probe = StatusProbe {
            window: snapshot.window,
            is_finalized: snapshot.is_finalized,
            capacity,
            owner_is_current_user,
        };
        let readiness = ReadinessState::derive(&ReadinessInputs {
            probe: &probe,
            initial_tiers: &initial_tiers,
            pending_updates: &[],
            loading: false,
            now_ms,
        });

        Ok(Session {
            account,
            snapshot,
            initial_tiers,
            probe,
            readiness,
        })
    }

    /// Readiness of `session` with `current` as the edited tier values.
    pub fn readiness(&self, session: &Session, current: &[TierValues], now_ms: u64) -> ReadinessState {
        let pending = plan_updates(&session.initial_tiers, current, now_ms);
        ReadinessState::derive(&ReadinessInputs {
            probe: &session.probe,
            initial_tiers: &session.initial_tiers,
            pending_updates: &pending,
            loading: false,
            now_ms,
        })
    }

    /// On success `session` is updated to the finalized state in place.
    pub async fn finalize(
        &self,
        session: &mut Session,
        now_ms: u64,
    ) -> Result<FinalizeOutcome, Error> {
        let probe = self.probe_status(session.account).await?;

        if !probe.owner_is_current_user {
            self.presenter.notify(Notice::NotOwner);
            return Err(ActionError::NotOwner.into());
        }

        if probe.is_finalized {
            return Err(ActionError::AlreadyFinalized.into());
        }

        let has_ended = probe.window.has_ended(now_ms);
        if !can_finalize(probe.is_finalized, has_ended, probe.capacity) {
            return Err(ActionError::CannotFinalize.into());
        }

        if !self.presenter.confirm_finalize().await {
            debug!("finalize declined");
            return Ok(FinalizeOutcome::Declined);
        }

        self.presenter.loading(true);
        let result = self.writer.submit(&CrowdsaleCall::Finalize).await;
        self.presenter.loading(false);

        match result {
            Ok(tx_hash) => {
                info!(%tx_hash, "crowdsale finalized");
                session.mark_finalized(probe, now_ms);
                self.presenter.notify(Notice::Finalized);
                Ok(FinalizeOutcome::Finalized { tx_hash })
            }
            Err(err) => {
                error!(%err, "finalize failed");
                self.presenter.notify(Notice::FinalizeFailed);
                Err(err.into())
            }
        }
    }

    /// Push every edited field to the chain, one transaction at a time.
    pub async fn save(
        &self,
        session: &Session,
        current: &[TierValues],
        now_ms: u64,
    ) -> Result<SaveOutcome, Error> {
        let state = self.readiness(session, current, now_ms);
        if !state.can_save {
            let reason = if !state.owner_is_current_user {
                ActionError::NotOwner
            } else if state.has_ended {
                ActionError::SaleEnded
            } else {
                ActionError::NothingToSave
            };
            return Err(reason.into());
        }

        let probe = self.probe_status(session.account).await?;
        if !probe.owner_is_current_user {
            self.presenter.notify(Notice::NotOwner);
            return Err(ActionError::NotOwner.into());
        }
        if probe.window.has_ended(now_ms) {
            return Err(ActionError::SaleEnded.into());
        }

        let updates = plan_updates(&session.initial_tiers, current, now_ms);
        if updates.is_empty() {
            return Err(ActionError::NothingToSave.into());
        }

        self.presenter.loading(true);
        let result = self.submit_updates(&updates, current).await;
        self.presenter.loading(false);

        match result {
            Ok(tx_hashes) => {
                info!(count = tx_hashes.len(), "crowdsale updated");
                self.presenter.notify(Notice::Updated);
                Ok(SaveOutcome { updates, tx_hashes })
            }
            Err(err) => {
                error!(%err, "update failed");
                self.presenter.notify(Notice::UpdateFailed);
                Err(err.into())
            }
        }
    }

    async fn submit_updates(
        &self,
        updates: &[FieldUpdate],
        current: &[TierValues],
    ) -> Result<Vec<B256>, TransactionError> {
        let calls = to_calls(self.family, updates, current)?;

        // Each transaction is mined before the next one is sent.
        stream::iter(calls.iter().map(Ok::<_, TransactionError>))
            .try_fold(Vec::with_capacity(calls.len()), |mut tx_hashes, call| async move {
                let tx_hash = self.writer.submit(call).await?;
                debug!(call = call.name(), %tx_hash, "update applied");
                tx_hashes.push(tx_hash);
                Ok(tx_hashes)
            })
            .await
    }
}
