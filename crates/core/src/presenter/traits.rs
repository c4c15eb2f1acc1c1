use async_trait::async_trait;

/// User-facing outcome of a pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NotOwner,
    Finalized,
    FinalizeFailed,
    Updated,
    UpdateFailed,
}

/// Presentation callbacks driven by the manage pipeline.
#[allow(unused_variables)]
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Last chance to back out of the one-way finalize action.
    async fn confirm_finalize(&self) -> bool {
        true
    }

    fn loading(&self, active: bool) {}

    fn notify(&self, notice: Notice) {}
}
