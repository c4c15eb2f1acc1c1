use crate::presenter::traits::Presenter;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPresenter;

#[async_trait]
impl Presenter for NoOpPresenter {}
