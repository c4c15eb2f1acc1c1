use std::io;

use async_trait::async_trait;
use crowdsale_core::{Notice, Presenter};
use tracing::debug;

/// Ask a yes/no question on the terminal. `assume_yes` skips the prompt.
pub async fn confirm(question: String, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    let answer = tokio::task::spawn_blocking(move || {
        eprint!("{question} [y/N] ");
        let mut line = String::new();
        io::stdin().read_line(&mut line).map(|_| line)
    })
    .await;

    matches!(answer, Ok(Ok(line)) if matches!(line.trim(), "y" | "Y" | "yes"))
}

pub struct TerminalPresenter {
    assume_yes: bool,
}

impl TerminalPresenter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn confirm_finalize(&self) -> bool {
        confirm(
            "Finalizing is irreversible: no more purchases or edits will be possible. Continue?"
                .to_owned(),
            self.assume_yes,
        )
        .await
    }

    fn loading(&self, active: bool) {
        debug!(active, "loading");
    }

    fn notify(&self, notice: Notice) {
        let message = match notice {
            Notice::NotOwner => "The current account is not the owner of this crowdsale",
            Notice::Finalized => "Crowdsale finalized",
            Notice::FinalizeFailed => "Finalizing the crowdsale failed",
            Notice::Updated => "Crowdsale updated",
            Notice::UpdateFailed => "Updating the crowdsale failed",
        };
        eprintln!("{message}");
    }
}
