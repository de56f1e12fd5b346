use initiator_core::{
    application::{
        ApplicationError,
        ports::{ChoiceOption, Chooser, Confirmer},
    },
    error::InitiatorResult,
};
use tracing::debug;

/// Answers every question with its default; refuses to pick from a list.
///
/// Backs `--yes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unattended;

impl Confirmer for Unattended {
    fn confirm(&self, prompt: &str, default: bool) -> InitiatorResult<bool> {
        debug!(prompt, default, "Answering with default");
        Ok(default)
    }
}

impl Chooser for Unattended {
    fn choose(&self, prompt: &str, _options: &[ChoiceOption]) -> InitiatorResult<usize> {
        Err(ApplicationError::NoChoice {
            prompt: prompt.to_string(),
        }
        .into())
    }
}
