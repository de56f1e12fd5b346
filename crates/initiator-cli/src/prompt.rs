//! Picking how to ask the user questions.
//!
//! - `--yes`: never ask ([`Unattended`])
//! - a terminal on stdin and stderr: `dialoguer` menus (`interactive` feature)
//! - anything else: numbered line prompts on stdin ([`LinePrompter`])

use std::io::IsTerminal as _;

use initiator_adapters::{LinePrompter, Unattended};
use initiator_core::application::ports::{Chooser, Confirmer};
use tracing::debug;

/// Both prompt ports behind one object.
pub trait Prompter {
    fn chooser(&self) -> &dyn Chooser;
    fn confirmer(&self) -> &dyn Confirmer;
}

impl<T: Chooser + Confirmer> Prompter for T {
    fn chooser(&self) -> &dyn Chooser {
        self
    }

    fn confirmer(&self) -> &dyn Confirmer {
        self
    }
}

pub fn select(assume_yes: bool) -> Box<dyn Prompter> {
    if assume_yes {
        debug!("Prompts disabled");
        return Box::new(Unattended);
    }

    let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();

    #[cfg(feature = "interactive")]
    {
        if interactive {
            debug!("Using terminal menus");
            return Box::new(menu::MenuPrompter);
        }
    }

    debug!(interactive, "Using line prompts");
    Box::new(LinePrompter::stdio())
}

#[cfg(feature = "interactive")]
mod menu {
    use dialoguer::{Confirm, Select};
    use initiator_core::{
        application::{
            ApplicationError,
            ports::{ChoiceOption, Chooser, Confirmer},
        },
        error::{InitiatorError, InitiatorResult},
    };

    /// Arrow-key menus and y/n questions on the terminal.
    pub struct MenuPrompter;

    impl Chooser for MenuPrompter {
        fn choose(&self, prompt: &str, options: &[ChoiceOption]) -> InitiatorResult<usize> {
            if options.is_empty() {
                return Err(ApplicationError::NoChoice {
                    prompt: prompt.to_string(),
                }
                .into());
            }

            let items: Vec<String> = options
                .iter()
                .map(|o| format!("{} - {}", o.label, o.description))
                .collect();

            Select::new()
                .with_prompt(prompt)
                .items(items.as_slice())
                .default(0)
                .interact()
                .map_err(prompt_error)
        }
    }

    impl Confirmer for MenuPrompter {
        fn confirm(&self, prompt: &str, default: bool) -> InitiatorResult<bool> {
            Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }
    }

    fn prompt_error(e: dialoguer::Error) -> InitiatorError {
        ApplicationError::PromptFailed {
            reason: e.to_string(),
        }
        .into()
    }
}
