//! Line-oriented prompts over any reader and writer.
//!
//! Used when stdin is not a terminal (pipes, CI) and in tests, where the
//! reader is a `Cursor` with scripted answers.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use initiator_core::{
    application::{
        ApplicationError,
        ports::{ChoiceOption, Chooser, Confirmer},
    },
    error::InitiatorResult,
};

pub struct LinePrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Read answers from stdin; questions go to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn say(&self, text: &str) -> InitiatorResult<()> {
        let mut out = self.output.borrow_mut();
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(prompt_error)
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&self) -> InitiatorResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .map_err(prompt_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Chooser for LinePrompter<R, W> {
    fn choose(&self, prompt: &str, options: &[ChoiceOption]) -> InitiatorResult<usize> {
        if options.is_empty() {
            return Err(ApplicationError::NoChoice {
                prompt: prompt.to_string(),
            }
            .into());
        }

        let mut menu = format!("{prompt}:\n");
        for (i, option) in options.iter().enumerate() {
            menu.push_str(&format!(
                "  {}) {} - {}\n",
                i + 1,
                option.label,
                option.description
            ));
        }
        self.say(&menu)?;

        loop {
            self.say(&format!("Enter choice [1-{}]: ", options.len()))?;
            let Some(answer) = self.read_line()? else {
                return Err(ApplicationError::PromptFailed {
                    reason: "input closed before a choice was made".into(),
                }
                .into());
            };

            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.say(&format!(
                    "Please enter a number between 1 and {}.\n",
                    options.len()
                ))?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Confirmer for LinePrompter<R, W> {
    fn confirm(&self, prompt: &str, default: bool) -> InitiatorResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };

        loop {
            self.say(&format!("{prompt} {hint}: "))?;
            let Some(answer) = self.read_line()? else {
                return Ok(default);
            };

            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer 'y' or 'n'.\n")?,
            }
        }
    }
}

fn prompt_error(e: io::Error) -> initiator_core::error::InitiatorError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}
