//! Step progress on the terminal.
//!
//! One spinner per running step; finished steps leave a `✓` or `✗` line.
//! Everything goes to stderr so stdout stays clean for piping.

use std::cell::RefCell;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use initiator_core::application::ports::ProgressReporter;
use owo_colors::OwoColorize;

use crate::cli::OutputFormat;
use crate::output::OutputManager;

const TICK: Duration = Duration::from_millis(80);

pub struct SpinnerProgress {
    animate: bool,
    quiet: bool,
    color: bool,
    term: Term,
    current: RefCell<Option<ProgressBar>>,
}

impl SpinnerProgress {
    /// Animate only for human output on a real terminal.
    pub fn for_output(output: &OutputManager) -> Self {
        let term = Term::stderr();
        Self {
            animate: output.format() == OutputFormat::Human
                && term.is_term()
                && !output.is_quiet(),
            quiet: output.is_quiet(),
            color: output.supports_color(),
            term,
            current: RefCell::new(None),
        }
    }

    fn spinner(&self, message: String) -> ProgressBar {
        if !self.animate {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message);
        bar.enable_steady_tick(TICK);
        bar
    }

    fn finish_current(&self) {
        if let Some(bar) = self.current.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }

    fn line(&self, text: &str) {
        // write errors on stderr are ignored
        let _ = self.term.write_line(text);
    }
}

impl ProgressReporter for SpinnerProgress {
    fn step_started(&self, index: usize, total: usize, label: &str) {
        self.finish_current();
        let bar = self.spinner(format!("[{index}/{total}] {label}..."));
        *self.current.borrow_mut() = Some(bar);
    }

    fn step_succeeded(&self, message: &str) {
        self.finish_current();
        if self.quiet {
            return;
        }
        if self.color {
            self.line(&format!("{} {}", "\u{2713}".green().bold(), message));
        } else {
            self.line(&format!("\u{2713} {message}"));
        }
    }

    fn step_failed(&self, label: &str, error: &str) {
        self.finish_current();
        if self.color {
            self.line(&format!("{} {}: {}", "\u{2717}".red().bold(), label.red(), error));
        } else {
            self.line(&format!("\u{2717} {label}: {error}"));
        }
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.finish_current();
    }
}
