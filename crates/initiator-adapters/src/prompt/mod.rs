//! Prompt adapters that work without a terminal.

mod line;
mod unattended;

pub use line::LinePrompter;
pub use unattended::Unattended;
