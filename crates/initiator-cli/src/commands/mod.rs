//! One module per subcommand.

pub mod completions;
pub mod config;
pub mod create;
pub mod doctor;
pub mod k8s;
pub mod list;
pub mod version;
