//! External program adapters.

mod locator;
mod system;

pub use locator::PathLocator;
pub use system::SystemProcessRunner;
