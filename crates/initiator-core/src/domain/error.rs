use thiserror::Error;

use crate::domain::flavor::FLAVOR_REGISTRY;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Every variant is raised before any filesystem or process side effect.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid project descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Unknown project flavor: {0}")]
    UnknownFlavor(String),

    #[error("Invalid manifest configuration: {0}")]
    InvalidManifest(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Use only letters, digits, '-' and '_'".into(),
                "Examples: my-api, web_app, service2".into(),
            ],
            Self::UnknownFlavor(_) => {
                let tags: Vec<&str> = FLAVOR_REGISTRY.iter().map(|d| d.flavor.as_str()).collect();
                vec![
                    format!("Available flavors: {}", tags.join(", ")),
                    "Run 'initiator list' for descriptions".into(),
                ]
            }
            Self::InvalidManifest(msg) => vec![
                format!("Details: {}", msg),
                "Run 'initiator k8s --help' for accepted values".into(),
            ],
            Self::InvalidDescriptor(_) => vec!["Check the --dir argument".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFlavor(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}
