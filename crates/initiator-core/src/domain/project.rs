//! Project identity: validated name and the per-invocation descriptor.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::flavor::ProjectFlavor;

/// Check a project name against `[A-Za-z0-9_-]+`.
///
/// The same rule guards Kubernetes application names, since both end up as
/// directory names and resource names.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty".into()));
    }

    if let Some(c) = name.chars().find(|c| c.is_whitespace()) {
        return Err(invalid(format!("whitespace is not allowed ({c:?})")));
    }

    if name.contains(['/', '\\']) {
        return Err(invalid("path separators are not allowed".into()));
    }

    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(format!(
            "only letters, digits, '-' and '_' are allowed (found '{c}')"
        )));
    }

    Ok(())
}

/// A project name that passed [`validate_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        validate_name(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the builder needs to know about one project.
///
/// Built once per invocation, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: ProjectName,
    target_dir: PathBuf,
    flavor: ProjectFlavor,
    init_vcs: bool,
}

impl ProjectDescriptor {
    /// `target_dir` must be absolute; callers resolve relative input first.
    pub fn new(
        name: ProjectName,
        target_dir: impl Into<PathBuf>,
        flavor: ProjectFlavor,
        init_vcs: bool,
    ) -> Result<Self, DomainError> {
        let target_dir = target_dir.into();

        if target_dir.as_os_str().is_empty() {
            return Err(DomainError::InvalidDescriptor(
                "target directory cannot be empty".into(),
            ));
        }
        if !target_dir.is_absolute() {
            return Err(DomainError::InvalidDescriptor(format!(
                "target directory must be absolute: {}",
                target_dir.display()
            )));
        }

        Ok(Self {
            name,
            target_dir,
            flavor,
            init_vcs,
        })
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn flavor(&self) -> ProjectFlavor {
        self.flavor
    }

    pub fn init_vcs(&self) -> bool {
        self.init_vcs
    }
}

/// What happens when `git init` or the ignore file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsFailurePolicy {
    /// Report a warning and keep the project.
    #[default]
    Advisory,
    /// Treat it like any other failed step.
    Fatal,
}

impl fmt::Display for VcsFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Advisory => "advisory",
            Self::Fatal => "fatal",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_dash_underscore() {
        for name in ["app", "my-api", "web_app", "Service2", "_x", "a-b_c-9"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_name(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn rejects_separators_and_whitespace() {
        for name in ["a/b", "a\\b", "my app", "tab\there", "../up"] {
            assert!(
                matches!(validate_name(name), Err(DomainError::InvalidName { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_other_punctuation() {
        for name in ["app.js", "café", "a@b", "."] {
            assert!(validate_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn descriptor_requires_absolute_dir() {
        let name = ProjectName::parse("demo").unwrap();

        let err = ProjectDescriptor::new(name.clone(), "", ProjectFlavor::GoPlain, false);
        assert!(matches!(err, Err(DomainError::InvalidDescriptor(_))));

        let err = ProjectDescriptor::new(name, "relative/demo", ProjectFlavor::GoPlain, false);
        assert!(matches!(err, Err(DomainError::InvalidDescriptor(_))));
    }

    #[cfg(unix)]
    #[test]
    fn descriptor_keeps_its_fields() {
        let name = ProjectName::parse("demo").unwrap();
        let d = ProjectDescriptor::new(name, "/tmp/demo", ProjectFlavor::NodeExpress, true)
            .unwrap();

        assert_eq!(d.name().as_str(), "demo");
        assert_eq!(d.target_dir(), Path::new("/tmp/demo"));
        assert_eq!(d.flavor(), ProjectFlavor::NodeExpress);
        assert!(d.init_vcs());
    }

    #[test]
    fn vcs_policy_defaults_to_advisory() {
        assert_eq!(VcsFailurePolicy::default(), VcsFailurePolicy::Advisory);
    }
}
