//! Identifiers for built-in text templates and the context that fills them.

use std::collections::BTreeMap;
use std::fmt;

/// A built-in template body, served by a `TemplateStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    GoPlainMain,
    GoPlainReadme,
    GoWebMain,
    GoWebReadme,
    GoWebEnv,
    NodeTsConfig,
    NodeTsIndex,
    NodeExpressIndex,
    GitIgnore,
    K8sDeployment,
    K8sService,
    K8sIngress,
}

impl TemplateId {
    pub const ALL: [TemplateId; 12] = [
        Self::GoPlainMain,
        Self::GoPlainReadme,
        Self::GoWebMain,
        Self::GoWebReadme,
        Self::GoWebEnv,
        Self::NodeTsConfig,
        Self::NodeTsIndex,
        Self::NodeExpressIndex,
        Self::GitIgnore,
        Self::K8sDeployment,
        Self::K8sService,
        Self::K8sIngress,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoPlainMain => "go/plain/main.go",
            Self::GoPlainReadme => "go/plain/README.md",
            Self::GoWebMain => "go/web/main.go",
            Self::GoWebReadme => "go/web/README.md",
            Self::GoWebEnv => "go/web/.env",
            Self::NodeTsConfig => "node/tsconfig.json",
            Self::NodeTsIndex => "node/index.ts",
            Self::NodeExpressIndex => "node/express/index.ts",
            Self::GitIgnore => "vcs/.gitignore",
            Self::K8sDeployment => "k8s/deployment.yaml",
            Self::K8sService => "k8s/service.yaml",
            Self::K8sIngress => "k8s/ingress.yaml",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{{key}}` substitution context.
///
/// Unknown placeholders are left untouched so literal braces in template
/// bodies survive rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = after[..end].trim();
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
