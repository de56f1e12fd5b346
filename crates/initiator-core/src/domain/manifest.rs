//! Kubernetes manifest parameters.

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::project::validate_name;
use crate::domain::template::{RenderContext, TemplateId};

pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_CONTAINER_PORT: u16 = 8080;

/// One renderable manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    Deployment,
    Service,
    Ingress,
}

impl ManifestKind {
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Deployment => "deployment.yaml",
            Self::Service => "service.yaml",
            Self::Ingress => "ingress.yaml",
        }
    }

    pub const fn template(&self) -> TemplateId {
        match self {
            Self::Deployment => TemplateId::K8sDeployment,
            Self::Service => TemplateId::K8sService,
            Self::Ingress => TemplateId::K8sIngress,
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deployment => "Deployment",
            Self::Service => "Service",
            Self::Ingress => "Ingress",
        })
    }
}

/// Values substituted into every manifest template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSpec {
    app_name: String,
    project_label: String,
    container_name: String,
    namespace: String,
    container_port: u16,
    include_service: bool,
    include_ingress: bool,
}

impl ManifestSpec {
    pub fn builder(app_name: impl Into<String>) -> ManifestSpecBuilder {
        ManifestSpecBuilder {
            app_name: app_name.into(),
            project_label: None,
            container_name: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            container_port: DEFAULT_CONTAINER_PORT,
            include_service: false,
            include_ingress: false,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn project_label(&self) -> &str {
        &self.project_label
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn container_port(&self) -> u16 {
        self.container_port
    }

    pub fn include_service(&self) -> bool {
        self.include_service
    }

    pub fn include_ingress(&self) -> bool {
        self.include_ingress
    }

    /// Manifests to render, deployment first.
    pub fn kinds(&self) -> Vec<ManifestKind> {
        let mut kinds = vec![ManifestKind::Deployment];
        if self.include_service {
            kinds.push(ManifestKind::Service);
        }
        if self.include_ingress {
            kinds.push(ManifestKind::Ingress);
        }
        kinds
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with("app_name", &self.app_name)
            .with("project_label", &self.project_label)
            .with("container_name", &self.container_name)
            .with("namespace", &self.namespace)
            .with("port", self.container_port.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ManifestSpecBuilder {
    app_name: String,
    project_label: Option<String>,
    container_name: Option<String>,
    namespace: String,
    container_port: u16,
    include_service: bool,
    include_ingress: bool,
}

impl ManifestSpecBuilder {
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn container_port(mut self, port: u16) -> Self {
        self.container_port = port;
        self
    }

    /// Image and container name; defaults to the app name.
    pub fn container_name(mut self, name: Option<String>) -> Self {
        self.container_name = name;
        self
    }

    /// Value of the `app` label; defaults to the app name.
    pub fn project_label(mut self, label: Option<String>) -> Self {
        self.project_label = label;
        self
    }

    pub fn service(mut self, include: bool) -> Self {
        self.include_service = include;
        self
    }

    pub fn ingress(mut self, include: bool) -> Self {
        self.include_ingress = include;
        self
    }

    /// Check the values that become resource names and YAML scalars.
    ///
    /// The app name follows the project-name rule, the namespace is lowercase
    /// letters, digits or '-', and the port is non-zero. The rendered YAML is
    /// not checked against any Kubernetes schema.
    pub fn build(self) -> Result<ManifestSpec, DomainError> {
        validate_name(&self.app_name)
            .map_err(|e| DomainError::InvalidManifest(format!("app name: {e}")))?;

        if self.namespace.is_empty()
            || !self
                .namespace
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::InvalidManifest(format!(
                "namespace '{}' must be lowercase letters, digits or '-'",
                self.namespace
            )));
        }

        if self.container_port == 0 {
            return Err(DomainError::InvalidManifest(
                "container port must be between 1 and 65535".into(),
            ));
        }

        let container_name = non_empty_or(self.container_name, &self.app_name);
        let project_label = non_empty_or(self.project_label, &self.app_name);

        Ok(ManifestSpec {
            app_name: self.app_name,
            project_label,
            container_name,
            namespace: self.namespace,
            container_port: self.container_port,
            include_service: self.include_service,
            include_ingress: self.include_ingress,
        })
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
