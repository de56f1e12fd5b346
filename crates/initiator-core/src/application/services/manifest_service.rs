//! Kubernetes manifest rendering.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::ports::{Filesystem, TemplateStore};
use crate::domain::{ManifestKind, ManifestSpec};
use crate::error::InitiatorResult;

/// Directory created under the output directory.
pub const K8S_DIR: &str = "k8s";

pub struct ManifestService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateStore>,
}

impl ManifestService {
    pub fn new(filesystem: Box<dyn Filesystem>, templates: Box<dyn TemplateStore>) -> Self {
        Self {
            filesystem,
            templates,
        }
    }

    /// Fill the template for `kind` and write it into `k8s_dir`.
    pub fn render(
        &self,
        spec: &ManifestSpec,
        kind: ManifestKind,
        k8s_dir: &Path,
    ) -> InitiatorResult<PathBuf> {
        let body = self.templates.template(kind.template())?;
        let path = k8s_dir.join(kind.file_name());
        self.filesystem
            .write_file(&path, &spec.render_context().render(&body))?;
        info!(%kind, path = %path.display(), "Manifest written");
        Ok(path)
    }

    /// Write the deployment, plus service and ingress when requested.
    ///
    /// Existing files with the same names are overwritten.
    #[instrument(skip_all, fields(app = spec.app_name(), output = %output_dir.display()))]
    pub fn generate(&self, spec: &ManifestSpec, output_dir: &Path) -> InitiatorResult<Vec<PathBuf>> {
        let k8s_dir = output_dir.join(K8S_DIR);
        self.filesystem.create_dir_all(&k8s_dir)?;

        spec.kinds()
            .into_iter()
            .map(|kind| self.render(spec, kind, &k8s_dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::TemplateId;

    fn templates() -> MockTemplateStore {
        let mut t = MockTemplateStore::new();
        t.expect_template()
            .returning(|id: TemplateId| Ok(format!("{id}: {{{{app_name}}}}/{{{{namespace}}}}")));
        t
    }

    #[test]
    fn deployment_only_by_default() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/out/k8s"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, body| {
                p == Path::new("/out/k8s/deployment.yaml")
                    && body == "k8s/deployment.yaml: shop/default"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ManifestService::new(Box::new(fs), Box::new(templates()));
        let spec = ManifestSpec::builder("shop").build().unwrap();

        let written = service.generate(&spec, Path::new("/out")).unwrap();
        assert_eq!(written, vec![PathBuf::from("/out/k8s/deployment.yaml")]);
    }

    #[test]
    fn all_three_when_flagged() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(3).returning(|_, _| Ok(()));

        let service = ManifestService::new(Box::new(fs), Box::new(templates()));
        let spec = ManifestSpec::builder("shop")
            .service(true)
            .ingress(true)
            .build()
            .unwrap();

        let written = service.generate(&spec, Path::new("/out")).unwrap();
        let names: Vec<_> = written
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, ["deployment.yaml", "service.yaml", "ingress.yaml"]);
    }
}
