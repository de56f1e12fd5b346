//! End-to-end runs of the core services over the real adapters, with a
//! scripted process runner standing in for go/npm/npx/git.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use initiator_adapters::{
    BuiltinTemplates, LinePrompter, LocalFilesystem, MemoryFilesystem, PathLocator,
    SystemProcessRunner, Unattended,
};
use initiator_core::{
    application::{
        ApplicationError, ManifestService, PrepareOutcome, ScaffoldService, ToolProbe,
        ports::{Filesystem, Invocation, ProcessOutput, ProcessRunner, SilentProgress},
    },
    domain::{
        ManifestSpec, ProjectDescriptor, ProjectFlavor, ProjectName, ToolInvocation, ToolSpec,
        VcsFailurePolicy, VersionFormat,
    },
    error::{InitiatorError, InitiatorResult},
};

const NPM_INIT_OUTPUT: &str = r#"{
  "name": "demo",
  "version": "1.0.0",
  "main": "index.js",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1"
  },
  "license": "ISC"
}
"#;

/// Succeeds for everything except `fail_on`, writing what the real tools
/// would leave behind where later steps depend on it.
#[derive(Clone)]
struct FakeRunner {
    fs: MemoryFilesystem,
    calls: Arc<Mutex<Vec<Invocation>>>,
    fail_on: Option<&'static str>,
}

impl FakeRunner {
    fn new(fs: &MemoryFilesystem) -> Self {
        Self {
            fs: fs.clone(),
            calls: Arc::default(),
            fail_on: None,
        }
    }

    fn failing_on(mut self, command_line: &'static str) -> Self {
        self.fail_on = Some(command_line);
        self
    }

    fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> InitiatorResult<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        let line = invocation.command_line();

        if self.fail_on.is_some_and(|f| line.starts_with(f)) {
            return Ok(ProcessOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr: format!("{line}: simulated failure"),
            });
        }

        let cwd = invocation.cwd.clone().unwrap_or_default();
        if line == "npm init -y" {
            self.fs
                .write_file(&cwd.join("package.json"), NPM_INIT_OUTPUT)?;
        }
        if invocation.program == "npx" {
            self.fs.write_file(&cwd.join(".gitignore"), "generated\n")?;
        }

        Ok(ProcessOutput {
            success: true,
            code: Some(0),
            ..Default::default()
        })
    }
}

fn root() -> PathBuf {
    std::env::temp_dir().join("initiator-pipeline").join("demo")
}

fn descriptor(flavor: ProjectFlavor, init_vcs: bool) -> ProjectDescriptor {
    ProjectDescriptor::new(ProjectName::parse("demo").unwrap(), root(), flavor, init_vcs)
        .unwrap()
}

fn service(fs: &MemoryFilesystem, runner: &FakeRunner) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        Box::new(BuiltinTemplates::new()),
    )
}

fn create(fs: &MemoryFilesystem, runner: &FakeRunner, d: &ProjectDescriptor) -> InitiatorResult<()> {
    service(fs, runner)
        .create(d, false, &Unattended, &SilentProgress)
        .map(|_| ())
}

fn file(fs: &MemoryFilesystem, rel: &str) -> Option<String> {
    fs.read_file(&root().join(rel))
}

// ── flavors ──────────────────────────────────────────────────────────────────

#[test]
fn go_plain_leaves_entrypoint_and_readme() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::GoPlain, false)).unwrap();

    assert!(file(&fs, "cmd/main.go").unwrap().contains("Hello from Go!"));
    assert!(file(&fs, "README.md").unwrap().starts_with("# demo"));
    for dir in ["cmd", "internal", "pkg", "docs", "test"] {
        assert!(fs.is_dir(&root().join(dir)), "{dir} missing");
    }
    assert_eq!(runner.commands(), ["go mod init demo", "go mod tidy"]);

    let d = descriptor(ProjectFlavor::GoPlain, false);
    assert_eq!(service(&fs, &runner).count_files(&d).unwrap(), 2);
}

#[test]
fn go_web_adds_layout_dependencies_and_env() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::GoWeb, false)).unwrap();

    assert!(fs.is_dir(&root().join("internal/handlers")));
    assert!(file(&fs, "cmd/main.go").unwrap().contains("echo.New()"));
    assert!(file(&fs, ".env").unwrap().contains("PORT=8080"));
    assert_eq!(
        runner.commands(),
        [
            "go mod init demo",
            "go get github.com/labstack/echo/v4",
            "go get github.com/joho/godotenv",
            "go mod tidy"
        ]
    );
}

#[test]
fn node_typescript_leaves_config_sources_and_scripts() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::NodeTypeScript, false)).unwrap();

    assert!(file(&fs, "tsconfig.json").is_some());
    assert!(file(&fs, "src/index.ts").unwrap().contains("Hello from TypeScript!"));

    let manifest: serde_json::Value =
        serde_json::from_str(&file(&fs, "package.json").unwrap()).unwrap();
    assert_eq!(manifest["scripts"]["dev"], "ts-node src/index.ts");
    assert_eq!(manifest["name"], "demo");
}

#[test]
fn node_express_installs_express() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::NodeExpress, false)).unwrap();

    assert!(file(&fs, "src/index.ts").unwrap().contains("express()"));
    assert!(
        runner
            .commands()
            .contains(&"npm install express @types/express --save".to_string())
    );
}

#[test]
fn generators_run_in_place_with_npm_yes() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::NodeNestJs, false)).unwrap();

    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "npx");
    assert_eq!(calls[0].cwd.as_deref(), Some(root().as_path()));
    assert!(calls[0].env.contains(&("npm_config_yes".into(), "true".into())));
}

// ── failure handling ─────────────────────────────────────────────────────────

#[test]
fn failing_step_stops_the_plan_and_keeps_partial_state() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs).failing_on("go mod init");

    let err = create(&fs, &runner, &descriptor(ProjectFlavor::GoPlain, true)).unwrap_err();

    match &err {
        InitiatorError::Application(ApplicationError::StepFailed { step, index, .. }) => {
            assert_eq!(step, "Initialize Go module");
            assert_eq!(*index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(runner.commands(), ["go mod init demo"]);
    assert!(fs.is_dir(&root()));
    assert!(file(&fs, "cmd/main.go").is_none());
}

#[test]
fn late_failure_keeps_earlier_files() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs).failing_on("go mod tidy");

    let err = create(&fs, &runner, &descriptor(ProjectFlavor::GoPlain, false)).unwrap_err();

    assert!(err.to_string().contains("Tidy modules"));
    assert!(file(&fs, "cmd/main.go").is_some());
}

// ── version control ──────────────────────────────────────────────────────────

#[test]
fn git_init_writes_gitignore_when_missing() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::GoPlain, true)).unwrap();

    assert_eq!(runner.commands().last().map(String::as_str), Some("git init"));
    assert!(file(&fs, ".gitignore").unwrap().contains("node_modules/"));
}

#[test]
fn git_init_keeps_generated_gitignore() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs);

    create(&fs, &runner, &descriptor(ProjectFlavor::NodeNextJs, true)).unwrap();

    assert_eq!(file(&fs, ".gitignore").as_deref(), Some("generated\n"));
}

#[test]
fn fatal_vcs_policy_fails_the_build() {
    let fs = MemoryFilesystem::new();
    let runner = FakeRunner::new(&fs).failing_on("git init");
    let d = descriptor(ProjectFlavor::NodeRemix, true);

    let svc = service(&fs, &runner).with_vcs_policy(VcsFailurePolicy::Fatal);
    svc.prepare_target(d.target_dir(), false, &Unattended).unwrap();
    assert!(svc.build(&d, &SilentProgress).is_err());

    let svc = service(&fs, &runner);
    let report = svc.build(&d, &SilentProgress).unwrap();
    assert!(report.vcs_warning.is_some());
}

// ── directory preparation ────────────────────────────────────────────────────

fn seeded_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(&root()).unwrap();
    fs.write_file(&root().join("keep.txt"), "mine").unwrap();
    fs
}

fn answering(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn declined_overwrite_leaves_contents() {
    let fs = seeded_fs();
    let svc = service(&fs, &FakeRunner::new(&fs));

    let err = svc.prepare_target(&root(), false, &answering("n\n")).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(file(&fs, "keep.txt").as_deref(), Some("mine"));
}

#[test]
fn accepted_overwrite_replaces_directory() {
    let fs = seeded_fs();
    let svc = service(&fs, &FakeRunner::new(&fs));

    let outcome = svc.prepare_target(&root(), false, &answering("y\n")).unwrap();

    assert_eq!(outcome, PrepareOutcome::Replaced);
    assert!(fs.is_dir(&root()));
    assert!(file(&fs, "keep.txt").is_none());
    assert!(fs.files().is_empty(), "write probe must be cleaned up");
}

#[test]
fn missing_directory_is_created_writable() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs, &FakeRunner::new(&fs));

    let outcome = svc.prepare_target(&root(), false, &answering("")).unwrap();

    assert_eq!(outcome, PrepareOutcome::Created);
    assert!(fs.is_dir(&root()));
}

#[test]
fn read_only_target_fails_before_any_step() {
    let fs = MemoryFilesystem::new();
    fs.set_read_only(root());
    let runner = FakeRunner::new(&fs);

    let err = create(&fs, &runner, &descriptor(ProjectFlavor::GoPlain, false)).unwrap_err();

    assert!(matches!(
        err,
        InitiatorError::Application(ApplicationError::NotWritable { .. })
    ));
    assert!(runner.commands().is_empty());
}

#[test]
fn file_at_target_is_not_a_directory() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(root().parent().unwrap()).unwrap();
    fs.write_file(&root(), "").unwrap();
    let svc = service(&fs, &FakeRunner::new(&fs));

    let err = svc.prepare_target(&root(), true, &Unattended).unwrap_err();
    assert!(matches!(
        err,
        InitiatorError::Application(ApplicationError::NotADirectory { .. })
    ));
}

// ── manifests ────────────────────────────────────────────────────────────────

fn manifest_service() -> ManifestService {
    ManifestService::new(Box::new(LocalFilesystem::new()), Box::new(BuiltinTemplates::new()))
}

#[test]
fn manifests_default_to_deployment_only() {
    let out = tempfile::tempdir().unwrap();
    let spec = ManifestSpec::builder("shop").build().unwrap();

    let written = manifest_service().generate(&spec, out.path()).unwrap();

    assert_eq!(written, vec![out.path().join("k8s/deployment.yaml")]);
    let entries = std::fs::read_dir(out.path().join("k8s")).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn manifests_with_service_and_ingress() {
    let out = tempfile::tempdir().unwrap();
    let spec = ManifestSpec::builder("shop")
        .namespace("prod")
        .container_port(3000)
        .service(true)
        .ingress(true)
        .build()
        .unwrap();

    let written = manifest_service().generate(&spec, out.path()).unwrap();
    assert_eq!(written.len(), 3);

    for path in &written {
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.contains("shop"), "{} lacks app name", path.display());
        assert!(body.contains("namespace: prod"), "{} lacks namespace", path.display());
    }
    let deployment = std::fs::read_to_string(out.path().join("k8s/deployment.yaml")).unwrap();
    assert!(deployment.contains("containerPort: 3000"));
    let service = std::fs::read_to_string(out.path().join("k8s/service.yaml")).unwrap();
    assert!(service.contains("port: 80"));
    assert!(service.contains("targetPort: 3000"));

    // The ingress talks to the service port, never the container port.
    let ingress = std::fs::read_to_string(out.path().join("k8s/ingress.yaml")).unwrap();
    assert!(ingress.contains("number: 80"));
    assert!(!ingress.contains("3000"));
}

// ── tool probe ───────────────────────────────────────────────────────────────

#[test]
fn probe_reports_missing_tool() {
    const GHOST: ToolSpec = ToolSpec {
        name: "Ghost",
        candidates: &[ToolInvocation::binary("initiator-ghost-tool-3b9e", &["--version"])],
        format: VersionFormat::Plain,
        install_url: "https://example.invalid/ghost",
    };

    let probe = ToolProbe::new(Box::new(PathLocator::new()), Box::new(SystemProcessRunner::new()));
    let result = probe.check(&GHOST);

    assert!(!result.installed);
    assert_eq!(result.version, None);
}

#[cfg(unix)]
#[test]
fn probe_reports_installed_tool_version() {
    const SH: ToolSpec = ToolSpec {
        name: "sh",
        candidates: &[ToolInvocation::binary("sh", &["-c", "echo v1.2.3"])],
        format: VersionFormat::LeadingV,
        install_url: "https://example.invalid/sh",
    };

    let probe = ToolProbe::new(Box::new(PathLocator::new()), Box::new(SystemProcessRunner::new()));
    let result = probe.check(&SH);

    assert!(result.installed);
    assert_eq!(result.version.as_deref(), Some("1.2.3"));
}
