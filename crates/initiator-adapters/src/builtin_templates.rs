//! Template bodies that ship with Initiator.
//!
//! Every [`TemplateId`] has a compiled-in body. A directory can be layered
//! on top: when `<dir>/<id path>` exists (e.g. `<dir>/go/web/main.go`), that
//! file is used instead. The CLI points this at `templates.dir` from the
//! configuration or `$INITIATOR_TEMPLATES_DIR`.
//!
//! Placeholders use `{{name}}`:
//! - project files: `project_name`, `flavor`
//! - Kubernetes manifests: `app_name`, `namespace`, `project_label`,
//!   `container_name`, `port`

use std::path::PathBuf;

use initiator_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::InitiatorResult,
};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default)]
pub struct BuiltinTemplates {
    override_dir: Option<PathBuf>,
}

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.override_dir = dir;
        self
    }

    /// The compiled-in body for `id`.
    pub fn builtin(id: TemplateId) -> &'static str {
        match id {
            TemplateId::GoPlainMain => GO_PLAIN_MAIN,
            TemplateId::GoPlainReadme => GO_PLAIN_README,
            TemplateId::GoWebMain => GO_WEB_MAIN,
            TemplateId::GoWebReadme => GO_WEB_README,
            TemplateId::GoWebEnv => GO_WEB_ENV,
            TemplateId::NodeTsConfig => NODE_TSCONFIG,
            TemplateId::NodeTsIndex => NODE_TS_INDEX,
            TemplateId::NodeExpressIndex => NODE_EXPRESS_INDEX,
            TemplateId::GitIgnore => GITIGNORE,
            TemplateId::K8sDeployment => K8S_DEPLOYMENT,
            TemplateId::K8sService => K8S_SERVICE,
            TemplateId::K8sIngress => K8S_INGRESS,
        }
    }
}

impl TemplateStore for BuiltinTemplates {
    #[instrument(skip(self))]
    fn template(&self, id: TemplateId) -> InitiatorResult<String> {
        if let Some(dir) = &self.override_dir {
            if !dir.is_dir() {
                return Err(ApplicationError::TemplateDirMissing { path: dir.clone() }.into());
            }
            let path = dir.join(id.as_str());
            if path.is_file() {
                debug!(path = %path.display(), "Using template override");
                return std::fs::read_to_string(&path).map_err(|e| {
                    ApplicationError::FilesystemError {
                        path,
                        reason: format!("Failed to read template: {}", e),
                    }
                    .into()
                });
            }
        }
        Ok(Self::builtin(id).to_string())
    }
}

// ── Go ────────────────────────────────────────────────────────────────────────

const GO_PLAIN_MAIN: &str = r#"package main

import (
	"fmt"
	"log"
)

func main() {
	log.SetPrefix("{{project_name}}: ")
	log.Println("starting")
	fmt.Println("Hello from Go!")
}
"#;

const GO_WEB_MAIN: &str = r#"package main

import (
	"log"
	"net/http"
	"os"

	"github.com/joho/godotenv"
	"github.com/labstack/echo/v4"
	"github.com/labstack/echo/v4/middleware"
)

func main() {
	if err := godotenv.Load(); err != nil {
		log.Println("no .env file found, using process environment")
	}

	e := echo.New()
	e.Use(middleware.Logger())
	e.Use(middleware.Recover())

	e.GET("/", func(c echo.Context) error {
		return c.JSON(http.StatusOK, map[string]string{
			"message": "Welcome to the API!",
		})
	})

	port := os.Getenv("PORT")
	if port == "" {
		port = "8080"
	}
	e.Logger.Fatal(e.Start(":" + port))
}
"#;

const GO_PLAIN_README: &str = r#"# {{project_name}}

## Description
A Go project with a standard layout.

## Project Structure
- cmd/: Main applications
- internal/: Private application code
- pkg/: Library code
- docs/: Documentation
- test/: Tests

## Getting Started
1. Build the project:
   ```
   go build ./cmd/...
   ```

2. Run the application:
   ```
   go run ./cmd/main.go
   ```
"#;

const GO_WEB_README: &str = r#"# {{project_name}}

## Description
A Go web application built on the Echo framework.

## Project Structure
- cmd/: Main applications
- internal/
  - handlers/: HTTP request handlers
  - middleware/: Custom middleware
  - models/: Data models
  - routes/: Route definitions
  - services/: Business logic
- pkg/: Library code
- docs/: Documentation
- test/: Tests

## Getting Started
1. Install dependencies:
   ```
   go mod tidy
   ```

2. Review the settings in `.env`.

3. Run the server:
   ```
   go run ./cmd/main.go
   ```

## API Endpoints
- GET /: Welcome message
"#;

const GO_WEB_ENV: &str = "PORT=8080
ENV=development

DB_HOST=localhost
DB_PORT=5432
DB_NAME={{project_name}}
DB_USER=postgres
DB_PASSWORD=postgres
";

// ── Node ──────────────────────────────────────────────────────────────────────

const NODE_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es6",
    "module": "commonjs",
    "outDir": "./dist",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules"]
}
"#;

const NODE_TS_INDEX: &str = "console.log('Hello from TypeScript!');\n";

const NODE_EXPRESS_INDEX: &str = r#"import express, { Request, Response } from 'express';

const app = express();
const port = Number(process.env.PORT) || 3000;

app.use(express.json());

app.get('/', (_req: Request, res: Response) => {
  res.json({ message: 'Welcome to {{project_name}}!' });
});

app.listen(port, () => {
  console.log(`Server listening on http://localhost:${port}`);
});
"#;

// ── VCS ───────────────────────────────────────────────────────────────────────

const GITIGNORE: &str = "# Dependencies
node_modules/
vendor/

# Build output
dist/
build/
bin/

# Environment
.env
.env.*

# Editors
.idea/
.vscode/
*.swp

# OS
.DS_Store
Thumbs.db
";

// ── Kubernetes ────────────────────────────────────────────────────────────────

const K8S_DEPLOYMENT: &str = "apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{app_name}}
  namespace: {{namespace}}
  labels:
    app: {{project_label}}
spec:
  replicas: 1
  selector:
    matchLabels:
      app: {{project_label}}
  template:
    metadata:
      labels:
        app: {{project_label}}
    spec:
      containers:
      - name: {{container_name}}
        image: {{container_name}}:latest
        ports:
        - containerPort: {{port}}
        resources:
          requests:
            cpu: 100m
            memory: 128Mi
          limits:
            cpu: 500m
            memory: 256Mi
";

const K8S_SERVICE: &str = "apiVersion: v1
kind: Service
metadata:
  name: {{app_name}}
  namespace: {{namespace}}
spec:
  selector:
    app: {{project_label}}
  ports:
  - port: 80
    targetPort: {{port}}
  type: ClusterIP
";

const K8S_INGRESS: &str = "apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: {{app_name}}-ingress
  namespace: {{namespace}}
  annotations:
    nginx.ingress.kubernetes.io/rewrite-target: /
spec:
  rules:
  - host: {{app_name}}.example.com
    http:
      paths:
      - path: /
        pathType: Prefix
        backend:
          service:
            name: {{app_name}}
            port:
              number: 80
";
