//! The template compiled into the binary.
//!
//! File bodies are embedded with `include_bytes!` under their stored names
//! (`gitignore`, `README-template.md`, ...); the rename table turns them into
//! their real names when the pipeline writes them. The package lists come
//! from the JSON manifest next to the tree.

use serde::Deserialize;
use sprout_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DependencySet, ProjectTemplate, RelativePath, TemplateFile},
    error::SproutResult,
};
use tracing::{debug, instrument};

macro_rules! embed {
    ($path:literal) => {
        (
            $path,
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/default/", $path))
                as &'static [u8],
        )
    };
}

/// Template-relative path and contents of every embedded file.
pub const BUILTIN_FILES: &[(&str, &[u8])] = &[
    embed!("README-template.md"),
    embed!("eslintrc.json"),
    embed!("gitignore"),
    embed!("next-env.d.ts"),
    embed!("next.config.js"),
    embed!("pages/_app.tsx"),
    embed!("pages/api/hello.ts"),
    embed!("pages/index.tsx"),
    embed!("postcss.config.js"),
    embed!("public/vercel.svg"),
    embed!("styles/globals.css"),
    embed!("tailwind.config.js"),
    embed!("tsconfig.json"),
];

const MANIFEST: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/default.json"
));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    name: String,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    dev_dependencies: Vec<String>,
}

/// Serves the single built-in template.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplateStore {
    #[instrument(skip_all)]
    fn load(&self) -> SproutResult<ProjectTemplate> {
        let manifest: Manifest =
            serde_json::from_str(MANIFEST).map_err(|e| ApplicationError::TemplateInvalid {
                reason: format!("manifest: {e}"),
            })?;

        let files = BUILTIN_FILES
            .iter()
            .map(|(path, contents)| -> SproutResult<TemplateFile> {
                Ok(TemplateFile::new(RelativePath::try_new(*path)?, *contents))
            })
            .collect::<SproutResult<Vec<_>>>()?;

        let template = ProjectTemplate::new(
            manifest.name,
            DependencySet::new(manifest.dependencies, manifest.dev_dependencies),
            files,
        )?;
        debug!(name = template.name(), files = template.file_count(), "Built-in template loaded");
        Ok(template)
    }
}
