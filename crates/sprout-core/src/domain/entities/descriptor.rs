use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::value_objects::ProjectName;
use crate::error::{SproutError, SproutResult};

/// File name of the descriptor at the project root.
pub const DESCRIPTOR_FILE_NAME: &str = "package.json";

/// Lifecycle scripts every generated project starts with, in file order.
pub const LIFECYCLE_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "next dev"),
    ("build", "next build"),
    ("start", "next start"),
    ("lint", "next lint"),
];

/// The project descriptor as first written, before the installer adds the
/// resolved dependency sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    name: String,
    private: bool,
    scripts: IndexMap<String, String>,
}

impl ProjectDescriptor {
    pub fn new(name: &ProjectName) -> Self {
        Self {
            name: name.as_str().to_string(),
            private: true,
            scripts: LIFECYCLE_SCRIPTS
                .iter()
                .map(|(script, command)| ((*script).to_string(), (*command).to_string()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scripts(&self) -> &IndexMap<String, String> {
        &self.scripts
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> SproutResult<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(serialization_error)?;
        json.push('\n');
        Ok(json)
    }
}

fn serialization_error(err: serde_json::Error) -> SproutError {
    SproutError::Internal {
        message: format!("could not serialize {DESCRIPTOR_FILE_NAME}: {err}"),
    }
}
