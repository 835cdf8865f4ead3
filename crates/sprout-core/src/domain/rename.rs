//! Filename rewrite table applied while materializing the template.
//!
//! Template files are stored under names that survive packaging (a leading
//! `.` or a `README.md` tends to be dropped by bundlers), then renamed to
//! their real names on the way into the project.
//!
//! The table is total: a name no rule matches passes through unchanged. It is
//! also idempotent: no rule's output is another rule's input, so renaming an
//! already-renamed file is a no-op.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Marker the host uses to hide a file.
pub const HIDDEN_FILE_PREFIX: char = '.';

/// One entry of the rewrite table, matched against a bare file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// Prefix the name with [`HIDDEN_FILE_PREFIX`].
    Hide(&'static str),
    /// Replace the whole name.
    Replace {
        from: &'static str,
        to: &'static str,
    },
}

impl RenameRule {
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Hide(name) => name,
            Self::Replace { from, .. } => from,
        }
    }

    fn apply(&self) -> String {
        match self {
            Self::Hide(name) => format!("{HIDDEN_FILE_PREFIX}{name}"),
            Self::Replace { to, .. } => (*to).to_string(),
        }
    }
}

/// The fixed rewrite table for the built-in template.
pub const RENAME_TABLE: &[RenameRule] = &[
    RenameRule::Hide("gitignore"),
    RenameRule::Hide("eslintrc.json"),
    RenameRule::Replace {
        from: "README-template.md",
        to: "README.md",
    },
];

/// Materialized name for a bare file name.
pub fn rename(file_name: &str) -> Cow<'_, str> {
    RENAME_TABLE
        .iter()
        .find(|rule| rule.source() == file_name)
        .map_or(Cow::Borrowed(file_name), |rule| Cow::Owned(rule.apply()))
}

/// Materialized path for a template-relative path.
///
/// Only the final component is renamed; directories keep their names.
pub fn materialized_path(relative: &Path) -> PathBuf {
    let Some(file_name) = relative.file_name().and_then(|n| n.to_str()) else {
        return relative.to_path_buf();
    };

    match rename(file_name) {
        Cow::Borrowed(_) => relative.to_path_buf(),
        Cow::Owned(renamed) => relative.with_file_name(renamed),
    }
}
