//! Which pre-existing entries a target directory may contain.
//!
//! A fresh project must not silently overwrite an existing one, but a few
//! innocuous files (VCS metadata, editor settings, a licence, stray logs)
//! are commonly created before the scaffold runs and are safe to keep.

/// Entries tolerated in a target directory before the first attempt.
pub const ALLOWED_EXISTING: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "LICENSE",
    "Thumbs.db",
    "docs",
    "mkdocs.yml",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
];

/// Suffix of IntelliJ module files, tolerated under any name.
pub const ALLOWED_SUFFIX: &str = ".iml";

/// Entries a failed attempt may leave behind: the descriptor plus whatever
/// the installer wrote before it failed.
pub const ATTEMPT_ARTIFACTS: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "node_modules",
];

/// Which run of the pipeline is inspecting the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    First,
    Retry,
}

/// An entry found in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ExistingEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

pub fn is_allowed(name: &str, attempt: Attempt) -> bool {
    ALLOWED_EXISTING.contains(&name)
        || name.ends_with(ALLOWED_SUFFIX)
        || (attempt == Attempt::Retry && ATTEMPT_ARTIFACTS.contains(&name))
}

/// Entries that block scaffolding, sorted, directories suffixed with `/`.
pub fn conflicting_entries(entries: &[ExistingEntry], attempt: Attempt) -> Vec<String> {
    let mut conflicts: Vec<String> = entries
        .iter()
        .filter(|entry| !is_allowed(&entry.name, attempt))
        .map(|entry| {
            if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            }
        })
        .collect();
    conflicts.sort();
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_has_no_conflicts() {
        assert!(conflicting_entries(&[], Attempt::First).is_empty());
    }

    #[test]
    fn allow_listed_entries_are_tolerated() {
        let entries = vec![
            ExistingEntry::dir(".git"),
            ExistingEntry::file("LICENSE"),
            ExistingEntry::file("project.iml"),
            ExistingEntry::dir("docs"),
        ];
        assert!(conflicting_entries(&entries, Attempt::First).is_empty());
    }

    #[test]
    fn unknown_entries_are_reported_sorted() {
        let entries = vec![
            ExistingEntry::file("package.json"),
            ExistingEntry::dir("src"),
            ExistingEntry::file("LICENSE"),
            ExistingEntry::file("index.js"),
        ];
        assert_eq!(
            conflicting_entries(&entries, Attempt::First),
            vec!["index.js", "package.json", "src/"]
        );
    }

    #[test]
    fn retry_tolerates_its_own_artifacts() {
        let entries = vec![
            ExistingEntry::file("package.json"),
            ExistingEntry::dir("node_modules"),
            ExistingEntry::file("package-lock.json"),
        ];
        assert_eq!(conflicting_entries(&entries, Attempt::First).len(), 3);
        assert!(conflicting_entries(&entries, Attempt::Retry).is_empty());
    }

    #[test]
    fn retry_still_rejects_foreign_files() {
        let entries = vec![ExistingEntry::file("package.json"), ExistingEntry::file("main.go")];
        assert_eq!(conflicting_entries(&entries, Attempt::Retry), vec!["main.go"]);
    }
}
