//! End-to-end pipeline runs against real and in-memory adapters.
//!
//! The package manager is replaced by a scripted installer so no network or
//! node toolchain is needed; everything else is the production adapter.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sprout_adapters::{BuiltinTemplateStore, LocalFilesystem, MemoryFilesystem};
use sprout_core::domain::rename;
use sprout_core::prelude::*;
use walkdir::WalkDir;

// ── Fakes ─────────────────────────────────────────────────────────────────────

/// Writes install artifacts like a real package manager, failing the first
/// `download_failures` calls with a connectivity error.
#[derive(Clone, Default)]
struct ScriptedInstaller {
    calls: Arc<AtomicUsize>,
    download_failures: usize,
}

impl DependencyInstaller for ScriptedInstaller {
    fn install(&self, root: &Path, plan: &InstallPlan) -> SproutResult<()> {
        std::fs::create_dir_all(root.join("node_modules")).map_err(|e| SproutError::Internal {
            message: e.to_string(),
        })?;
        std::fs::write(root.join("package-lock.json"), "{}\n").map_err(|e| {
            SproutError::Internal {
                message: e.to_string(),
            }
        })?;

        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.download_failures {
            return Err(ApplicationError::DownloadFailed {
                command: format!(
                    "npm install {}",
                    plan.packages().iter().cloned().collect::<Vec<_>>().join(" ")
                ),
                reason: "getaddrinfo ENOTFOUND registry.npmjs.org".into(),
            }
            .into());
        }
        Ok(())
    }

    fn is_online(&self) -> bool {
        true
    }
}

struct NoRepository;

impl RepositoryInitializer for NoRepository {
    fn init(&self, _root: &Path) -> SproutResult<bool> {
        Ok(false)
    }
}

#[derive(Clone, Default)]
struct Events(Arc<Mutex<Vec<ScaffoldEvent>>>);

impl ProgressSink for Events {
    fn emit(&self, event: ScaffoldEvent) {
        if let Ok(mut events) = self.0.lock() {
            events.push(event);
        }
    }
}

struct Answer(bool, Arc<AtomicUsize>);

impl RecoveryPrompt for Answer {
    fn confirm_fallback(&self, _error: &SproutError) -> bool {
        self.1.fetch_add(1, Ordering::SeqCst);
        self.0
    }
}

fn local_service(installer: ScriptedInstaller) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplateStore::new()),
        Box::new(installer),
        Box::new(NoRepository),
        Box::new(Events::default()),
    )
}

fn template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/default")
}

/// Relative paths of every file under `root`, sorted.
fn tree(root: &Path, skip: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !skip.iter().any(|s| e.file_name() == *s))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

// ── Happy path ────────────────────────────────────────────────────────────────

#[test]
fn fresh_directory_gets_descriptor_and_full_template_tree() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("my-app");
    let installer = ScriptedInstaller::default();

    let request = ProjectRequest::new(&root, PackageManager::Npm).unwrap();
    let report = local_service(installer.clone())
        .create(&request, Attempt::First)
        .unwrap();

    let raw = std::fs::read_to_string(root.join("package.json")).unwrap();
    let descriptor: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(descriptor["name"], "my-app");
    assert_eq!(descriptor["private"], true);
    // `Value` sorts object keys, so check the written order on the raw text.
    let positions: Vec<usize> = ["\"dev\":", "\"build\":", "\"start\":", "\"lint\":"]
        .iter()
        .map(|key| raw.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{raw}");

    // Every template file landed under its renamed path.
    let mut expected: Vec<PathBuf> = tree(&template_dir(), &[])
        .iter()
        .map(|p| rename::materialized_path(p))
        .collect();
    expected.push(PathBuf::from("package-lock.json"));
    expected.push(PathBuf::from("package.json"));
    expected.sort();
    assert_eq!(tree(&root, &["node_modules"]), expected);

    assert!(root.join(".gitignore").is_file());
    assert!(!root.join("README-template.md").exists());
    assert!(!root.join("gitignore").exists());

    assert_eq!(installer.calls.load(Ordering::SeqCst), 2);
    assert_eq!(report.files_written, expected.len() - 2);
}

#[test]
fn materialized_files_match_template_bytes() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("bytes-app");
    let request = ProjectRequest::new(&root, PackageManager::Yarn).unwrap();

    local_service(ScriptedInstaller::default())
        .create(&request, Attempt::First)
        .unwrap();

    for relative in tree(&template_dir(), &[]) {
        let source = std::fs::read(template_dir().join(&relative)).unwrap();
        let written = std::fs::read(root.join(rename::materialized_path(&relative))).unwrap();
        assert_eq!(source, written, "{}", relative.display());
    }
}

#[test]
fn allow_listed_entries_survive_scaffolding() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("licensed");
    std::fs::create_dir_all(root.join(".git")).unwrap();
    std::fs::write(root.join("LICENSE"), "MIT\n").unwrap();

    let request = ProjectRequest::new(&root, PackageManager::Npm).unwrap();
    local_service(ScriptedInstaller::default())
        .create(&request, Attempt::First)
        .unwrap();

    assert_eq!(std::fs::read_to_string(root.join("LICENSE")).unwrap(), "MIT\n");
    assert!(root.join("package.json").is_file());
}

// ── Gates ─────────────────────────────────────────────────────────────────────

#[test]
fn foreign_files_block_before_any_install() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("taken");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("index.js"), "console.log(1)\n").unwrap();
    let installer = ScriptedInstaller::default();

    let request = ProjectRequest::new(&root, PackageManager::Npm).unwrap();
    let err = local_service(installer.clone())
        .create(&request, Attempt::First)
        .unwrap_err();

    assert_eq!(err.diagnostic(), Diagnostic::Validation);
    assert_eq!(installer.calls.load(Ordering::SeqCst), 0);
    assert!(!root.join("package.json").exists());
}

#[test]
fn read_only_parent_creates_nothing() {
    let fs = MemoryFilesystem::new().with_dir("/locked").read_only("/locked");
    let installer = ScriptedInstaller::default();
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(BuiltinTemplateStore::new()),
        Box::new(installer.clone()),
        Box::new(NoRepository),
        Box::new(Events::default()),
    );

    let request = ProjectRequest::new("/locked/my-app", PackageManager::Npm).unwrap();
    let err = service.create(&request, Attempt::First).unwrap_err();

    assert!(matches!(
        err,
        SproutError::Application(ApplicationError::PathNotWritable { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert!(fs.list_dir(Path::new("/locked")).unwrap().is_empty());
    assert_eq!(installer.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn invalid_name_is_rejected_before_the_pipeline() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("My App");

    let err = ProjectRequest::new(&root, PackageManager::Npm).unwrap_err();

    match err {
        DomainError::InvalidProjectName { problems, .. } => assert!(!problems.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!root.exists());
}

// ── Recovery ──────────────────────────────────────────────────────────────────

#[test]
fn one_download_failure_and_yes_completes_after_one_retry() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("flaky");
    let installer = ScriptedInstaller {
        download_failures: 1,
        ..ScriptedInstaller::default()
    };
    let asked = Arc::new(AtomicUsize::new(0));

    let controller = RecoveryController::new(
        Box::new(local_service(installer.clone())),
        Box::new(Answer(true, asked.clone())),
    );
    let request = ProjectRequest::new(&root, PackageManager::Npm).unwrap();
    let run = controller.run(&request);

    assert_eq!(run.final_state(), RecoveryState::Done);
    assert!(run.retried());
    assert_eq!(asked.load(Ordering::SeqCst), 1);
    // One failed runtime install, then runtime and dev on the retry.
    assert_eq!(installer.calls.load(Ordering::SeqCst), 3);
    assert!(root.join(".gitignore").is_file());
}

#[test]
fn one_download_failure_and_no_terminates_without_retrying() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("offline");
    let installer = ScriptedInstaller {
        download_failures: 1,
        ..ScriptedInstaller::default()
    };
    let asked = Arc::new(AtomicUsize::new(0));

    let controller = RecoveryController::new(
        Box::new(local_service(installer.clone())),
        Box::new(Answer(false, asked.clone())),
    );
    let request = ProjectRequest::new(&root, PackageManager::Npm).unwrap();
    let run = controller.run(&request);

    assert_eq!(run.final_state(), RecoveryState::TerminalFailure);
    assert!(!run.retried());
    assert_eq!(installer.calls.load(Ordering::SeqCst), 1);
    assert!(run.into_result().unwrap_err().is_retryable());
    assert!(!root.join(".gitignore").exists());
}
