//! Package-name validation.
//!
//! The project name becomes the `name` field of the descriptor, so it must be
//! publishable under npm's naming rules. Every problem is reported, not just
//! the first, so the CLI can print an itemized list.

/// Longest name the registry accepts.
pub const MAX_NAME_LENGTH: usize = 214;

/// Names the registry refuses outright.
const BLACKLIST: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js built-in modules; a package with one of these names would be
/// shadowed by the runtime.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Outcome of checking a candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Invalid { problems: Vec<String> },
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn problems(&self) -> &[String] {
        match self {
            Self::Valid => &[],
            Self::Invalid { problems } => problems,
        }
    }

    /// The problem shown inline by the interactive name prompt.
    pub fn first_problem(&self) -> Option<&str> {
        self.problems().first().map(String::as_str)
    }
}

/// Checks candidate project names against npm's package-naming rules.
pub struct NameValidator;

impl NameValidator {
    pub fn validate(name: &str) -> NameValidation {
        let mut problems = errors(name);
        problems.extend(new_package_warnings(name));

        if problems.is_empty() {
            NameValidation::Valid
        } else {
            NameValidation::Invalid { problems }
        }
    }
}

/// Rules that make a name unusable for any package, old or new.
fn errors(name: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        errors.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        errors.push("name cannot contain leading or trailing spaces".to_string());
    }
    for blacklisted in BLACKLIST {
        if name.eq_ignore_ascii_case(blacklisted) {
            errors.push(format!("{blacklisted} is a blacklisted name"));
        }
    }
    if !name.is_empty() && !is_url_friendly(name) {
        errors.push("name can only contain URL-friendly characters".to_string());
    }

    errors
}

/// Rules the registry grandfathers for old packages but enforces for new ones.
fn new_package_warnings(name: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    if CORE_MODULES.contains(&name.to_ascii_lowercase().as_str()) {
        warnings.push(format!("{name} is a core module name"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        warnings.push(format!(
            "name can no longer contain more than {MAX_NAME_LENGTH} characters"
        ));
    }
    if name.to_lowercase() != name {
        warnings.push("name can no longer contain capital letters".to_string());
    }
    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(SPECIAL_CHARACTERS) {
        warnings.push(
            "name can no longer contain special characters (\"~'!()*\")".to_string(),
        );
    }

    warnings
}

/// A name is URL-friendly when it survives URI-component encoding unchanged,
/// either as a whole or as a single `@scope/package` pair.
fn is_url_friendly(name: &str) -> bool {
    if is_uri_component_safe(name) {
        return true;
    }

    if let Some((scope, package)) = name
        .strip_prefix('@')
        .and_then(|scoped| scoped.split_once('/'))
    {
        return !scope.is_empty()
            && !package.is_empty()
            && !package.contains('/')
            && is_uri_component_safe(scope)
            && is_uri_component_safe(package);
    }

    false
}

fn is_uri_component_safe(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c))
}
