//! Version-control adapters.

mod git;

pub use git::{DEFAULT_COMMIT_MESSAGE, GitCliInitializer};
