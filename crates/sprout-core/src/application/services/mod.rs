//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` runs the pipeline once; `RecoveryController` wraps it
//! with the single retry offered after a download failure.

pub mod recovery;
pub mod scaffold_service;

pub use recovery::{RecoveryController, RecoveryRun, RecoveryState};
pub use scaffold_service::{ScaffoldOptions, ScaffoldReport, ScaffoldService};
