//! Driving (input) ports - implemented by application services.

use crate::application::services::ScaffoldReport;
use crate::domain::{ProjectRequest, workspace_policy::Attempt};
use crate::error::SproutResult;

/// One full run of the scaffolding pipeline.
///
/// Implemented by [`crate::application::ScaffoldService`]; consumed by the
/// recovery controller, which decides whether a failed run is repeated.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectCreator: Send + Sync {
    fn create(&self, request: &ProjectRequest, attempt: Attempt) -> SproutResult<ScaffoldReport>;
}
