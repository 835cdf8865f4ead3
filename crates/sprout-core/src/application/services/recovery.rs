//! Top-level state machine around the pipeline.
//!
//! A download failure on the first attempt is the one recoverable failure:
//! the user is asked whether to run the pipeline again, and a confirmed retry
//! runs exactly once with the same request. Nothing that fails during the
//! retry is caught again.

use tracing::{info, instrument, warn};

use super::ScaffoldReport;
use crate::{
    application::ports::{ProjectCreator, RecoveryPrompt},
    domain::{ProjectRequest, workspace_policy::Attempt},
    error::{SproutError, SproutResult},
};

/// States the controller passes through, in the order visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryState {
    Running,
    RecoverableFailure,
    Retrying,
    TerminalFailure,
    Done,
}

/// Outcome of one controlled run.
#[derive(Debug)]
pub struct RecoveryRun {
    /// Every state visited, starting with `Running`.
    pub trail: Vec<RecoveryState>,
    pub result: SproutResult<ScaffoldReport>,
}

impl RecoveryRun {
    pub fn retried(&self) -> bool {
        self.trail.contains(&RecoveryState::Retrying)
    }

    pub fn final_state(&self) -> RecoveryState {
        self.trail
            .last()
            .copied()
            .unwrap_or(RecoveryState::Running)
    }

    pub fn into_result(self) -> SproutResult<ScaffoldReport> {
        self.result
    }
}

enum Step {
    Run(Attempt),
    Recoverable(SproutError),
    Terminal(SproutError),
    Done(ScaffoldReport),
}

impl Step {
    fn state(&self) -> RecoveryState {
        match self {
            Self::Run(Attempt::First) => RecoveryState::Running,
            Self::Run(Attempt::Retry) => RecoveryState::Retrying,
            Self::Recoverable(_) => RecoveryState::RecoverableFailure,
            Self::Terminal(_) => RecoveryState::TerminalFailure,
            Self::Done(_) => RecoveryState::Done,
        }
    }
}

pub struct RecoveryController {
    creator: Box<dyn ProjectCreator>,
    prompt: Box<dyn RecoveryPrompt>,
}

impl RecoveryController {
    pub fn new(creator: Box<dyn ProjectCreator>, prompt: Box<dyn RecoveryPrompt>) -> Self {
        Self { creator, prompt }
    }

    #[instrument(skip_all, fields(project = %request.name()))]
    pub fn run(&self, request: &ProjectRequest) -> RecoveryRun {
        let mut step = Step::Run(Attempt::First);
        let mut trail = vec![step.state()];

        loop {
            step = match step {
                Step::Run(attempt) => match self.creator.create(request, attempt) {
                    Ok(report) => Step::Done(report),
                    Err(e) if attempt == Attempt::First && e.is_retryable() => {
                        warn!(error = %e, "Recoverable failure");
                        Step::Recoverable(e)
                    }
                    Err(e) => Step::Terminal(e),
                },
                Step::Recoverable(e) => {
                    if self.prompt.confirm_fallback(&e) {
                        info!("Retrying once");
                        Step::Run(Attempt::Retry)
                    } else {
                        Step::Terminal(e)
                    }
                }
                Step::Terminal(e) => {
                    return RecoveryRun {
                        trail,
                        result: Err(e),
                    };
                }
                Step::Done(report) => {
                    return RecoveryRun {
                        trail,
                        result: Ok(report),
                    };
                }
            };
            trail.push(step.state());
        }
    }
}
