use crate::error::SubmitError;

/// Where the current attempt stands.
///
/// Held in memory for one page view only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Entered and left inside a single `submit` call.
    Validating,
    /// Dispatched; waiting on the frame load or the fallback timer.
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

impl SubmissionState {
    /// True while the form should refuse input (`Validating` or `Submitting`).
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionState::Failed(_))
    }

    /// The inline message for a failed attempt.
    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmissionState::Failed(reason) => Some(reason.to_string()),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}
