//! Failure boundary around the hosted application.

use crate::hosted::RenderError;

/// Fallback heading shown in place of a failed preview
pub const FALLBACK_TITLE: &str = "Preview Error";

/// Fallback body text
pub const FALLBACK_MESSAGE: &str =
    "The preview component encountered an error and couldn't render properly.";

/// Label of the control that clears the failure
pub const TRY_AGAIN_LABEL: &str = "Try Again";

/// Whether the hosted application's output is shown or replaced by a fallback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Normal,
    Failed(RenderError),
}

impl BoundaryState {
    pub fn is_failed(&self) -> bool {
        matches!(self, BoundaryState::Failed(_))
    }

    /// The caught error, if any
    pub fn error(&self) -> Option<&RenderError> {
        match self {
            BoundaryState::Failed(e) => Some(e),
            BoundaryState::Normal => None,
        }
    }

    /// Record a failure. The first caught error is kept until reset.
    pub fn fail(&mut self, error: RenderError) {
        if !self.is_failed() {
            *self = BoundaryState::Failed(error);
        }
    }

    pub fn reset(&mut self) {
        *self = BoundaryState::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_then_reset() {
        let mut boundary = BoundaryState::default();
        assert!(!boundary.is_failed());

        boundary.fail(RenderError::new("first"));
        boundary.fail(RenderError::new("second"));
        assert_eq!(boundary.error().map(|e| e.message.as_str()), Some("first"));

        boundary.reset();
        assert_eq!(boundary, BoundaryState::Normal);
    }
}
