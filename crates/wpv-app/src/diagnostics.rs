//! Reporting of hosted application failures.

use crate::hosted::{ErrorInfo, RenderError};

/// External collaborator told about every failure the boundary catches
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics {
    fn report(&self, error: &RenderError, info: &ErrorInfo);
}

/// Default diagnostics: an `error!` event in the log file
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &RenderError, info: &ErrorInfo) {
        tracing::error!(
            application = %info.application,
            path = %info.path,
            phase = %info.phase,
            "Preview component error: {}",
            error
        );
    }
}
