use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::{KernelError, RentalError};
use serde_json::json;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus {
    status: StatusCode,
    message: String,
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(report: Report<KernelError>) -> Self {
        let status = match report.current_context() {
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Integrity => StatusCode::CONFLICT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = report.current_context().to_string();
        tracing::error!("{report:?}");
        Self { status, message }
    }
}

impl From<Report<RentalError>> for ErrorStatus {
    fn from(report: Report<RentalError>) -> Self {
        let status = match report.current_context() {
            RentalError::BookNotFound | RentalError::RentalNotFound => StatusCode::NOT_FOUND,
            RentalError::InvalidDueDate => StatusCode::BAD_REQUEST,
            RentalError::IneligibleBorrower(_) => StatusCode::FORBIDDEN,
            RentalError::BookUnavailable | RentalError::AlreadyReturned => StatusCode::CONFLICT,
            // Storage wraps the kernel context; a pool timeout underneath
            // still answers 408 like the plain CRUD paths.
            RentalError::Storage => match report.downcast_ref::<KernelError>() {
                Some(KernelError::Timeout) => StatusCode::REQUEST_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        let message = report.current_context().to_string();
        tracing::error!("{report:?}");
        Self { status, message }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use error_stack::Report;
    use kernel::{KernelError, RentalError};

    use crate::error::ErrorStatus;

    #[test]
    fn pool_timeout_inside_workflow_answers_request_timeout() {
        let report = Report::new(KernelError::Timeout).change_context(RentalError::Storage);
        let status = ErrorStatus::from(report);
        assert_eq!(status.status, StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn other_storage_faults_stay_internal() {
        let report = Report::new(KernelError::Internal).change_context(RentalError::Storage);
        let status = ErrorStatus::from(report);
        assert_eq!(status.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn business_rejection_keeps_its_own_status() {
        let status = ErrorStatus::from(Report::new(RentalError::AlreadyReturned));
        assert_eq!(status.status, StatusCode::CONFLICT);
    }

    #[test]
    fn kernel_timeout_answers_request_timeout() {
        let status = ErrorStatus::from(Report::new(KernelError::Timeout));
        assert_eq!(status.status, StatusCode::REQUEST_TIMEOUT);
    }
}
