use axum::http::StatusCode;

use crate::api::rest::problem::Problem;
use crate::domain::error::DomainError;

const TYPE_BASE: &str = "https://errors.example.com/";

/// Map domain error to RFC9457 Problem
///
/// Only failures of the error page machinery itself get here; a rendered
/// error page about an error page is never attempted.
#[must_use]
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::Store(_) => {
            tracing::error!(error = %e, "Incident store failed");
            internal_problem(
                "ERROR_PAGES_STORE_UNAVAILABLE",
                "Incident details are currently unavailable",
            )
        }
        DomainError::Render(_) => {
            tracing::error!(error = %e, "Error page rendering failed");
            internal_problem("ERROR_PAGES_RENDER_FAILED", "The error page could not be rendered")
        }
        DomainError::RecordNotFound(_)
        | DomainError::InvalidIncidentId(_)
        | DomainError::MalformedRecordInfo { .. } => {
            tracing::error!(error = %e, "Unresolved error page failure");
            internal_problem("ERROR_PAGES_INTERNAL", "An internal error occurred")
        }
    };

    problem.with_instance(instance).with_trace_id(trace_id)
}

fn internal_problem(code: &str, detail: &str) -> Problem {
    Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
        .with_code(code)
        .with_type(format!("{TYPE_BASE}{code}"))
}
