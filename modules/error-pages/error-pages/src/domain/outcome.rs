//! Route outcome classification.
//!
//! The router hands over either the handler it matched or the reason it
//! could not match. Classification is a single step onto one of the four
//! [`PageVariant`]s.

use error_pages_sdk::PageVariant;
use tracing::{debug, warn};

use crate::domain::error::DomainError;

/// Handlers registered by the error pages router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHandler {
    /// `GET /error`, the landing point for router failures.
    Fallback,
    /// `GET /error/500`
    InternalError,
    /// `GET /error/id/{id}`
    InternalErrorWithId,
}

/// How the router resolved (or failed to resolve) a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Matched {
        handler: PageHandler,
        /// Raw `id` path capture, present for [`PageHandler::InternalErrorWithId`].
        id: Option<String>,
    },
    NotFound,
    MethodNotAllowed,
    /// A router failure classification this module does not know.
    Unclassified(String),
}

impl RouteOutcome {
    #[must_use]
    pub fn matched(handler: PageHandler) -> Self {
        Self::Matched { handler, id: None }
    }

    #[must_use]
    pub fn incident(id: impl Into<String>) -> Self {
        Self::Matched {
            handler: PageHandler::InternalErrorWithId,
            id: Some(id.into()),
        }
    }

    /// Map a router failure code (`NOT_FOUND`, `METHOD_NOT_ALLOWED`) onto an outcome.
    #[must_use]
    pub fn from_router_failure(code: &str) -> Self {
        match code {
            "NOT_FOUND" => Self::NotFound,
            "METHOD_NOT_ALLOWED" => Self::MethodNotAllowed,
            other => Self::Unclassified(other.to_owned()),
        }
    }
}

/// Pick the page variant for a route outcome.
///
/// Unknown router failures and a bare `GET /error` both land on the
/// not-found page.
///
/// # Errors
/// Returns `DomainError::InvalidIncidentId` when the incident handler matched
/// but its `id` capture is missing or does not fit a `u64`.
pub fn classify(outcome: &RouteOutcome) -> Result<PageVariant, DomainError> {
    match outcome {
        RouteOutcome::Matched {
            handler: PageHandler::InternalError,
            ..
        } => Ok(PageVariant::InternalError),
        RouteOutcome::Matched {
            handler: PageHandler::InternalErrorWithId,
            id,
        } => {
            let raw = id.as_deref().unwrap_or_default();
            raw.parse::<u64>()
                .map(PageVariant::InternalErrorWithId)
                .map_err(|_| DomainError::invalid_incident_id(raw))
        }
        RouteOutcome::Matched {
            handler: PageHandler::Fallback,
            ..
        } => {
            debug!("Error landing page requested without a router failure");
            Ok(PageVariant::NotFound)
        }
        RouteOutcome::NotFound => Ok(PageVariant::NotFound),
        RouteOutcome::MethodNotAllowed => Ok(PageVariant::MethodNotAllowed),
        RouteOutcome::Unclassified(code) => {
            warn!(
                classification = %code,
                "Unrecognized router failure classification, serving not-found page"
            );
            Ok(PageVariant::NotFound)
        }
    }
}
