/// Domain-level errors of the error pages service.
///
/// Route misses are not errors here: they are `RouteOutcome` variants and
/// always end up as a rendered page.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Incident record not found: {0}")]
    RecordNotFound(u64),

    #[error("Invalid incident id: '{0}'")]
    InvalidIncidentId(String),

    #[error("Malformed info payload on incident {id}: {source}")]
    MalformedRecordInfo {
        id: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incident store error: {0}")]
    Store(#[source] anyhow::Error),

    #[error("Render error: {0}")]
    Render(#[source] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn invalid_incident_id(raw: impl Into<String>) -> Self {
        Self::InvalidIncidentId(raw.into())
    }

    /// Whether the error is resolved by redirecting to the generic 500 page.
    #[must_use]
    pub fn redirects_to_internal_error(&self) -> bool {
        matches!(self, Self::RecordNotFound(_) | Self::InvalidIncidentId(_))
    }
}
