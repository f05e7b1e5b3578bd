//! Incident detail text for the `/error/id/{id}` page.

use error_pages_sdk::{ButtonColor, ButtonPatch, IncidentKind, IncidentRecord};
use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

use crate::domain::error::DomainError;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day].[month].[year] [hour]:[minute]:[second]");

const INFO_INDENT: &[u8] = b"    ";

/// Formats incident records into the detail block and back-link button.
#[derive(Debug, Clone)]
pub struct DetailFormatter {
    site_url: String,
    offset: UtcOffset,
}

impl DetailFormatter {
    /// `site_url` includes its trailing `/`; timestamps are shown at `offset`.
    #[must_use]
    pub fn new(site_url: impl Into<String>, offset: UtcOffset) -> Self {
        Self {
            site_url: site_url.into(),
            offset,
        }
    }

    /// Message, file, line, url, time and info, in that order.
    #[must_use]
    pub fn detail_text(&self, record: &IncidentRecord) -> String {
        format!(
            "<b>Fehler:</b> {message}<br /><b>Datei: </b> {file}<br /><b>Zeile:</b> {line}\
             <br /><b>URL:</b> {url}<br /><b>Uhrzeit: </b>{time}\
             <br /><b>Info:</b> <pre>{info}</pre>",
            message = record.message,
            file = record.file,
            line = record.line,
            url = record.url,
            time = self.timestamp(record.timestamp),
            info = info_section(record),
        )
    }

    /// `DD.MM.YYYY HH:MM:SS Uhr` at the configured offset.
    #[must_use]
    pub fn timestamp(&self, epoch_seconds: i64) -> String {
        let formatted = OffsetDateTime::from_unix_timestamp(epoch_seconds)
            .map_err(|e| e.to_string())
            .and_then(|t| {
                t.checked_to_offset(self.offset)
                    .ok_or_else(|| "offset moves timestamp out of range".to_owned())
            })
            .and_then(|t| t.format(TIMESTAMP_FORMAT).map_err(|e| e.to_string()));

        match formatted {
            Ok(text) => format!("{text} Uhr"),
            Err(error) => {
                warn!(epoch_seconds, %error, "Incident timestamp out of range");
                epoch_seconds.to_string()
            }
        }
    }

    /// Button leading back to the page that failed.
    #[must_use]
    pub fn back_button(&self, record: &IncidentRecord) -> ButtonPatch {
        let base = self.site_url.strip_suffix('/').unwrap_or(&self.site_url);
        ButtonPatch {
            color: Some(ButtonColor::Red),
            url: Some(format!("{base}{}", record.url)),
            text: Some(format!("Zur&uuml;ck zu {}", record.url)),
            hide: None,
        }
    }
}

/// Info payload for display.
///
/// Error incidents carry JSON which is re-indented; when it does not parse
/// the raw text is shown instead. Other kinds pass through untouched.
#[must_use]
pub fn info_section(record: &IncidentRecord) -> String {
    match record.kind {
        IncidentKind::Other => record.info.clone(),
        IncidentKind::Error => pretty_info(record).unwrap_or_else(|e| {
            warn!(incident_id = record.id, error = %e, "Showing raw incident info");
            record.info.clone()
        }),
    }
}

/// Re-serialize the JSON `info` of a record with four-space indentation.
///
/// # Errors
/// Returns `DomainError::MalformedRecordInfo` if `info` is not valid JSON.
pub fn pretty_info(record: &IncidentRecord) -> Result<String, DomainError> {
    let malformed = |source| DomainError::MalformedRecordInfo {
        id: record.id,
        source,
    };

    let value: serde_json::Value = serde_json::from_str(&record.info).map_err(malformed)?;

    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(
        &mut out,
        serde_json::ser::PrettyFormatter::with_indent(INFO_INDENT),
    );
    value.serialize(&mut ser).map_err(malformed)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
