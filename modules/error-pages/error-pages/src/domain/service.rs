use std::sync::Arc;

use error_pages_sdk::{
    ButtonPatch, DisplayBoxPatch, ErrorPage, IncidentRecord, IncidentRecordStore, Navigation,
    NavigationEntry, PageRenderer, PageVariant, WidgetFactory, WidgetHandle,
};
use time::UtcOffset;
use tracing::{debug, info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::formatter::DetailFormatter;
use crate::domain::merger::{BoxDefaults, merge};
use crate::domain::outcome::{RouteOutcome, classify};

/// Navigation point highlighted on every error page.
pub const ACTIVE_NAVIGATION_POINT: &str = "Community";

/// Site-relative target of the redirect issued on an incident miss.
pub const INTERNAL_ERROR_PATH: &str = "error/500";

const BOX_TITLE: &str = "Oops!";
const BACK_TO_COMMUNITY: &str = "Zur&uuml;ck in die Community";

const NOT_FOUND_TITLE: &str = "404 - Seite nicht gefunden";
const NOT_FOUND_TEXT: &str = "Die von dir aufgerufene Seite konnte nicht gefunden werden.<br />\
    Stelle sicher, dass du dich bei der eingegebenen Url nicht verschrieben hast.";

const METHOD_NOT_ALLOWED_TITLE: &str = "Zugriff verweigert!";
const METHOD_NOT_ALLOWED_TEXT: &str = "Du hast keinen Zugriff auf diese Seite.<br /><br />\
    Dies kann daran liegen, dass dein Web-Browser diese Seite falsch angefragt hat.";

const INTERNAL_ERROR_TITLE: &str = "500 - Irgendetwas ist schiefgelaufen!";
const INTERNAL_ERROR_TEXT: &str = "W&auml;hrend der Verarbeitung deiner Anfrage ist etwas \
    schiefgelaufen.<br />Informiere die Administration &uuml;ber diesen Unfall, sofern sie \
    noch nicht dar&uuml;ber Informiert ist.";

/// Configuration for the error page service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Absolute base url of the site. A missing trailing `/` is added by
    /// [`ErrorPageService::new`].
    pub site_url: String,
    pub news_slider_grid: u32,
    /// Offset incident timestamps are displayed at.
    pub timestamp_offset: UtcOffset,
}

/// What the transport layer should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    Render(RenderedPage),
    Redirect { location: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub variant: PageVariant,
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Per-request page inputs, built by the variant handlers and consumed by
/// the merger. Lives exactly as long as one `handle` call.
struct PageRequestContext {
    page_title: &'static str,
    patch: DisplayBoxPatch,
    show_news: bool,
}

impl PageRequestContext {
    fn generic(variant: PageVariant, page_title: &'static str, text: &str) -> Self {
        Self {
            page_title,
            patch: DisplayBoxPatch {
                title: Some(BOX_TITLE.to_owned()),
                text: Some(text.to_owned()),
                button: ButtonPatch {
                    text: Some(BACK_TO_COMMUNITY.to_owned()),
                    ..ButtonPatch::default()
                },
                ..DisplayBoxPatch::default()
            },
            show_news: variant.shows_news(),
        }
    }
}

/// Error page controller.
///
/// Holds only immutable state; everything request specific is carried in a
/// `PageRequestContext` created inside [`ErrorPageService::handle`].
pub struct ErrorPageService {
    store: Arc<dyn IncidentRecordStore>,
    navigation: Arc<dyn Navigation>,
    widgets: Arc<dyn WidgetFactory>,
    renderer: Arc<dyn PageRenderer>,
    config: ServiceConfig,
    defaults: BoxDefaults,
    formatter: DetailFormatter,
}

impl ErrorPageService {
    #[must_use]
    pub fn new(
        store: Arc<dyn IncidentRecordStore>,
        navigation: Arc<dyn Navigation>,
        widgets: Arc<dyn WidgetFactory>,
        renderer: Arc<dyn PageRenderer>,
        mut config: ServiceConfig,
    ) -> Self {
        if !config.site_url.ends_with('/') {
            config.site_url.push('/');
        }
        let defaults = BoxDefaults::for_site(&config.site_url);
        let formatter = DetailFormatter::new(config.site_url.clone(), config.timestamp_offset);
        Self {
            store,
            navigation,
            widgets,
            renderer,
            config,
            defaults,
            formatter,
        }
    }

    /// Resolve a route outcome into a rendered page or a redirect.
    ///
    /// Incident misses (unknown or unparseable id) redirect to the generic
    /// 500 page instead of rendering a second error page.
    ///
    /// # Errors
    /// Returns `DomainError::Store` if the incident store fails and
    /// `DomainError::Render` if the renderer fails.
    #[instrument(skip_all)]
    pub async fn handle(&self, outcome: &RouteOutcome) -> Result<PageResponse, DomainError> {
        // Highlight is per request and applies to redirects as well.
        let navigation = self.navigation.entries(ACTIVE_NAVIGATION_POINT);

        match self.build_page(outcome, navigation).await {
            Ok(page) => self.render(&page).map(PageResponse::Render),
            Err(e) if e.redirects_to_internal_error() => {
                info!(error = %e, "Incident page unavailable, redirecting to generic error page");
                Ok(self.redirect_to_internal_error())
            }
            Err(e) => Err(e),
        }
    }

    async fn build_page(
        &self,
        outcome: &RouteOutcome,
        navigation: Vec<NavigationEntry>,
    ) -> Result<ErrorPage, DomainError> {
        let variant = classify(outcome)?;
        debug!(status = variant.status_code(), "Building error page");

        let ctx = match variant {
            PageVariant::InternalErrorWithId(id) => {
                let record = self.lookup(id).await?;
                self.incident_context(&record)
            }
            PageVariant::InternalError => {
                PageRequestContext::generic(variant, INTERNAL_ERROR_TITLE, INTERNAL_ERROR_TEXT)
            }
            PageVariant::NotFound => {
                PageRequestContext::generic(variant, NOT_FOUND_TITLE, NOT_FOUND_TEXT)
            }
            PageVariant::MethodNotAllowed => PageRequestContext::generic(
                variant,
                METHOD_NOT_ALLOWED_TITLE,
                METHOD_NOT_ALLOWED_TEXT,
            ),
        };

        Ok(self.assemble(variant, ctx, navigation))
    }

    async fn lookup(&self, id: u64) -> Result<IncidentRecord, DomainError> {
        self.store
            .get_by_id(id)
            .await
            .map_err(DomainError::Store)?
            .ok_or(DomainError::RecordNotFound(id))
    }

    fn incident_context(&self, record: &IncidentRecord) -> PageRequestContext {
        PageRequestContext {
            page_title: INTERNAL_ERROR_TITLE,
            patch: DisplayBoxPatch {
                title: Some(BOX_TITLE.to_owned()),
                text: Some(self.formatter.detail_text(record)),
                button: self.formatter.back_button(record),
                ..DisplayBoxPatch::default()
            },
            show_news: false,
        }
    }

    fn assemble(
        &self,
        variant: PageVariant,
        ctx: PageRequestContext,
        navigation: Vec<NavigationEntry>,
    ) -> ErrorPage {
        let news_slider = if ctx.show_news {
            self.news_slider()
        } else {
            None
        };

        ErrorPage {
            variant,
            page_title: ctx.page_title.to_owned(),
            display_box: merge(ctx.page_title, ctx.patch, &self.defaults),
            navigation,
            news_slider,
        }
    }

    fn news_slider(&self) -> Option<WidgetHandle> {
        match self.widgets.create_news_slider(self.config.news_slider_grid) {
            Ok(widget) => Some(widget),
            Err(e) => {
                warn!(error = %e, "News slider unavailable, rendering page without it");
                None
            }
        }
    }

    fn render(&self, page: &ErrorPage) -> Result<RenderedPage, DomainError> {
        let body = self.renderer.render(page).map_err(DomainError::Render)?;
        Ok(RenderedPage {
            variant: page.variant,
            status: page.variant.status_code(),
            content_type: self.renderer.content_type(),
            body,
        })
    }

    fn redirect_to_internal_error(&self) -> PageResponse {
        PageResponse::Redirect {
            location: format!("{}{INTERNAL_ERROR_PATH}", self.config.site_url),
        }
    }
}
