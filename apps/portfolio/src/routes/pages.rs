//! Axum route handlers for the HTML pages.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Form,
};
use axum_extra::extract::{CookieJar, Query, QueryRejection};
use tracing::warn;

use crate::contact::{submit_form, ContactForm};
use crate::content::catalog;
use crate::errors::AppError;
use crate::pages::contact::ContactView;
use crate::pages::home::{HomeAction, HomeView};
use crate::pages::projects::ProjectsView;
use crate::pages::{about, contact, dashboard, home, projects, route, Page};
use crate::routes::{resolve_session, PageQuery};
use crate::session::SessionContext;
use crate::state::AppState;

async fn asset_available(state: &AppState, name: &str) -> bool {
    let available = state.assets.exists(name).await;
    if !available {
        warn!(asset = name, "Image asset missing, rendering fallback");
    }
    available
}

async fn render_page(
    state: &AppState,
    session: &SessionContext,
    page: Page,
    query: &PageQuery,
) -> Result<String, AppError> {
    let html = match page {
        Page::Home => home::render(&HomeView {
            profile_image_available: asset_available(state, catalog::PROFILE_IMAGE).await,
            action: query.action.as_deref().and_then(HomeAction::parse),
        }),
        Page::About => about::render(session),
        Page::Projects => {
            let criteria = query.criteria(&state.config.default_filter)?;
            let wants_screenshot = session
                .projects()
                .iter()
                .any(|p| p.has_image && criteria.matches(p));
            let screenshot_available =
                wants_screenshot && asset_available(state, catalog::PROJECT_SCREENSHOT).await;
            projects::render(
                session,
                &ProjectsView {
                    criteria,
                    screenshot_available,
                    viewed: query.view,
                },
            )
        }
        Page::Dashboard => dashboard::render(session),
        Page::Contact => contact::render(&ContactView::default()),
    };
    Ok(html)
}

/// GET /
///
/// Renders the page named by `?page=`, or the session's current page when no
/// page is given. Unknown labels are a 404.
pub async fn handle_page(
    State(state): State<AppState>,
    jar: CookieJar,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<(CookieJar, Html<String>), AppError> {
    let query = PageQuery::from_extracted(query)?;
    let (session, jar) = resolve_session(&state, jar);
    let page = match query.page.as_deref() {
        Some(label) => {
            let page = route(label)
                .ok_or_else(|| AppError::NotFound(format!("Unknown page '{label}'")))?;
            session.navigate(page)
        }
        None => session.current_page(),
    };
    let html = render_page(&state, &session, page, &query).await?;
    Ok((jar, Html(html)))
}

/// POST /contact
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> (CookieJar, Html<String>) {
    let (session, jar) = resolve_session(&state, jar);
    session.navigate(Page::Contact);
    let outcome = submit_form(&form);
    let html = contact::render(&ContactView::after_submit(form, outcome));
    (jar, Html(html))
}

/// GET /assets/:name
pub async fn handle_asset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state
        .assets
        .load(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {name} not found")))?;
    Ok((
        [(header::CONTENT_TYPE, crate::assets::content_type_for(&name))],
        bytes,
    ))
}
