pub mod api;
pub mod health;
pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use axum_extra::extract::{Query, QueryRejection};
use serde::Deserialize;
use uuid::Uuid;

use crate::content::filter::FilterCriteria;
use crate::content::Category;
use crate::errors::AppError;
use crate::session::{SessionContext, SESSION_COOKIE};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(pages::handle_page))
        .route("/contact", post(pages::handle_contact_submit))
        .route("/assets/:name", get(pages::handle_asset))
        // JSON API
        .route("/api/v1/pages", get(api::handle_pages))
        .route("/api/v1/skills", get(api::handle_skills))
        .route("/api/v1/projects", get(api::handle_projects))
        .route("/api/v1/metrics", get(api::handle_metrics))
        .route("/api/v1/contact", post(api::handle_contact))
        .with_state(state)
}

/// Resolves the visitor's session from the cookie jar, issuing a new cookie
/// whenever a fresh session had to be created.
pub fn resolve_session(state: &AppState, jar: CookieJar) -> (Arc<SessionContext>, CookieJar) {
    let requested = jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok());
    let session = state.sessions.resolve(requested);
    if requested == Some(session.id) {
        return (session, jar);
    }
    let cookie = Cookie::build((SESSION_COOKIE, session.id.to_string()))
        .path("/")
        .http_only(true);
    (session, jar.add(cookie))
}

/// Query parameters shared by the page route and the projects API.
/// `category` may repeat, hence the axum-extra `Query` extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    /// Present once the visitor has submitted the filter form.
    pub filtered: Option<String>,
    pub action: Option<String>,
    pub view: Option<usize>,
}

impl PageQuery {
    /// Unwraps the extractor result, reporting malformed parameters through
    /// the JSON error envelope instead of axum's plain-text rejection.
    pub fn from_extracted(
        extracted: Result<Query<PageQuery>, QueryRejection>,
    ) -> Result<PageQuery, AppError> {
        extracted
            .map(|Query(query)| query)
            .map_err(|rejection| AppError::Validation(rejection.to_string()))
    }

    /// Builds filter criteria, falling back to `defaults` for anything the
    /// visitor has not chosen. After a form submission an empty category
    /// selection stays empty.
    pub fn criteria(&self, defaults: &FilterCriteria) -> Result<FilterCriteria, AppError> {
        let submitted = self.filtered.is_some() || !self.category.is_empty();
        let categories = if submitted {
            self.category
                .iter()
                .map(|c| c.parse::<Category>().map_err(AppError::Validation))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            defaults.categories.iter().copied().collect()
        };
        let (default_lo, default_hi) = defaults.year_range;
        let range = (
            self.year_from.unwrap_or(default_lo),
            self.year_to.unwrap_or(default_hi),
        );
        Ok(FilterCriteria::new(categories, range).clamped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            assets_dir: dir.path().to_path_buf(),
            metrics_seed: Some(5),
            ..Config::default()
        };
        (AppState::new(config), dir)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn session_cookie(response: &axum::response::Response) -> String {
        let raw = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie issued")
            .to_str()
            .unwrap();
        raw.split(';').next().unwrap().to_string()
    }

    #[test]
    fn test_criteria_defaults_when_nothing_submitted() {
        let q = PageQuery::default();
        assert_eq!(
            q.criteria(&FilterCriteria::default()).unwrap(),
            FilterCriteria::default()
        );
    }

    #[test]
    fn test_criteria_empty_after_submission() {
        let q = PageQuery {
            filtered: Some("1".into()),
            ..PageQuery::default()
        };
        let criteria = q.criteria(&FilterCriteria::default()).unwrap();
        assert!(criteria.categories.is_empty());
    }

    #[test]
    fn test_criteria_rejects_unknown_category() {
        let q = PageQuery {
            category: vec!["Astrology".into()],
            ..PageQuery::default()
        };
        assert!(matches!(
            q.criteria(&FilterCriteria::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _dir) = test_state();
        let response = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_first_visit_renders_home_and_sets_cookie() {
        let (state, _dir) = test_state();
        let response = build_router(state)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(session_cookie(&response).starts_with("portfolio_session="));
        let html = body_string(response).await;
        assert!(html.contains("Welcome!"));
        // No assets dir content, so the profile image falls back to a warning.
        assert!(html.contains("profpict.png&#39; not found"));
    }

    #[tokio::test]
    async fn test_navigation_persists_current_page() {
        let (state, _dir) = test_state();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(Request::get("/?page=About").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        assert!(body_string(response).await.contains("About Me"));

        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_string(response).await.contains("About Me"));
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let (state, _dir) = test_state();
        let response = build_router(state)
            .oneshot(Request::get("/?page=Blog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_numbers_use_error_envelope() {
        let (state, _dir) = test_state();
        let app = build_router(state);
        for uri in ["/?page=Projects&view=abc", "/api/v1/projects?year_from=abc"] {
            let response = app
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json",
                "{uri}"
            );
            let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_projects_filter_via_query() {
        let (state, _dir) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::get("/?page=Projects&filtered=1&category=EDA&year_from=2023&year_to=2023")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert_eq!(html.matches("<details").count(), 1);
        assert!(html.contains("E-commerce Sales Analysis"));
    }

    #[tokio::test]
    async fn test_projects_empty_selection_shows_empty_state() {
        let (state, _dir) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::get("/?page=Projects&filtered=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_string(response)
            .await
            .contains("No projects match your filter"));
    }

    #[tokio::test]
    async fn test_contact_form_rejection_keeps_values() {
        let (state, _dir) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::post("/contact")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=&email=a%40b.com&subject=Others&message=hi"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Please fill in all fields!"));
        assert!(html.contains(r#"value="a@b.com""#));
    }

    #[tokio::test]
    async fn test_api_contact_status_codes() {
        let (state, _dir) = test_state();
        let app = build_router(state);
        let post = |body: &str| {
            Request::post("/api/v1/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let rejected = app
            .clone()
            .oneshot(post(r#"{"name":"","email":"a@b.com","subject":"Others","message":"hi"}"#))
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body_string(rejected).await).unwrap();
        assert_eq!(json["error"]["message"], "missing required field");

        let accepted = app
            .oneshot(post(r#"{"name":"Name","email":"a@b.com","subject":"Others","message":"hi"}"#))
            .await
            .unwrap();
        assert_eq!(accepted.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(accepted).await).unwrap();
        assert_eq!(json["status"], "accepted");
    }

    #[tokio::test]
    async fn test_api_metrics_are_session_stable() {
        let (state, _dir) = test_state();
        let app = build_router(state);
        let first = app
            .clone()
            .oneshot(Request::get("/api/v1/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let cookie = session_cookie(&first);
        let first: Value = serde_json::from_str(&body_string(first).await).unwrap();
        assert_eq!(first["samples"].as_array().unwrap().len(), 30);

        let second = app
            .oneshot(
                Request::get("/api/v1/metrics")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let second: Value = serde_json::from_str(&body_string(second).await).unwrap();
        assert_eq!(first["samples"], second["samples"]);
    }

    #[tokio::test]
    async fn test_api_projects_defaults_and_filters() {
        let (state, _dir) = test_state();
        let app = build_router(state);
        let all = app
            .clone()
            .oneshot(Request::get("/api/v1/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let all: Value = serde_json::from_str(&body_string(all).await).unwrap();
        assert_eq!(all["projects"].as_array().unwrap().len(), 3);

        let bad = app
            .oneshot(
                Request::get("/api/v1/projects?category=Astrology")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assets_served_or_404() {
        let (state, dir) = test_state();
        std::fs::write(dir.path().join("profpict.png"), b"\x89PNG").unwrap();
        let app = build_router(state);

        let found = app
            .clone()
            .oneshot(Request::get("/assets/profpict.png").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(found.status(), StatusCode::OK);
        assert_eq!(found.headers()[header::CONTENT_TYPE], "image/png");

        let missing = app
            .clone()
            .oneshot(Request::get("/assets/project1_ss.png").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let home = app
            .oneshot(Request::get("/?page=Home").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(body_string(home).await.contains(r#"<img src="/assets/profpict.png""#));
    }
}
