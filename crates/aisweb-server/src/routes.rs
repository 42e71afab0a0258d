//! HTTP routes.

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::Utc;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::error::ServerResult;
use crate::pages::{self, EventPageOutcome};
use crate::render;
use crate::state::AppState;

/// Builds the site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/team", get(team))
        .route("/events", get(events))
        .route("/events/", get(events_index))
        .route("/events/{slug}", get(event_detail))
        .route("/projects", get(projects))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    path = %req.uri().path(),
                )
            }),
        )
}

/// GET / - Homepage summary
async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::home_page(state.site_name()))
}

/// GET /team - Officer roster
async fn team(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let officers = pages::load_team(&state).await?;
    Ok(Html(render::team_page(state.site_name(), &officers)))
}

/// GET /events - Event listing
async fn events(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let page = pages::load_events_page(&state, Utc::now()).await?;
    Ok(Html(render::events_page(state.site_name(), &page)))
}

/// GET /events/ - No slug
async fn events_index(State(state): State<AppState>) -> ServerResult<Response> {
    event_response(&state, None).await
}

/// GET /events/{slug} - Event detail
async fn event_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ServerResult<Response> {
    event_response(&state, Some(&slug)).await
}

async fn event_response(state: &AppState, slug: Option<&str>) -> ServerResult<Response> {
    let now = Utc::now();
    Ok(match pages::load_event_page(state, slug, now).await? {
        EventPageOutcome::Redirect(to) => Redirect::to(to).into_response(),
        EventPageOutcome::NotFound => not_found_response(state),
        EventPageOutcome::Render(page) => {
            Html(render::event_page(state.site_name(), &page)).into_response()
        }
    })
}

/// GET /projects - Placeholder
async fn projects(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let demos = pages::load_projects(&state).await?;
    Ok(Html(render::projects_page(state.site_name(), &demos)))
}

/// GET /healthz - Liveness
async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "content_source": state.content.name(),
    }))
}

async fn not_found(State(state): State<AppState>) -> Response {
    not_found_response(&state)
}

fn not_found_response(state: &AppState) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page(state.site_name())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use aisweb_content::{ContentError, ContentSource, ErrorContentSource, StaticContentSource};
    use aisweb_core::{Event, Location, Officer};
    use axum::http::header;
    use chrono::{DateTime, TimeZone};
    use tower::util::ServiceExt; // for `oneshot`

    use crate::config::SiteConfig;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn source() -> StaticContentSource {
        StaticContentSource::new()
            .with_event(
                Event::new(
                    "future-talk",
                    "Future Talk",
                    utc(2999, 1, 1, 18, 0, 0),
                    utc(2999, 1, 1, 19, 0, 0),
                )
                .with_event_type("Workshop")
                .with_location(Location::Zoom)
                .with_join_link("https://zoom.us/j/123")
                .with_signup("https://forms.example.org/rsvp")
                .with_presenter("Jane Doe"),
            )
            .with_event(
                Event::new(
                    "old-stream",
                    "Old Stream",
                    utc(2000, 1, 1, 18, 0, 0),
                    utc(2000, 1, 1, 19, 0, 0),
                )
                .with_location(Location::YouTube)
                .with_join_link("https://youtube.com/watch?v=abc")
                .with_signup("https://forms.example.org/old"),
            )
            .with_event(
                Event::new(
                    "old-social",
                    "Old Social",
                    utc(2000, 2, 1, 18, 0, 0),
                    utc(2000, 2, 1, 19, 0, 0),
                )
                .with_event_type("Social")
                .with_location(Location::InPerson)
                .with_room("SU 2.602"),
            )
            .with_event(
                Event::new(
                    "hybrid-now",
                    "Hybrid Now",
                    utc(2000, 1, 1, 0, 0, 0),
                    utc(2999, 1, 1, 0, 0, 0),
                )
                .with_location(Location::Hybrid)
                .with_room("ECSW 1.315")
                .with_join_link("https://meet.google.com/abc-defg-hij"),
            )
            .with_officer(
                Officer::new("Jane Doe", "President").with_linkedin("linkedin.com/in/jane-doe/"),
            )
    }

    fn app_with(source: impl ContentSource + 'static) -> Router {
        router(AppState::new(
            SiteConfig::default().with_site_url("https://example.org"),
            Arc::new(source),
        ))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn homepage() {
        let (status, body) = get(app_with(source()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("UNLOCKING THE POWER OF"));
    }

    #[tokio::test]
    async fn healthz_reports_source() {
        let (status, body) = get(app_with(source()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["content_source"], "memory");
    }

    mod event_detail {
        use super::*;

        #[tokio::test]
        async fn missing_slug_redirects() {
            for uri in ["/events/", "/events/%20%20"] {
                let response = app_with(source())
                    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                    .await
                    .unwrap();
                assert!(response.status().is_redirection(), "{uri}");
                assert_eq!(response.headers()[header::LOCATION], "/events");
            }
        }

        #[tokio::test]
        async fn unknown_slug_is_404() {
            let (status, body) = get(app_with(source()), "/events/nope").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.contains("Page not found"));
        }

        #[tokio::test]
        async fn upcoming_event() {
            let (status, body) = get(app_with(source()), "/events/future-talk").await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("<title>Future Talk \u{2013} AIS</title>"));
            assert!(body.contains(r#"<div class="event-type">WORKSHOP</div>"#));
            assert!(body.contains(">RSVP</a>"));
            assert!(body.contains(r#"href="https://zoom.us/j/123">Stream Link</a>"#));
            assert!(body.contains("Add To Calendar"));
            assert!(body.contains("Jan 1, 2999 @ 12:00 pm CST"));
            assert!(body.contains("https://www.linkedin.com/in/jane-doe"));
            assert!(body.contains(r#"value="https://example.org/events/future-talk""#));
            assert!(!body.contains("live-dot"));
        }

        #[tokio::test]
        async fn past_recording() {
            let (_, body) = get(app_with(source()), "/events/old-stream").await;
            assert!(body.contains(">Watch Recording</a>"));
            assert!(!body.contains("RSVP"));
            assert!(!body.contains("Add To Calendar"));
            assert!(body.contains("Presented by:"));
        }

        #[tokio::test]
        async fn past_social_has_no_buttons_or_presenters() {
            let (_, body) = get(app_with(source()), "/events/old-social").await;
            assert!(body.contains(r#"<div class="actions"></div>"#));
            assert!(!body.contains("Presented by:"));
            assert!(body.contains(r#"<span class="location">SU 2.602</span>"#));
        }

        #[tokio::test]
        async fn live_hybrid_event() {
            let (_, body) = get(app_with(source()), "/events/hybrid-now").await;
            assert!(body.contains(
                r#"href="https://map.concept3d.com/?id=1772#!s/ECSW 1.315">Get Directions<span class="live-dot"></span></a>"#
            ));
            assert!(body.contains(
                r#"href="https://meet.google.com/abc-defg-hij">Join event<span class="live-dot"></span></a>"#
            ));
        }
    }

    #[tokio::test]
    async fn events_listing() {
        let (status, body) = get(app_with(source()), "/events").await;
        assert_eq!(status, StatusCode::OK);
        let upcoming = body.find("Upcoming Events").unwrap();
        let past = body.find("Past Events").unwrap();
        let future_talk = body.find(r#"href="/events/future-talk""#).unwrap();
        let old_stream = body.find(r#"href="/events/old-stream""#).unwrap();
        assert!(upcoming < future_talk && future_talk < past && past < old_stream);
    }

    #[tokio::test]
    async fn team_page() {
        let (status, body) = get(app_with(source()), "/team").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<div class="name">Jane Doe</div>"#));
        assert!(body.contains("/default_photo.svg"));
    }

    #[tokio::test]
    async fn projects_placeholder() {
        let (status, body) = get(app_with(source()), "/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Coming Soon"));
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let (status, _) = get(app_with(source()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn content_failure_is_500() {
        let app = app_with(ErrorContentSource::new(
            "directory",
            ContentError::invalid_content("broken json"),
        ));
        for uri in ["/events", "/events/anything", "/team", "/projects"] {
            let (status, body) = get(app.clone(), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert!(body.contains("Something went wrong"));
        }
    }
}
