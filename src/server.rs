//! HTTP shell around the screens.
//!
//! Each request resumes (or starts) the browser session, builds the screen
//! for the route, feeds it the request as messages and carries out the
//! [`ScreenAction`]s it returns against the session store.

use std::future::Future;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::catalog::{self, Icon};
use crate::config::Settings;
use crate::error::TryOnError;
use crate::image::CapturedImage;
use crate::session::{OpenedSession, SessionId, SessionStore, CAPTURED_IMAGE_KEY, SESSION_COOKIE};
use crate::ui::components::button::Button;
use crate::ui::components::layout::Layout;
use crate::ui::screens::{CapturePhase, CaptureScreen, SelectionQuery, TryOnScreen};
use crate::ui::{CaptureMessage, Route, ScreenAction};

/// State shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            sessions: SessionStore::new(),
            settings: Arc::new(settings),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // url-encoding can triple the size of a base64 payload
    let body_limit = state.settings.max_image_bytes().saturating_mul(3).saturating_add(64 * 1024);

    Router::new()
        .route("/", get(|| async { Redirect::to(Route::Capture.path()) }))
        .route(Route::Capture.path(), get(capture_page).post(capture_submit))
        .route(Route::TryOn.path(), get(try_on_page))
        .route("/api/categories", get(list_categories))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub async fn bind(settings: &Settings) -> std::io::Result<TcpListener> {
    TcpListener::bind(settings.socket_addr()).await
}

/// Serves the app on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!("Starting try-on server on {}", listener.local_addr()?);

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn capture_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let opened = state.sessions.open(presented_session(&headers)).await;
    let screen = CaptureScreen::new(state.settings.processing_delay());

    with_session_cookie(&opened, Html(screen.view()))
}

#[derive(Debug, Deserialize)]
struct CaptureForm {
    #[serde(default)]
    image: String,
}

async fn capture_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<CaptureForm>, FormRejection>,
) -> Response {
    let opened = state.sessions.open(presented_session(&headers)).await;
    let mut screen = CaptureScreen::new(state.settings.processing_delay());

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let status = rejection.status();
            let reason = upload_rejection_reason(&rejection, state.settings.max_image_bytes());
            screen.update(CaptureMessage::ImageRejected(reason.to_string()));
            return with_session_cookie(&opened, (status, Html(screen.view())));
        }
    };

    let message = match CapturedImage::parse(form.image, state.settings.max_image_bytes()) {
        Ok(image) => CaptureMessage::ImageCaptured(image),
        Err(e) => CaptureMessage::ImageRejected(e.to_string()),
    };

    let action = screen.update(message);
    if let Some(redirect) = run_action(&state, &opened.id, action).await {
        return with_session_cookie(&opened, redirect);
    }

    let status = match screen.phase() {
        CapturePhase::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };
    with_session_cookie(&opened, (status, Html(screen.view())))
}

/// User-facing reason for a capture form that never reached the handler.
fn upload_rejection_reason(rejection: &FormRejection, limit: usize) -> TryOnError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        TryOnError::UploadTooLarge { limit }
    } else {
        TryOnError::UnreadableUpload(rejection.body_text())
    }
}

async fn try_on_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SelectionQuery>,
) -> Response {
    let opened = state.sessions.open(presented_session(&headers)).await;

    if let Some(remaining) = state.sessions.remaining_hold(&opened.id).await {
        debug!(?remaining, "try-on requested while still processing");
        let screen = CaptureScreen::resume_processing(state.settings.processing_delay(), remaining);
        return with_session_cookie(&opened, Html(screen.view()));
    }

    let stored = state.sessions.get_item(&opened.id, CAPTURED_IMAGE_KEY).await;
    let mut screen = TryOnScreen::enter(stored);
    screen.apply_query(&query);

    with_session_cookie(&opened, Html(screen.view(&state.settings.view_context())))
}

async fn list_categories() -> Json<&'static [catalog::Category]> {
    Json(catalog::categories())
}

async fn not_found() -> (StatusCode, Html<String>) {
    let back = Button::new("Back to the Demo")
        .with_icon(Icon::Camera)
        .with_href(Route::Capture.path())
        .as_html();

    (
        StatusCode::NOT_FOUND,
        Html(Layout::new("Not found").render(&format!(
            r#"<div class="card notice"><h1>Page not found</h1><p class="lead">There is nothing here yet.</p>{back}</div>"#
        ))),
    )
}

/// Carries out the side effects a screen asked for.
///
/// Returns a redirect if one of the steps navigates immediately.
async fn run_action(state: &AppState, id: &SessionId, action: ScreenAction) -> Option<Redirect> {
    let mut redirect = None;

    for step in action.into_steps() {
        match step {
            ScreenAction::StoreImage(image) => {
                state.sessions.set_item(id, CAPTURED_IMAGE_KEY, image.into_string()).await;
            }
            ScreenAction::NavigateAfter { route, delay } => {
                debug!(route = route.path(), ?delay, "navigation scheduled");
                state.sessions.hold_until(id, Instant::now() + delay).await;
            }
            ScreenAction::Navigate(Route::Recommendations) => {
                redirect = Some(Redirect::to(&state.settings.recommendations_url));
            }
            ScreenAction::Navigate(route) => redirect = Some(Redirect::to(route.path())),
            ScreenAction::None | ScreenAction::Batch(_) => {}
        }
    }

    redirect
}

fn presented_session(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value))
}

fn with_session_cookie(opened: &OpenedSession, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();

    if opened.created {
        let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", opened.id.as_str());
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(%e, "failed to encode session cookie"),
        }
    }

    response
}
