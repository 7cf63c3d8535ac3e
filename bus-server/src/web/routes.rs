//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::domain::{Locality, RouteId, StopCode};
use crate::mailer::MailerError;
use crate::schedule::BoardError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/consultor", get(consultor_page))
        .route("/health", get(health))
        .route("/api/arrivals", get(arrivals))
        .route("/api/stops", get(stops))
        .route("/api/fares", get(fares))
        .route("/api/vehicles", get(vehicles))
        .route("/api/contact", post(contact))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Render a template into an HTML response.
fn render<T: Template>(template: T) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

/// Check if the request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Home page: timetables, stops, fares, contact form.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render(IndexTemplate::build(state.board.timetable(), &state.fares))
}

/// Live consultant page with the latest fleet snapshot server-rendered.
async fn consultor_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.fleet_feed.borrow().clone();
    render(ConsultorTemplate::build(state.board.timetable(), &snapshot))
}

/// Next-bus arrival estimate for a (route, stop) pair.
///
/// Returns JSON by default; an `Accept: text/html` request gets the
/// rendered fragment for the consultant page instead.
async fn arrivals(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<ArrivalQuery>,
) -> Result<Response, AppError> {
    let route = RouteId::parse(&req.route).map_err(|_| AppError::BadRequest {
        message: format!("Invalid route: {}", req.route),
    })?;

    let stop = StopCode::parse_normalized(&req.stop).map_err(|_| AppError::BadRequest {
        message: format!("Invalid stop code: {}", req.stop),
    })?;

    let now = Local::now().naive_local();
    let forecast = state.board.lookup(route, stop, now)?;

    if accepts_html(&headers) {
        render(ArrivalBoardTemplate {
            board: ForecastView::from_forecast(&forecast),
        })
    } else {
        Ok(Json(ArrivalResponse::from_forecast(&forecast)).into_response())
    }
}

/// The ordered stop list of a route.
async fn stops(
    State(state): State<AppState>,
    Query(req): Query<StopsQuery>,
) -> Result<Json<StopsResponse>, AppError> {
    let route = RouteId::parse(&req.route).map_err(|_| AppError::BadRequest {
        message: format!("Invalid route: {}", req.route),
    })?;

    let stops = state.board.timetable().stops(route);

    Ok(Json(StopsResponse {
        route: RouteDto::new(route, stops.len()),
        stops: stops.iter().map(StopDto::from_stop).collect(),
    }))
}

/// The fare table, or a single fare when `from`/`to` are given.
async fn fares(
    State(state): State<AppState>,
    Query(req): Query<FareQuery>,
) -> Result<Response, AppError> {
    match (&req.from, &req.to) {
        (None, None) => Ok(Json(FaresResponse::from_matrix(&state.fares)).into_response()),
        (Some(from), Some(to)) => {
            let from = Locality::parse(from).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            let to = Locality::parse(to).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;

            let price = state
                .fares
                .fare(from, to)
                .ok_or_else(|| AppError::NotFound {
                    message: format!("No fare between {from} and {to}"),
                })?;

            Ok(Json(FareDto::new(from, to, price)).into_response())
        }
        _ => Err(AppError::BadRequest {
            message: "Provide both from and to, or neither".to_string(),
        }),
    }
}

/// Current fleet positions, for the live map.
async fn vehicles(State(state): State<AppState>) -> Json<VehiclesResponse> {
    let positions = state.tracker.all_positions().await;

    Json(VehiclesResponse {
        vehicles: positions.iter().map(VehicleDto::from_position).collect(),
    })
}

/// Contact form submission.
///
/// Validation failures surface their Spanish message inline on the form;
/// provider failures are logged in full and answered generically.
async fn contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactOk>, AppError> {
    let Some(mailer) = &state.mailer else {
        return Err(AppError::Unavailable {
            message: "Configuración del servidor incorrecta".to_string(),
        });
    };

    let message = req.into_message();

    match mailer.send_contact(&message).await {
        Ok(()) => Ok(Json(ContactOk { success: true })),
        Err(MailerError::Invalid(e)) => Err(AppError::BadRequest {
            message: e.to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "contact email dispatch failed");
            Err(AppError::Internal {
                message: "Error al enviar el email. Por favor, intenta nuevamente.".to_string(),
            })
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::UnknownStop { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_html_checks_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml".parse().unwrap(),
        );
        assert!(accepts_html(&headers));
    }

    #[test]
    fn board_errors_map_to_not_found() {
        let err = BoardError::UnknownStop {
            route: RouteId::SantaFeMonteVera,
            stop: StopCode::parse("ZZ99").unwrap(),
        };
        let app_err = AppError::from(err);
        assert!(matches!(app_err, AppError::NotFound { .. }));
    }
}
