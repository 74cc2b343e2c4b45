//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use reqwest::Url;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{DomainError, InvalidLine, LineFilter};
use crate::geometry::GeometryMode;
use crate::map::{MapComposer, MapError, write_artifact};
use crate::planner::{PlanError, Planner};
use crate::trace::{TraceError, TrackTraces};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page).post(submit_route))
        .route("/all_routes", get(all_routes).post(all_routes))
        .route("/route_info", get(route_info))
        .route("/station_details", get(station_details))
        .route("/map", get(map_page))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(plan_route))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Page for unknown paths.
async fn not_found(uri: Uri) -> Response {
    AppError::NotFound {
        message: format!("No page at {}", uri.path()),
    }
    .into_page()
}

/// Relative URL of the full-screen map for a route or a line filter.
pub fn map_url(start: Option<&str>, end: Option<&str>, filter: LineFilter) -> String {
    let Ok(mut url) = Url::parse("http://localhost/map") else {
        return "/map".to_string();
    };
    {
        let mut query = url.query_pairs_mut();
        if let Some(start) = start {
            query.append_pair("start", start);
        }
        if let Some(end) = end {
            query.append_pair("end", end);
        }
        if filter != LineFilter::All {
            query.append_pair("line", filter.slug());
        }
    }
    match url.query() {
        Some(q) if !q.is_empty() => format!("{}?{}", url.path(), q),
        _ => url.path().to_string(),
    }
}

/// Turn a rendered page or an error into a response.
fn page(result: Result<String, AppError>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => e.into_page(),
    }
}

/// Index page with the route form.
async fn index_page(State(state): State<AppState>) -> Response {
    page(render_index(&state, &RouteForm::default()))
}

/// Route form submission.
async fn submit_route(State(state): State<AppState>, Form(form): Form<RouteForm>) -> Response {
    page(render_index(&state, &form))
}

fn render_index(state: &AppState, form: &RouteForm) -> Result<String, AppError> {
    let registry = state.network.registry();
    let start = form.start.trim();
    let end = form.end.trim();
    let submitted = !start.is_empty() || !end.is_empty();

    let mut template = IndexTemplate {
        options: StationOption::list(registry, start, end),
        notice: None,
        route: None,
        map_url: None,
    };

    if registry.contains(start) && registry.contains(end) {
        let route = Planner::new(&state.network).plan(start, end)?;
        info!(start, end, steps = route.len(), "route planned");
        template.route = Some(RouteView::from_route(&route));
        template.map_url = Some(map_url(Some(start), Some(end), LineFilter::All));
    } else if submitted {
        template.notice = Some("Please choose both stations from the list.".to_string());
    }

    Ok(template.render()?)
}

/// The whole network.
async fn all_routes(State(state): State<AppState>) -> Response {
    let registry = state.network.registry();
    page(
        AllRoutesTemplate {
            lines: LineView::all(registry),
            station_count: registry.len(),
            map_url: map_url(None, None, LineFilter::All),
        }
        .render()
        .map_err(AppError::from),
    )
}

/// Station lists per line.
async fn route_info(State(state): State<AppState>) -> Response {
    let registry = state.network.registry();
    page(
        RouteInfoTemplate {
            lines: LineView::all(registry),
            interchanges: registry
                .interchanges()
                .into_iter()
                .map(|s| s.name().to_string())
                .collect(),
            map_url: map_url(None, None, LineFilter::All),
        }
        .render()
        .map_err(AppError::from),
    )
}

/// Alphabetical station table.
async fn station_details(State(state): State<AppState>) -> Response {
    page(
        StationDetailsTemplate {
            stations: StationDetailView::list(state.network.registry()),
        }
        .render()
        .map_err(AppError::from),
    )
}

/// Full-screen map: a route when both ends are known stations, otherwise
/// the network filtered by line.
async fn map_page(State(state): State<AppState>, Query(query): Query<MapQuery>) -> Response {
    page(render_map(&state, &query).await)
}

async fn render_map(state: &AppState, query: &MapQuery) -> Result<String, AppError> {
    let filter = match query.line.as_deref() {
        Some(line) => LineFilter::parse(line)?,
        None => LineFilter::All,
    };

    let registry = state.network.registry();
    let known = |name: &Option<String>| {
        name.as_deref()
            .map(str::trim)
            .filter(|n| registry.contains(n))
            .map(str::to_string)
    };

    let traces = match state.config.geometry {
        GeometryMode::Trace => state.traces.get().await?,
        GeometryMode::Smooth => Arc::new(TrackTraces::default()),
    };
    let composer = MapComposer::new(&state.network, &traces, state.config.geometry);

    let (title, doc) = match (known(&query.start), known(&query.end)) {
        (Some(start), Some(end)) => {
            let route = Planner::new(&state.network).plan(&start, &end)?;
            (format!("{start} to {end}"), composer.route_map(&route)?)
        }
        _ => ("Surat Metro".to_string(), composer.network_map(filter)?),
    };

    let html = MapTemplate {
        title,
        map_json: doc.to_script_json().map_err(MapError::from)?,
    }
    .render()?;

    if let Some(path) = state.config.map_artifact_path() {
        if let Err(e) = write_artifact(&path, &html).await {
            warn!(error = %e, "could not write map artifact");
        }
    }

    Ok(html)
}

/// All stations as JSON.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .registry()
        .stations()
        .map(StationResult::from_station)
        .collect();
    Json(StationsResponse { stations })
}

/// Plan a route and return it as JSON.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let (start, end) = query.stations().map_err(|field| AppError::BadRequest {
        message: format!("missing query parameter: {field}"),
    })?;
    state.network.station(start)?;
    state.network.station(end)?;

    let route = Planner::new(&state.network).plan(start, end)?;
    Ok(Json(RouteResponse::from_route(route)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(%status, reason = message, "request failed");
        } else {
            warn!(%status, reason = message, "request rejected");
        }
    }

    /// Render as an HTML error page.
    pub fn into_page(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        let title = status
            .canonical_reason()
            .unwrap_or("Error")
            .to_string();
        let template = ErrorTemplate {
            title,
            message: message.to_string(),
        };
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, message.to_string()).into_response(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidLine> for AppError {
    fn from(e: InvalidLine) -> Self {
        DomainError::from(e).into()
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::UnknownStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::NoPath { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<TraceError> for AppError {
    fn from(e: TraceError) -> Self {
        AppError::Internal {
            message: format!("Track trace unavailable: {e}"),
        }
    }
}

impl From<MapError> for AppError {
    fn from(e: MapError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
