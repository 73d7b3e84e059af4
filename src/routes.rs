//! HTTP surface: the `/weather` route plus the permissive cross-origin layer.

use axum::{
    extract::{rejection::QueryRejection, Query, Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::error::LookupError;
use crate::models::{WeatherParams, WeatherQuery, WeatherReport};
use crate::service::WeatherService;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type,Accept,X-Requested-With";

/// Builds the application router around `service`
pub fn router(service: WeatherService) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(service)
        .layer(middleware::from_fn(answer_preflight))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
        .layer(TraceLayer::new_for_http())
}

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// OPTIONS to any path is answered here and never routed
async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(request).await
}

/// GET /weather?city=..&country=..
async fn get_weather(
    State(service): State<WeatherService>,
    params: Result<Query<WeatherParams>, QueryRejection>,
) -> Result<Json<WeatherReport>, LookupError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Unreadable query string: {}", rejection);
        LookupError::Validation
    })?;

    let query = WeatherQuery::try_from(params)?;
    let report = service.lookup(&query).await?;

    Ok(Json(report))
}
