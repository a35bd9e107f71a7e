//! HTTP surface: router, shared state and the two request handlers
//!
//! The weather handler runs the sequential two-call pipeline: geocode the
//! typed location, then fetch the daily forecast for the resolved
//! coordinates. Each failing stage short-circuits to the input form with one
//! stage-specific message.

use std::time::Duration;

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::{
    WeatherFrontConfig, WeatherFrontError,
    forecast::ForecastClient,
    geocoding::GeocodingClient,
    models::GeoResult,
    templates::{FrontTemplate, ResultsTemplate},
};

const MSG_EMPTY_LOCATION: &str = "Please enter a location.";
const MSG_LOCATION_NOT_FOUND: &str = "Location not found.";
const MSG_WEATHER_UNAVAILABLE: &str = "Could not retrieve weather data.";

/// Upper bound for one end-to-end request, covering both outbound calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared collaborators for the request handlers
///
/// Both clients are stateless; nothing here is mutated between requests.
#[derive(Clone)]
pub struct AppState {
    pub geocoding: GeocodingClient,
    pub forecast: ForecastClient,
}

impl AppState {
    /// Build the provider clients from configuration
    pub fn from_config(config: &WeatherFrontConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.providers.timeout_seconds.into());

        Ok(Self {
            geocoding: GeocodingClient::new(&config.providers.geocoding_base_url, timeout)?,
            forecast: ForecastClient::new(&config.providers.forecast_base_url, timeout)?,
        })
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/weather", get(weather))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

/// Bind the listener and serve until shutdown
pub async fn run(config: &WeatherFrontConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Web server running at http://localhost:{}",
        config.server.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    location: Option<String>,
}

async fn home() -> Response {
    render(FrontTemplate { error: None })
}

async fn weather(State(state): State<AppState>, Query(params): Query<WeatherParams>) -> Response {
    let location = params.location.as_deref().map(str::trim).unwrap_or_default();
    if location.is_empty() {
        return render(FrontTemplate {
            error: Some(MSG_EMPTY_LOCATION.to_string()),
        });
    }

    let (latitude, longitude, country) = match state.geocoding.resolve(location).await {
        GeoResult::Found {
            latitude,
            longitude,
            country,
        } => (latitude, longitude, country),
        GeoResult::NotFound => {
            return render(FrontTemplate {
                error: Some(MSG_LOCATION_NOT_FOUND.to_string()),
            });
        }
    };

    match state.forecast.fetch(latitude, longitude).await {
        Some(weather_data) => render(ResultsTemplate {
            location: location.to_string(),
            country,
            weather_data,
        }),
        None => render(FrontTemplate {
            error: Some(MSG_WEATHER_UNAVAILABLE.to_string()),
        }),
    }
}

/// Render a template to an HTML response
///
/// A render failure is the only 500 this application produces.
fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            let err = WeatherFrontError::from(e);
            tracing::error!("template rendering failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.user_message()).into_response()
        }
    }
}
