//! HTTP routes for the campus map

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use campath_core::{CampusMap, Location, Route};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::error::{ServerError, ServerResult};

/// Origins allowed to call the API from a browser (local frontends)
const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

/// Query string for route lookups
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    /// Starting location id
    pub from: String,

    /// Destination location id
    pub to: String,

    /// Minimize segment count instead of distance
    #[serde(default)]
    pub fewest_hops: bool,
}

/// Create the router over a loaded map
pub fn create_router(map: Arc<CampusMap>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/locations", get(locations_handler))
        .route("/shortest-path", get(shortest_path_handler))
        .route("/health", get(health_handler))
        .with_state(map)
        .layer(cors)
}

/// Health check endpoint
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "server": "campath-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// All locations, sorted by id
async fn locations_handler(State(map): State<Arc<CampusMap>>) -> Json<Vec<Location>> {
    let mut locations = map.list_locations();
    locations.sort_by(|a, b| a.id.cmp(&b.id));
    Json(locations)
}

/// Route between two locations; `null` when there is none
async fn shortest_path_handler(
    State(map): State<Arc<CampusMap>>,
    Query(query): Query<RouteQuery>,
) -> Json<Option<Route>> {
    tracing::debug!(
        "Route request: {} -> {} (fewest_hops: {})",
        query.from,
        query.to,
        query.fewest_hops
    );

    let route = if query.fewest_hops {
        map.fewest_hops(&query.from, &query.to)
    } else {
        map.shortest_path(&query.from, &query.to)
    };

    if route.is_none() {
        tracing::debug!("No route from {} to {}", query.from, query.to);
    }
    Json(route)
}

/// Run the HTTP server until it fails
pub async fn run_server(map: Arc<CampusMap>, addr: &str) -> ServerResult<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| ServerError::InvalidAddress(addr.to_string()))?;
    let router = create_router(map);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Campath server listening on {}", addr);
    tracing::info!("  Locations: http://{}/locations", addr);
    tracing::info!("  Routes: http://{}/shortest-path?from=ID&to=ID", addr);
    tracing::info!("  Health check: http://{}/health", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
