//! HTTP controller
//!
//! - `GET /` - status and roster size
//! - `GET /roster` - the roster, verbatim
//! - `POST /analyze/crucible` - synergy between two named agents

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use legion_usecase::{AnalyzeCrucibleUseCase, CrucibleRequest, RosterStatusUseCase};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::repository::in_memory::InMemoryRosterRepository;

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    roster: Arc<InMemoryRosterRepository>,
    status: RosterStatusUseCase,
    analyze: AnalyzeCrucibleUseCase,
}

impl AppState {
    pub fn new(roster: InMemoryRosterRepository) -> Self {
        Self {
            roster: Arc::new(roster),
            status: RosterStatusUseCase::new(),
            analyze: AnalyzeCrucibleUseCase::default(),
        }
    }
}

// =============================================================================
// Request / Response Types
// =============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub database_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionRequest {
    pub agent_a_name: String,
    pub agent_b_name: String,
}

impl From<InteractionRequest> for CrucibleRequest {
    fn from(req: InteractionRequest) -> Self {
        CrucibleRequest::new(req.agent_a_name, req.agent_b_name)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrucibleResponse {
    pub synergy_score: u8,
    pub notes: Vec<String>,
    pub status: String,
}

// =============================================================================
// Router
// =============================================================================

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/roster", get(get_roster))
        .route("/analyze/crucible", post(run_crucible))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// GET / - Liveness plus roster size.
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let status = state
        .status
        .execute(&*state.roster)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ONLINE".to_string(),
        database_size: status.database_size,
    }))
}

/// GET /roster - The whole roster; clients filter and sort.
async fn get_roster(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.roster.raw_records().cloned().collect())
}

/// POST /analyze/crucible - Score two agents against each other.
async fn run_crucible(
    State(state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> Result<Json<CrucibleResponse>, ApiError> {
    let request = CrucibleRequest::from(request);

    let report = state
        .analyze
        .execute(&*state.roster, &request)
        .map_err(|e| {
            warn!(
                agent_a = %request.agent_a_name,
                agent_b = %request.agent_b_name,
                error = ?e,
                "crucible failed"
            );
            ApiError::from(e)
        })?;

    debug!(
        agent_a = %request.agent_a_name,
        agent_b = %request.agent_b_name,
        score = report.score(),
        "crucible calculated"
    );

    Ok(Json(CrucibleResponse {
        synergy_score: report.score(),
        notes: report.note_texts(),
        status: "CALCULATED".to_string(),
    }))
}
