use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{classify_priority, Matcher};
use crate::models::{HealthResponse, MatchRequest, MatchResponse, PriorityRequest, PriorityResponse};
use crate::services::DonorSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub donors: Arc<DonorSource>,
}

/// Configure all endpoints
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match-donor", web::post().to(match_donor))
        .route("/predict-priority", web::post().to(predict_priority));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Donor matching endpoint
///
/// POST /match-donor
///
/// Request body:
/// ```json
/// {
///   "city": "Kathmandu",
///   "k": 5,
///   "donors": [...],
///   "backend_url": "https://registry.example",
///   "backend_token": "..."
/// }
/// ```
///
/// Always answers HTTP 200 with a `nearest_donors` list; an unresolvable
/// requester city produces the structured error shape instead of a fault.
async fn match_donor(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    let request = req.into_inner();

    // Unknown city terminates the match before any donor source is touched
    if state.matcher.resolve_origin(&request).is_none() {
        tracing::info!("unresolvable requester city: {:?}", request.city);
        return HttpResponse::Ok().json(MatchResponse::invalid_city());
    }

    let donors = state.donors.fetch(&request).await;
    let response = state.matcher.match_request(&request, &donors);

    tracing::info!(
        "returning {} nearest donors for {:?} (pool of {})",
        response.nearest_donors.len(),
        request.city,
        donors.len()
    );

    HttpResponse::Ok().json(response)
}

/// Request priority classification endpoint
///
/// POST /predict-priority
///
/// Request body: `{"reason": "Patient is in critical condition"}`
async fn predict_priority(req: web::Json<PriorityRequest>) -> impl Responder {
    let reason = req.reason.as_deref().unwrap_or_default();
    let priority = classify_priority(reason);

    tracing::debug!("classified request priority: {:?}", priority);

    HttpResponse::Ok().json(PriorityResponse { priority })
}
