use actix_web::{get, web, Responder};
use blobpad_api_schema::health::HealthResponse;

use crate::api_state::ApiState;

#[get("/")]
pub async fn health(state: web::Data<ApiState>) -> impl Responder {
    let uptime_secs = state
        .clock
        .now()
        .duration_since(state.started_at)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    web::Json(HealthResponse {
        status: "live".to_string(),
        uptime_secs,
    })
}
