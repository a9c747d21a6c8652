use actix_web::{get, HttpResponse};
use chrono::Utc;

use crate::models::dto::response::WakeUpResponse;

/// Liveness probe hit by an external scheduler to keep the instance warm.
/// The timestamp is epoch milliseconds.
#[get("/api/system/wake-up")]
pub async fn wake_up() -> HttpResponse {
    HttpResponse::Ok().json(WakeUpResponse {
        status: "awake".to_string(),
        timestamp: Utc::now().timestamp_millis(),
    })
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Socrati Backend API is running"
    }))
}
