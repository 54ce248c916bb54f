use axum::Json;
use serde_json::{json, Value};

/// GET /api/health - service liveness / Cek kesehatan layanan
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Layanan Kamus Bugis berjalan normal"
    }))
}

/// GET /api/version - build information / Informasi versi dan waktu build
pub async fn get_version_info() -> Json<Value> {
    Json(json!({
        "code": 200,
        "message": "success",
        "data": {
            "backend_version": env!("CARGO_PKG_VERSION"),
            "build_time": env!("BUILD_TIME"),
        }
    }))
}
