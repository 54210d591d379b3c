//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok", "database": "ok" }`
//!
//! 데이터베이스에 `SELECT 1`을 보내 연결 풀이 살아 있는지도 확인합니다.
//! DB가 응답하지 않으면 503과 함께 `"database": "unavailable"`을 반환합니다.

use crate::{db, routes::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

/// `GET /health`: 서버와 데이터베이스 상태를 확인합니다.
///
/// 실패해도 `AppError` 형식이 아니라 같은 모양의 상태 본문을 돌려줍니다.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server and database are reachable"),
        (status = 503, description = "Database is unreachable")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match db::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable" })),
            )
        }
    }
}
