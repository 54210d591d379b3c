//! # 도매상 API 라우트 핸들러 (`/api/toptancilar`)
//!
//! 구조는 `rollers`와 같습니다. 주문이 참조 중인 도매상은 삭제할 수 없습니다(409).

use crate::{
    db,
    error::{AppError, ErrorBody},
    extract::{IdPath, ValidJson},
    models::*,
    routes::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// `/api/toptancilar` 아래에 붙는 라우터
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wholesalers).post(create_wholesaler))
        .route(
            "/{id}",
            get(get_wholesaler)
                .put(update_wholesaler)
                .delete(delete_wholesaler),
        )
}

/// 전체 도매상 목록을 조회합니다.
///
/// `GET /api/toptancilar` → `200 OK` + `[ { "id": 1, ... }, ... ]`
#[utoipa::path(
    get,
    path = "/api/toptancilar",
    tag = "toptancilar",
    responses((status = 200, description = "All wholesalers in insertion order", body = Vec<Wholesaler>))
)]
pub async fn list_wholesalers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Wholesaler>>, AppError> {
    let wholesalers = db::list_wholesalers(&state.pool).await?;
    Ok(Json(wholesalers))
}

/// ID로 도매상 하나를 조회합니다. 없으면 404.
#[utoipa::path(
    get,
    path = "/api/toptancilar/{id}",
    tag = "toptancilar",
    params(("id" = i64, Path, description = "Wholesaler id")),
    responses(
        (status = 200, description = "The wholesaler", body = Wholesaler),
        (status = 404, description = "No wholesaler with this id", body = ErrorBody)
    )
)]
pub async fn get_wholesaler(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Wholesaler>, AppError> {
    let wholesaler = db::get_wholesaler(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(wholesaler))
}

/// 새 도매상을 생성합니다.
///
/// `POST /api/toptancilar` + `{ "name": "...", "phone": "...", "address": "..." }`
/// → `201 Created` + 생성된 도매상
#[utoipa::path(
    post,
    path = "/api/toptancilar",
    tag = "toptancilar",
    request_body = CreateWholesalerRequest,
    responses(
        (status = 201, description = "Wholesaler created", body = Wholesaler),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_wholesaler(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateWholesalerRequest>,
) -> Result<(StatusCode, Json<Wholesaler>), AppError> {
    let wholesaler = db::create_wholesaler(&state.pool, &req).await?;
    tracing::info!(id = wholesaler.id, "Wholesaler created");
    Ok((StatusCode::CREATED, Json(wholesaler)))
}

/// 도매상 정보를 수정합니다.
///
/// `PUT /api/toptancilar/{id}` + 바꿀 필드만 담은 본문 → `200 OK` + 수정된 도매상
#[utoipa::path(
    put,
    path = "/api/toptancilar/{id}",
    tag = "toptancilar",
    params(("id" = i64, Path, description = "Wholesaler id")),
    request_body = UpdateWholesalerRequest,
    responses(
        (status = 200, description = "Wholesaler updated", body = Wholesaler),
        (status = 404, description = "No wholesaler with this id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_wholesaler(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateWholesalerRequest>,
) -> Result<Json<Wholesaler>, AppError> {
    let wholesaler = db::update_wholesaler(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(wholesaler))
}

/// 도매상을 삭제합니다.
///
/// `DELETE /api/toptancilar/{id}` → `204 No Content`
/// 주문이 참조 중이면 409 Conflict.
#[utoipa::path(
    delete,
    path = "/api/toptancilar/{id}",
    tag = "toptancilar",
    params(("id" = i64, Path, description = "Wholesaler id")),
    responses(
        (status = 204, description = "Wholesaler deleted"),
        (status = 404, description = "No wholesaler with this id", body = ErrorBody),
        (status = 409, description = "Wholesaler is referenced by orders", body = ErrorBody)
    )
)]
pub async fn delete_wholesaler(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !db::delete_wholesaler(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Wholesaler deleted");
    Ok(StatusCode::NO_CONTENT)
}
