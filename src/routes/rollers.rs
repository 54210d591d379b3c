//! # 말이꾼 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/saricilar | `list_rollers` | 전체 말이꾼 목록 |
//! | POST | /api/saricilar | `create_roller` | 새 말이꾼 생성 |
//! | GET | /api/saricilar/{id} | `get_roller` | 말이꾼 조회 |
//! | PUT | /api/saricilar/{id} | `update_roller` | 말이꾼 수정 |
//! | DELETE | /api/saricilar/{id} | `delete_roller` | 말이꾼 삭제 |
//!
//! ## Axum 핸들러 패턴
//! 각 함수는 Axum의 **추출자(Extractor)** 패턴을 따릅니다:
//! - `State(state)`: 애플리케이션 공유 상태 (DB 풀)
//! - `IdPath(id)`: URL 경로의 `{id}` (정수)
//! - `ValidJson(req)`: 요청 본문을 구조체로 파싱하고 검증
//!
//! `#[utoipa::path]`는 각 핸들러를 OpenAPI 문서(`/api-docs`)에 등록합니다.

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

/// `/api/saricilar` 아래에 붙는 라우터
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rollers).post(create_roller))
        .route(
            "/{id}",
            get(get_roller).put(update_roller).delete(delete_roller),
        )
}

/// 전체 말이꾼 목록을 조회합니다.
///
/// 응답 본문의 루트가 곧 배열입니다: `[ { "id": 1, ... }, ... ]`
#[utoipa::path(
    get,
    path = "/api/saricilar",
    tag = "saricilar",
    responses((status = 200, description = "All rollers in insertion order", body = Vec<Roller>))
)]
pub async fn list_rollers(State(state): State<AppState>) -> Result<Json<Vec<Roller>>, AppError> {
    let rollers = db::list_rollers(&state.pool).await?;
    Ok(Json(rollers))
}

/// ID로 말이꾼 하나를 조회합니다. 없으면 404.
#[utoipa::path(
    get,
    path = "/api/saricilar/{id}",
    tag = "saricilar",
    params(("id" = i64, Path, description = "Roller id")),
    responses(
        (status = 200, description = "The roller", body = Roller),
        (status = 404, description = "No roller with this id", body = ErrorBody)
    )
)]
pub async fn get_roller(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Roller>, AppError> {
    let roller = db::get_roller(&state.pool, id)
        .await?
        // ok_or(): Option<Roller>를 Result로 변환, None이면 404
        .ok_or(AppError::NotFound)?;
    Ok(Json(roller))
}

/// 새 말이꾼을 생성합니다.
///
/// `POST /api/saricilar` + `{ "name": "...", "phone": "...", "address": "..." }`
/// → `201 Created` + 생성된 말이꾼 (id 포함)
#[utoipa::path(
    post,
    path = "/api/saricilar",
    tag = "saricilar",
    request_body = CreateRollerRequest,
    responses(
        (status = 201, description = "Roller created", body = Roller),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_roller(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateRollerRequest>,
) -> Result<(StatusCode, Json<Roller>), AppError> {
    let roller = db::create_roller(&state.pool, &req).await?;
    tracing::info!(id = roller.id, "Roller created");
    // 201 Created: 새 리소스가 생성되었음을 나타냅니다
    Ok((StatusCode::CREATED, Json(roller)))
}

/// 말이꾼 정보를 수정합니다. 보내지 않은 필드는 그대로 유지됩니다.
#[utoipa::path(
    put,
    path = "/api/saricilar/{id}",
    tag = "saricilar",
    params(("id" = i64, Path, description = "Roller id")),
    request_body = UpdateRollerRequest,
    responses(
        (status = 200, description = "Roller updated", body = Roller),
        (status = 404, description = "No roller with this id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_roller(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateRollerRequest>,
) -> Result<Json<Roller>, AppError> {
    let roller = db::update_roller(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(roller))
}

/// 말이꾼을 삭제합니다.
///
/// `DELETE /api/saricilar/{id}` → `204 No Content`
/// 주문이 참조 중이면 409 Conflict.
#[utoipa::path(
    delete,
    path = "/api/saricilar/{id}",
    tag = "saricilar",
    params(("id" = i64, Path, description = "Roller id")),
    responses(
        (status = 204, description = "Roller deleted"),
        (status = 404, description = "No roller with this id", body = ErrorBody),
        (status = 409, description = "Roller is referenced by orders", body = ErrorBody)
    )
)]
pub async fn delete_roller(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_roller(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Roller deleted");
    Ok(StatusCode::NO_CONTENT)
}
