//! # 담배 종류 API 라우트 핸들러 (`/api/sigara-turleri`)
//!
//! 예: `POST /api/sigara-turleri` + `{ "name": "Marlboro", "price": 50 }`
//! → `201 Created` + `{ "id": 1, "name": "Marlboro", "price": 50.0, ... }`
//!
//! 이름이 이미 있으면 UNIQUE 제약 때문에 409 Conflict가 됩니다.

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

/// `/api/sigara-turleri` 아래에 붙는 라우터
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cigarette_types).post(create_cigarette_type))
        .route(
            "/{id}",
            get(get_cigarette_type)
                .put(update_cigarette_type)
                .delete(delete_cigarette_type),
        )
}

/// 전체 담배 종류 목록을 조회합니다.
///
/// `GET /api/sigara-turleri` → `200 OK` + 배열
#[utoipa::path(
    get,
    path = "/api/sigara-turleri",
    tag = "sigara-turleri",
    responses((status = 200, description = "All cigarette types in insertion order", body = Vec<CigaretteType>))
)]
pub async fn list_cigarette_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<CigaretteType>>, AppError> {
    let types = db::list_cigarette_types(&state.pool).await?;
    Ok(Json(types))
}

/// ID로 담배 종류 하나를 조회합니다. 없으면 404.
#[utoipa::path(
    get,
    path = "/api/sigara-turleri/{id}",
    tag = "sigara-turleri",
    params(("id" = i64, Path, description = "Cigarette type id")),
    responses(
        (status = 200, description = "The cigarette type", body = CigaretteType),
        (status = 404, description = "No cigarette type with this id", body = ErrorBody)
    )
)]
pub async fn get_cigarette_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<CigaretteType>, AppError> {
    let cigarette_type = db::get_cigarette_type(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(cigarette_type))
}

/// 새 담배 종류를 생성합니다.
///
/// `POST /api/sigara-turleri` + `{ "name": "Marlboro", "price": 50 }`
/// → `201 Created` + 생성된 담배 종류. 같은 이름이 있으면 409.
#[utoipa::path(
    post,
    path = "/api/sigara-turleri",
    tag = "sigara-turleri",
    request_body = CreateCigaretteTypeRequest,
    responses(
        (status = 201, description = "Cigarette type created", body = CigaretteType),
        (status = 409, description = "Name already exists", body = ErrorBody),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_cigarette_type(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateCigaretteTypeRequest>,
) -> Result<(StatusCode, Json<CigaretteType>), AppError> {
    let cigarette_type = db::create_cigarette_type(&state.pool, &req).await?;
    tracing::info!(id = cigarette_type.id, name = %cigarette_type.name, "Cigarette type created");
    Ok((StatusCode::CREATED, Json(cigarette_type)))
}

/// 이름 또는 가격을 수정합니다.
///
/// `PUT /api/sigara-turleri/{id}` + `{ "price": 55 }` → `200 OK` + 수정된 담배 종류
#[utoipa::path(
    put,
    path = "/api/sigara-turleri/{id}",
    tag = "sigara-turleri",
    params(("id" = i64, Path, description = "Cigarette type id")),
    request_body = UpdateCigaretteTypeRequest,
    responses(
        (status = 200, description = "Cigarette type updated", body = CigaretteType),
        (status = 404, description = "No cigarette type with this id", body = ErrorBody),
        (status = 409, description = "Name already exists", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_cigarette_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateCigaretteTypeRequest>,
) -> Result<Json<CigaretteType>, AppError> {
    let cigarette_type = db::update_cigarette_type(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(cigarette_type))
}

/// 담배 종류를 삭제합니다.
///
/// `DELETE /api/sigara-turleri/{id}` → `204 No Content`
/// 주문이 참조 중이면 409 Conflict.
#[utoipa::path(
    delete,
    path = "/api/sigara-turleri/{id}",
    tag = "sigara-turleri",
    params(("id" = i64, Path, description = "Cigarette type id")),
    responses(
        (status = 204, description = "Cigarette type deleted"),
        (status = 404, description = "No cigarette type with this id", body = ErrorBody),
        (status = 409, description = "Cigarette type is referenced by orders", body = ErrorBody)
    )
)]
pub async fn delete_cigarette_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !db::delete_cigarette_type(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Cigarette type deleted");
    Ok(StatusCode::NO_CONTENT)
}
