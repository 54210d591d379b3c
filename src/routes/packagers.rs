//! # 포장업자 API 라우트 핸들러 (`/api/paketciler`)

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

/// `/api/paketciler` 아래에 붙는 라우터
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packagers).post(create_packager))
        .route(
            "/{id}",
            get(get_packager).put(update_packager).delete(delete_packager),
        )
}

/// 전체 포장업자 목록을 조회합니다.
///
/// `GET /api/paketciler` → `200 OK` + 배열
#[utoipa::path(
    get,
    path = "/api/paketciler",
    tag = "paketciler",
    responses((status = 200, description = "All packagers in insertion order", body = Vec<Packager>))
)]
pub async fn list_packagers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Packager>>, AppError> {
    Ok(Json(db::list_packagers(&state.pool).await?))
}

/// ID로 포장업자 하나를 조회합니다. 없으면 404.
#[utoipa::path(
    get,
    path = "/api/paketciler/{id}",
    tag = "paketciler",
    params(("id" = i64, Path, description = "Packager id")),
    responses(
        (status = 200, description = "The packager", body = Packager),
        (status = 404, description = "No packager with this id", body = ErrorBody)
    )
)]
pub async fn get_packager(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Packager>, AppError> {
    let packager = db::get_packager(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(packager))
}

/// 새 포장업자를 생성합니다.
///
/// `POST /api/paketciler` + `{ "name": "..." }` → `201 Created` + 생성된 포장업자
#[utoipa::path(
    post,
    path = "/api/paketciler",
    tag = "paketciler",
    request_body = CreatePackagerRequest,
    responses(
        (status = 201, description = "Packager created", body = Packager),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_packager(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreatePackagerRequest>,
) -> Result<(StatusCode, Json<Packager>), AppError> {
    let packager = db::create_packager(&state.pool, &req).await?;
    tracing::info!(id = packager.id, "Packager created");
    Ok((StatusCode::CREATED, Json(packager)))
}

/// 포장업자 정보를 수정합니다. 보내지 않은 필드는 그대로 유지됩니다.
///
/// `PUT /api/paketciler/{id}` → `200 OK` + 수정된 포장업자
#[utoipa::path(
    put,
    path = "/api/paketciler/{id}",
    tag = "paketciler",
    params(("id" = i64, Path, description = "Packager id")),
    request_body = UpdatePackagerRequest,
    responses(
        (status = 200, description = "Packager updated", body = Packager),
        (status = 404, description = "No packager with this id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_packager(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdatePackagerRequest>,
) -> Result<Json<Packager>, AppError> {
    let packager = db::update_packager(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(packager))
}

/// 포장업자를 삭제합니다.
///
/// `DELETE /api/paketciler/{id}` → `204 No Content`, 주문이 참조 중이면 409.
#[utoipa::path(
    delete,
    path = "/api/paketciler/{id}",
    tag = "paketciler",
    params(("id" = i64, Path, description = "Packager id")),
    responses(
        (status = 204, description = "Packager deleted"),
        (status = 404, description = "No packager with this id", body = ErrorBody),
        (status = 409, description = "Packager is referenced by orders", body = ErrorBody)
    )
)]
pub async fn delete_packager(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !db::delete_packager(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Packager deleted");
    Ok(StatusCode::NO_CONTENT)
}
