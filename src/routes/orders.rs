//! # 주문 API 라우트 핸들러 (`/api/siparisler`)
//!
//! 주문은 `sariciId`, `toptanciId`, `paketciId`, `sigaraTuruId`를 모두 가져야 합니다.
//! 존재하지 않는 ID를 보내면 DB의 외래 키 검사가 INSERT/UPDATE를 거부하고
//! 400 `constraint_violation`이 반환됩니다. 이때 행은 생성/변경되지 않습니다.

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

/// `/api/siparisler` 아래에 붙는 라우터
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// 전체 주문 목록을 조회합니다.
///
/// `GET /api/siparisler` → `200 OK` + 배열
#[utoipa::path(
    get,
    path = "/api/siparisler",
    tag = "siparisler",
    responses((status = 200, description = "All orders in insertion order", body = Vec<Order>))
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = db::list_orders(&state.pool).await?;
    Ok(Json(orders))
}

/// ID로 주문 하나를 조회합니다. 없으면 404.
#[utoipa::path(
    get,
    path = "/api/siparisler/{id}",
    tag = "siparisler",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "No order with this id", body = ErrorBody)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Order>, AppError> {
    let order = db::get_order(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(order))
}

/// 새 주문을 생성합니다.
///
/// 참조 ID는 미리 조회하지 않고 INSERT 시점의 외래 키 제약으로만 검사합니다.
#[utoipa::path(
    post,
    path = "/api/siparisler",
    tag = "siparisler",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "A referenced id does not exist", body = ErrorBody),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = db::create_order(&state.pool, &req).await?;
    tracing::info!(id = order.id, quantity = order.quantity, "Order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// 주문을 수정합니다.
///
/// `PUT /api/siparisler/{id}` + `{ "quantity": 80 }` → `200 OK` + 수정된 주문
/// 바꾼 참조 ID가 없으면 400이고 행은 그대로 남습니다.
#[utoipa::path(
    put,
    path = "/api/siparisler/{id}",
    tag = "siparisler",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "A referenced id does not exist", body = ErrorBody),
        (status = 404, description = "No order with this id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateOrderRequest>,
) -> Result<Json<Order>, AppError> {
    let order = db::update_order(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(order))
}

/// 주문을 삭제합니다. 연결된 결제 일정도 함께 삭제됩니다.
#[utoipa::path(
    delete,
    path = "/api/siparisler/{id}",
    tag = "siparisler",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order and its payment schedules deleted"),
        (status = 404, description = "No order with this id", body = ErrorBody)
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !db::delete_order(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}
