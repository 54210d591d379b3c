//! # 결제 일정 API 라우트 핸들러 (`/api/odeme-takvimi`)

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

/// `/api/odeme-takvimi` 아래에 붙는 라우터
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payment_schedules).post(create_payment_schedule))
        .route(
            "/{id}",
            get(get_payment_schedule)
                .put(update_payment_schedule)
                .delete(delete_payment_schedule),
        )
}

/// 전체 결제 일정 목록을 조회합니다.
///
/// `GET /api/odeme-takvimi` → `200 OK` + 배열
#[utoipa::path(
    get,
    path = "/api/odeme-takvimi",
    tag = "odeme-takvimi",
    responses((status = 200, description = "All payment schedules in insertion order", body = Vec<PaymentSchedule>))
)]
pub async fn list_payment_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentSchedule>>, AppError> {
    let schedules = db::list_payment_schedules(&state.pool).await?;
    Ok(Json(schedules))
}

/// ID로 결제 일정 하나를 조회합니다. 없으면 404.
#[utoipa::path(
    get,
    path = "/api/odeme-takvimi/{id}",
    tag = "odeme-takvimi",
    params(("id" = i64, Path, description = "Payment schedule id")),
    responses(
        (status = 200, description = "The payment schedule", body = PaymentSchedule),
        (status = 404, description = "No payment schedule with this id", body = ErrorBody)
    )
)]
pub async fn get_payment_schedule(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PaymentSchedule>, AppError> {
    let schedule = db::get_payment_schedule(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(schedule))
}

/// 새 결제 일정을 생성합니다.
///
/// `POST /api/odeme-takvimi` + `{ "siparisId": 1, "amount": 2500, "dueDate": "2025-04-15" }`
/// → `201 Created`. `status`를 생략하면 `pending`으로 생성됩니다.
#[utoipa::path(
    post,
    path = "/api/odeme-takvimi",
    tag = "odeme-takvimi",
    request_body = CreatePaymentScheduleRequest,
    responses(
        (status = 201, description = "Payment schedule created", body = PaymentSchedule),
        (status = 400, description = "The referenced order does not exist", body = ErrorBody),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_payment_schedule(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreatePaymentScheduleRequest>,
) -> Result<(StatusCode, Json<PaymentSchedule>), AppError> {
    let schedule = db::create_payment_schedule(&state.pool, &req).await?;
    tracing::info!(id = schedule.id, siparis_id = schedule.siparis_id, "Payment schedule created");
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// 결제 일정을 수정합니다.
///
/// `PUT /api/odeme-takvimi/{id}` + `{ "status": "paid" }` → `200 OK` + 수정된 결제 일정
#[utoipa::path(
    put,
    path = "/api/odeme-takvimi/{id}",
    tag = "odeme-takvimi",
    params(("id" = i64, Path, description = "Payment schedule id")),
    request_body = UpdatePaymentScheduleRequest,
    responses(
        (status = 200, description = "Payment schedule updated", body = PaymentSchedule),
        (status = 400, description = "The referenced order does not exist", body = ErrorBody),
        (status = 404, description = "No payment schedule with this id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_payment_schedule(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdatePaymentScheduleRequest>,
) -> Result<Json<PaymentSchedule>, AppError> {
    let schedule = db::update_payment_schedule(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(schedule))
}

/// 결제 일정을 삭제합니다.
///
/// `DELETE /api/odeme-takvimi/{id}` → `204 No Content`
#[utoipa::path(
    delete,
    path = "/api/odeme-takvimi/{id}",
    tag = "odeme-takvimi",
    params(("id" = i64, Path, description = "Payment schedule id")),
    responses(
        (status = 204, description = "Payment schedule deleted"),
        (status = 404, description = "No payment schedule with this id", body = ErrorBody)
    )
)]
pub async fn delete_payment_schedule(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !db::delete_payment_schedule(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "Payment schedule deleted");
    Ok(StatusCode::NO_CONTENT)
}
