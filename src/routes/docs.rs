//! # API 문서 (OpenAPI + Swagger UI)
//!
//! - `GET /` → 문서 안내 페이지 (HTML)
//! - `GET /api-docs/` → Swagger UI
//! - `GET /openapi.json` → OpenAPI 3 문서
//!
//! 각 핸들러의 `#[utoipa::path]`와 모델의 `#[derive(ToSchema)]`가 모여
//! 아래 `ApiDoc`이 됩니다. 핸들러를 추가하면 `paths(...)`에도 등록해야 합니다.

use crate::{error, models, routes};
use axum::response::Html;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meydan API",
        description = "Supply-chain tracking for cigarette rollers, wholesalers, packagers, cigarette types, orders and payment schedules"
    ),
    paths(
        routes::rollers::list_rollers,
        routes::rollers::get_roller,
        routes::rollers::create_roller,
        routes::rollers::update_roller,
        routes::rollers::delete_roller,
        routes::wholesalers::list_wholesalers,
        routes::wholesalers::get_wholesaler,
        routes::wholesalers::create_wholesaler,
        routes::wholesalers::update_wholesaler,
        routes::wholesalers::delete_wholesaler,
        routes::packagers::list_packagers,
        routes::packagers::get_packager,
        routes::packagers::create_packager,
        routes::packagers::update_packager,
        routes::packagers::delete_packager,
        routes::cigarette_types::list_cigarette_types,
        routes::cigarette_types::get_cigarette_type,
        routes::cigarette_types::create_cigarette_type,
        routes::cigarette_types::update_cigarette_type,
        routes::cigarette_types::delete_cigarette_type,
        routes::orders::list_orders,
        routes::orders::get_order,
        routes::orders::create_order,
        routes::orders::update_order,
        routes::orders::delete_order,
        routes::payment_schedules::list_payment_schedules,
        routes::payment_schedules::get_payment_schedule,
        routes::payment_schedules::create_payment_schedule,
        routes::payment_schedules::update_payment_schedule,
        routes::payment_schedules::delete_payment_schedule,
        routes::health::health_check,
    ),
    components(schemas(
        models::Roller,
        models::CreateRollerRequest,
        models::UpdateRollerRequest,
        models::Wholesaler,
        models::CreateWholesalerRequest,
        models::UpdateWholesalerRequest,
        models::Packager,
        models::CreatePackagerRequest,
        models::UpdatePackagerRequest,
        models::CigaretteType,
        models::CreateCigaretteTypeRequest,
        models::UpdateCigaretteTypeRequest,
        models::Order,
        models::CreateOrderRequest,
        models::UpdateOrderRequest,
        models::PaymentStatus,
        models::PaymentSchedule,
        models::CreatePaymentScheduleRequest,
        models::UpdatePaymentScheduleRequest,
        error::ErrorBody,
        error::ErrorDetail,
    )),
    tags(
        (name = "saricilar", description = "Cigarette rollers"),
        (name = "toptancilar", description = "Wholesalers"),
        (name = "paketciler", description = "Packagers"),
        (name = "sigara-turleri", description = "Cigarette types and unit prices"),
        (name = "siparisler", description = "Orders linking the four entities above"),
        (name = "odeme-takvimi", description = "Payment schedules of orders"),
        (name = "health", description = "Liveness and database check"),
    )
)]
pub struct ApiDoc;

/// `GET /`: 문서 안내 페이지
///
/// `include_str!`는 컴파일 타임에 HTML 파일을 바이너리에 포함시킵니다.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
