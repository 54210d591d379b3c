//! # 라우터 조립
//!
//! 엔티티별 라우터를 경로 접두사 아래에 붙이고 미들웨어를 씌웁니다.
//! `main`과 통합 테스트가 같은 함수를 사용하므로, 테스트는 실제 서버와 같은
//! 라우팅/미들웨어를 거칩니다.

use crate::{
    error::AppError,
    routes::{self, docs::ApiDoc, AppState},
};
use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// 전체 애플리케이션 라우터를 만듭니다.
///
/// | 경로 | 내용 |
/// |------|------|
/// | `/api/saricilar` | 말이꾼 CRUD |
/// | `/api/toptancilar` | 도매상 CRUD |
/// | `/api/paketciler` | 포장업자 CRUD |
/// | `/api/sigara-turleri` | 담배 종류 CRUD |
/// | `/api/siparisler` | 주문 CRUD |
/// | `/api/odeme-takvimi` | 결제 일정 CRUD |
/// | `/api-docs` | Swagger UI |
/// | `/openapi.json` | OpenAPI 문서 |
/// | `/health` | 헬스체크 |
/// | `/` | 문서 안내 페이지 |
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // .nest(): 하위 라우터의 "/"와 "/{id}"를 접두사 아래에 중첩시킵니다.
        // 예: rollers::router()의 "/{id}" → "/api/saricilar/{id}"
        .nest("/api/saricilar", routes::rollers::router())
        .nest("/api/toptancilar", routes::wholesalers::router())
        .nest("/api/paketciler", routes::packagers::router())
        .nest("/api/sigara-turleri", routes::cigarette_types::router())
        .nest("/api/siparisler", routes::orders::router())
        .nest("/api/odeme-takvimi", routes::payment_schedules::router())
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::docs::index))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api-docs").url("/openapi.json", ApiDoc::openapi()))
        // 매칭되는 경로가 없으면 다른 에러와 같은 JSON 형식의 404
        .fallback(|| async { AppError::NotFound })
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}

/// CORS 설정
///
/// 모든 출처를 허용하고, API가 쓰는 네 가지 메서드와 `Content-Type` 헤더만 허용합니다.
/// 브라우저는 preflight 결과를 24시간 캐시합니다.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([
            header::CONTENT_RANGE,
            HeaderName::from_static("x-content-range"),
        ])
        .max_age(Duration::from_secs(60 * 60 * 24))
}
