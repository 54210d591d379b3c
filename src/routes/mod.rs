//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! 엔티티마다 하위 모듈이 하나씩 있고, 각 모듈의 `router()`가 다섯 개 작업을 묶습니다:
//!
//! | 메서드 | 경로 | 작업 |
//! |--------|------|------|
//! | GET | `/` | 전체 목록 (id 순) |
//! | POST | `/` | 생성 → 201 Created |
//! | GET | `/{id}` | 단건 조회 |
//! | PUT | `/{id}` | 부분 수정 (보낸 필드만) |
//! | DELETE | `/{id}` | 삭제 → 204 No Content |
//!
//! 접두사(`/api/saricilar` 등)는 `app::build_router`에서 `nest`로 붙입니다.

pub mod cigarette_types;
pub mod docs;
pub mod health;
pub mod orders;
pub mod packagers;
pub mod payment_schedules;
pub mod rollers;
pub mod wholesalers;

use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 풀은 `main`에서 한 번 만들어져 주입되며, 종료 시 `main`이 닫습니다.
/// `SqlitePool`은 내부적으로 Arc이므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
