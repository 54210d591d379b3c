//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{ "error": { "code", "message" } }` JSON 응답으로 변환
//! - 데이터베이스 제약 조건 위반(외래 키, UNIQUE, CHECK, NOT NULL)을
//!   클라이언트 에러(4xx)로 분류

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;
use utoipa::ToSchema;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 잘못된 요청: 깨진 JSON, 숫자가 아닌 경로 ID 등 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 요청 본문 검증 실패: 필수 필드 누락, 음수 가격 등 (HTTP 422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 리소스 충돌: 중복 이름, 아직 참조 중인 행 삭제 (HTTP 409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 데이터베이스 오류
    /// 제약 조건 위반은 4xx로, 나머지는 500으로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 마이그레이션 실패 (시작 단계에서만 발생)
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// 파일 입출력 오류: 데이터베이스 디렉토리 생성 실패 등 (HTTP 500)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// DELETE 중 외래 키 위반을 409 Conflict로 바꿉니다.
    ///
    /// 다른 행(예: 주문)이 아직 참조하고 있는 행을 지우려 할 때 발생합니다.
    /// 외래 키 위반이 아닌 에러는 그대로 `Database`로 감쌉니다.
    pub fn still_referenced(err: sqlx::Error, what: &str) -> Self {
        match err.as_database_error() {
            Some(db) if db.is_foreign_key_violation() => {
                AppError::Conflict(format!("{} is still referenced by other records", what))
            }
            _ => AppError::Database(err),
        }
    }
}

/// 에러 응답 본문: `{ "error": { "code": "...", "message": "..." } }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// 기계가 읽는 에러 코드 (예: "not_found", "constraint_violation")
    pub code: String,
    /// 사람이 읽는 에러 메시지
    pub message: String,
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Internal, IO, 분류되지 않은 DB 에러)는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    /// 제약 조건 위반은 클라이언트가 고칠 수 있는 문제이므로 DB 메시지를 그대로 전달합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Validation(ref msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(ref e) => classify_database_error(e),
            AppError::Migrate(ref e) => {
                tracing::error!("Migration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Io(ref e) => {
                tracing::error!("IO error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "io_error",
                    "An IO error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// sqlx 에러를 (상태 코드, 에러 코드, 메시지)로 분류합니다.
///
/// SQLite의 확장 에러 코드가 sqlx의 `ErrorKind`로 매핑되어 있으므로
/// 메시지 문자열을 파싱하지 않고 종류만으로 판단할 수 있습니다.
fn classify_database_error(e: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let Some(db) = e.as_database_error() {
        match db.kind() {
            ErrorKind::UniqueViolation => {
                return (StatusCode::CONFLICT, "conflict", db.message().to_string());
            }
            ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return (
                    StatusCode::BAD_REQUEST,
                    "constraint_violation",
                    db.message().to_string(),
                );
            }
            _ => {}
        }
    }

    tracing::error!("Database error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "database_error",
        "A database error occurred".to_string(),
    )
}

// Axum 추출자(Extractor)의 거부(rejection)를 AppError로 변환합니다.
// 이렇게 하면 잘못된 요청도 다른 에러와 같은 JSON 형식으로 응답됩니다.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // 문법은 맞지만 필드가 없거나 타입이 다른 경우 → 검증 실패
            JsonRejection::JsonDataError(err) => AppError::Validation(err.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_a_server_side_database_error() {
        let (status, code, message) = classify_database_error(&sqlx::Error::RowNotFound);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "database_error");
        assert_eq!(message, "A database error occurred");
    }

    #[test]
    fn still_referenced_keeps_unrelated_errors() {
        let err = AppError::still_referenced(sqlx::Error::PoolTimedOut, "sarici");
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("name is required".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Conflict("taken".into()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
