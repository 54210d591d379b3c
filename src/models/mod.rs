//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 엔티티 하나를 담당하며, 세 종류의 구조체를 가집니다:
//! - 레코드 구조체: DB 테이블 한 행(row)이자 API 응답 본문
//! - `Create*Request`: POST 요청 본문 (필수 필드는 Option이 아님)
//! - `Update*Request`: PUT 요청 본문 (모든 필드가 Option, 보낸 필드만 변경)
//!
//! JSON 필드 이름은 camelCase이며, 외래 키는 도메인 이름을 그대로 씁니다
//! (`sariciId`, `toptanciId`, `paketciId`, `sigaraTuruId`, `siparisId`).

pub mod cigarette_type;
pub mod order;
pub mod packager;
pub mod payment_schedule;
pub mod roller;
pub mod wholesaler;

pub use cigarette_type::*;
pub use order::*;
pub use packager::*;
pub use payment_schedule::*;
pub use roller::*;
pub use wholesaler::*;

use crate::error::AppError;

/// 요청 본문 검증 트레이트
///
/// JSON 파싱은 serde가 처리하므로, 여기서는 타입만으로 표현할 수 없는
/// 규칙(빈 이름, 음수 가격 등)만 확인합니다.
/// `extract::ValidJson`이 파싱 직후 자동으로 호출합니다.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// 이름이 비어 있거나 공백뿐이면 거부합니다.
pub(crate) fn check_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// 금액은 유한한 0 이상의 값이어야 합니다.
pub(crate) fn check_amount(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

pub(crate) fn check_positive(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}
