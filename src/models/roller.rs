//! # 말이꾼(Roller, sarıcı) 모델 정의
//!
//! 담배를 마는 공급망 참여자입니다. 주문(`Order`)이 `sariciId`로 참조합니다.
//!
//! ## 구조체 역할
//! - `Roller`: `saricilar` 테이블 한 행 (응답용)
//! - `CreateRollerRequest`: `POST /api/saricilar` 요청 본문
//! - `UpdateRollerRequest`: `PUT /api/saricilar/{id}` 요청 본문

use super::{check_name, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 말이꾼 엔티티
///
/// - `sqlx::FromRow`: SQL 결과 행을 이 구조체로 자동 매핑 (컬럼 이름은 snake_case)
/// - `#[serde(rename_all = "camelCase")]`: JSON에서는 `createdAt`처럼 camelCase로 표시
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roller {
    /// DB가 부여하는 자동 증가 식별자
    pub id: i64,
    #[schema(example = "Mehmet Yılmaz")]
    pub name: String,
    /// 연락처 전화번호 (선택)
    pub phone: Option<String>,
    /// 주소 (선택)
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// 말이꾼 생성 요청
///
/// `name`이 없으면 JSON 파싱 단계에서 422 응답이 나갑니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRollerRequest {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for CreateRollerRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_name("name", &self.name)
    }
}

/// 말이꾼 수정 요청
///
/// 모든 필드가 Option입니다. 보낸 필드만 변경되고 나머지는 그대로 유지됩니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRollerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for UpdateRollerRequest {
    fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => check_name("name", name),
            None => Ok(()),
        }
    }
}
