//! # 도매상(Wholesaler, toptancı) 모델 정의
//!
//! 완성된 담배를 받아 유통하는 참여자입니다. 주문이 `toptanciId`로 참조합니다.

use super::{check_name, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 도매상 엔티티: `toptancilar` 테이블 한 행
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Wholesaler {
    pub id: i64,
    #[schema(example = "Ege Toptan Ltd.")]
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWholesalerRequest {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for CreateWholesalerRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_name("name", &self.name)
    }
}

/// 부분 수정 요청 (빠진 필드는 변경하지 않음)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWholesalerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for UpdateWholesalerRequest {
    fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => check_name("name", name),
            None => Ok(()),
        }
    }
}
