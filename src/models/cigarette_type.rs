//! # 담배 종류(CigaretteType, sigara türü) 모델 정의
//!
//! 주문 대상이 되는 담배 제품과 단가입니다.
//! 이름은 DB에서 UNIQUE이므로 같은 이름으로 두 번 생성하면 409 Conflict가 됩니다.

use super::{check_amount, check_name, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 담배 종류 엔티티: `sigara_turleri` 테이블 한 행
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CigaretteType {
    pub id: i64,
    #[schema(example = "Marlboro")]
    pub name: String,
    /// 단위(갑)당 가격
    #[schema(example = 50.0)]
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

/// 담배 종류 생성 요청: `{ "name": "Marlboro", "price": 50 }`
///
/// JSON 정수(50)도 f64로 역직렬화됩니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCigaretteTypeRequest {
    pub name: String,
    pub price: f64,
}

impl Validate for CreateCigaretteTypeRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_name("name", &self.name)?;
        check_amount("price", self.price)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCigaretteTypeRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Validate for UpdateCigaretteTypeRequest {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            check_name("name", name)?;
        }
        if let Some(price) = self.price {
            check_amount("price", price)?;
        }
        Ok(())
    }
}
