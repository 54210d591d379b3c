//! # 주문(Order, sipariş) 모델 정의
//!
//! 주문은 네 엔티티를 외래 키로 참조합니다:
//!
//! ```text
//! saricilar ──┐
//! toptancilar ─┤
//! paketciler ──┼──> siparisler <── odeme_takvimi
//! sigara_turleri┘
//! ```
//!
//! 참조 무결성은 애플리케이션이 아니라 SQLite가 보장합니다.
//! 존재하지 않는 ID를 보내면 INSERT가 외래 키 위반으로 실패하고 행은 생성되지 않습니다.

use super::{check_positive, Validate};
use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 주문 엔티티: `siparisler` 테이블 한 행
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// 말이꾼 ID (`saricilar.id`)
    pub sarici_id: i64,
    /// 도매상 ID (`toptancilar.id`)
    pub toptanci_id: i64,
    /// 포장업자 ID (`paketciler.id`)
    pub paketci_id: i64,
    /// 담배 종류 ID (`sigara_turleri.id`)
    pub sigara_turu_id: i64,
    /// 주문 수량 (갑 단위, 1 이상)
    pub quantity: i64,
    /// 주문일 ("YYYY-MM-DD")
    #[schema(example = "2025-03-01")]
    pub order_date: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

/// 주문 생성 요청
///
/// 외래 키 네 개, 수량, 주문일이 모두 필수입니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub sarici_id: i64,
    pub toptanci_id: i64,
    pub paketci_id: i64,
    pub sigara_turu_id: i64,
    pub quantity: i64,
    #[schema(example = "2025-03-01")]
    pub order_date: NaiveDate,
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_positive("quantity", self.quantity)
    }
}

/// 주문 수정 요청
///
/// 외래 키를 바꾸면 새 ID도 존재해야 합니다 (DB가 확인).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub sarici_id: Option<i64>,
    pub toptanci_id: Option<i64>,
    pub paketci_id: Option<i64>,
    pub sigara_turu_id: Option<i64>,
    pub quantity: Option<i64>,
    pub order_date: Option<NaiveDate>,
}

impl Validate for UpdateOrderRequest {
    fn validate(&self) -> Result<(), AppError> {
        match self.quantity {
            Some(quantity) => check_positive("quantity", quantity),
            None => Ok(()),
        }
    }
}
