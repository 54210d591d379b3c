//! # 결제 일정(PaymentSchedule, ödeme takvimi) 모델 정의
//!
//! 주문 하나에 여러 결제 일정이 붙을 수 있습니다.
//! 결제 일정은 주문에 종속되므로 주문이 삭제되면 함께 삭제됩니다 (ON DELETE CASCADE).

use super::{check_amount, Validate};
use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 결제 상태
///
/// DB에는 소문자 문자열(`'pending'` 등)로 저장되며, 테이블의 CHECK 제약 조건과
/// 같은 값 집합을 가집니다. 목록에 없는 값은 JSON 파싱 단계에서 거부됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// 결제 대기 (기본값)
    #[default]
    Pending,
    /// 결제 완료
    Paid,
    /// 기한 초과
    Overdue,
    /// 취소됨
    Cancelled,
}

/// 결제 일정 엔티티: `odeme_takvimi` 테이블 한 행
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    pub id: i64,
    /// 주문 ID (`siparisler.id`)
    pub siparis_id: i64,
    #[schema(example = 1250.0)]
    pub amount: f64,
    #[schema(example = "2025-04-01")]
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// 결제 일정 생성 요청
///
/// `status`를 생략하면 `pending`으로 생성됩니다.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentScheduleRequest {
    pub siparis_id: i64,
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: PaymentStatus,
}

impl Validate for CreatePaymentScheduleRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_amount("amount", self.amount)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentScheduleRequest {
    pub siparis_id: Option<i64>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
}

impl Validate for UpdatePaymentScheduleRequest {
    fn validate(&self) -> Result<(), AppError> {
        match self.amount {
            Some(amount) => check_amount("amount", amount),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending_when_omitted() {
        let req: CreatePaymentScheduleRequest = serde_json::from_str(
            r#"{ "siparisId": 1, "amount": 100, "dueDate": "2025-04-01" }"#,
        )
        .unwrap();
        assert_eq!(req.status, PaymentStatus::Pending);
        assert_eq!(req.due_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn unknown_status_is_rejected_by_serde() {
        let result: Result<UpdatePaymentScheduleRequest, _> =
            serde_json::from_str(r#"{ "status": "refunded" }"#);
        assert!(result.is_err());
    }
}
