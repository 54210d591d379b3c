//! # 결제 일정 데이터베이스 쿼리 모듈 (`odeme_takvimi`)

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

const PAYMENT_COLUMNS: &str =
    "id, siparis_id, amount, due_date, status, created_at, updated_at";

pub async fn list_payment_schedules(pool: &SqlitePool) -> Result<Vec<PaymentSchedule>, AppError> {
    let schedules = sqlx::query_as::<_, PaymentSchedule>(&format!(
        "SELECT {} FROM odeme_takvimi ORDER BY id",
        PAYMENT_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}

pub async fn get_payment_schedule(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<PaymentSchedule>, AppError> {
    let schedule = sqlx::query_as::<_, PaymentSchedule>(&format!(
        "SELECT {} FROM odeme_takvimi WHERE id = ?",
        PAYMENT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

/// 결제 일정을 생성합니다. `siparisId`가 없는 주문을 가리키면 외래 키 위반으로 실패합니다.
pub async fn create_payment_schedule(
    pool: &SqlitePool,
    req: &CreatePaymentScheduleRequest,
) -> Result<PaymentSchedule, AppError> {
    let id = sqlx::query(
        "INSERT INTO odeme_takvimi (siparis_id, amount, due_date, status) VALUES (?, ?, ?, ?)",
    )
    .bind(req.siparis_id)
    .bind(req.amount)
    .bind(req.due_date)
    .bind(req.status) // PaymentStatus → 'pending' 등 소문자 TEXT
    .execute(pool)
    .await?
    .last_insert_rowid();

    get_payment_schedule(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created payment schedule".to_string()))
}

pub async fn update_payment_schedule(
    pool: &SqlitePool,
    id: i64,
    req: &UpdatePaymentScheduleRequest,
) -> Result<Option<PaymentSchedule>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE odeme_takvimi
        SET siparis_id = COALESCE(?, siparis_id),
            amount = COALESCE(?, amount),
            due_date = COALESCE(?, due_date),
            status = COALESCE(?, status),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(req.siparis_id)
    .bind(req.amount)
    .bind(req.due_date)
    .bind(req.status)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_payment_schedule(pool, id).await
}

pub async fn delete_payment_schedule(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM odeme_takvimi WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
