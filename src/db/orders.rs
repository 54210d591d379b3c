//! # 주문 데이터베이스 쿼리 모듈
//!
//! `siparisler` 테이블 CRUD.
//!
//! 외래 키 검사는 SQLite가 문장 단위로 수행합니다. 존재하지 않는 ID를 참조하는
//! INSERT/UPDATE는 `FOREIGN KEY constraint failed`로 실패하고, 그 문장의 변경은
//! 전혀 반영되지 않습니다. 따라서 별도의 트랜잭션이나 사전 조회가 필요 없습니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str = "id, sarici_id, toptanci_id, paketci_id, sigara_turu_id, \
                             quantity, order_date, created_at, updated_at";

pub async fn list_orders(pool: &SqlitePool) -> Result<Vec<Order>, AppError> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {} FROM siparisler ORDER BY id",
        ORDER_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

pub async fn get_order(pool: &SqlitePool, id: i64) -> Result<Option<Order>, AppError> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {} FROM siparisler WHERE id = ?",
        ORDER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(order)
}

/// 새 주문을 생성합니다.
///
/// 참조하는 네 ID 중 하나라도 없으면 외래 키 위반 에러가 반환되고
/// (HTTP 400 `constraint_violation`), 행은 생성되지 않습니다.
pub async fn create_order(pool: &SqlitePool, req: &CreateOrderRequest) -> Result<Order, AppError> {
    let id = sqlx::query(
        r#"
        INSERT INTO siparisler
            (sarici_id, toptanci_id, paketci_id, sigara_turu_id, quantity, order_date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(req.sarici_id)
    .bind(req.toptanci_id)
    .bind(req.paketci_id)
    .bind(req.sigara_turu_id)
    .bind(req.quantity)
    .bind(req.order_date) // chrono::NaiveDate → "YYYY-MM-DD" TEXT
    .execute(pool)
    .await?
    .last_insert_rowid();

    get_order(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created order".to_string()))
}

pub async fn update_order(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateOrderRequest,
) -> Result<Option<Order>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE siparisler
        SET sarici_id = COALESCE(?, sarici_id),
            toptanci_id = COALESCE(?, toptanci_id),
            paketci_id = COALESCE(?, paketci_id),
            sigara_turu_id = COALESCE(?, sigara_turu_id),
            quantity = COALESCE(?, quantity),
            order_date = COALESCE(?, order_date),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(req.sarici_id)
    .bind(req.toptanci_id)
    .bind(req.paketci_id)
    .bind(req.sigara_turu_id)
    .bind(req.quantity)
    .bind(req.order_date)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_order(pool, id).await
}

/// 주문을 삭제합니다. 이 주문의 결제 일정은 ON DELETE CASCADE로 함께 삭제됩니다.
pub async fn delete_order(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM siparisler WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| AppError::still_referenced(e, "Order"))?;

    Ok(result.rows_affected() > 0)
}
