//! # 도매상 데이터베이스 쿼리 모듈
//!
//! `toptancilar` 테이블 CRUD. 구조는 `rollers`와 같습니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

pub async fn list_wholesalers(pool: &SqlitePool) -> Result<Vec<Wholesaler>, AppError> {
    let wholesalers = sqlx::query_as::<_, Wholesaler>(
        "SELECT id, name, phone, address, created_at, updated_at FROM toptancilar ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(wholesalers)
}

pub async fn get_wholesaler(pool: &SqlitePool, id: i64) -> Result<Option<Wholesaler>, AppError> {
    let wholesaler = sqlx::query_as::<_, Wholesaler>(
        "SELECT id, name, phone, address, created_at, updated_at FROM toptancilar WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(wholesaler)
}

pub async fn create_wholesaler(
    pool: &SqlitePool,
    req: &CreateWholesalerRequest,
) -> Result<Wholesaler, AppError> {
    let id = sqlx::query("INSERT INTO toptancilar (name, phone, address) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(&req.phone)
        .bind(&req.address)
        .execute(pool)
        .await?
        .last_insert_rowid();

    get_wholesaler(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created wholesaler".to_string()))
}

/// 보낸 필드만 수정합니다. 해당 ID가 없으면 `Ok(None)`.
pub async fn update_wholesaler(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateWholesalerRequest,
) -> Result<Option<Wholesaler>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE toptancilar
        SET name = COALESCE(?, name),
            phone = COALESCE(?, phone),
            address = COALESCE(?, address),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(&req.name)
    .bind(&req.phone)
    .bind(&req.address)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_wholesaler(pool, id).await
}

pub async fn delete_wholesaler(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM toptancilar WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| AppError::still_referenced(e, "Wholesaler"))?;

    Ok(result.rows_affected() > 0)
}
