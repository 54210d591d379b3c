//! # 포장업자 데이터베이스 쿼리 모듈 (`paketciler`)

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

pub async fn list_packagers(pool: &SqlitePool) -> Result<Vec<Packager>, AppError> {
    let packagers = sqlx::query_as::<_, Packager>(
        "SELECT id, name, phone, address, created_at, updated_at FROM paketciler ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(packagers)
}

pub async fn get_packager(pool: &SqlitePool, id: i64) -> Result<Option<Packager>, AppError> {
    let packager = sqlx::query_as::<_, Packager>(
        "SELECT id, name, phone, address, created_at, updated_at FROM paketciler WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(packager)
}

pub async fn create_packager(
    pool: &SqlitePool,
    req: &CreatePackagerRequest,
) -> Result<Packager, AppError> {
    let id = sqlx::query("INSERT INTO paketciler (name, phone, address) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(&req.phone)
        .bind(&req.address)
        .execute(pool)
        .await?
        .last_insert_rowid();

    get_packager(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created packager".to_string()))
}

pub async fn update_packager(
    pool: &SqlitePool,
    id: i64,
    req: &UpdatePackagerRequest,
) -> Result<Option<Packager>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE paketciler
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

    get_packager(pool, id).await
}

pub async fn delete_packager(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM paketciler WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| AppError::still_referenced(e, "Packager"))?;

    Ok(result.rows_affected() > 0)
}
