//! # 담배 종류 데이터베이스 쿼리 모듈
//!
//! `sigara_turleri` 테이블 CRUD.
//! `name`은 UNIQUE 컬럼이라 중복 이름의 INSERT/UPDATE는 409 Conflict로 응답됩니다
//! (`error::classify_database_error` 참고).

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

pub async fn list_cigarette_types(pool: &SqlitePool) -> Result<Vec<CigaretteType>, AppError> {
    let types = sqlx::query_as::<_, CigaretteType>(
        "SELECT id, name, price, created_at, updated_at FROM sigara_turleri ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(types)
}

pub async fn get_cigarette_type(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<CigaretteType>, AppError> {
    let cigarette_type = sqlx::query_as::<_, CigaretteType>(
        "SELECT id, name, price, created_at, updated_at FROM sigara_turleri WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(cigarette_type)
}

pub async fn create_cigarette_type(
    pool: &SqlitePool,
    req: &CreateCigaretteTypeRequest,
) -> Result<CigaretteType, AppError> {
    let id = sqlx::query("INSERT INTO sigara_turleri (name, price) VALUES (?, ?)")
        .bind(&req.name)
        .bind(req.price)
        .execute(pool)
        .await?
        .last_insert_rowid();

    get_cigarette_type(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created cigarette type".to_string()))
}

pub async fn update_cigarette_type(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateCigaretteTypeRequest,
) -> Result<Option<CigaretteType>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE sigara_turleri
        SET name = COALESCE(?, name),
            price = COALESCE(?, price),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_cigarette_type(pool, id).await
}

/// 주문이 참조 중인 담배 종류는 삭제할 수 없습니다 (409).
pub async fn delete_cigarette_type(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM sigara_turleri WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| AppError::still_referenced(e, "Cigarette type"))?;

    Ok(result.rows_affected() > 0)
}
