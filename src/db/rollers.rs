//! # 말이꾼 데이터베이스 쿼리 모듈
//!
//! `saricilar` 테이블에 대한 CRUD 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 모든 말이꾼을 생성 순서(id)대로 조회합니다.
///
/// `sqlx::query_as::<_, Roller>(sql)`:
/// - 결과 행을 `Roller` 구조체로 자동 변환합니다 (`#[derive(sqlx::FromRow)]` 덕분)
/// - `fetch_all`은 모든 행을 Vec으로 반환합니다
pub async fn list_rollers(pool: &SqlitePool) -> Result<Vec<Roller>, AppError> {
    let rollers = sqlx::query_as::<_, Roller>(
        "SELECT id, name, phone, address, created_at, updated_at FROM saricilar ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rollers)
}

/// ID로 말이꾼 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Roller)을 반환합니다.
pub async fn get_roller(pool: &SqlitePool, id: i64) -> Result<Option<Roller>, AppError> {
    let roller = sqlx::query_as::<_, Roller>(
        "SELECT id, name, phone, address, created_at, updated_at FROM saricilar WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(roller)
}

/// 새 말이꾼을 생성하고 생성된 행을 반환합니다.
///
/// ## 처리 흐름
/// 1. INSERT 실행 (id는 SQLite의 AUTOINCREMENT가 부여합니다)
/// 2. `last_insert_rowid()`로 부여된 id를 얻습니다
/// 3. 다시 조회하여 DB 기본값(created_at 등)이 채워진 완전한 행을 반환합니다
pub async fn create_roller(
    pool: &SqlitePool,
    req: &CreateRollerRequest,
) -> Result<Roller, AppError> {
    let id = sqlx::query("INSERT INTO saricilar (name, phone, address) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(&req.phone) // Option<String>: None이면 SQL NULL
        .bind(&req.address)
        .execute(pool)
        .await?
        .last_insert_rowid();

    get_roller(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created roller".to_string()))
}

/// 말이꾼 정보를 수정합니다.
///
/// `COALESCE(?, column)`: 바인딩한 값이 NULL(요청에 없는 필드)이면 기존 값을 유지합니다.
/// 한 문장으로 처리하므로 필드별로 UPDATE를 나눌 필요가 없습니다.
///
/// ## 반환값
/// - `Ok(Some(Roller))`: 수정 성공
/// - `Ok(None)`: 해당 ID가 없음 (라우트 핸들러가 404로 변환)
pub async fn update_roller(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateRollerRequest,
) -> Result<Option<Roller>, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE saricilar
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

    get_roller(pool, id).await
}

/// ID로 말이꾼을 삭제합니다.
///
/// 주문이 참조 중이면 외래 키 검사 때문에 실패하며, 409 Conflict가 됩니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID가 없음
pub async fn delete_roller(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM saricilar WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| AppError::still_referenced(e, "Roller"))?;

    Ok(result.rows_affected() > 0)
}
