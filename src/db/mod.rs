//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈은 엔티티 하나의 CRUD 쿼리를 담당합니다:
//! - `rollers`: 말이꾼 (`saricilar`)
//! - `wholesalers`: 도매상 (`toptancilar`)
//! - `packagers`: 포장업자 (`paketciler`)
//! - `cigarette_types`: 담배 종류 (`sigara_turleri`)
//! - `orders`: 주문 (`siparisler`)
//! - `payment_schedules`: 결제 일정 (`odeme_takvimi`)
//!
//! 이 파일에는 시작 시 한 번 실행되는 초기화 함수(`init`)도 있습니다.

pub mod cigarette_types;
pub mod orders;
pub mod packagers;
pub mod payment_schedules;
pub mod rollers;
pub mod wholesalers;

pub use cigarette_types::*;
pub use orders::*;
pub use packagers::*;
pub use payment_schedules::*;
pub use rollers::*;
pub use wholesalers::*;

use crate::error::AppError;
use sqlx::migrate::{MigrateDatabase, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::path::Path;
use std::str::FromStr;

/// `./migrations` 폴더의 SQL 파일들을 컴파일 타임에 바이너리에 포함시킵니다.
///
/// 파일 이름의 타임스탬프가 버전이며, 적용된 버전은 `_sqlx_migrations` 테이블에
/// 기록되므로 같은 마이그레이션이 두 번 실행되지 않습니다.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// 데이터베이스 초기화 옵션
#[derive(Debug, Clone)]
pub struct DbOptions<'a> {
    pub url: &'a str,
    pub max_connections: u32,
    pub run_migrations: bool,
}

/// 데이터베이스를 준비하고 연결 풀을 반환합니다.
///
/// ## 처리 흐름
/// 1. 데이터베이스가 없으면 생성 (디렉토리 포함)
/// 2. 외래 키 제약을 켠 연결 풀 생성
/// 3. `run_migrations`가 true면 아직 적용되지 않은 마이그레이션 실행,
///    false면 스키마를 바꾸지 않고 모든 마이그레이션이 이미 적용되었는지만 확인
///
/// 어느 단계든 실패하면 에러를 그대로 반환합니다.
/// 스키마가 없는 상태로 서버를 띄우지 않기 위해 호출하는 쪽(main)은 즉시 종료합니다.
pub async fn init(options: DbOptions<'_>) -> Result<SqlitePool, AppError> {
    ensure_database_exists(options.url).await?;

    // SqliteConnectOptions: URL을 파싱한 뒤 연결별 설정을 덧붙입니다.
    // foreign_keys(true): SQLite는 기본적으로 외래 키를 검사하지 않으므로 명시적으로 켭니다.
    let connect_options = SqliteConnectOptions::from_str(options.url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!("Connected to database");

    if options.run_migrations {
        tracing::info!("Running database migrations...");
        MIGRATOR.run(&pool).await?;
        tracing::info!("Database schema is up to date");
    } else {
        tracing::info!("AUTO_MIGRATE disabled, checking applied migrations");
        ensure_schema_current(&pool).await?;
    }

    Ok(pool)
}

/// 데이터베이스가 없으면 만듭니다 (`CREATE DATABASE IF NOT EXISTS`에 해당).
///
/// SQLite에서 데이터베이스는 파일이므로, 상위 디렉토리가 없으면 먼저 생성합니다.
/// 인메모리 데이터베이스(`sqlite::memory:`)는 항상 존재하는 것으로 취급됩니다.
pub async fn ensure_database_exists(url: &str) -> Result<(), AppError> {
    if Sqlite::database_exists(url).await? {
        return Ok(());
    }

    if let Some(dir) = database_dir(url) {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            tokio::fs::create_dir_all(dir).await?;
            tracing::info!("Created database directory: {}", dir.display());
        }
    }

    Sqlite::create_database(url).await?;
    tracing::info!("Created database: {}", url);
    Ok(())
}

/// `MIGRATOR`의 모든 버전이 `_sqlx_migrations`에 성공으로 기록되어 있는지 확인합니다.
///
/// 하나라도 빠져 있으면 에러를 반환하므로, 테이블이 없는 DB로 서버가 뜨지 않습니다.
pub async fn ensure_schema_current(pool: &SqlitePool) -> Result<(), AppError> {
    let (has_table,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    let applied: Vec<i64> = if has_table > 0 {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await?
    } else {
        Vec::new()
    };

    let pending: Vec<i64> = MIGRATOR
        .iter()
        .map(|migration| migration.version)
        .filter(|version| !applied.contains(version))
        .collect();

    if !pending.is_empty() {
        return Err(AppError::Internal(format!(
            "Database schema is missing migrations {:?}; start with AUTO_MIGRATE=true",
            pending
        )));
    }

    Ok(())
}

/// 연결 확인용 쿼리. 헬스체크에서도 사용합니다.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// `sqlite:data/meydan.db?mode=rwc` → `data`
fn database_dir(url: &str) -> Option<&Path> {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    Path::new(path).parent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_dir_strips_scheme_and_query() {
        assert_eq!(database_dir("sqlite:data/meydan.db"), Some(Path::new("data")));
        assert_eq!(
            database_dir("sqlite:///var/lib/meydan/prod.db?mode=rwc"),
            Some(Path::new("/var/lib/meydan"))
        );
        assert_eq!(database_dir("sqlite:meydan.db"), Some(Path::new("")));
    }

    #[tokio::test]
    async fn init_creates_missing_database_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("meydan.db");
        let url = format!("sqlite:{}", db_path.display());
        let options = DbOptions {
            url: &url,
            max_connections: 1,
            run_migrations: true,
        };

        let pool = init(options.clone()).await.unwrap();
        assert!(db_path.exists());
        pool.close().await;

        // 두 번째 실행: 이미 적용된 마이그레이션은 건너뜁니다
        let pool = init(options).await.unwrap();
        let applied: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(applied.0, MIGRATOR.iter().count() as i64);
        pool.close().await;
    }

    #[tokio::test]
    async fn init_without_migrations_refuses_an_empty_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("empty.db").display());

        let result = init(DbOptions {
            url: &url,
            max_connections: 1,
            run_migrations: false,
        })
        .await;

        match result {
            Err(AppError::Internal(msg)) => assert!(msg.contains("missing migrations"), "{}", msg),
            other => panic!("expected missing-migration error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn init_without_migrations_accepts_a_migrated_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("ready.db").display());
        let migrated = init(DbOptions {
            url: &url,
            max_connections: 1,
            run_migrations: true,
        })
        .await
        .unwrap();
        migrated.close().await;

        let pool = init(DbOptions {
            url: &url,
            max_connections: 1,
            run_migrations: false,
        })
        .await
        .unwrap();
        let (rollers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM saricilar")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rollers, 0);
        pool.close().await;
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("fk.db").display());
        let pool = init(DbOptions {
            url: &url,
            max_connections: 1,
            run_migrations: true,
        })
        .await
        .unwrap();

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
