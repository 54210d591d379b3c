//! # Meydan API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 데이터베이스 준비 (없으면 생성 → 연결 → 마이그레이션)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작, 종료 시그널을 받으면 연결 풀 정리
//!
//! 데이터베이스 준비가 실패하면 서버를 띄우지 않고 종료합니다.

mod app;
mod config;
mod db;
mod error;
mod extract;
mod models;
mod routes;

#[cfg(test)]
mod integration_tests;

use anyhow::Result;
use config::Config;
use routes::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 meydan, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meydan=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!("Starting Meydan API on {}", config.bind_addr());

    // ── 4단계: 데이터베이스 준비 ──
    // 실패를 로그로 남긴 뒤 `?`로 전파하여 프로세스를 종료합니다.
    let pool = db::init(db::DbOptions {
        url: &config.database_url,
        max_connections: config.max_connections,
        run_migrations: config.auto_migrate,
    })
    .await
    .inspect_err(|e| tracing::error!("Database initialization failed: {}", e))?;

    // ── 5단계: 라우터 설정 ──
    // pool.clone(): SqlitePool은 Arc 기반이라 같은 풀을 공유합니다.
    let app = app::build_router(AppState::new(pool.clone()));

    // ── 6단계: 서버 시작 ──
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    tracing::info!("API documentation at http://{}/api-docs/", listener.local_addr()?);

    // with_graceful_shutdown(): 시그널을 받으면 새 연결을 받지 않고
    // 진행 중인 요청이 끝날 때까지 기다린 뒤 반환합니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 모든 연결을 정상적으로 닫습니다 (SQLite WAL 정리 포함).
    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Ctrl+C 또는 SIGTERM(컨테이너 종료)을 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
