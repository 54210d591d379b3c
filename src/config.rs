//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 URL (지정하면 `DB_DIR`/`DB_NAME`보다 우선)
//! - `DB_DIR`: 데이터베이스 파일 디렉토리 (기본값: `data`)
//! - `DB_NAME`: 데이터베이스 이름 (기본값: `meydan`) → `<DB_DIR>/<DB_NAME>.db`
//! - `DB_MAX_CONNECTIONS`: 연결 풀 최대 크기 (기본값: 5)
//! - `AUTO_MIGRATE`: 시작 시 마이그레이션 실행 여부 (기본값: true)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;
use thiserror::Error;

/// 설정값 파싱 실패
///
/// 잘못된 값을 조용히 기본값으로 바꾸지 않고, 시작 단계에서 바로 실패시킵니다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서만 사용합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/meydan.db")
    pub database_url: String,
    /// 연결 풀이 유지하는 최대 연결 수
    pub max_connections: u32,
    /// true면 시작할 때 아직 적용되지 않은 마이그레이션을 실행합니다
    pub auto_migrate: bool,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 환경변수가 하나도 없어도 동작합니다.
    /// 값이 있지만 형식이 잘못된 경우(예: `PORT=abc`)에만 에러가 발생합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 환경변수 조회 함수를 주입받아 설정을 만듭니다.
    ///
    /// 테스트에서 프로세스 전역 환경변수를 건드리지 않기 위해 분리했습니다.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // DATABASE_URL이 없으면 DB_DIR/DB_NAME으로 파일 경로를 조립합니다.
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let dir = lookup("DB_DIR").unwrap_or_else(|| "data".to_string());
                let name = lookup("DB_NAME").unwrap_or_else(|| "meydan".to_string());
                format!("sqlite:{}/{}.db", dir.trim_end_matches('/'), name)
            }
        };

        Ok(Self {
            database_url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 5)?,
            auto_migrate: parse_bool_or("AUTO_MIGRATE", lookup("AUTO_MIGRATE"), true)?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup("PORT"), 3000)?,
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 숫자형 설정을 파싱합니다. 값이 없으면 기본값을 사용합니다.
fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected: "number",
            value: raw,
        }),
    }
}

fn parse_bool_or(
    key: &'static str,
    value: Option<String>,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            expected: "boolean",
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite:data/meydan.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.auto_migrate);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn database_name_builds_file_url() {
        let config = config_from(&[("DB_DIR", "/var/lib/meydan/"), ("DB_NAME", "prod")]).unwrap();
        assert_eq!(config.database_url, "sqlite:/var/lib/meydan/prod.db");
    }

    #[test]
    fn database_url_wins_over_name() {
        let config =
            config_from(&[("DATABASE_URL", "sqlite::memory:"), ("DB_NAME", "ignored")]).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn auto_migrate_accepts_common_spellings() {
        assert!(!config_from(&[("AUTO_MIGRATE", "false")]).unwrap().auto_migrate);
        assert!(!config_from(&[("AUTO_MIGRATE", "0")]).unwrap().auto_migrate);
        assert!(config_from(&[("AUTO_MIGRATE", "YES")]).unwrap().auto_migrate);
        assert!(config_from(&[("AUTO_MIGRATE", "maybe")]).is_err());
    }
}
