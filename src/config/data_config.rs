//! 서버 및 리소스 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 페이지네이션 한도를 환경 변수에서 읽어옵니다.

use std::env;
use std::str::FromStr;
use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 환경 이름(대소문자 무관)에서 Environment를 만듭니다.
    /// 알 수 없는 값은 `Production`입니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터 (`RUST_LOG`가 없을 때 사용)
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug,actix_web=debug",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn port() -> u16 {
        parse_env("PORT", 8080)
    }

    pub fn workers() -> usize {
        parse_env::<usize>("WORKERS", 4).max(1)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 목록 조회 페이지 크기 설정
///
/// `max_page_size`는 20을 넘을 수 없습니다. 환경 변수로는 한도를 낮추는 것만 가능합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl PaginationConfig {
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    pub const MAX_PAGE_SIZE: usize = 20;

    pub fn from_env() -> Self {
        let max_page_size = parse_env("MAX_PAGE_SIZE", Self::MAX_PAGE_SIZE).clamp(1, Self::MAX_PAGE_SIZE);
        let default_page_size =
            parse_env("DEFAULT_PAGE_SIZE", Self::DEFAULT_PAGE_SIZE).clamp(1, max_page_size);

        Self {
            default_page_size,
            max_page_size,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            max_page_size: Self::MAX_PAGE_SIZE,
        }
    }
}

/// `PROFILE`별 `.env` 파일 이름. `None`이면 기본 `.env` 탐색을 사용합니다.
pub fn profile_env_file(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// `PROFILE`(기본값 `dev`)에 맞는 `.env` 파일을 읽고, 읽은 파일 경로를 돌려줍니다.
///
/// 파일이 없으면 오류를 돌려주지만 치명적이지 않습니다. 호출자는 경고만 남기고
/// 프로세스 환경 변수로 계속 진행합니다.
pub fn load_profile_env() -> Result<String, dotenv::Error> {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile_env_file(&profile) {
        Some(file) => dotenv::from_filename(file).map(|_| file.to_string()),
        None => dotenv::dotenv().map(|path| path.display().to_string()),
    }
}

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 씁니다.
pub(crate) fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
