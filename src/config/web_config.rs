//! HTTP 미들웨어 설정
//!
//! Rate Limiting(`actix-governor`)과 CORS(`actix-cors`) 설정을 환경 변수에서 읽습니다.

use std::env;
use actix_cors::Cors;
use actix_web::http::header;
use super::data_config::parse_env;

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env::<u64>("RATE_LIMIT_PER_SECOND", 100).max(1),
            burst_size: parse_env::<u32>("RATE_LIMIT_BURST_SIZE", 200).max(1),
        }
    }
}

/// CORS 설정
///
/// `CORS_ALLOWED_ORIGINS`에 콤마로 구분된 origin 목록을 받습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| Self::parse_origins(&raw))
            .unwrap_or_default();

        if allowed_origins.is_empty() {
            return Self::default();
        }

        Self { allowed_origins }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 설정을 `Cors` 미들웨어로 만듭니다.
    ///
    /// `Location`과 `X-Pagination`은 브라우저 클라이언트가 읽을 수 있도록 노출합니다.
    pub fn build(&self) -> Cors {
        self.allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .expose_headers(vec![
                header::LOCATION,
                // from_static은 소문자 이름만 받는다
                header::HeaderName::from_static("x-pagination"),
            ])
            .max_age(3600)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
