//! 사용자 리소스 서비스 메인 애플리케이션
//!
//! 설정을 읽고 저장소와 서비스를 조립한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{info, warn};
use user_resource_service::config::{
    load_profile_env, CorsConfig, Environment, PaginationConfig, RateLimitConfig, ServerConfig,
};
use user_resource_service::repositories::users::{InMemoryUserStore, UserStore};
use user_resource_service::routes::configure_all_routes;
use user_resource_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 로거보다 먼저 읽어야 RUST_LOG, ENVIRONMENT가 반영된다
    let profile_result = load_profile_env();
    init_logging();

    info!("🚀 사용자 리소스 서비스 시작중...");
    match profile_result {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("환경 파일을 읽지 못해 프로세스 환경 변수만 사용합니다: {}", e),
    }

    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let pagination = PaginationConfig::from_env();
    let user_service = web::Data::new(UserService::with_pagination(store, pagination));

    info!(
        "✅ 서비스 초기화 완료 (기본 페이지 크기 {}, 최대 {})",
        pagination.default_page_size, pagination.max_page_size
    );

    let result = start_http_server(user_service).await;
    info!("🛑 서버가 종료되었습니다");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/users", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    let cors_config = CorsConfig::from_env();
    info!("CORS 허용 origin: {:?}", cors_config.allowed_origins);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors_config.build())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`별 기본 필터를 사용합니다.
fn init_logging() {
    let filter = Environment::current().default_log_filter();
    env_logger::init_from_env(Env::default().default_filter_or(filter));
}
