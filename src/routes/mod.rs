//! API 라우트 설정 모듈
//!
//! 사용자 리소스 엔드포인트와 헬스체크를 애플리케이션에 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `/users` - 사용자 리소스 ([`handlers::users`](crate::handlers::users))
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(user_service)
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::errors::{AppError, AppResult};
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 리소스 라우트를 설정합니다
///
/// 추출기 오류(잘못된 JSON 본문, 잘못된 ID 형식, 잘못된 쿼리)는
/// 모두 `AppError::BadRequest`(400)로 응답하도록 설정합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"login":"jdoe","firstName":"John","lastName":"Doe"}'
///
/// curl -i "http://localhost:8080/users?pageNumber=2&pageSize=10"
/// ```
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .service(handlers::users::users_options)
            .service(handlers::users::get_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::head_user)
            .service(handlers::users::upsert_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(format!("잘못된 경로 파라미터: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(format!("잘못된 쿼리 파라미터: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_resource_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "users": 0
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> AppResult<HttpResponse> {
    let users = service.user_count().await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "users": users,
    })))
}
