//! # User Resource HTTP Handlers
//!
//! 사용자 리소스 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 흐름 조립은 [`UserService`]가 하고, 여기서는 결과를 상태 코드와 헤더로 옮깁니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 | 404 |
//! | `HEAD` | `/users/{id}` | 존재 확인 (본문 없음) | 200 | 404 |
//! | `GET` | `/users` | 목록 조회 + `X-Pagination` | 200 | 400 |
//! | `POST` | `/users` | 생성 + `Location` | 201 | 400, 422 |
//! | `PUT` | `/users/{id}` | 교체 또는 생성 | 201 / 204 | 400, 422 |
//! | `PATCH` | `/users/{id}` | JSON Patch 부분 수정 | 204 | 400, 404, 422 |
//! | `DELETE` | `/users/{id}` | 삭제 | 204 | 404 |
//! | `OPTIONS` | `/users` | 지원 메서드 안내 (`Allow`) | 200 | - |
//!
//! 잘못된 ID 형식, 누락/손상된 본문, 잘못된 쿼리는 추출기 설정
//! ([`configure_user_routes`](crate::routes::configure_user_routes))을 통해 모두 400으로 응답합니다.

use actix_web::http::header;
use actix_web::{delete, get, head, options, patch, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::request::{PatchDocument, UserForCreationDto, UserForUpdateDto, UserPageQuery};
use crate::domain::dto::users::response::{PaginationMetadata, PAGINATION_HEADER};
use crate::services::pagination::{PageLink, PaginationInfo};
use crate::services::users::UserService;

/// 단건 조회 라우트 이름 (`Location` 헤더 생성에 사용)
pub const GET_USER_ROUTE: &str = "get_user";

/// 목록 조회 라우트 이름 (페이지 링크 생성에 사용)
pub const GET_USERS_ROUTE: &str = "get_users";

/// `OPTIONS /users`가 안내하는 메서드 목록
pub const ALLOWED_METHODS: &str = "GET,HEAD,POST,PUT,PATCH,DELETE,OPTIONS";

/// 사용자 조회 핸들러
///
/// `GET /users/{user_id}`
///
/// ```json
/// {
///   "id": "6f1c2b1e-8a0e-4b8c-9d5b-1f0a6f0e2c11",
///   "login": "jdoe",
///   "firstName": "John",
///   "lastName": "Doe"
/// }
/// ```
#[get("/{user_id}", name = "get_user")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let user = service.get_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 존재 확인 핸들러
///
/// `HEAD /users/{user_id}` - GET과 같은 존재 확인을 하지만 본문 없이 헤더만 돌려줍니다.
#[head("/{user_id}")]
pub async fn head_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = user_id.into_inner();
    if !service.user_exists(id).await? {
        return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)));
    }

    Ok(HttpResponse::Ok()
        .insert_header(header::ContentType::json())
        .finish())
}

/// 사용자 목록 조회 핸들러
///
/// `GET /users?pageNumber=1&pageSize=10`
///
/// 본문은 사용자 배열이고, 페이지 위치는 `X-Pagination` 헤더로 전달합니다.
/// `pageNumber`는 1 이상, `pageSize`는 1..=20으로 보정됩니다.
#[get("", name = "get_users")]
pub async fn get_users(
    req: HttpRequest,
    service: web::Data<UserService>,
    query: web::Query<UserPageQuery>,
) -> AppResult<HttpResponse> {
    let listing = service.list_users(query.into_inner()).await?;
    let metadata = pagination_metadata(&req, &listing.pagination)?;
    let header_value = serde_json::to_string(&metadata).context("X-Pagination 직렬화 실패")?;

    Ok(HttpResponse::Ok()
        .insert_header((PAGINATION_HEADER, header_value))
        .json(listing.users))
}

/// 사용자 생성 핸들러
///
/// `POST /users` - 본문 `{login, firstName, lastName}`
///
/// 성공 시 201과 함께 생성된 식별자를 본문으로, 조회 경로를 `Location`으로 돌려줍니다.
/// 식별자는 항상 서버가 생성합니다.
#[post("")]
pub async fn create_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    payload: web::Json<UserForCreationDto>,
) -> AppResult<HttpResponse> {
    let created = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, user_location(&req, created.id)?))
        .json(created.id))
}

/// 사용자 교체/생성 핸들러
///
/// `PUT /users/{user_id}` - 본문의 모든 필드가 필수입니다.
///
/// - 기존 사용자를 교체한 경우: 204 No Content
/// - 경로의 식별자로 새로 만든 경우: 201 Created + `Location`
#[put("/{user_id}")]
pub async fn upsert_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
    payload: web::Json<UserForUpdateDto>,
) -> AppResult<HttpResponse> {
    let upserted = service
        .upsert_user(user_id.into_inner(), payload.into_inner())
        .await?;

    if upserted.is_created() {
        return Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, user_location(&req, upserted.user.id)?))
            .json(upserted.user.id));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 부분 수정 핸들러
///
/// `PATCH /users/{user_id}` (`application/json-patch+json`)
///
/// ```json
/// [ { "op": "replace", "path": "/firstName", "value": "Jane" } ]
/// ```
///
/// 패치나 검증이 실패하면 저장된 사용자는 바뀌지 않습니다.
#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
    payload: web::Json<PatchDocument>,
) -> AppResult<HttpResponse> {
    service.patch_user(user_id.into_inner(), &payload).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{user_id}` - 존재 확인과 삭제는 스토어의 한 번의 호출로 처리됩니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    service.delete_user(user_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 지원 메서드 안내 핸들러
///
/// `OPTIONS /users`
#[options("")]
pub async fn users_options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .finish()
}

fn user_location(req: &HttpRequest, id: Uuid) -> AppResult<String> {
    req.url_for(GET_USER_ROUTE, [id.to_string()])
        .map(|url| url.to_string())
        .context("Location URL 생성 실패")
}

fn page_link(req: &HttpRequest, link: PageLink) -> AppResult<String> {
    let mut url = req
        .url_for_static(GET_USERS_ROUTE)
        .context("페이지 링크 생성 실패")?;
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in link.query_pairs() {
            pairs.append_pair(key, &value);
        }
    }

    Ok(url.to_string())
}

fn pagination_metadata(req: &HttpRequest, info: &PaginationInfo) -> AppResult<PaginationMetadata> {
    Ok(PaginationMetadata {
        previous_page_link: info.previous_page().map(|link| page_link(req, link)).transpose()?,
        next_page_link: info.next_page().map(|link| page_link(req, link)).transpose()?,
        total_count: info.total_count,
        page_size: info.page_size,
        current_page: info.current_page,
        total_pages: info.total_pages,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};
    use crate::domain::dto::users::response::UserResponse;
    use crate::domain::entities::users::User;
    use crate::repositories::users::InMemoryUserStore;
    use crate::routes::configure_user_routes;
    use super::*;

    fn service_with(users: Vec<User>) -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserStore::with_users(users))))
    }

    fn numbered_users(count: usize) -> Vec<User> {
        (0..count)
            .map(|i| User::new(format!("user{}", i), "First".into(), "Last".into()))
            .collect()
    }

    macro_rules! app {
        ($service:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data($service.clone())
                    .configure(configure_user_routes),
            )
            .await
        };
    }

    fn pagination_header(response: &actix_web::dev::ServiceResponse) -> Value {
        let raw = response
            .headers()
            .get(PAGINATION_HEADER)
            .expect("X-Pagination header")
            .to_str()
            .unwrap();
        serde_json::from_str(raw).unwrap()
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "login": "jdoe", "firstName": "John", "lastName": "Doe" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let location = res
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let id: Uuid = actix_test::read_body_json(res).await;
        assert!(location.ends_with(&format!("/users/{}", id)));

        let req = actix_test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let user: UserResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.id, id);
        assert_eq!(user.login, "jdoe");
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
    }

    #[actix_web::test]
    async fn test_create_with_invalid_login_is_422() {
        let app = app!(service_with(vec![]));

        for login in ["", "*star", "_underscore"] {
            let req = actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "login": login, "firstName": "John", "lastName": "Doe" }))
                .to_request();
            let res = actix_test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = actix_test::read_body_json(res).await;
            assert!(body["errors"]["login"].is_array(), "login error for {:?}", login);
        }
    }

    #[actix_web::test]
    async fn test_create_with_null_login_is_422() {
        let service = service_with(vec![]);
        let app = app!(service);

        let req = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "login": null, "firstName": "John", "lastName": "Doe" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = actix_test::read_body_json(res).await;
        assert!(body["errors"]["login"].is_array());
        assert_eq!(service.user_count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_put_with_null_first_name_is_422() {
        let service = service_with(vec![]);
        let app = app!(service);
        let id = Uuid::new_v4();

        let req = actix_test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(json!({ "login": "jdoe", "firstName": null, "lastName": "Doe" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = actix_test::read_body_json(res).await;
        assert!(body["errors"]["firstName"].is_array());
        assert!(!service.user_exists(id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_create_without_body_is_400() {
        let app = app!(service_with(vec![]));

        let req = actix_test::TestRequest::post()
            .uri("/users")
            .insert_header(header::ContentType::json())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_missing_is_404_and_malformed_id_is_400() {
        let app = app!(service_with(vec![]));

        let req = actix_test::TestRequest::get()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::get().uri("/users/not-a-uuid").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_head_has_no_body() {
        let user = User::new("jdoe".into(), "John".into(), "Doe".into());
        let id = user.id;
        let app = app!(service_with(vec![user]));

        let req = actix_test::TestRequest::default()
            .method(Method::HEAD)
            .uri(&format!("/users/{}", id))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(actix_test::read_body(res).await.is_empty());

        let req = actix_test::TestRequest::default()
            .method(Method::HEAD)
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_empty_store() {
        let app = app!(service_with(vec![]));

        let req = actix_test::TestRequest::get()
            .uri("/users?pageNumber=1&pageSize=10")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let metadata = pagination_header(&res);
        assert_eq!(metadata["totalCount"], 0);
        assert_eq!(metadata["totalPages"], 0);
        assert!(metadata["previousPageLink"].is_null());
        assert!(metadata["nextPageLink"].is_null());

        let users: Vec<UserResponse> = actix_test::read_body_json(res).await;
        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_list_pages_over_twenty_five_users() {
        let app = app!(service_with(numbered_users(25)));

        let req = actix_test::TestRequest::get()
            .uri("/users?pageNumber=1&pageSize=10")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        let metadata = pagination_header(&res);
        assert_eq!(metadata["currentPage"], 1);
        assert_eq!(metadata["totalPages"], 3);
        assert!(metadata["previousPageLink"].is_null());
        let next = metadata["nextPageLink"].as_str().unwrap();
        assert!(next.contains("/users?pageNumber=2&pageSize=10"), "{}", next);
        let users: Vec<UserResponse> = actix_test::read_body_json(res).await;
        assert_eq!(users.len(), 10);

        let req = actix_test::TestRequest::get()
            .uri("/users?pageNumber=3&pageSize=10")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        let metadata = pagination_header(&res);
        assert!(metadata["nextPageLink"].is_null());
        let previous = metadata["previousPageLink"].as_str().unwrap();
        assert!(previous.contains("pageNumber=2"), "{}", previous);
        let users: Vec<UserResponse> = actix_test::read_body_json(res).await;
        assert_eq!(users.len(), 5);
        assert_eq!(users[0].login, "user20");
    }

    #[actix_web::test]
    async fn test_list_clamps_page_size() {
        let app = app!(service_with(numbered_users(25)));

        let req = actix_test::TestRequest::get()
            .uri("/users?pageNumber=-2&pageSize=50")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        let metadata = pagination_header(&res);
        assert_eq!(metadata["currentPage"], 1);
        assert_eq!(metadata["pageSize"], 20);
    }

    #[actix_web::test]
    async fn test_list_with_malformed_query_is_400() {
        let app = app!(service_with(vec![]));

        let req = actix_test::TestRequest::get()
            .uri("/users?pageNumber=abc")
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_put_twice_creates_then_replaces() {
        let service = service_with(vec![]);
        let app = app!(service);
        let id = Uuid::new_v4();
        let body = json!({ "login": "jdoe", "firstName": "John", "lastName": "Doe" });

        let req = actix_test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(&body)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        assert!(res.headers().contains_key(header::LOCATION));

        let req = actix_test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(&body)
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let stored = service.get_user(id).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.login, "jdoe");
        assert_eq!(service.user_count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_put_updates_in_place() {
        let user = User::new("jdoe".into(), "John".into(), "Doe".into());
        let id = user.id;
        let service = service_with(vec![user]);
        let app = app!(service);

        let req = actix_test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(json!({ "login": "jroe", "firstName": "Jane", "lastName": "Roe" }))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let stored = service.get_user(id).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.first_name, "Jane");
    }

    #[actix_web::test]
    async fn test_put_validation_and_malformed_id() {
        let app = app!(service_with(vec![]));

        let req = actix_test::TestRequest::put()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .set_json(json!({ "login": "jdoe", "firstName": "", "lastName": "Doe" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = actix_test::read_body_json(res).await;
        assert!(body["errors"]["firstName"].is_array());

        let req = actix_test::TestRequest::put()
            .uri("/users/12345")
            .set_json(json!({ "login": "jdoe", "firstName": "John", "lastName": "Doe" }))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_patch_first_name_preserves_other_fields() {
        let user = User::new("jdoe".into(), "John".into(), "Doe".into());
        let id = user.id;
        let service = service_with(vec![user]);
        let app = app!(service);

        let req = actix_test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .insert_header((header::CONTENT_TYPE, "application/json-patch+json"))
            .set_payload(r#"[{"op":"replace","path":"/firstName","value":"Jane"}]"#)
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let stored = service.get_user(id).await.unwrap();
        assert_eq!(stored.first_name, "Jane");
        assert_eq!(stored.login, "jdoe");
        assert_eq!(stored.last_name, "Doe");
    }

    #[actix_web::test]
    async fn test_patch_unknown_field_is_400_and_unchanged() {
        let user = User::new("jdoe".into(), "John".into(), "Doe".into());
        let id = user.id;
        let service = service_with(vec![user]);
        let app = app!(service);
        let before = service.get_user(id).await.unwrap();

        let req = actix_test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .insert_header((header::CONTENT_TYPE, "application/json-patch+json"))
            .set_payload(r#"[{"op":"replace","path":"/firstName","value":"Jane"},{"op":"replace","path":"/age","value":"30"}]"#)
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        assert_eq!(service.get_user(id).await.unwrap(), before);
    }

    #[actix_web::test]
    async fn test_patch_invalid_result_is_422_and_missing_is_404() {
        let user = User::new("jdoe".into(), "John".into(), "Doe".into());
        let id = user.id;
        let app = app!(service_with(vec![user]));

        let req = actix_test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .insert_header((header::CONTENT_TYPE, "application/json-patch+json"))
            .set_payload(r#"[{"op":"remove","path":"/lastName"}]"#)
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, req).await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let req = actix_test::TestRequest::patch()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .insert_header((header::CONTENT_TYPE, "application/json-patch+json"))
            .set_payload(r#"[{"op":"replace","path":"/firstName","value":"Jane"}]"#)
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_then_get() {
        let user = User::new("jdoe".into(), "John".into(), "Doe".into());
        let id = user.id;
        let app = app!(service_with(vec![user]));

        let req = actix_test::TestRequest::delete().uri(&format!("/users/{}", id)).to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = actix_test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::delete().uri(&format!("/users/{}", id)).to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_options_lists_allowed_methods() {
        let app = app!(service_with(vec![]));

        let req = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/users")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let allow = res.headers().get(header::ALLOW).unwrap().to_str().unwrap();
        for method in ["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"] {
            assert!(allow.contains(method), "{} missing from {}", method, allow);
        }
    }
}
