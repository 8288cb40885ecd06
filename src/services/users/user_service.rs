//! # 사용자 리소스 서비스
//!
//! 엔드포인트별 비즈니스 흐름을 조립합니다. 핸들러는 HTTP 매핑만 하고,
//! 검증·패치·페이지 계산·저장 호출 순서는 이 서비스가 책임집니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ Validation / Patch Engine
//!                  │
//!                  ├──▶ UserStore
//!                  └──▶ Pagination Calculator (목록)
//! ```
//!
//! 스토어는 생성자로 주입되며(`Arc<dyn UserStore>`), 서비스 자체는
//! `web::Data<UserService>`로 모든 워커가 공유합니다.

use std::sync::Arc;
use log::{debug, info, warn};
use uuid::Uuid;
use crate::config::PaginationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{
    PatchOperation, UserFieldsDto, UserForCreationDto, UserForUpdateDto, UserPageQuery,
};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::repositories::users::{Upserted, UserStore};
use crate::services::pagination::{PageRequest, PaginationInfo};
use crate::services::patch::apply_patch;
use crate::services::validation::ensure_valid;

/// 목록 조회 결과: 잘라낸 사용자들과 페이지 위치 정보
#[derive(Debug, Clone)]
pub struct UserListing {
    pub users: Vec<UserResponse>,
    pub pagination: PaginationInfo,
}

pub struct UserService {
    store: Arc<dyn UserStore>,
    pagination: PaginationConfig,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_pagination(store, PaginationConfig::default())
    }

    pub fn with_pagination(store: Arc<dyn UserStore>, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<UserResponse> {
        debug!("사용자 조회: {}", id);

        self.find_existing(id).await.map(UserResponse::from)
    }

    pub async fn user_exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.store.find_by_id(id).await?.is_some())
    }

    pub async fn list_users(&self, query: UserPageQuery) -> AppResult<UserListing> {
        let request = PageRequest::normalize_with(&self.pagination, query.page_number, query.page_size);
        let page = self.store.get_page(request.page_number, request.page_size).await?;

        let pagination = PaginationInfo::from_page(&page);
        debug!(
            "사용자 목록 조회: page {}/{} (size {}, total {})",
            pagination.current_page, pagination.total_pages, pagination.page_size, pagination.total_count
        );

        Ok(UserListing {
            users: page.map(UserResponse::from).items,
            pagination,
        })
    }

    /// 새 사용자를 만듭니다. 식별자는 항상 서버가 생성합니다.
    pub async fn create_user(&self, request: UserForCreationDto) -> AppResult<UserResponse> {
        self.validate(&request)?;

        let UserFieldsDto {
            login,
            first_name,
            last_name,
        } = request;
        let created = self.store.insert(User::new(login, first_name, last_name)).await?;

        info!("사용자 생성: {}", created.id);
        Ok(UserResponse::from(created))
    }

    /// 경로의 식별자로 교체하거나, 없으면 그 식별자로 생성합니다.
    pub async fn upsert_user(&self, id: Uuid, request: UserForUpdateDto) -> AppResult<Upserted> {
        self.validate(&request)?;

        let UserFieldsDto {
            login,
            first_name,
            last_name,
        } = request;
        let upserted = self
            .store
            .update_or_insert(User::with_id(id, login, first_name, last_name))
            .await?;

        info!("사용자 upsert: {} ({:?})", id, upserted.outcome);
        Ok(upserted)
    }

    /// 패치를 작업 사본에 적용하고, 검증을 통과한 경우에만 저장합니다.
    pub async fn patch_user(&self, id: Uuid, operations: &[PatchOperation]) -> AppResult<UserResponse> {
        let existing = self.find_existing(id).await?;

        let patched = apply_patch(UserFieldsDto::from(&existing), operations).inspect_err(|e| {
            warn!("사용자 {} 패치 거부: {}", id, e);
        })?;
        self.validate(&patched)?;

        let UserFieldsDto {
            login,
            first_name,
            last_name,
        } = patched;
        let updated = User::with_id(existing.id, login, first_name, last_name);
        self.store.update(updated.clone()).await?;

        info!("사용자 패치: {} ({}개 연산)", id, operations.len());
        Ok(UserResponse::from(updated))
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }

        info!("사용자 삭제: {}", id);
        Ok(())
    }

    pub async fn user_count(&self) -> AppResult<usize> {
        Ok(self.store.count().await?)
    }

    async fn find_existing(&self, id: Uuid) -> AppResult<User> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    fn validate(&self, fields: &UserFieldsDto) -> AppResult<()> {
        ensure_valid(fields).inspect_err(|e| {
            if let AppError::ValidationFailed(errors) = e {
                warn!("검증 실패: {:?}", errors.fields().collect::<Vec<_>>());
            }
        })
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}
