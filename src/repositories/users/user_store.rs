//! # 사용자 스토어 계약
//!
//! 식별자를 키로 하는 사용자 저장소 인터페이스입니다.
//! 구현체는 교체 가능하며(인메모리, DB 등), 서비스 계층은 `Arc<dyn UserStore>`만
//! 알고 있습니다.
//!
//! ## 원자성
//!
//! 모든 변경 연산(`insert`, `update`, `update_or_insert`, `delete`)은 같은 식별자에 대한
//! 다른 변경 연산과 섞이지 않아야 합니다. 조회 연산은 레코드가 찢어진 상태를
//! 관찰하지 않는 일관된 스냅샷을 돌려줘야 합니다.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;
use crate::domain::entities::users::User;
use crate::domain::models::Page;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(Uuid),

    #[error("user {0} already exists")]
    DuplicateId(Uuid),

    #[error("user store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// `update_or_insert` 결과 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Replaced,
}

/// 저장된 엔티티와 결과 태그를 함께 돌려주는 upsert 결과
#[derive(Debug, Clone)]
pub struct Upserted {
    pub user: User,
    pub outcome: UpsertOutcome,
}

impl Upserted {
    pub fn is_created(&self) -> bool {
        self.outcome == UpsertOutcome::Created
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 식별자로 사용자를 찾습니다. 부수효과가 없습니다.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// 새 사용자를 저장하고 저장된 레코드를 돌려줍니다.
    ///
    /// 같은 식별자가 이미 있으면 `DuplicateId`로 실패합니다.
    async fn insert(&self, user: User) -> StoreResult<User>;

    /// `user.id`에 해당하는 레코드를 통째로 교체합니다. 없으면 `NotFound`.
    async fn update(&self, user: User) -> StoreResult<()>;

    /// 있으면 교체(`Replaced`), 없으면 생성(`Created`)합니다.
    async fn update_or_insert(&self, user: User) -> StoreResult<Upserted>;

    /// 레코드를 삭제하고, 실제로 삭제했는지 여부를 돌려줍니다.
    ///
    /// 존재 확인과 삭제가 한 번의 원자적 호출 안에서 일어나므로
    /// 동시 삭제 시에도 정확히 한 호출만 `true`를 받습니다.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;

    /// 삽입 순서 기준으로 페이지를 잘라 돌려줍니다.
    ///
    /// `page_number >= 1`, `1 <= page_size`로 정규화된 값을 받습니다.
    /// 범위를 벗어난 페이지는 빈 `items`와 정상 메타데이터를 돌려줍니다.
    async fn get_page(&self, page_number: usize, page_size: usize) -> StoreResult<Page<User>>;

    /// 저장된 사용자 수
    async fn count(&self) -> StoreResult<usize>;
}
