//! # 인메모리 사용자 스토어
//!
//! 프로세스 수명 동안 유지되는 [`UserStore`] 구현체입니다.
//! `main`에서 한 번 생성되어 서비스에 주입되고, 서버가 멈추면 함께 해제됩니다.
//!
//! ## 저장 구조
//!
//! - `records`: 삽입 순번 → 사용자 (`BTreeMap`이므로 순회 순서 = 생성 순서)
//! - `index`: 식별자 → 삽입 순번
//!
//! 교체(update)는 순번을 유지하므로 목록에서의 위치가 바뀌지 않습니다.
//!
//! ## 동시성
//!
//! 전체 상태를 하나의 `RwLock`으로 보호합니다. 변경 연산은 호출 전체 동안
//! 쓰기 잠금을 잡고, 조회는 읽기 잠금 아래에서 레코드를 복사해 나갑니다.
//! 잠금 안에서 `.await`하지 않으므로 어떤 연산도 무기한 대기하지 않습니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use log::debug;
use uuid::Uuid;
use crate::domain::entities::users::User;
use crate::domain::models::Page;
use super::user_store::{StoreError, StoreResult, UpsertOutcome, Upserted, UserStore};

#[derive(Debug, Default)]
struct Records {
    records: BTreeMap<u64, User>,
    index: HashMap<Uuid, u64>,
    next_seq: u64,
}

impl Records {
    fn push(&mut self, user: User) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(user.id, seq);
        self.records.insert(seq, user);
    }

    fn replace(&mut self, user: User) -> bool {
        match self.index.get(&user.id) {
            Some(seq) => {
                self.records.insert(*seq, user);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Records>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 데이터를 담은 스토어를 만듭니다. 중복 식별자는 뒤의 것이 무시됩니다.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut records = Records::default();
        for user in users {
            if !records.index.contains_key(&user.id) {
                records.push(user);
            }
        }

        Self {
            inner: RwLock::new(records),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Records>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Records>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let records = self.read()?;

        Ok(records
            .index
            .get(&id)
            .and_then(|seq| records.records.get(seq))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> StoreResult<User> {
        if user.id.is_nil() {
            user.id = Uuid::new_v4();
        }

        let mut records = self.write()?;
        if records.index.contains_key(&user.id) {
            return Err(StoreError::DuplicateId(user.id));
        }

        records.push(user.clone());
        debug!("user {} inserted ({} stored)", user.id, records.records.len());

        Ok(user)
    }

    async fn update(&self, user: User) -> StoreResult<()> {
        let id = user.id;
        let mut records = self.write()?;

        if records.replace(user) {
            Ok(())
        } else {
            Err(StoreError::NotFound(id))
        }
    }

    async fn update_or_insert(&self, user: User) -> StoreResult<Upserted> {
        let mut records = self.write()?;

        let outcome = if records.replace(user.clone()) {
            UpsertOutcome::Replaced
        } else {
            records.push(user.clone());
            UpsertOutcome::Created
        };

        Ok(Upserted { user, outcome })
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut records = self.write()?;

        match records.index.remove(&id) {
            Some(seq) => {
                records.records.remove(&seq);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_page(&self, page_number: usize, page_size: usize) -> StoreResult<Page<User>> {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);

        let records = self.read()?;
        let total_count = records.records.len();
        let skip = (page_number - 1).saturating_mul(page_size);

        let items = records
            .records
            .values()
            .skip(skip)
            .take(page_size)
            .cloned()
            .collect();

        Ok(Page::new(items, total_count, page_number, page_size))
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.records.len())
    }
}
