//! # Pagination Calculator
//!
//! 페이지 번호/크기 정규화와 이전·다음 페이지 계산을 담당하는 순수 함수 모음입니다.
//! URL 생성은 하지 않습니다. 링크는 핸들러가 라우트 이름과 [`PageLink`]의
//! 쿼리 파라미터로 전송 계층(`HttpRequest::url_for`)에 위임해 만듭니다.
//!
//! ## 정규화 규칙
//!
//! - `pageNumber = max(1, input)` (기본값 1)
//! - `pageSize = clamp(input, 1, max)` (기본값 10, 최대 20)

use crate::config::PaginationConfig;
use crate::domain::models::Page;

/// 정규화된 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// 기본 설정(기본 크기 10, 최대 20)으로 정규화합니다.
    pub fn normalize(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        Self::normalize_with(&PaginationConfig::default(), page_number, page_size)
    }

    pub fn normalize_with(
        config: &PaginationConfig,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Self {
        let max_page_size = config.max_page_size.max(1);
        let page_number = page_number.unwrap_or(1).max(1);
        let page_size = page_size
            .unwrap_or(config.default_page_size as i64)
            .clamp(1, max_page_size as i64);

        Self {
            page_number: page_number as usize,
            page_size: page_size as usize,
        }
    }
}

/// 링크 생성에 쓰이는 쿼리 파라미터 쌍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageLink {
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

/// 한 페이지의 위치 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationInfo {
    /// `(pageNumber, pageSize, totalCount)`로부터 위치 정보를 계산합니다.
    ///
    /// 입력은 경계에서 다시 정규화되므로 0이 들어와도 안전합니다.
    pub fn compute(page_number: usize, page_size: usize, total_count: usize) -> Self {
        Self::from_page(&Page::<()>::new(
            Vec::new(),
            total_count,
            page_number.max(1),
            page_size.max(1),
        ))
    }

    /// 스토어가 돌려준 페이지의 이전/다음 여부를 그대로 쓰고 전체 페이지 수만 더합니다.
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            current_page: page.page_number,
            page_size: page.page_size,
            total_count: page.total_count,
            total_pages: page.total_count.div_ceil(page.page_size.max(1)),
            has_previous: page.has_previous,
            has_next: page.has_next,
        }
    }

    pub fn previous_page(&self) -> Option<PageLink> {
        self.has_previous.then(|| PageLink {
            page_number: self.current_page - 1,
            page_size: self.page_size,
        })
    }

    pub fn next_page(&self) -> Option<PageLink> {
        self.has_next.then(|| PageLink {
            page_number: self.current_page + 1,
            page_size: self.page_size,
        })
    }
}
