//! 페이지 뷰 모델
//!
//! 전체 컬렉션의 한 구간과 그 위치를 설명하는 메타데이터입니다.
//! 요청마다 새로 계산되며 저장되지 않습니다.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// 이미 잘라낸 `items`로 페이지를 구성합니다.
    ///
    /// `page_number`와 `page_size`는 호출자가 정규화한 값(각각 1 이상)이어야 합니다.
    pub fn new(items: Vec<T>, total_count: usize, page_number: usize, page_size: usize) -> Self {
        Self {
            items,
            total_count,
            page_number,
            page_size,
            has_previous: page_number > 1,
            has_next: page_number.saturating_mul(page_size) < total_count,
        }
    }

    /// 항목 타입만 바꾸고 메타데이터는 그대로 유지합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
