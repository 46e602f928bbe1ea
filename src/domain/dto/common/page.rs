//! 페이지네이션 DTO
//!
//! Spring Data의 `PageRequest`/`Page`에 대응하는 타입입니다.
//! 페이지 번호는 0부터 시작합니다.

use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 검증된 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    current_page: u32,
    page_size: u32,
}

impl PageRequest {
    /// 페이지 요청을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `current_page`가 음수이거나 `page_size`가 1 미만인 경우
    ///
    /// ```rust,ignore
    /// let request = PageRequest::of(0, 20)?;
    /// assert_eq!(request.offset(), 0);
    /// ```
    pub fn of(current_page: i32, page_size: i32) -> AppResult<Self> {
        let current_page = u32::try_from(current_page).map_err(|_| {
            AppError::ValidationError(format!("page index must not be less than zero: {}", current_page))
        })?;

        let page_size = u32::try_from(page_size)
            .ok()
            .filter(|size| *size >= 1)
            .ok_or_else(|| {
                AppError::ValidationError(format!("page size must not be less than one: {}", page_size))
            })?;

        Ok(Self { current_page, page_size })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 건너뛸 문서 수
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page) * u64::from(self.page_size)
    }
}

/// 페이지 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.page_size));

        Self {
            content,
            current_page: request.current_page,
            page_size: request.page_size,
            total_elements,
            total_pages,
        }
    }

    /// 페이지 메타데이터를 유지한 채 내용만 변환합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
