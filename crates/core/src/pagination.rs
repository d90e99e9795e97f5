//! Uniform pagination shape used by every BFF list endpoint.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Validated `{limit, offset}` query parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    offset: u32,
}

impl PageRequest {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(limit: u32, offset: u32) -> Result<Self, DomainError> {
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(DomainError::validation(format!(
                "limit must be in 1..={}",
                Self::MAX_LIMIT
            )));
        }
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { limit: 20, offset: 0 }
    }
}

/// Response envelope for a page of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let size = items.len();
        let page = (request.offset() as u64 / request.limit() as u64) + 1;
        let has_previous = request.offset() > 0;
        let has_next = (request.offset() as u64 + size as u64) < total;
        Self {
            items,
            total,
            page,
            size,
            has_next,
            has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_limit_above_100() {
        assert!(PageRequest::new(101, 0).is_err());
    }

    #[test]
    fn rejects_zero_limit() {
        assert!(PageRequest::new(0, 0).is_err());
    }

    #[test]
    fn computes_page_number_from_offset() {
        let req = PageRequest::new(10, 20).unwrap();
        let page: Page<i32> = Page::new(vec![1, 2, 3], 23, req);
        assert_eq!(page.page, 3);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }
}
