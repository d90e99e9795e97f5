//! Request/response DTOs shared across routes.

use serde::{Deserialize, Serialize};

use opsfabric_core::{DomainError, DomainResult, Page, PageRequest};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PageQuery {
    pub fn into_page_request(self) -> DomainResult<PageRequest> {
        PageRequest::new(self.limit.unwrap_or(20), self.offset.unwrap_or(0))
    }
}

#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T, U> From<Page<T>> for PageResponse<U>
where
    U: From<T>,
{
    fn from(page: Page<T>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            size: page.size,
            has_next: page.has_next,
            has_previous: page.has_previous,
            items: page.items.into_iter().map(U::from).collect(),
        }
    }
}

/// "Only one filter allowed at a time." Counts how many of the
/// passed `Option`s are `Some` and rejects anything but 0 or 1.
pub fn require_at_most_one_filter(filters: &[bool]) -> DomainResult<()> {
    if filters.iter().filter(|present| **present).count() > 1 {
        return Err(DomainError::validation("only one filter is allowed at a time"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_filters_at_once_is_rejected() {
        let err = require_at_most_one_filter(&[true, true, false]).unwrap_err();
        assert_eq!(err.code(), "validation_rejected");
    }

    #[test]
    fn one_filter_is_allowed() {
        assert!(require_at_most_one_filter(&[false, true, false]).is_ok());
    }

    #[test]
    fn no_filters_is_allowed() {
        assert!(require_at_most_one_filter(&[false, false]).is_ok());
    }
}
