use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, max = 100, message = "pageSize must be between 1 and 100"))]
    pub page_size: Option<u32>,
}

impl PageParams {
    #[inline]
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    #[inline]
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PathId {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub pages: u32,
    pub records: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PageResult<T> {
    /// Slices an already filtered and ordered list into one page.
    pub fn paginate(items: Vec<T>, params: &PageParams) -> Self {
        let page = params.page();
        let page_size = params.page_size();
        let total = items.len() as u64;
        let pages = total.div_ceil(page_size as u64) as u32;
        let skip = (page as usize - 1).saturating_mul(page_size as usize);
        let records = items
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();
        PageResult {
            pages,
            records,
            total,
            page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let params = PageParams {
            page: Some(2),
            page_size: Some(2),
        };
        let result = PageResult::paginate(vec![1, 2, 3, 4, 5], &params);
        assert_eq!(result.records, vec![3, 4]);
        assert_eq!(result.pages, 3);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_paginate_defaults_and_empty() {
        let result = PageResult::<i32>::paginate(vec![], &PageParams::default());
        assert_eq!(result.page, DEFAULT_PAGE);
        assert_eq!(result.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(result.pages, 0);
        assert!(result.records.is_empty());
    }
}
