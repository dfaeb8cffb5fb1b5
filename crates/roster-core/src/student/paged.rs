//! Paged list responses.

use serde::{Deserialize, Serialize};

/// Page number assumed when the backend omits it (1-based).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size assumed when the backend omits it.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A page of results exactly as the backend sent it.
///
/// Any field may be missing or null. Use [`PagedResult::into_page`] to apply
/// the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    #[serde(default)]
    pub items: Option<Vec<T>>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

// Derive would require `T: Default`.
impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: None,
            total_count: None,
            page: None,
            page_size: None,
        }
    }
}

impl<T> PagedResult<T> {
    /// A fully populated page.
    pub fn new(items: Vec<T>, total_count: u64, page: u32, page_size: u32) -> Self {
        Self {
            items: Some(items),
            total_count: Some(total_count),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Returns the items, or an empty list when the backend omitted them.
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }

    /// Apply defaults field by field: items to empty, total count to the
    /// number of items, page to 1 and page size to 10.
    pub fn into_page(self) -> Page<T> {
        let items = self.items.unwrap_or_default();
        let total_count = self.total_count.unwrap_or(items.len() as u64);
        Page {
            items,
            total_count,
            page: self.page.unwrap_or(DEFAULT_PAGE),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// A normalized page with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_fields() {
        let paged: PagedResult<u32> = serde_json::from_value(json!({
            "items": [1, 2],
            "totalCount": 12,
            "page": 2,
            "pageSize": 2
        }))
        .unwrap();
        assert_eq!(paged, PagedResult::new(vec![1, 2], 12, 2, 2));
    }

    #[test]
    fn defaults_apply_independently() {
        let paged: PagedResult<u32> =
            serde_json::from_value(json!({"items": [5, 6, 7], "page": 3})).unwrap();
        let page = paged.into_page();
        assert_eq!(page.items, vec![5, 6, 7]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn empty_body_defaults() {
        let paged: PagedResult<u32> = serde_json::from_value(json!({"items": null})).unwrap();
        let page = paged.into_page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page, DEFAULT_PAGE);
    }

    #[test]
    fn into_items_substitutes_empty() {
        assert!(PagedResult::<u32>::default().into_items().is_empty());
    }
}
