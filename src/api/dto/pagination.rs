//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query parameters for pagination.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct PaginationParams {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page (max 100)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 20)]
    pub page_size: u32,
}

impl PaginationParams {
    /// Clamps out-of-range values to safe defaults.
    pub fn normalize(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page_size == 0 || self.page_size > 100 {
            self.page_size = 20;
        }
        self
    }

    /// Calculates the offset for database queries.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Returns the limit for database queries.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Generic paged response wrapper.
///
/// Field names follow the wire contract the portal front end consumes:
/// `{ items, currentPage, totalItems, totalPages }`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// The data items for this page
    pub items: Vec<T>,

    /// Current page number (1-based)
    #[schema(example = 1)]
    pub current_page: u32,

    /// Total number of items across all pages
    #[schema(example = 100)]
    pub total_items: u64,

    /// Total number of pages
    #[schema(example = 5)]
    pub total_pages: u32,
}

impl<T> PagedResponse<T> {
    /// Creates a new paged response; `totalPages` is
    /// `ceil(totalItems / pageSize)`.
    pub fn new(items: Vec<T>, params: &PaginationParams, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(params.page_size)) as u32;

        Self {
            items,
            current_page: params.page,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
    }

    #[test]
    fn test_normalize_clamps_invalid_values() {
        let params = PaginationParams {
            page: 0,
            page_size: 500,
        }
        .normalize();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
    }

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams {
            page: 3,
            page_size: 25,
        };
        assert_eq!(params.offset(), 50);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_total_pages_exact_division() {
        let params = PaginationParams {
            page: 1,
            page_size: 10,
        };
        let response: PagedResponse<i32> = PagedResponse::new(vec![], &params, 100);
        assert_eq!(response.total_pages, 10);
    }

    #[test]
    fn test_total_pages_with_remainder() {
        let params = PaginationParams {
            page: 1,
            page_size: 10,
        };
        let response: PagedResponse<i32> = PagedResponse::new(vec![], &params, 101);
        assert_eq!(response.total_pages, 11);
    }

    #[test]
    fn test_total_pages_empty() {
        let params = PaginationParams::default();
        let response: PagedResponse<i32> = PagedResponse::new(vec![], &params, 0);
        assert_eq!(response.total_pages, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let params = PaginationParams::default();
        let response = PagedResponse::new(vec![1, 2], &params, 2);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("currentPage").is_some());
        assert!(json.get("totalItems").is_some());
        assert!(json.get("totalPages").is_some());
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }

    proptest! {
        /// totalPages == ceil(totalItems / pageSize) for all valid sizes.
        #[test]
        fn prop_total_pages_is_ceiling(
            total_items in 0u64..1_000_000,
            page_size in 1u32..=100,
        ) {
            let params = PaginationParams { page: 1, page_size };
            let response: PagedResponse<i32> = PagedResponse::new(vec![], &params, total_items);

            let expected = (total_items as f64 / page_size as f64).ceil() as u32;
            prop_assert_eq!(response.total_pages, expected);
        }
    }
}
