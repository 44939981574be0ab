use serde::{Deserialize, Serialize};

/// Fixed page size for the reference listing.
pub const PAGE_SIZE: u64 = 10;

/// One page of a listing plus the metadata the pager needs.
///
/// Pages are 1-indexed. Requesting a page past the end yields an empty
/// `items` slice, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total_items: u64) -> Self {
        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page),
        }
    }

    /// Row offset of a 1-indexed page.
    pub fn offset(page: u64, per_page: u64) -> u64 {
        page.saturating_sub(1) * per_page
    }
}

/// Clamp a raw page parameter to a valid 1-indexed page number.
pub fn normalize_page(page: Option<u64>) -> u64 {
    page.unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<u32> = Page::new(vec![], 1, PAGE_SIZE, 23);
        assert_eq!(page.total_pages, 3);

        let page: Page<u32> = Page::new(vec![], 1, PAGE_SIZE, 30);
        assert_eq!(page.total_pages, 3);

        let page: Page<u32> = Page::new(vec![], 1, PAGE_SIZE, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Page::<u32>::offset(1, PAGE_SIZE), 0);
        assert_eq!(Page::<u32>::offset(3, PAGE_SIZE), 20);
        assert_eq!(Page::<u32>::offset(0, PAGE_SIZE), 0);
    }

    #[test]
    fn page_param_defaults_to_first() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(normalize_page(Some(7)), 7);
    }
}
