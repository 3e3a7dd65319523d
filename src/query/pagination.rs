// ==========================================
// Danuferd Vehicle Catalog - pagination
// ==========================================

use serde::Serialize;

/// One display page of a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number as requested (clamped up to 1).
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice one page out of a filtered set.
///
/// `total_pages = ceil(total / page_size)`. A page past the end is not
/// an error; it comes back with no items.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let start = (page - 1).saturating_mul(page_size);
    let page_items = if start >= total_items || page_size == 0 {
        Vec::new()
    } else {
        items[start..(start + page_size).min(total_items)].to_vec()
    };

    Page {
        items: page_items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}
