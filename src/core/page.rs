//! Page descriptor returned by windowed collection fetches

use serde::{Deserialize, Serialize};

/// A bounded slice of a collection together with its window position, size
/// and the collection's total element count.
///
/// The total count is computed independently of the slice fetch, so it is
/// invariant under the window choice: querying the same collection at
/// different `(page, size)` yields the same `total_elements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page_number: u64, page_size: u64, total_elements: u64) -> Self {
        Self {
            content,
            page_number,
            page_size,
            total_elements,
        }
    }

    /// Number of pages needed to cover the whole collection
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.page_size)
    }

    /// Map the page content while keeping the window descriptor intact
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}
