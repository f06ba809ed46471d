//! Pagination metadata returned by listing use cases.

use serde::{Deserialize, Serialize};

use crate::port::PageRequest;

/// Echo of the request plus the total roll-up.
///
/// `total_pages` is `ceil(total / limit)`, which is 0 for an empty result
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page(),
            limit: request.limit(),
            total,
            total_pages: total.div_ceil(u64::from(request.limit())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_partial_pages_up() {
        let p = Pagination::new(PageRequest::new(Some(1), Some(10)), 45);
        assert_eq!(p.total_pages, 5);
    }

    #[test]
    fn empty_results_have_zero_pages() {
        let p = Pagination::new(PageRequest::new(Some(1), Some(10)), 0);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn exact_multiple_does_not_round_up() {
        let p = Pagination::new(PageRequest::new(Some(2), Some(20)), 40);
        assert_eq!(p.total_pages, 2);
    }
}
