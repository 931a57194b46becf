use crate::model::api::{PaginatedDto, PaginationParams};

/// Upper bound applied to client supplied page sizes.
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

impl PageParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn from_dto(dto: PaginationParams) -> Self {
        Self::new(dto.page, dto.per_page)
    }
}

/// A single page of results with the total item count.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// Converts each item with `f` and attaches the pagination metadata.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PaginatedDto<D> {
        let total_pages = self.total_pages();

        PaginatedDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_size() {
        assert_eq!(PageParams::new(0, 0).per_page, 1);
        assert_eq!(PageParams::new(0, 500).per_page, MAX_PER_PAGE);
        assert_eq!(PageParams::new(3, 20).per_page, 20);
    }

    #[test]
    fn computes_total_pages() {
        let page = Paginated::new(vec![1, 2], 5, PageParams::new(0, 2));
        assert_eq!(page.total_pages(), 3);

        let dto = page.into_dto(|n| n * 10);
        assert_eq!(dto.items, vec![10, 20]);
        assert_eq!(dto.total_pages, 3);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page: Paginated<i32> = Paginated::new(vec![], 0, PageParams::new(0, 20));
        assert_eq!(page.total_pages(), 0);
    }
}
