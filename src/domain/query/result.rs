/// One page of matching records plus the counts the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    /// Matches after filtering, before paging.
    pub total_count: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> QueryResult<T> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 0 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    /// Human page label, e.g. `2 / 5`; `0 / 0` when nothing matched.
    pub fn page_label(&self) -> String {
        if self.total_pages == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.page_index + 1, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page_index: usize, total_pages: usize) -> QueryResult<u8> {
        QueryResult {
            items: Vec::new(),
            total_count: total_pages * 10,
            total_pages,
            page_index,
            page_size: 10,
        }
    }

    #[test]
    fn navigation_flags_follow_page_position() {
        assert!(!page(0, 3).has_previous());
        assert!(page(0, 3).has_next());
        assert!(page(2, 3).has_previous());
        assert!(!page(2, 3).has_next());
        assert!(!page(0, 0).has_next());
        assert!(!page(0, 0).has_previous());
    }

    #[test]
    fn page_label_is_one_based() {
        assert_eq!(page(1, 4).page_label(), "2 / 4");
        assert_eq!(page(0, 0).page_label(), "0 / 0");
    }
}
