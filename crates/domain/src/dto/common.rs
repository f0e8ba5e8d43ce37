use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next_page() {
        let meta = PaginationMeta {
            page: 1,
            page_size: 50,
            total_items: 120,
            total_pages: 3,
        };
        assert!(meta.has_next_page());

        let last = PaginationMeta { page: 3, ..meta };
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_empty_result_set() {
        let response: PaginatedResponse<u32> = serde_json::from_str(
            r#"{"data":[],"pagination":{"page":1,"page_size":50,"total_items":0,"total_pages":0}}"#,
        )
        .unwrap();
        assert!(response.data.is_empty());
        assert!(!response.pagination.has_next_page());
    }
}
