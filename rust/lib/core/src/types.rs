use serde::{Deserialize, Serialize};

/// Page/limit query parameters for paginated list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: usize,

    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageParams {
    /// Row offset for the page, clamping page 0 to page 1. Saturates on
    /// overflow since page and limit come straight from the query string.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Pagination envelope returned next to a page of results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(total: usize, params: &PageParams) -> Self {
        let total_pages = if params.limit == 0 {
            0
        } else {
            total.div_ceil(params.limit)
        };
        Self {
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
        }
    }
}

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id() {
        let id = new_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }

    #[test]
    fn test_offset() {
        let p = PageParams { page: 3, limit: 10 };
        assert_eq!(p.offset(), 20);
        let p = PageParams { page: 0, limit: 10 };
        assert_eq!(p.offset(), 0);
        // Absurd query values saturate instead of overflowing.
        let p = PageParams { page: usize::MAX, limit: 10 };
        assert_eq!(p.offset(), usize::MAX);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let params = PageParams { page: 1, limit: 10 };
        assert_eq!(Pagination::new(0, &params).total_pages, 0);
        assert_eq!(Pagination::new(10, &params).total_pages, 1);
        assert_eq!(Pagination::new(11, &params).total_pages, 2);
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let params = PageParams::default();
        let json = serde_json::to_value(Pagination::new(25, &params)).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["limit"], 10);
    }
}
