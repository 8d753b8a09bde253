use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Serialize, Clone)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u32, pagination: Pagination) -> Paginated<T> {
        Self {
            data,
            pagination: PaginationMeta {
                page: pagination.page,
                limit: pagination.limit,
                total,
                total_pages: total.div_ceil(pagination.limit),
            },
        }
    }
}

#[derive(Deserialize, Clone, Copy)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        self.limit as i64
    }

    // Widened before multiplying, large page/limit pairs overflow u32.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<Pagination>>().await {
            Ok(Query(pagination)) if pagination.page >= 1 && pagination.limit >= 1 => {
                Ok(pagination)
            }
            _ => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Invalid pagination options" })),
            )
                .into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let pagination = Pagination { page: 3, limit: 25 };
        assert_eq!(pagination.offset(), 50);
        assert_eq!(pagination.limit(), 25);
    }

    #[test]
    fn offset_of_a_huge_page_does_not_overflow() {
        let pagination = Pagination {
            page: 500_000,
            limit: 10_000,
        };
        assert_eq!(pagination.offset(), 4_999_990_000);
    }

    #[test]
    fn total_pages_rounds_up() {
        let paginated = Paginated::new(vec![2], 2, Pagination { page: 2, limit: 1 });
        assert_eq!(paginated.pagination.total_pages, 2);

        let paginated = Paginated::new(vec![1, 2, 3], 7, Pagination { page: 1, limit: 3 });
        assert_eq!(paginated.pagination.total_pages, 3);

        let paginated = Paginated::<i32>::new(vec![], 0, Pagination { page: 1, limit: 10 });
        assert_eq!(paginated.pagination.total_pages, 0);
    }
}
