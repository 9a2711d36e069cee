//! Pagination for list endpoints.
//!
//! Offset-based (`limit` + `offset`) and page-based (`limit` + `page`)
//! queries are both accepted; `page` wins when both are given. Empty query
//! values (`?limit=`) are treated as absent.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl PaginationParams {
    /// Effective page size, clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Rows to skip. Saturates rather than overflowing on huge query values.
    pub fn offset(&self) -> i64 {
        match self.page() {
            Some(page) => (page - 1).saturating_mul(self.limit()),
            None => self.offset.unwrap_or(0).max(0),
        }
    }

    pub fn page(&self) -> Option<i64> {
        self.page.map(|p| p.max(1))
    }

    /// Builds response metadata once the total row count is known.
    pub fn meta(&self, total: i64) -> PaginationMeta {
        let limit = self.limit();
        let offset = self.offset();
        let page = self.page();

        PaginationMeta {
            total,
            limit,
            offset: if page.is_none() { Some(offset) } else { None },
            page,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<i64>, offset: Option<i64>, page: Option<i64>) -> PaginationParams {
        PaginationParams {
            limit,
            offset,
            page,
        }
    }

    #[test]
    fn test_defaults() {
        let p = PaginationParams::default();
        assert_eq!(p.limit(), DEFAULT_LIMIT);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.page(), None);
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(params(Some(0), None, None).limit(), 1);
        assert_eq!(params(Some(-3), None, None).limit(), 1);
        assert_eq!(params(Some(500), None, None).limit(), MAX_LIMIT);
    }

    #[test]
    fn test_page_takes_precedence_over_offset() {
        let p = params(Some(10), Some(99), Some(3));
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn test_negative_offset_becomes_zero() {
        assert_eq!(params(None, Some(-7), None).offset(), 0);
    }

    #[test]
    fn test_meta_has_more() {
        let p = params(Some(10), Some(0), None);
        let meta = p.meta(25);
        assert!(meta.has_more);
        assert_eq!(meta.offset, Some(0));
        assert_eq!(meta.page, None);

        let last = params(Some(10), None, Some(3)).meta(25);
        assert!(!last.has_more);
        assert_eq!(last.page, Some(3));
        assert_eq!(last.offset, None);
    }

    #[test]
    fn test_extreme_offset_and_page_saturate() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"offset":"9223372036854775807"}"#).unwrap();
        assert_eq!(p.offset(), i64::MAX);
        assert!(!p.meta(0).has_more);

        let p: PaginationParams =
            serde_json::from_str(r#"{"page":"9223372036854775807"}"#).unwrap();
        assert_eq!(p.offset(), i64::MAX);
        let meta = p.meta(5);
        assert!(!meta.has_more);
        assert_eq!(meta.page, Some(i64::MAX));
    }

    #[test]
    fn test_empty_query_values_are_absent() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"limit":"","offset":"5","page":null}"#).unwrap();
        assert_eq!(p.limit, None);
        assert_eq!(p.offset, Some(5));
        assert_eq!(p.page, None);
    }
}
