//! Listing request parameters.

use serde::Deserialize;

/// Query-string parameters for `GET /dogs`.
///
/// Absent string parameters bind as empty strings; absent paging
/// parameters bind as `None`. Validation happens in the query planner,
/// not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Sortable attribute name.
    #[serde(default)]
    pub attribute: String,
    /// Sort order, `asc` or `desc`.
    #[serde(default)]
    pub order: String,
    /// 1-based page number.
    #[serde(rename = "pageNumber")]
    pub page_number: Option<i64>,
    /// Page size.
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}
