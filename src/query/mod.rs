//! Listing-parameter validation and query planning.
//!
//! This module turns four loosely-typed request inputs (a sortable
//! attribute name, a sort order, a page number, a page size) into a
//! validated [`QueryPlan`], or fails fast with a categorized
//! [`QueryError`].
//!
//! The set of sortable attributes is an explicit enum table
//! ([`SortField`]) rather than a reflective name-to-field lookup, so the
//! valid-attribute set is checked at compile time.
//!
//! # Example
//!
//! ```
//! use dogshouse::query::QueryPlan;
//!
//! let plan = QueryPlan::build("weight", "desc", Some(1), Some(10))?;
//! assert!(plan.sort.is_some());
//! assert!(plan.page.is_some());
//! # Ok::<(), dogshouse::error::QueryError>(())
//! ```

use crate::error::QueryError;

/// A field eligible for ordering.
///
/// Attribute names are matched after normalizing the first character to
/// upper case, so the wire forms `name` and `tailLength` resolve to
/// [`SortField::Name`] and [`SortField::TailLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort by name.
    Name,
    /// Sort by color.
    Color,
    /// Sort by tail length.
    TailLength,
    /// Sort by weight.
    Weight,
}

impl SortField {
    /// Resolve an attribute name to a sortable field.
    ///
    /// The first character is upper-cased before matching; the rest of the
    /// name must match exactly. Returns `None` for unknown attributes.
    #[must_use]
    pub fn parse(attribute: &str) -> Option<Self> {
        let mut chars = attribute.chars();
        let normalized = chars
            .next()
            .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())?;

        match normalized.as_str() {
            "Name" => Some(Self::Name),
            "Color" => Some(Self::Color),
            "TailLength" => Some(Self::TailLength),
            "Weight" => Some(Self::Weight),
            _ => None,
        }
    }

    /// The database column this field sorts on.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Color => "color",
            Self::TailLength => "tail_length",
            Self::Weight => "weight",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Resolve an order name to a direction.
    ///
    /// Only the exact strings `asc` and `desc` are accepted; no synonyms.
    #[must_use]
    pub fn parse(order: &str) -> Option<Self> {
        match order {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    /// The SQL keyword for this direction.
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A validated sort instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// The field to order by.
    pub field: SortField,
    /// The direction to order in.
    pub direction: SortDirection,
}

/// A validated paging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// Zero-based offset of the first record: `page_size * (page_number - 1)`.
    pub offset: i64,
    /// Maximum number of records: `page_size`.
    pub limit: i64,
}

/// A validated, normalized data-retrieval plan for one listing request.
///
/// Built fresh per request by [`QueryPlan::build`], immutable once built,
/// consumed once by the record service. When `sort` is `None`, the result
/// order is unspecified (whatever the storage engine returns by default);
/// callers must not depend on insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryPlan {
    /// Optional sort instruction, applied before paging.
    pub sort: Option<SortSpec>,
    /// Optional paging window, applied after sorting.
    pub page: Option<PageSpec>,
}

impl QueryPlan {
    /// Validate listing parameters and build an executable plan.
    ///
    /// Sorting and paging are validated independently; sorting is checked
    /// first. An empty string means an absent sort parameter.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`QueryError::InvalidInput`] if exactly one of `attribute`/`order`
    ///   is given ("Invalid sorting inputs"), if `order` is neither `asc`
    ///   nor `desc` ("Invalid order name"), or if exactly one of
    ///   `page_number`/`page_size` is given ("Invalid paging inputs").
    /// - [`QueryError::InvalidField`] if `attribute` is not a sortable
    ///   field.
    /// - [`QueryError::OutOfRange`] if `page_number` or `page_size` is
    ///   below 1, or if their product does not fit an `i64` offset.
    pub fn build(
        attribute: &str,
        order: &str,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Self, QueryError> {
        let sort = match (attribute.is_empty(), order.is_empty()) {
            (true, true) => None,
            (false, false) => {
                let field =
                    SortField::parse(attribute).ok_or_else(|| QueryError::InvalidField {
                        parameter: "attribute".to_string(),
                    })?;
                let direction =
                    SortDirection::parse(order).ok_or_else(|| QueryError::InvalidInput {
                        message: "Invalid order name".to_string(),
                        parameter: Some("order".to_string()),
                    })?;
                Some(SortSpec { field, direction })
            }
            _ => {
                return Err(QueryError::InvalidInput {
                    message: "Invalid sorting inputs".to_string(),
                    parameter: None,
                })
            }
        };

        let page = match (page_number, page_size) {
            (None, None) => None,
            (Some(number), Some(size)) => {
                if number < 1 || size < 1 {
                    return Err(QueryError::OutOfRange);
                }
                // Both operands come from the client; an offset past i64 is
                // not a representable window.
                let offset = size.checked_mul(number - 1).ok_or(QueryError::OutOfRange)?;
                Some(PageSpec {
                    offset,
                    limit: size,
                })
            }
            _ => {
                return Err(QueryError::InvalidInput {
                    message: "Invalid paging inputs".to_string(),
                    parameter: None,
                })
            }
        };

        Ok(Self { sort, page })
    }
}
