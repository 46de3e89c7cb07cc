use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A single `(direction, property)` entry of a sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortOrder {
    pub direction: SortDirection,
    pub property: String,
}

impl SortOrder {
    pub fn new(direction: SortDirection, property: impl Into<String>) -> Self {
        Self {
            direction,
            property: property.into(),
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(SortDirection::Asc, property)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(SortDirection::Desc, property)
    }
}

/// Ordered list of sort orders, first entry has the highest precedence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Sort {
    pub orders: Vec<SortOrder>,
}

impl Sort {
    pub fn new(orders: Vec<SortOrder>) -> Self {
        Self { orders }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortOrder> {
        self.orders.iter()
    }
}

impl FromIterator<SortOrder> for Sort {
    fn from_iter<I: IntoIterator<Item = SortOrder>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a SortOrder;
    type IntoIter = std::slice::Iter<'a, SortOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

/// Page request: zero-based page number, page size and sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
            sort: Sort::unsorted(),
        }
    }
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: u64 = 20;
    pub const MAX_PAGE_SIZE: u64 = 100;

    pub fn new(page_number: u64, page_size: u64, sort: Sort) -> Self {
        Self {
            page_number,
            page_size,
            sort,
        }
    }

    pub fn of(page_number: u64, page_size: u64) -> Self {
        Self::new(page_number, page_size, Sort::unsorted())
    }

    pub fn offset(&self) -> u64 {
        self.page_number.saturating_mul(self.page_size)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page_size == 0 || self.page_size > Self::MAX_PAGE_SIZE {
            return Err(CoreError::InvalidPagination(format!(
                "page size must be between 1 and {}",
                Self::MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total: u64,
}

/// Filter operator for query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,    // equals (default)
    Ne,    // not equals
    Gt,    // greater than
    Gte,   // greater than or equal
    Lt,    // less than
    Lte,   // less than or equal
    In,    // in list (comma-separated)
    Like,  // like (case-sensitive)
    Ilike, // ilike (case-insensitive, PostgreSQL)
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::In => "in",
            FilterOperator::Like => "like",
            FilterOperator::Ilike => "ilike",
        }
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            "like" => Ok(FilterOperator::Like),
            "ilike" => Ok(FilterOperator::Ilike),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub property: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterCondition {
    pub fn new(property: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(property, FilterOperator::Eq, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::of(0, 20).offset(), 0);
        assert_eq!(PageRequest::of(3, 25).offset(), 75);
    }

    #[test]
    fn test_page_request_validate_bounds() {
        assert!(PageRequest::of(0, 1).validate().is_ok());
        assert!(PageRequest::of(0, 100).validate().is_ok());
        assert!(matches!(
            PageRequest::of(0, 0).validate(),
            Err(CoreError::InvalidPagination(_))
        ));
        assert!(matches!(
            PageRequest::of(0, 101).validate(),
            Err(CoreError::InvalidPagination(_))
        ));
    }

    #[test]
    fn test_sort_collects_in_order() {
        let sort: Sort = vec![SortOrder::desc("startTime"), SortOrder::asc("feed")]
            .into_iter()
            .collect();
        let properties: Vec<&str> = sort.iter().map(|o| o.property.as_str()).collect();
        assert_eq!(properties, vec!["startTime", "feed"]);
        assert_eq!(sort.orders[0].direction, SortDirection::Desc);
    }

    #[test]
    fn test_filter_operator_parse() {
        assert_eq!("gte".parse::<FilterOperator>(), Ok(FilterOperator::Gte));
        assert_eq!("ilike".parse::<FilterOperator>(), Ok(FilterOperator::Ilike));
        assert!("GTE".parse::<FilterOperator>().is_err());
        assert!("between".parse::<FilterOperator>().is_err());
    }

    #[test]
    fn test_sort_direction_serializes_uppercase() {
        let json = serde_json::to_string(&SortOrder::desc("jobName")).unwrap();
        assert_eq!(json, r#"{"direction":"DESC","property":"jobName"}"#);
    }
}
