use thiserror::Error;

pub use opsmeta_core::domain::common::value_objects::{FilterOperator, SortDirection};
use opsmeta_core::domain::common::value_objects::PageRequest;

/// Filter condition for a single field
#[derive(Debug, Clone)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

/// Parsed filter parameters
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }
}

/// Sort specification for a single field
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Parsed sort parameters
#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn new() -> Self {
        Self { sorts: Vec::new() }
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                sorts.push(SortSpec {
                    field: stripped.to_string(),
                    direction: SortDirection::Desc,
                });
            } else {
                sorts.push(SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                });
            }
        }
        Self { sorts }
    }
}

/// Pagination parameters, zero-based page number
#[derive(Debug, Clone)]
pub struct PaginationParams {
    pub page: u64,
    pub size: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    pub fn new(page: Option<u64>, size: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size
                .unwrap_or(PageRequest::DEFAULT_PAGE_SIZE)
                .clamp(1, PageRequest::MAX_PAGE_SIZE),
        }
    }
}

/// Rejected filter parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParamsError {
    #[error("Unknown filter operator '{operator}' for field '{field}'")]
    UnknownOperator { field: String, operator: String },

    #[error("Malformed filter parameter '{0}'")]
    MalformedFilter(String),
}

/// Combined query parameters (filter, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from decoded query string pairs, in request order
    /// Handles formats like:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field
    /// - page=0, size=20
    ///
    /// Repeated filter keys add one condition each. For `sort`, `page` and
    /// `size` the last occurrence wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, QueryParamsError> {
        let mut filter = FilterParams::new();
        let mut sort = SortParams::new();
        let mut page: Option<u64> = None;
        let mut size: Option<u64> = None;

        for (key, value) in pairs {
            // Parse filter parameters
            if let Some(filter_key) = key.strip_prefix("filter[") {
                let Some(end_bracket) = filter_key.find(']') else {
                    return Err(QueryParamsError::MalformedFilter(key.clone()));
                };
                let field = filter_key[..end_bracket].to_string();
                let remaining = &filter_key[end_bracket + 1..];

                if remaining.is_empty() {
                    // filter[field]=value (default to eq)
                    filter.conditions.push(FilterCondition {
                        field,
                        operator: FilterOperator::Eq,
                        value: value.clone(),
                    });
                } else if remaining.len() > 2
                    && remaining.starts_with('[')
                    && remaining.ends_with(']')
                {
                    // filter[field][operator]=value
                    let operator_str = &remaining[1..remaining.len() - 1];
                    let operator = operator_str.parse::<FilterOperator>().map_err(|_| {
                        QueryParamsError::UnknownOperator {
                            field: field.clone(),
                            operator: operator_str.to_string(),
                        }
                    })?;
                    filter.conditions.push(FilterCondition {
                        field,
                        operator,
                        value: value.clone(),
                    });
                } else {
                    return Err(QueryParamsError::MalformedFilter(key.clone()));
                }
            }
            // Parse sort parameter
            else if key == "sort" {
                sort = SortParams::from_string(value);
            }
            // Parse pagination parameters
            else if key == "page" {
                if let Ok(val) = value.parse::<u64>() {
                    page = Some(val);
                }
            } else if key == "size"
                && let Ok(val) = value.parse::<u64>()
            {
                size = Some(val);
            }
        }

        Ok(Self {
            filter,
            sort,
            pagination: PaginationParams::new(page, size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_parse_simple() {
        let params = QueryParams::from_pairs(&pairs(&[("filter[feed]", "orders")])).unwrap();
        assert_eq!(params.filter.conditions.len(), 1);
        assert_eq!(params.filter.conditions[0].field, "feed");
        assert_eq!(params.filter.conditions[0].operator, FilterOperator::Eq);
        assert_eq!(params.filter.conditions[0].value, "orders");
    }

    #[test]
    fn test_filter_parse_with_operator() {
        let params =
            QueryParams::from_pairs(&pairs(&[("filter[executionId][gte]", "50")])).unwrap();
        assert_eq!(params.filter.conditions.len(), 1);
        assert_eq!(params.filter.conditions[0].field, "executionId");
        assert_eq!(params.filter.conditions[0].operator, FilterOperator::Gte);
        assert_eq!(params.filter.conditions[0].value, "50");
    }

    #[test]
    fn test_filter_with_unknown_operator_is_rejected() {
        let result = QueryParams::from_pairs(&pairs(&[("filter[status][between]", "a,b")]));
        assert_eq!(
            result.unwrap_err(),
            QueryParamsError::UnknownOperator {
                field: "status".to_string(),
                operator: "between".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_filter_keys_are_rejected() {
        for key in ["filter[status", "filter[status]gte", "filter[status][]"] {
            let result = QueryParams::from_pairs(&pairs(&[(key, "FAILED")]));
            assert_eq!(
                result.unwrap_err(),
                QueryParamsError::MalformedFilter(key.to_string()),
                "{key}"
            );
        }
    }

    #[test]
    fn test_repeated_filters_are_all_kept_in_request_order() {
        let params = QueryParams::from_pairs(&pairs(&[
            ("filter[status]", "FAILED"),
            ("filter[feed]", "orders"),
            ("filter[status][ne]", "ABANDONED"),
        ]))
        .unwrap();
        let conditions: Vec<(&str, FilterOperator, &str)> = params
            .filter
            .conditions
            .iter()
            .map(|c| (c.field.as_str(), c.operator, c.value.as_str()))
            .collect();
        assert_eq!(
            conditions,
            vec![
                ("status", FilterOperator::Eq, "FAILED"),
                ("feed", FilterOperator::Eq, "orders"),
                ("status", FilterOperator::Ne, "ABANDONED"),
            ]
        );
    }

    #[test]
    fn test_sort_parse() {
        let params = QueryParams::from_pairs(&pairs(&[("sort", "-feedName,startTime")])).unwrap();
        assert_eq!(params.sort.sorts.len(), 2);
        assert_eq!(params.sort.sorts[0].field, "feedName");
        assert_eq!(params.sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(params.sort.sorts[1].field, "startTime");
        assert_eq!(params.sort.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_last_sort_wins() {
        let params =
            QueryParams::from_pairs(&pairs(&[("sort", "feed"), ("sort", "-startTime")])).unwrap();
        assert_eq!(params.sort.sorts.len(), 1);
        assert_eq!(params.sort.sorts[0].field, "startTime");
    }

    #[test]
    fn test_pagination_parse() {
        let params = QueryParams::from_pairs(&pairs(&[("page", "3"), ("size", "50")])).unwrap();
        assert_eq!(params.pagination.page, 3);
        assert_eq!(params.pagination.size, 50);
    }

    #[test]
    fn test_pagination_defaults_and_clamps() {
        let params = QueryParams::from_pairs(&[]).unwrap();
        assert_eq!(params.pagination.page, 0);
        assert_eq!(params.pagination.size, 20);

        let params = QueryParams::from_pairs(&pairs(&[("page", "-1"), ("size", "1000")])).unwrap();
        assert_eq!(params.pagination.page, 0);
        assert_eq!(params.pagination.size, 100);
    }
}
