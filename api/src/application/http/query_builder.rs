//! Query builder utilities for handing parsed filters and sorts to the core
//!
//! Field names are passed through as given; alias translation happens in the
//! core service.

use opsmeta_core::domain::common::value_objects::{
    FilterCondition, PageRequest, Sort, SortOrder,
};

use super::query_params::{FilterParams, QueryParams, SortParams};

impl From<&super::query_params::FilterCondition> for FilterCondition {
    fn from(cond: &super::query_params::FilterCondition) -> Self {
        FilterCondition::new(cond.field.clone(), cond.operator, cond.value.clone())
    }
}

impl From<&super::query_params::SortSpec> for SortOrder {
    fn from(spec: &super::query_params::SortSpec) -> Self {
        SortOrder::new(spec.direction, spec.field.clone())
    }
}

/// Helper to convert filter params to a list of conditions
pub fn filter_conditions(filter: &FilterParams) -> Vec<FilterCondition> {
    filter
        .conditions
        .iter()
        .map(FilterCondition::from)
        .collect()
}

/// Helper to convert sort params to a sort
pub fn sort(sort: &SortParams) -> Sort {
    sort.sorts.iter().map(SortOrder::from).collect()
}

pub fn page_request(params: &QueryParams) -> PageRequest {
    PageRequest::new(
        params.pagination.page,
        params.pagination.size,
        sort(&params.sort),
    )
}
