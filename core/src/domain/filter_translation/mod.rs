//! Translation of user-facing filter and sort names into the property paths
//! understood by the query layer.
//!
//! API callers filter and sort job executions with short names such as
//! `feed` or `jobName`. The query layer addresses the same data through
//! nested paths (`jobInstance.feed.name`). The alias table below is built once
//! and never mutated; names without an entry pass through untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::common::value_objects::{FilterCondition, PageRequest, Sort, SortOrder};

pub const JOB_EXECUTION_FEED_NAME_FILTER_KEY: &str = "jobInstance.feed.name";
pub const JOB_EXECUTION_JOB_NAME_FILTER_KEY: &str = "jobInstance.jobName";
pub const JOB_EXECUTION_ID_FILTER_KEY: &str = "jobExecutionId";

/// Entity a filter or sort request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryEntity {
    JobExecution,
}

const JOB_EXECUTION_ALIASES: &[(&str, &str)] = &[
    ("feed", JOB_EXECUTION_FEED_NAME_FILTER_KEY),
    ("feedName", JOB_EXECUTION_FEED_NAME_FILTER_KEY),
    ("feedname", JOB_EXECUTION_FEED_NAME_FILTER_KEY),
    ("jobName", JOB_EXECUTION_JOB_NAME_FILTER_KEY),
    ("executionId", JOB_EXECUTION_ID_FILTER_KEY),
    ("executionid", JOB_EXECUTION_ID_FILTER_KEY),
    ("job", JOB_EXECUTION_JOB_NAME_FILTER_KEY),
];

static FILTER_ALIASES: LazyLock<HashMap<QueryEntity, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([(
            QueryEntity::JobExecution,
            JOB_EXECUTION_ALIASES.iter().copied().collect(),
        )])
    });

/// Returns true if `column` is a known alias for `entity`. Case sensitive.
pub fn has_mapping(entity: QueryEntity, column: &str) -> bool {
    canonical_path(entity, column).is_some()
}

/// Canonical path registered for `column`, if any.
pub fn canonical_path(entity: QueryEntity, column: &str) -> Option<&'static str> {
    FILTER_ALIASES
        .get(&entity)
        .and_then(|aliases| aliases.get(column))
        .copied()
}

/// Resolves `column` to its canonical path, or returns it unchanged.
pub fn resolve(entity: QueryEntity, column: &str) -> &str {
    canonical_path(entity, column).unwrap_or(column)
}

pub fn resolve_job_execution_filter(column: &str) -> Option<&'static str> {
    canonical_path(QueryEntity::JobExecution, column)
}

/// Rewrites every aliased property of `sort`, keeping direction and order.
pub fn resolve_sort_orders(entity: QueryEntity, sort: &Sort) -> Sort {
    sort.iter()
        .map(|order| SortOrder::new(order.direction, resolve(entity, &order.property)))
        .collect()
}

/// Rewrites the sort of a page request when at least one of its properties
/// is an alias. Requests without aliased properties, and absent requests,
/// are returned as they came in.
pub fn resolve_sort(entity: QueryEntity, page_request: Option<PageRequest>) -> Option<PageRequest> {
    let page_request = page_request?;

    let any_match = page_request
        .sort
        .iter()
        .any(|order| has_mapping(entity, &order.property));
    if !any_match {
        return Some(page_request);
    }

    let sort = resolve_sort_orders(entity, &page_request.sort);
    Some(PageRequest::new(
        page_request.page_number,
        page_request.page_size,
        sort,
    ))
}

pub fn resolve_filters(entity: QueryEntity, filters: Vec<FilterCondition>) -> Vec<FilterCondition> {
    filters
        .into_iter()
        .map(|condition| match canonical_path(entity, &condition.property) {
            Some(path) => FilterCondition {
                property: path.to_string(),
                ..condition
            },
            None => condition,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::value_objects::{FilterOperator, SortDirection};

    const JOB: QueryEntity = QueryEntity::JobExecution;

    #[test]
    fn test_known_aliases_resolve_to_canonical_paths() {
        let expected = [
            ("feed", "jobInstance.feed.name"),
            ("feedName", "jobInstance.feed.name"),
            ("feedname", "jobInstance.feed.name"),
            ("jobName", "jobInstance.jobName"),
            ("job", "jobInstance.jobName"),
            ("executionId", "jobExecutionId"),
            ("executionid", "jobExecutionId"),
        ];

        for (alias, path) in expected {
            assert!(has_mapping(JOB, alias), "missing alias {alias}");
            assert_eq!(resolve(JOB, alias), path);
        }
    }

    #[test]
    fn test_unknown_columns_pass_through() {
        for column in ["unknownCol", "status", "", "jobInstance.feed.name"] {
            assert!(!has_mapping(JOB, column));
            assert_eq!(resolve(JOB, column), column);
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!has_mapping(JOB, "Feed"));
        assert!(!has_mapping(JOB, "FEEDNAME"));
        assert_eq!(resolve(JOB, "JobName"), "JobName");
    }

    #[test]
    fn test_resolve_job_execution_filter_reports_absence() {
        assert_eq!(
            resolve_job_execution_filter("feed"),
            Some(JOB_EXECUTION_FEED_NAME_FILTER_KEY)
        );
        assert_eq!(resolve_job_execution_filter("unknownCol"), None);
    }

    #[test]
    fn test_resolve_sort_without_aliases_is_unchanged() {
        let request = PageRequest::new(
            2,
            50,
            Sort::new(vec![SortOrder::desc("startTime"), SortOrder::asc("status")]),
        );

        let resolved = resolve_sort(JOB, Some(request.clone()));
        assert_eq!(resolved, Some(request));
    }

    #[test]
    fn test_resolve_sort_replaces_only_aliases() {
        let request = PageRequest::new(
            1,
            10,
            Sort::new(vec![
                SortOrder::desc("feed"),
                SortOrder::asc("startTime"),
                SortOrder::desc("executionId"),
                SortOrder::asc("job"),
            ]),
        );

        let resolved = resolve_sort(JOB, Some(request)).unwrap();

        assert_eq!(resolved.page_number, 1);
        assert_eq!(resolved.page_size, 10);
        assert_eq!(
            resolved.sort.orders,
            vec![
                SortOrder::new(SortDirection::Desc, "jobInstance.feed.name"),
                SortOrder::new(SortDirection::Asc, "startTime"),
                SortOrder::new(SortDirection::Desc, "jobExecutionId"),
                SortOrder::new(SortDirection::Asc, "jobInstance.jobName"),
            ]
        );
    }

    #[test]
    fn test_resolve_sort_passes_absent_request_through() {
        assert_eq!(resolve_sort(JOB, None), None);
    }

    #[test]
    fn test_resolve_sort_keeps_unsorted_request() {
        let request = PageRequest::of(0, 20);
        assert_eq!(resolve_sort(JOB, Some(request.clone())), Some(request));
    }

    #[test]
    fn test_resolve_filters_keeps_operator_and_value() {
        let filters = vec![
            FilterCondition::new("feedName", FilterOperator::Ilike, "%ingest%"),
            FilterCondition::equals("status", "FAILED"),
        ];

        let resolved = resolve_filters(JOB, filters);

        assert_eq!(
            resolved,
            vec![
                FilterCondition::new("jobInstance.feed.name", FilterOperator::Ilike, "%ingest%"),
                FilterCondition::equals("status", "FAILED"),
            ]
        );
    }
}
