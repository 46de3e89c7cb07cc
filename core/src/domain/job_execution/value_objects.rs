use crate::domain::common::value_objects::{FilterCondition, PageRequest};

#[derive(Debug, Clone, Default)]
pub struct ListJobExecutionsInput {
    pub filters: Vec<FilterCondition>,
    pub page_request: Option<PageRequest>,
}
