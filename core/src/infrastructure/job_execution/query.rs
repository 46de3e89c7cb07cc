//! Statements for listing job executions.
//!
//! Filter and sort properties arrive as canonical paths (see
//! `domain::filter_translation`). Only the paths listed in
//! [`JobExecutionProperty`] are queryable; anything else is rejected before a
//! statement is built.

use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::{
    DeriveIden, Order,
    prelude::Expr,
    sea_query::{
        Alias, Condition, Func, Query, SelectStatement, SimpleExpr, Value,
        extension::postgres::PgExpr,
    },
};

use crate::domain::common::{
    entities::app_errors::CoreError,
    value_objects::{FilterCondition, FilterOperator, PageRequest, Sort, SortDirection},
};

#[derive(DeriveIden)]
pub enum BatchJobExecution {
    Table,
    JobExecutionId,
    JobInstanceId,
    Status,
    ExitCode,
    ExitMessage,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
pub enum BatchJobInstance {
    Table,
    JobInstanceId,
    JobName,
    FeedId,
}

#[derive(DeriveIden)]
pub enum Feed {
    Table,
    Id,
    Name,
}

pub const TOTAL_COLUMN: &str = "total";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Integer,
    Text,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobExecutionProperty {
    JobExecutionId,
    JobInstanceId,
    JobName,
    FeedName,
    Status,
    ExitCode,
    StartTime,
    EndTime,
}

impl JobExecutionProperty {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "jobExecutionId" => Some(Self::JobExecutionId),
            "jobInstance.jobInstanceId" => Some(Self::JobInstanceId),
            "jobInstance.jobName" => Some(Self::JobName),
            "jobInstance.feed.name" => Some(Self::FeedName),
            "status" => Some(Self::Status),
            "exitCode" => Some(Self::ExitCode),
            "startTime" => Some(Self::StartTime),
            "endTime" => Some(Self::EndTime),
            _ => None,
        }
    }

    pub fn lookup(path: &str) -> Result<Self, CoreError> {
        Self::from_path(path).ok_or_else(|| CoreError::UnsupportedProperty(path.to_string()))
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::JobExecutionId => "jobExecutionId",
            Self::JobInstanceId => "jobInstance.jobInstanceId",
            Self::JobName => "jobInstance.jobName",
            Self::FeedName => "jobInstance.feed.name",
            Self::Status => "status",
            Self::ExitCode => "exitCode",
            Self::StartTime => "startTime",
            Self::EndTime => "endTime",
        }
    }

    fn column(&self) -> Expr {
        match self {
            Self::JobExecutionId => {
                Expr::col((BatchJobExecution::Table, BatchJobExecution::JobExecutionId))
            }
            Self::JobInstanceId => {
                Expr::col((BatchJobExecution::Table, BatchJobExecution::JobInstanceId))
            }
            Self::JobName => Expr::col((BatchJobInstance::Table, BatchJobInstance::JobName)),
            Self::FeedName => Expr::col((Feed::Table, Feed::Name)),
            Self::Status => Expr::col((BatchJobExecution::Table, BatchJobExecution::Status)),
            Self::ExitCode => Expr::col((BatchJobExecution::Table, BatchJobExecution::ExitCode)),
            Self::StartTime => {
                Expr::col((BatchJobExecution::Table, BatchJobExecution::StartTime))
            }
            Self::EndTime => Expr::col((BatchJobExecution::Table, BatchJobExecution::EndTime)),
        }
    }

    fn kind(&self) -> ValueKind {
        match self {
            Self::JobExecutionId | Self::JobInstanceId => ValueKind::Integer,
            Self::JobName | Self::FeedName | Self::Status | Self::ExitCode => ValueKind::Text,
            Self::StartTime | Self::EndTime => ValueKind::Timestamp,
        }
    }

    fn parse_value(&self, value: &str) -> Result<Value, CoreError> {
        let invalid = || CoreError::InvalidFilterValue {
            property: self.path().to_string(),
            value: value.to_string(),
        };

        match self.kind() {
            ValueKind::Integer => value
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| invalid()),
            ValueKind::Text => Ok(Value::from(value.to_string())),
            ValueKind::Timestamp => parse_timestamp(value.trim())
                .map(Value::from)
                .ok_or_else(invalid),
        }
    }
}

/// Accepts RFC 3339 timestamps or epoch milliseconds.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(millis) = value.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.naive_utc());
    }
    value
        .parse::<DateTime<Utc>>()
        .ok()
        .map(|dt| dt.naive_utc())
}

fn condition_expr(filter: &FilterCondition) -> Result<SimpleExpr, CoreError> {
    let property = JobExecutionProperty::lookup(&filter.property)?;
    let column = property.column();

    let expr = match filter.operator {
        FilterOperator::Eq => column.eq(property.parse_value(&filter.value)?),
        FilterOperator::Ne => column.ne(property.parse_value(&filter.value)?),
        FilterOperator::Gt => column.gt(property.parse_value(&filter.value)?),
        FilterOperator::Gte => column.gte(property.parse_value(&filter.value)?),
        FilterOperator::Lt => column.lt(property.parse_value(&filter.value)?),
        FilterOperator::Lte => column.lte(property.parse_value(&filter.value)?),
        FilterOperator::In => {
            let values = filter
                .value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| property.parse_value(v))
                .collect::<Result<Vec<Value>, CoreError>>()?;
            if values.is_empty() {
                return Err(CoreError::InvalidFilterValue {
                    property: property.path().to_string(),
                    value: filter.value.clone(),
                });
            }
            column.is_in(values)
        }
        FilterOperator::Like | FilterOperator::Ilike if property.kind() != ValueKind::Text => {
            return Err(CoreError::UnsupportedOperator {
                property: property.path().to_string(),
                operator: filter.operator.as_str().to_string(),
            });
        }
        FilterOperator::Like => column.like(filter.value.as_str()),
        FilterOperator::Ilike => column.ilike(filter.value.as_str()),
    };

    Ok(expr)
}

fn build_condition(filters: &[FilterCondition]) -> Result<Condition, CoreError> {
    let mut condition = Condition::all();
    for filter in filters {
        condition = condition.add(condition_expr(filter)?);
    }
    Ok(condition)
}

fn build_orders(sort: &Sort) -> Result<Vec<(JobExecutionProperty, Order)>, CoreError> {
    sort.iter()
        .map(|order| {
            let property = JobExecutionProperty::lookup(&order.property)?;
            let direction = match order.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            Ok((property, direction))
        })
        .collect()
}

fn from_execution_tables(select: &mut SelectStatement) {
    select
        .from(BatchJobExecution::Table)
        .inner_join(
            BatchJobInstance::Table,
            Expr::col((BatchJobExecution::Table, BatchJobExecution::JobInstanceId))
                .equals((BatchJobInstance::Table, BatchJobInstance::JobInstanceId)),
        )
        .left_join(
            Feed::Table,
            Expr::col((BatchJobInstance::Table, BatchJobInstance::FeedId))
                .equals((Feed::Table, Feed::Id)),
        );
}

pub fn select_job_executions(
    filters: &[FilterCondition],
    page_request: &PageRequest,
) -> Result<SelectStatement, CoreError> {
    let condition = build_condition(filters)?;
    let orders = build_orders(&page_request.sort)?;

    let mut select = Query::select();
    select
        .expr_as(
            JobExecutionProperty::JobExecutionId.column(),
            Alias::new("job_execution_id"),
        )
        .expr_as(
            JobExecutionProperty::JobInstanceId.column(),
            Alias::new("job_instance_id"),
        )
        .expr_as(JobExecutionProperty::JobName.column(), Alias::new("job_name"))
        .expr_as(Expr::col((Feed::Table, Feed::Id)), Alias::new("feed_id"))
        .expr_as(JobExecutionProperty::FeedName.column(), Alias::new("feed_name"))
        .expr_as(JobExecutionProperty::Status.column(), Alias::new("status"))
        .expr_as(JobExecutionProperty::ExitCode.column(), Alias::new("exit_code"))
        .expr_as(
            Expr::col((BatchJobExecution::Table, BatchJobExecution::ExitMessage)),
            Alias::new("exit_message"),
        )
        .expr_as(JobExecutionProperty::StartTime.column(), Alias::new("start_time"))
        .expr_as(JobExecutionProperty::EndTime.column(), Alias::new("end_time"));

    from_execution_tables(&mut select);
    select.cond_where(condition);

    if orders.is_empty() {
        select.order_by(
            (BatchJobExecution::Table, BatchJobExecution::JobExecutionId),
            Order::Desc,
        );
    }
    for (property, order) in orders {
        select.order_by_expr(property.column().into(), order);
    }

    select
        .limit(page_request.page_size)
        .offset(page_request.offset());

    Ok(select)
}

pub fn count_job_executions(filters: &[FilterCondition]) -> Result<SelectStatement, CoreError> {
    let condition = build_condition(filters)?;

    let mut select = Query::select();
    select.expr_as(
        Func::count(JobExecutionProperty::JobExecutionId.column()),
        Alias::new(TOTAL_COLUMN),
    );

    from_execution_tables(&mut select);
    select.cond_where(condition);

    Ok(select)
}
