pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{BatchStatus, JobExecution};
pub use ports::{JobExecutionRepository, JobExecutionService};
