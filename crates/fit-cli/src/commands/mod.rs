pub mod alerts;
pub mod dispatch;
pub mod history;
pub mod metrics;
pub mod report;
pub mod schema;
pub mod snapshot;
pub mod validate;
