mod app_context;
mod config_warnings;

pub use app_context::{AppContext, read_snapshot_file};
pub use config_warnings::warn_unconfigured;
