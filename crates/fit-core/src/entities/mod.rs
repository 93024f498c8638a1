//! Entity structs for the Fitcheck application snapshot.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field names
//! are camelCase on the wire to match the documents the surrounding application
//! persists.

mod action;
mod alert;
mod fit_check;
mod goal;
mod history;
mod profile;
mod snapshot;

pub use action::{ActionItem, parse_calendar_date};
pub use alert::Alert;
pub use fit_check::FitCheckScore;
pub use goal::StrategicGoal;
pub use history::HistoryPoint;
pub use profile::{Inrichting, OrganizationProfile};
pub use snapshot::Snapshot;
