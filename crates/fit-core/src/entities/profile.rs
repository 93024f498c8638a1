use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Organizational profile metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationProfile {
    pub name: String,
    pub sector: String,
    pub size: String,
}

/// Qualitative organizational setup ("inrichting"): mission, vision and the
/// values the strategy is anchored on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Inrichting {
    pub mission: String,
    pub vision: String,
    pub ambition: String,
    pub core_values: Vec<String>,
}

impl Inrichting {
    #[must_use]
    pub fn has_mission(&self) -> bool {
        !self.mission.trim().is_empty()
    }

    #[must_use]
    pub fn has_vision(&self) -> bool {
        !self.vision.trim().is_empty()
    }
}
