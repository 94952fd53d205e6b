use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Project {
    /// Short unique key, e.g. `HRMS`.
    #[validate(length(min = 1))]
    pub key: String,
    /// Abbreviation shown in avatars and badges.
    pub initial: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub client: String,
    pub date: String,
    /// Display name of the project lead.
    pub lead: String,
}
