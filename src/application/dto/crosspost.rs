use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Either `url` (success) or `warning` (failure) is set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CrosspostResultDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl CrosspostResultDto {
    pub fn published(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            warning: None,
        }
    }

    pub fn failed(warning: impl Into<String>) -> Self {
        Self {
            url: None,
            warning: Some(warning.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CrosspostConnectionDto {
    pub connected: bool,
    #[serde(default, with = "serde_time::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
