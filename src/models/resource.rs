use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A static reference entry in the resource library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: ResourceCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Writing,
    Learning,
    Template,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Writing => "writing",
            Self::Learning => "learning",
            Self::Template => "template",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "writing" => Some(Self::Writing),
            "learning" => Some(Self::Learning),
            "template" => Some(Self::Template),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Writing => "Writing",
            Self::Learning => "Learning",
            Self::Template => "Templates",
        }
    }
}
