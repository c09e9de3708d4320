use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::blog_post::{default_published, new_validation_error, validate_tags, validate_title};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    #[display("Full Stack")]
    FullStack,
    #[serde(rename = "AI")]
    #[display("AI")]
    Ai,
}

impl FromStr for ProjectCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(ProjectCategory::Frontend),
            "Backend" => Ok(ProjectCategory::Backend),
            "Full Stack" => Ok(ProjectCategory::FullStack),
            "AI" => Ok(ProjectCategory::Ai),
            _ => Err(new_validation_error("invalid_category", "Category must be Frontend, Backend, Full Stack, or AI")),
        }
    }
}

/// Optional outbound links. Absent links are omitted from the persisted
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(default)]
    pub problem: String,

    #[serde(default)]
    pub solution: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[validate(length(min = 1, message = "Id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Title cannot be empty"), custom(function = "validate_title"))]
    pub title: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub description: String,

    pub category: ProjectCategory,

    #[serde(default)]
    pub year: String,

    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,

    #[serde(default)]
    pub thumbnail: String,

    /// Gallery URLs; index 0 is the hero image.
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub links: ProjectLinks,

    #[serde(default)]
    pub details: ProjectDetails,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_published")]
    pub published: bool,
}

impl Project {
    pub fn hero_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
