use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::blog_post::{default_published, validate_title, validate_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[validate(length(min = 1, message = "Id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Title cannot be empty"), custom(function = "validate_title"))]
    pub title: String,

    #[serde(default)]
    pub issuer: String,

    /// Free text, not required to parse as a calendar date.
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub thumbnail: String,

    /// Optional verification URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url"))]
    pub url: Option<String>,

    #[serde(default = "default_published")]
    pub published: bool,
}
