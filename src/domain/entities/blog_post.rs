use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_TAGS: u64 = 10;
const MAX_TAG_LENGTH: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[validate(length(min = 1, message = "Id cannot be empty"))]
    pub id: String,

    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title cannot be empty"),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    /// Markdown body. Rendered through the sanitized pipeline for the
    /// detail preview.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub date: String,

    /// Free text, e.g. "9 min read".
    #[serde(default)]
    pub read_time: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default = "default_published")]
    pub published: bool,
}

pub(crate) fn default_published() -> bool {
    true
}

// ───── Validation Helpers ───────────────────────────────────────────
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(new_validation_error("title_blank", "Title must not be blank"));
    }
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS as usize {
        return Err(new_validation_error("too_many_tags", "Too many tags provided"));
    }
    for tag in tags {
        if tag.is_empty() || tag.len() > MAX_TAG_LENGTH as usize {
            return Err(new_validation_error("invalid_tag_length", "Tag length must be within allowed range"));
        }
        if tag.trim() != tag {
            return Err(new_validation_error("invalid_tag_whitespace", "Tags must be trimmed"));
        }
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
