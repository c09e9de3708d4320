use std::str::FromStr;

use derive_more::Display;

use crate::constants::{BLOGS_KEY, CERTS_KEY, MESSAGES_KEY, PROJECTS_KEY};
use crate::errors::AppError;

pub mod blog_post;
pub mod certification;
pub mod contact_message;
pub mod defaults;
pub mod fields;
pub mod project;

/// The four fixed record partitions. Ids are unique within a category,
/// not globally.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum RecordCategory {
    #[display("project")]
    Project,
    #[display("cert")]
    Cert,
    #[display("blog")]
    Blog,
    #[display("message")]
    Message,
}

impl RecordCategory {
    pub fn storage_key(&self) -> &'static str {
        match self {
            RecordCategory::Project => PROJECTS_KEY,
            RecordCategory::Cert => CERTS_KEY,
            RecordCategory::Blog => BLOGS_KEY,
            RecordCategory::Message => MESSAGES_KEY,
        }
    }

    /// Categories whose records carry a publish flag. Messages do not.
    pub fn is_publishable(&self) -> bool {
        !matches!(self, RecordCategory::Message)
    }
}

impl FromStr for RecordCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(RecordCategory::Project),
            "cert" => Ok(RecordCategory::Cert),
            "blog" => Ok(RecordCategory::Blog),
            "message" => Ok(RecordCategory::Message),
            other => Err(AppError::InvalidRoute(format!("Unknown category: {}", other))),
        }
    }
}
