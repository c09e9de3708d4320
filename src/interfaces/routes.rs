use std::str::FromStr;

use crate::constants::NEW_ID_SENTINEL;
use crate::entities::RecordCategory;
use crate::errors::AppError;
use crate::repositories::records::RecordStore;

/// Dashboard sections, one per sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Projects,
    Certifications,
    Blog,
    Messages,
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Section::Overview),
            "projects" => Ok(Section::Projects),
            "certifications" => Ok(Section::Certifications),
            "blog" => Ok(Section::Blog),
            "messages" => Ok(Section::Messages),
            other => Err(AppError::InvalidRoute(format!("Unknown section: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTarget {
    New,
    Existing(String),
}

/// The logical admin route surface. Not HTTP; these are the navigable
/// states of the admin area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRoute {
    Login,
    Dashboard(Section),
    Editor {
        category: RecordCategory,
        target: EditorTarget,
    },
}

/// Where a navigation attempt actually lands after the guards run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Proceed(AdminRoute),
    RedirectToLogin,
    RedirectToDashboard,
}

/// Builds an editor route from raw parameters. Missing or malformed
/// parameters are an InvalidRoute, which resolves to a dashboard
/// redirect.
pub fn editor_route(category: Option<&str>, id: Option<&str>) -> Result<AdminRoute, AppError> {
    let category = category
        .ok_or_else(|| AppError::InvalidRoute("Missing category".into()))?
        .parse::<RecordCategory>()?;
    let id = id.ok_or_else(|| AppError::InvalidRoute("Missing record id".into()))?;

    if category == RecordCategory::Message {
        return Err(AppError::InvalidRoute("Messages are not editable".into()));
    }

    let target = if id == NEW_ID_SENTINEL {
        EditorTarget::New
    } else if id.trim().is_empty() {
        return Err(AppError::InvalidRoute("Missing record id".into()));
    } else {
        EditorTarget::Existing(id.to_string())
    };

    Ok(AdminRoute::Editor { category, target })
}

/// Applies the exit/redirect rules: no admin session sends dashboard
/// and editor to login; an editor target that does not resolve to an
/// existing record sends back to the dashboard. Storage failures
/// propagate so the caller can surface them.
pub fn resolve<S: RecordStore>(
    route: AdminRoute,
    is_admin: bool,
    store: &S,
) -> Result<Resolution, AppError> {
    match &route {
        AdminRoute::Login => Ok(Resolution::Proceed(route)),
        AdminRoute::Dashboard(_) => {
            if is_admin {
                Ok(Resolution::Proceed(route))
            } else {
                Ok(Resolution::RedirectToLogin)
            }
        }
        AdminRoute::Editor { category, target } => {
            if !is_admin {
                return Ok(Resolution::RedirectToLogin);
            }
            if let EditorTarget::Existing(id) = target {
                let found = match category {
                    RecordCategory::Project => store.project(id)?.is_some(),
                    RecordCategory::Cert => store.cert(id)?.is_some(),
                    RecordCategory::Blog => store.blog(id)?.is_some(),
                    RecordCategory::Message => false,
                };
                if !found {
                    return Ok(Resolution::RedirectToDashboard);
                }
            }
            Ok(Resolution::Proceed(route))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_are_invalid_routes() {
        assert!(editor_route(None, Some("1")).is_err());
        assert!(editor_route(Some("project"), None).is_err());
        assert!(editor_route(Some("gallery"), Some("1")).is_err());
        assert!(editor_route(Some("message"), Some("1")).is_err());
    }

    #[test]
    fn new_sentinel_maps_to_a_new_target() {
        let route = editor_route(Some("blog"), Some("new")).unwrap();
        assert_eq!(
            route,
            AdminRoute::Editor { category: RecordCategory::Blog, target: EditorTarget::New }
        );
    }

    #[test]
    fn sections_parse_from_sidebar_ids() {
        assert_eq!("messages".parse::<Section>().unwrap(), Section::Messages);
        assert!("inbox".parse::<Section>().is_err());
    }
}
