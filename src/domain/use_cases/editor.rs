use chrono::Utc;
use validator::Validate;

use crate::constants::NEW_ID_SENTINEL;
use crate::entities::RecordCategory;
use crate::entities::blog_post::BlogPost;
use crate::entities::certification::Certification;
use crate::entities::fields::{join_comma_list, join_line_list, split_comma_list, split_line_list};
use crate::entities::project::{Project, ProjectCategory, ProjectDetails, ProjectLinks};
use crate::errors::AppError;
use crate::ids::IdProvider;
use crate::repositories::records::RecordStore;
use crate::use_cases::preview::{self, PreviewMode};

/// The record being edited. Always a deep copy; the store is untouched
/// until an explicit save.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorDraft {
    Project(Project),
    Cert(Certification),
    Blog(BlogPost),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    /// Terminal; the caller navigates back to the dashboard.
    Saved,
}

/// Single-record create/edit session.
///
/// Lifecycle: open (new draft or existing load) -> editing -> saved.
/// A missing category/id or an unresolvable id never reaches editing;
/// `open` returns the redirectable error instead.
#[derive(Debug)]
pub struct EditorSession {
    category: RecordCategory,
    draft: EditorDraft,
    is_new: bool,
    state: EditorState,
}

impl EditorSession {
    /// `id_param` is either a stored id or the reserved "new" sentinel.
    /// New drafts get their id immediately, not at save time, and are
    /// not written to the store until the operator explicitly saves.
    pub fn open<S: RecordStore>(
        store: &S,
        ids: &dyn IdProvider,
        category: RecordCategory,
        id_param: &str,
    ) -> Result<Self, AppError> {
        if id_param.trim().is_empty() {
            return Err(AppError::InvalidRoute("Missing record id".into()));
        }

        if id_param == NEW_ID_SENTINEL {
            let draft = Self::new_draft(ids, category)?;
            return Ok(EditorSession { category, draft, is_new: true, state: EditorState::Editing });
        }

        let draft = match category {
            RecordCategory::Project => store
                .project(id_param)?
                .map(EditorDraft::Project)
                .ok_or_else(|| AppError::NotFound(format!("Project {id_param} not found")))?,
            RecordCategory::Cert => store
                .cert(id_param)?
                .map(EditorDraft::Cert)
                .ok_or_else(|| AppError::NotFound(format!("Certification {id_param} not found")))?,
            RecordCategory::Blog => store
                .blog(id_param)?
                .map(EditorDraft::Blog)
                .ok_or_else(|| AppError::NotFound(format!("Blog post {id_param} not found")))?,
            RecordCategory::Message => {
                return Err(AppError::InvalidRoute("Messages are not editable".into()));
            }
        };

        Ok(EditorSession { category, draft, is_new: false, state: EditorState::Editing })
    }

    fn new_draft(ids: &dyn IdProvider, category: RecordCategory) -> Result<EditorDraft, AppError> {
        let id = ids.generate();
        let now = Utc::now();

        let draft = match category {
            RecordCategory::Project => EditorDraft::Project(Project {
                id,
                title: String::new(),
                summary: String::new(),
                description: String::new(),
                category: ProjectCategory::Frontend,
                year: now.format("%Y").to_string(),
                tags: Vec::new(),
                thumbnail: String::new(),
                images: Vec::new(),
                links: ProjectLinks::default(),
                details: ProjectDetails::default(),
                featured: false,
                published: true,
            }),
            RecordCategory::Cert => EditorDraft::Cert(Certification {
                id,
                title: String::new(),
                issuer: String::new(),
                date: String::new(),
                thumbnail: String::new(),
                url: None,
                published: true,
            }),
            RecordCategory::Blog => EditorDraft::Blog(BlogPost {
                id,
                title: String::new(),
                excerpt: String::new(),
                content: String::new(),
                date: now.format("%b %d, %Y").to_string(),
                read_time: "5 min read".into(),
                category: "Frontend".into(),
                tags: Vec::new(),
                thumbnail: String::new(),
                published: true,
            }),
            RecordCategory::Message => {
                return Err(AppError::InvalidRoute("Messages are not editable".into()));
            }
        };

        Ok(draft)
    }

    pub fn category(&self) -> RecordCategory {
        self.category
    }

    pub fn draft(&self) -> &EditorDraft {
        &self.draft
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn id(&self) -> &str {
        match &self.draft {
            EditorDraft::Project(p) => &p.id,
            EditorDraft::Cert(c) => &c.id,
            EditorDraft::Blog(b) => &b.id,
        }
    }

    pub fn published(&self) -> bool {
        match &self.draft {
            EditorDraft::Project(p) => p.published,
            EditorDraft::Cert(c) => c.published,
            EditorDraft::Blog(b) => b.published,
        }
    }

    /// Flat editing representation of a field. Derived fields are
    /// recomputed from the structured state on every read; the flat
    /// string is never cached.
    pub fn field(&self, path: &str) -> Result<String, AppError> {
        let value = match (&self.draft, path) {
            (EditorDraft::Project(p), "title") => p.title.clone(),
            (EditorDraft::Project(p), "summary") => p.summary.clone(),
            (EditorDraft::Project(p), "description") => p.description.clone(),
            (EditorDraft::Project(p), "thumbnail") => p.thumbnail.clone(),
            (EditorDraft::Project(p), "year") => p.year.clone(),
            (EditorDraft::Project(p), "category") => p.category.to_string(),
            (EditorDraft::Project(p), "tags") => join_comma_list(&p.tags),
            (EditorDraft::Project(p), "images") => join_line_list(&p.images),
            (EditorDraft::Project(p), "techStack") => join_comma_list(&p.details.tech_stack),
            (EditorDraft::Project(p), "metrics") => {
                p.details.metrics.as_deref().map(join_line_list).unwrap_or_default()
            }
            (EditorDraft::Project(p), "links.live") => p.links.live.clone().unwrap_or_default(),
            (EditorDraft::Project(p), "links.repo") => p.links.repo.clone().unwrap_or_default(),
            (EditorDraft::Project(p), "details.problem") => p.details.problem.clone(),
            (EditorDraft::Project(p), "details.solution") => p.details.solution.clone(),
            (EditorDraft::Project(p), "details.role") => p.details.role.clone(),

            (EditorDraft::Cert(c), "title") => c.title.clone(),
            (EditorDraft::Cert(c), "issuer") => c.issuer.clone(),
            (EditorDraft::Cert(c), "date") => c.date.clone(),
            (EditorDraft::Cert(c), "thumbnail") => c.thumbnail.clone(),
            (EditorDraft::Cert(c), "url") => c.url.clone().unwrap_or_default(),

            (EditorDraft::Blog(b), "title") => b.title.clone(),
            (EditorDraft::Blog(b), "excerpt") => b.excerpt.clone(),
            (EditorDraft::Blog(b), "content") => b.content.clone(),
            (EditorDraft::Blog(b), "date") => b.date.clone(),
            (EditorDraft::Blog(b), "readTime") => b.read_time.clone(),
            (EditorDraft::Blog(b), "category") => b.category.clone(),
            (EditorDraft::Blog(b), "tags") => join_comma_list(&b.tags),
            (EditorDraft::Blog(b), "thumbnail") => b.thumbnail.clone(),

            _ => return Err(AppError::InvalidRoute(format!("Unknown field: {path}"))),
        };
        Ok(value)
    }

    /// Writes a field from its flat editing representation. Derived
    /// writes replace the structured value entirely.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), AppError> {
        match (&mut self.draft, path) {
            (EditorDraft::Project(p), "title") => p.title = value.to_string(),
            (EditorDraft::Project(p), "summary") => p.summary = value.to_string(),
            (EditorDraft::Project(p), "description") => p.description = value.to_string(),
            (EditorDraft::Project(p), "thumbnail") => p.thumbnail = value.to_string(),
            (EditorDraft::Project(p), "year") => p.year = value.to_string(),
            (EditorDraft::Project(p), "category") => {
                p.category = value.parse::<ProjectCategory>().map_err(|e| {
                    AppError::ValidationError(vec![crate::errors::FieldError {
                        field: "category".into(),
                        message: e.message.map(|m| m.to_string()).unwrap_or_else(|| "Invalid category".into()),
                    }])
                })?;
            }
            (EditorDraft::Project(p), "tags") => p.tags = split_comma_list(value),
            (EditorDraft::Project(p), "images") => p.images = split_line_list(value),
            (EditorDraft::Project(p), "techStack") => p.details.tech_stack = split_comma_list(value),
            (EditorDraft::Project(p), "metrics") => {
                let parsed = split_line_list(value);
                p.details.metrics = if parsed.is_empty() { None } else { Some(parsed) };
            }
            (EditorDraft::Project(p), "links.live") => p.links.live = optional(value),
            (EditorDraft::Project(p), "links.repo") => p.links.repo = optional(value),
            (EditorDraft::Project(p), "details.problem") => p.details.problem = value.to_string(),
            (EditorDraft::Project(p), "details.solution") => p.details.solution = value.to_string(),
            (EditorDraft::Project(p), "details.role") => p.details.role = value.to_string(),

            (EditorDraft::Cert(c), "title") => c.title = value.to_string(),
            (EditorDraft::Cert(c), "issuer") => c.issuer = value.to_string(),
            (EditorDraft::Cert(c), "date") => c.date = value.to_string(),
            (EditorDraft::Cert(c), "thumbnail") => c.thumbnail = value.to_string(),
            (EditorDraft::Cert(c), "url") => c.url = optional(value),

            (EditorDraft::Blog(b), "title") => b.title = value.to_string(),
            (EditorDraft::Blog(b), "excerpt") => b.excerpt = value.to_string(),
            (EditorDraft::Blog(b), "content") => b.content = value.to_string(),
            (EditorDraft::Blog(b), "date") => b.date = value.to_string(),
            (EditorDraft::Blog(b), "readTime") => b.read_time = value.to_string(),
            (EditorDraft::Blog(b), "category") => b.category = value.to_string(),
            (EditorDraft::Blog(b), "tags") => b.tags = split_comma_list(value),
            (EditorDraft::Blog(b), "thumbnail") => b.thumbnail = value.to_string(),

            _ => return Err(AppError::InvalidRoute(format!("Unknown field: {path}"))),
        }
        Ok(())
    }

    /// Validates and forwards the full draft to the store (whole-record
    /// overwrite, no partial save, no autosave), then terminates the
    /// session.
    pub fn save<S: RecordStore>(&mut self, store: &S) -> Result<(), AppError> {
        match &self.draft {
            EditorDraft::Project(p) => {
                p.validate()?;
                store.save_project(p)?;
            }
            EditorDraft::Cert(c) => {
                c.validate()?;
                store.save_cert(c)?;
            }
            EditorDraft::Blog(b) => {
                b.validate()?;
                store.save_blog(b)?;
            }
        }
        self.state = EditorState::Saved;
        tracing::info!("Saved {} record {}", self.category, self.id());
        Ok(())
    }

    /// Renders the in-progress draft through the shared presentation
    /// functions, exactly as a visitor would see it.
    pub fn preview(&self, mode: PreviewMode) -> String {
        preview::render(&self.draft, mode)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
