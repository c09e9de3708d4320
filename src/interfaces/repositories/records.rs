use crate::entities::RecordCategory;
use crate::entities::blog_post::BlogPost;
use crate::entities::certification::Certification;
use crate::entities::contact_message::ContactMessage;
use crate::entities::project::Project;
use crate::errors::AppError;

/// Snapshot of all four partitions, as handed to the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminData {
    pub projects: Vec<Project>,
    pub certs: Vec<Certification>,
    pub blogs: Vec<BlogPost>,
    pub messages: Vec<ContactMessage>,
}

/// Canonical persisted representation of the admin content. The store
/// exclusively owns it; callers receive disposable copies and nothing
/// mutates the store until an explicit save.
///
/// Save semantics per category list: an existing id is replaced in
/// place (stable position), a new id is inserted at the head. Deleting
/// an unknown id is a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    /// Loads every partition, seeding empty ones from the bundled
    /// defaults (`published = true`); messages always start empty.
    /// Reads are pure: seeding does not write through the substrate.
    fn load_all(&self) -> Result<AdminData, AppError>;

    fn project(&self, id: &str) -> Result<Option<Project>, AppError>;
    fn cert(&self, id: &str) -> Result<Option<Certification>, AppError>;
    fn blog(&self, id: &str) -> Result<Option<BlogPost>, AppError>;

    fn save_project(&self, project: &Project) -> Result<(), AppError>;
    fn save_cert(&self, cert: &Certification) -> Result<(), AppError>;
    fn save_blog(&self, blog: &BlogPost) -> Result<(), AppError>;

    fn delete(&self, category: RecordCategory, id: &str) -> Result<(), AppError>;

    /// Head-inserts a fully stamped submission. Messages are never
    /// edited through the entity editor, so this is the only message
    /// write besides delete.
    fn append_message(&self, message: &ContactMessage) -> Result<(), AppError>;
}
