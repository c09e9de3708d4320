use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{BLOGS_KEY, CERTS_KEY, MESSAGES_KEY, PROJECTS_KEY};
use crate::entities::{RecordCategory, defaults};
use crate::entities::blog_post::BlogPost;
use crate::entities::certification::Certification;
use crate::entities::contact_message::ContactMessage;
use crate::entities::project::Project;
use crate::errors::AppError;
use crate::repositories::backend::KeyValueBackend;
use crate::repositories::records::{AdminData, RecordStore};

/// Record store over a key-value substrate: one JSON-encoded ordered
/// list per partition key. Every mutation rewrites the whole affected
/// list synchronously; there is no batching and no cross-process
/// coordination (last writer wins).
#[derive(Debug, Clone)]
pub struct LocalRecordStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> LocalRecordStore<B> {
    pub fn new(backend: B) -> Self {
        LocalRecordStore { backend }
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, AppError> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn load_or_seed<T: DeserializeOwned>(
        &self,
        key: &str,
        seed: impl FnOnce() -> Vec<T>,
    ) -> Result<Vec<T>, AppError> {
        Ok(self.load_list(key)?.unwrap_or_else(seed))
    }

    fn persist_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(list)
            .map_err(|e| AppError::InternalError(format!("Failed to encode partition {key}: {e}")))?;
        self.backend.set(key, &raw)
    }

    /// Replace in place when the id exists, otherwise head-insert so
    /// fresh records list newest-first.
    fn upsert<T: Clone>(list: &mut Vec<T>, item: &T, matches: impl Fn(&T) -> bool) {
        if let Some(slot) = list.iter_mut().find(|existing| matches(existing)) {
            *slot = item.clone();
        } else {
            list.insert(0, item.clone());
        }
    }

    fn projects(&self) -> Result<Vec<Project>, AppError> {
        self.load_or_seed(PROJECTS_KEY, defaults::projects)
    }

    fn certs(&self) -> Result<Vec<Certification>, AppError> {
        self.load_or_seed(CERTS_KEY, defaults::certifications)
    }

    fn blogs(&self) -> Result<Vec<BlogPost>, AppError> {
        self.load_or_seed(BLOGS_KEY, defaults::blog_posts)
    }

    fn messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.load_or_seed(MESSAGES_KEY, Vec::new)
    }
}

impl<B: KeyValueBackend> RecordStore for LocalRecordStore<B> {
    fn load_all(&self) -> Result<AdminData, AppError> {
        Ok(AdminData {
            projects: self.projects()?,
            certs: self.certs()?,
            blogs: self.blogs()?,
            messages: self.messages()?,
        })
    }

    fn project(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects()?.into_iter().find(|p| p.id == id))
    }

    fn cert(&self, id: &str) -> Result<Option<Certification>, AppError> {
        Ok(self.certs()?.into_iter().find(|c| c.id == id))
    }

    fn blog(&self, id: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.blogs()?.into_iter().find(|b| b.id == id))
    }

    fn save_project(&self, project: &Project) -> Result<(), AppError> {
        let mut list = self.projects()?;
        Self::upsert(&mut list, project, |p| p.id == project.id);
        self.persist_list(PROJECTS_KEY, &list)
    }

    fn save_cert(&self, cert: &Certification) -> Result<(), AppError> {
        let mut list = self.certs()?;
        Self::upsert(&mut list, cert, |c| c.id == cert.id);
        self.persist_list(CERTS_KEY, &list)
    }

    fn save_blog(&self, blog: &BlogPost) -> Result<(), AppError> {
        let mut list = self.blogs()?;
        Self::upsert(&mut list, blog, |b| b.id == blog.id);
        self.persist_list(BLOGS_KEY, &list)
    }

    fn delete(&self, category: RecordCategory, id: &str) -> Result<(), AppError> {
        match category {
            RecordCategory::Project => {
                let mut list = self.projects()?;
                list.retain(|p| p.id != id);
                self.persist_list(PROJECTS_KEY, &list)
            }
            RecordCategory::Cert => {
                let mut list = self.certs()?;
                list.retain(|c| c.id != id);
                self.persist_list(CERTS_KEY, &list)
            }
            RecordCategory::Blog => {
                let mut list = self.blogs()?;
                list.retain(|b| b.id != id);
                self.persist_list(BLOGS_KEY, &list)
            }
            RecordCategory::Message => {
                let mut list = self.messages()?;
                list.retain(|m| m.id != id);
                self.persist_list(MESSAGES_KEY, &list)
            }
        }
    }

    fn append_message(&self, message: &ContactMessage) -> Result<(), AppError> {
        let mut list = self.messages()?;
        list.insert(0, message.clone());
        self.persist_list(MESSAGES_KEY, &list)
    }
}
