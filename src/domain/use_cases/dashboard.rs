use crate::entities::RecordCategory;
use crate::entities::contact_message::{ContactMessage, InquiryKind, SenderRole};
use crate::errors::AppError;
use crate::repositories::records::{AdminData, RecordStore};

/// Explicit yes/no gate in front of destructive actions. There is no
/// default; callers must pass an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewCounts {
    pub projects: usize,
    pub certs: usize,
    pub blogs: usize,
    pub messages: usize,
}

/// Composed reply; sending mail is an external collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct MailTemplate {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailTemplate {
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Inbox priority: founders and HR outrank everyone, job offers outrank
/// other inquiries. Computed fresh on every render, never persisted.
pub fn message_priority(msg: &ContactMessage) -> i32 {
    let mut score = 0;
    if matches!(msg.role, SenderRole::Founder | SenderRole::HR) {
        score += 2;
    }
    if msg.inquiry == InquiryKind::JobOffer {
        score += 1;
    }
    score
}

pub struct DashboardHandler<S>
where
    S: RecordStore,
{
    store: S,
    signature: String,
}

impl<S> DashboardHandler<S>
where
    S: RecordStore,
{
    pub fn new(store: S, signature: impl Into<String>) -> Self {
        DashboardHandler { store, signature: signature.into() }
    }

    /// Fresh snapshot straight from the store. Called whenever the
    /// active section changes or the window regains focus; polling is
    /// the only staleness mitigation, there is no push subscription.
    pub fn refresh(&self) -> Result<AdminData, AppError> {
        self.store.load_all()
    }

    pub fn overview(&self) -> Result<OverviewCounts, AppError> {
        let data = self.refresh()?;
        Ok(OverviewCounts {
            projects: data.projects.len(),
            certs: data.certs.len(),
            blogs: data.blogs.len(),
            messages: data.messages.len(),
        })
    }

    /// Flips the publish flag, saves the full record, and reads the
    /// stored value back (round-trip, not optimistic-only).
    pub fn toggle_published(&self, category: RecordCategory, id: &str) -> Result<bool, AppError> {
        match category {
            RecordCategory::Project => {
                let mut record = self
                    .store
                    .project(id)?
                    .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;
                record.published = !record.published;
                self.store.save_project(&record)?;
                Ok(self
                    .store
                    .project(id)?
                    .map(|p| p.published)
                    .unwrap_or(record.published))
            }
            RecordCategory::Cert => {
                let mut record = self
                    .store
                    .cert(id)?
                    .ok_or_else(|| AppError::NotFound(format!("Certification {id} not found")))?;
                record.published = !record.published;
                self.store.save_cert(&record)?;
                Ok(self
                    .store
                    .cert(id)?
                    .map(|c| c.published)
                    .unwrap_or(record.published))
            }
            RecordCategory::Blog => {
                let mut record = self
                    .store
                    .blog(id)?
                    .ok_or_else(|| AppError::NotFound(format!("Blog post {id} not found")))?;
                record.published = !record.published;
                self.store.save_blog(&record)?;
                Ok(self
                    .store
                    .blog(id)?
                    .map(|b| b.published)
                    .unwrap_or(record.published))
            }
            RecordCategory::Message => {
                Err(AppError::InvalidRoute("Messages have no publish flag".into()))
            }
        }
    }

    /// Returns whether anything was deleted. A declined confirmation is
    /// a normal no-op, not an error.
    pub fn delete(
        &self,
        category: RecordCategory,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, AppError> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        self.store.delete(category, id)?;
        tracing::info!("Deleted {category} record {id}");
        Ok(true)
    }

    /// Inbox ordered by priority score descending, ties broken by most
    /// recent submission first.
    pub fn sorted_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let mut messages = self.refresh()?.messages;
        messages.sort_by(|a, b| {
            message_priority(b)
                .cmp(&message_priority(a))
                .then(b.submitted_at.cmp(&a.submitted_at))
        });
        Ok(messages)
    }

    pub fn confirm_template(&self, msg: &ContactMessage) -> MailTemplate {
        MailTemplate {
            to: msg.email.clone(),
            subject: format!("Meeting Confirmation: {}", msg.agenda),
            body: format!(
                "Hi {},\n\nI am confirming our meeting on {} at {} via {}.\n\nLooking forward to speaking with you.\n\nBest,\n{}",
                msg.name,
                msg.date.format("%B %-d, %Y"),
                msg.time,
                msg.platform,
                self.signature
            ),
        }
    }

    pub fn decline_template(&self, msg: &ContactMessage) -> MailTemplate {
        MailTemplate {
            to: msg.email.clone(),
            subject: format!("Regarding our meeting: {}", msg.agenda),
            body: format!(
                "Hi {},\n\nThank you for reaching out. Unfortunately, I won't be able to make the proposed time slot. Could we assume a different time?\n\nBest,\n{}",
                msg.name, self.signature
            ),
        }
    }
}
