use chrono::Utc;
use validator::Validate;

use crate::entities::contact_message::{ContactMessage, NewContactMessage};
use crate::errors::AppError;
use crate::ids::IdProvider;
use crate::repositories::records::RecordStore;

/// Appends completed contact/booking submissions to the inbox. Called
/// exactly once per completed submission; the caller reports success
/// only after the store write succeeds.
pub struct MessageIntake<S, I>
where
    S: RecordStore,
    I: IdProvider,
{
    store: S,
    ids: I,
}

impl<S, I> MessageIntake<S, I>
where
    S: RecordStore,
    I: IdProvider,
{
    pub fn new(store: S, ids: I) -> Self {
        MessageIntake { store, ids }
    }

    /// Stamps the submission (fresh id, submission timestamp, pending
    /// status) and head-inserts it into the messages partition.
    pub fn submit(&self, form: NewContactMessage) -> Result<ContactMessage, AppError> {
        form.validate()?;

        let message = form.into_message(self.ids.generate(), Utc::now());
        self.store.append_message(&message)?;

        tracing::info!("Recorded inquiry {} from {}", message.id, message.name);
        Ok(message)
    }
}
