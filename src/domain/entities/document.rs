use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const MAX_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentValidationError {
    #[error("Document title cannot be empty.")]
    EmptyTitle,
    #[error("Document title cannot be longer than {MAX_TITLE_LENGTH} characters.")]
    TitleTooLong,
    #[error("Document description cannot be empty.")]
    EmptyDescription,
    #[error("The uploaded document is empty.")]
    EmptyContent,
    #[error("No fields provided to update.")]
    NoChanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: Uuid,
    title: String,
    description: String,
    content: String,
    uploaded_by: String,
    upload_date: DateTime<Utc>,
}

impl Document {
    /// Builds a new document, trimming every text field.
    pub fn new(
        title: &str,
        description: &str,
        content: &str,
        uploaded_by: String,
    ) -> Result<Self, DocumentValidationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DocumentValidationError::EmptyContent);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: validate_title(title)?,
            description: validate_description(description)?,
            content: content.to_string(),
            uploaded_by,
            upload_date: Utc::now(),
        })
    }

    /// Rehydrates a document that was already persisted.
    pub fn restore(
        id: Uuid,
        title: String,
        description: String,
        content: String,
        uploaded_by: String,
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            content,
            uploaded_by,
            upload_date,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn uploaded_by(&self) -> &str {
        &self.uploaded_by
    }

    pub fn upload_date(&self) -> DateTime<Utc> {
        self.upload_date
    }

    /// Applies the non-blank fields. Blank values count as absent, so an update
    /// can never clear the title or description.
    pub fn update_details(
        &mut self,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), DocumentValidationError> {
        let title = title.filter(|t| !t.trim().is_empty());
        let description = description.filter(|d| !d.trim().is_empty());

        if title.is_none() && description.is_none() {
            return Err(DocumentValidationError::NoChanges);
        }

        let new_title = title.map(validate_title).transpose()?;
        let new_description = description.map(validate_description).transpose()?;

        if let Some(t) = new_title {
            self.title = t;
        }
        if let Some(d) = new_description {
            self.description = d;
        }

        Ok(())
    }
}

fn validate_title(title: &str) -> Result<String, DocumentValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DocumentValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(DocumentValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

fn validate_description(description: &str) -> Result<String, DocumentValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(DocumentValidationError::EmptyDescription);
    }
    Ok(description.to_string())
}
