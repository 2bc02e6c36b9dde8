//! Stored meta template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on a single template body, in bytes
pub const DEFAULT_MAX_TEMPLATE_LENGTH: usize = 5000;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template ID: {0}")]
    InvalidId(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A merchant-defined meta title/description template pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaTemplate {
    /// Unique template identifier (alphanumeric, dash, underscore)
    pub id: String,

    /// Human-readable template name
    pub name: String,

    /// Template for the `<title>` / `og:title` tag
    pub title_template: String,

    /// Template for the meta description tag
    #[serde(default)]
    pub description_template: String,

    /// Free-form note shown in the admin (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl MetaTemplate {
    /// Validate the template, limiting each body to `max_template_length` bytes
    pub fn validate(&self, max_template_length: usize) -> TemplateResult<()> {
        if self.id.is_empty() || self.id.len() > 64 {
            return Err(TemplateError::InvalidId(
                "ID must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidId(
                "ID must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        if self.title_template.len() > max_template_length {
            return Err(TemplateError::InvalidTemplate(format!(
                "Title template exceeds {} bytes",
                max_template_length
            )));
        }

        if self.description_template.len() > max_template_length {
            return Err(TemplateError::InvalidTemplate(format!(
                "Description template exceeds {} bytes",
                max_template_length
            )));
        }

        Ok(())
    }
}

/// Request to create a new template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub id: String,
    pub name: String,
    pub title_template: String,
    #[serde(default)]
    pub description_template: String,
    pub description: Option<String>,
}

impl From<CreateTemplateRequest> for MetaTemplate {
    fn from(req: CreateTemplateRequest) -> Self {
        let now = Utc::now();
        MetaTemplate {
            id: req.id,
            name: req.name,
            title_template: req.title_template,
            description_template: req.description_template,
            description: req.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to update an existing template; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    pub title_template: Option<String>,
    pub description_template: Option<String>,
    /// An empty string clears the note
    pub description: Option<String>,
}

/// Response for listing templates
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<MetaTemplate>,
    pub total: usize,
}

/// Rendered meta tags for one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMeta {
    pub id: String,
    pub title: String,
    pub description: String,
}
