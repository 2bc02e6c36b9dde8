//! Meta template storage with CRUD operations

use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::parser::TemplateParser;
use super::registry::OverrideData;
use super::types::{
    MetaTemplate, RenderedMeta, TemplateError, TemplateResult, UpdateTemplateRequest,
    DEFAULT_MAX_TEMPLATE_LENGTH,
};

/// In-memory meta template storage
pub struct TemplateStore {
    templates: DashMap<String, MetaTemplate>,
    max_template_length: usize,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self::with_max_template_length(DEFAULT_MAX_TEMPLATE_LENGTH)
    }

    /// Create a store that rejects template bodies longer than `max_template_length` bytes
    pub fn with_max_template_length(max_template_length: usize) -> Self {
        Self {
            templates: DashMap::new(),
            max_template_length,
        }
    }

    /// Create a new template
    pub fn create(&self, template: MetaTemplate) -> TemplateResult<MetaTemplate> {
        template.validate(self.max_template_length)?;

        match self.templates.entry(template.id.clone()) {
            Entry::Occupied(_) => return Err(TemplateError::AlreadyExists(template.id)),
            Entry::Vacant(slot) => {
                slot.insert(template.clone());
            }
        }
        tracing::info!(template_id = %template.id, "Meta template created");

        Ok(template)
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<MetaTemplate> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates, ordered by ID
    pub fn list(&self) -> Vec<MetaTemplate> {
        let mut templates: Vec<MetaTemplate> = self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    /// Update an existing template.
    ///
    /// The entry stays locked from read to write, so a concurrent delete is
    /// never undone.
    pub fn update(&self, id: &str, updates: UpdateTemplateRequest) -> TemplateResult<MetaTemplate> {
        let mut entry = self
            .templates
            .get_mut(id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;
        let mut template = entry.value().clone();

        if let Some(name) = updates.name {
            template.name = name;
        }

        if let Some(title_template) = updates.title_template {
            template.title_template = title_template;
        }

        if let Some(description_template) = updates.description_template {
            template.description_template = description_template;
        }

        if let Some(description) = updates.description {
            template.description = (!description.is_empty()).then_some(description);
        }

        template.updated_at = Utc::now();
        template.validate(self.max_template_length)?;

        *entry = template.clone();

        Ok(template)
    }

    /// Delete a template by ID
    pub fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Render a stored template's title and description with `parser`
    pub fn render(
        &self,
        id: &str,
        parser: &TemplateParser,
        data: &OverrideData,
    ) -> TemplateResult<RenderedMeta> {
        let template = self.get(id)?;

        Ok(RenderedMeta {
            title: parser.parse(&template.title_template, data),
            description: parser.parse(&template.description_template, data),
            id: template.id,
        })
    }
}

/// Create an Arc-wrapped template store
pub fn create_template_store(max_template_length: usize) -> Arc<TemplateStore> {
    Arc::new(TemplateStore::with_max_template_length(max_template_length))
}
