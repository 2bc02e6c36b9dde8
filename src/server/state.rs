use std::sync::Arc;

use crate::config::Settings;
use crate::template::{create_template_store, RenderContext, TemplateParser, TemplateStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub template_store: Arc<TemplateStore>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let template_store = create_template_store(settings.parser.max_template_length);

        Self {
            settings: Arc::new(settings),
            template_store,
        }
    }

    /// Build a request-scoped parser from the request's render context
    pub fn parser_for(&self, context: &RenderContext) -> TemplateParser {
        context.build_parser(&self.settings.parser.default_store_name)
    }
}
