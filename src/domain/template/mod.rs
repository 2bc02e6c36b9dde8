//! Meta template language and storage.
//!
//! This module provides:
//! - A variable registry seeded with built-ins (`year`, `month`, `season`, `storeName`)
//! - Registration of store, collection, product and discount variables
//! - The renderer for `{{variable}}`, `{{variable:modifier}}` and
//!   `{{if condition}}...{{else}}...{{endif}}`
//! - A static variable catalog for editors
//! - In-memory storage for named title/description templates
//!
//! # Example
//!
//! ```ignore
//! let mut parser = TemplateParser::new();
//! parser.register_collection(&collection, &products);
//!
//! let title = parser.parse(
//!     "{{if hasDiscount}}Up to {{maxDiscountPercentage}} off {{collectionTitle}}{{else}}{{collectionTitle}}{{endif}}",
//!     &OverrideData::new(),
//! );
//! ```

mod catalog;
mod condition;
mod context;
mod modifier;
mod parser;
mod registry;
mod scanner;
mod store;
mod types;
mod variables;

pub use catalog::{get_all_variables_by_category, VariableCategory, VariableInfo};
pub use condition::Condition;
pub use context::{CollectionContext, RenderContext};
pub use modifier::{format_number, parse_number_prefix, Modifier};
pub use parser::{get_variable_names, TemplateParser};
pub use registry::{
    month_name, season_for_month, value_to_string, OverrideData, Resolver,
    VariableRegistry, DEFAULT_STORE_NAME,
};
pub use store::{create_template_store, TemplateStore};
pub use types::{
    CreateTemplateRequest, MetaTemplate, RenderedMeta, TemplateError, TemplateListResponse,
    TemplateResult, UpdateTemplateRequest, DEFAULT_MAX_TEMPLATE_LENGTH,
};
