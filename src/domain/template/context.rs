//! Per-request render context: storefront data plus override values.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::shop::{Collection, Product, StoreData};

use super::parser::TemplateParser;
use super::registry::OverrideData;

/// A collection together with the products it contains
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionContext {
    #[serde(flatten)]
    pub collection: Collection,

    #[serde(default)]
    pub products: Vec<Product>,
}

/// Everything a caller can supply to render a template
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderContext {
    /// Literal override values, keyed by variable name
    #[serde(default)]
    pub data: Map<String, Value>,

    #[serde(default)]
    pub store: Option<StoreData>,

    #[serde(default)]
    pub collection: Option<CollectionContext>,

    #[serde(default)]
    pub product: Option<Product>,

    /// Bare product list for discount variables only
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

impl RenderContext {
    /// Build a fresh parser with every supplied record registered.
    ///
    /// Registration runs store, collection, product, then products, so the
    /// more specific record wins when variables overlap.
    pub fn build_parser(&self, default_store_name: &str) -> TemplateParser {
        let mut parser = TemplateParser::with_store_name(default_store_name);

        if let Some(store) = &self.store {
            parser.register_store(store);
        }
        if let Some(ctx) = &self.collection {
            parser.register_collection(&ctx.collection, &ctx.products);
        }
        if let Some(product) = &self.product {
            parser.register_product(product);
        }
        if let Some(products) = &self.products {
            parser.register_discounts(products);
        }

        parser
    }

    /// Override values, kept as JSON until they are rendered
    pub fn override_data(&self) -> OverrideData {
        self.data
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
