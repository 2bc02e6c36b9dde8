//! Registration of storefront-derived variables.

use crate::discount::compute_discounts;
use crate::shop::{
    format_price, strip_html, truncate_with_ellipsis, Collection, Product, StoreData,
    DESCRIPTION_PREVIEW_CHARS,
};

use super::parser::TemplateParser;

impl TemplateParser {
    /// Register `productTitle`, `productType`, `productVendor`, `productPrice`
    /// and `comparePrice`. Prices come from the first variant.
    pub fn register_product(&mut self, product: &Product) {
        let variant = product.first_variant();

        let price = variant
            .map(|v| format_price(v.price))
            .unwrap_or_default();
        let compare_price = variant
            .and_then(|v| v.compare_at_price)
            .filter(|amount| *amount > 0.0)
            .map(format_price)
            .unwrap_or_default();

        let registry = self.registry_mut();
        registry.register_value("productTitle", product.title.as_str());
        registry.register_value("productType", product.product_type.as_str());
        registry.register_value("productVendor", product.vendor.as_str());
        registry.register_value("productPrice", price);
        registry.register_value("comparePrice", compare_price);
    }

    /// Register `collectionTitle`, `collectionDescription` and
    /// `collectionCount`, then the discount variables over `products`.
    pub fn register_collection(&mut self, collection: &Collection, products: &[Product]) {
        let description = collection
            .body_html
            .as_deref()
            .map(|html| truncate_with_ellipsis(&strip_html(html), DESCRIPTION_PREVIEW_CHARS))
            .unwrap_or_default();

        let registry = self.registry_mut();
        registry.register_value("collectionTitle", collection.title.as_str());
        registry.register_value("collectionDescription", description);
        registry.register_value("collectionCount", products.len().to_string());

        self.register_discounts(products);
    }

    /// Register `storeName`, `storeDomain`, `storeEmail`, `totalProducts` and
    /// `collectionsCount`, then the discount variables over every store product.
    pub fn register_store(&mut self, store: &StoreData) {
        let registry = self.registry_mut();
        registry.register_value("storeName", store.name.as_str());
        registry.register_value("storeDomain", store.domain.as_str());
        registry.register_value("storeEmail", store.email.as_str());
        registry.register_value("totalProducts", store.products.len().to_string());
        registry.register_value("collectionsCount", store.collections.len().to_string());

        self.register_discounts(&store.products);
    }

    /// Register the discount statistics variables for `products`
    pub fn register_discounts(&mut self, products: &[Product]) {
        let stats = compute_discounts(products);

        tracing::debug!(
            products = products.len(),
            discounted = stats.discounted_count,
            max = stats.max,
            "Discount variables registered"
        );

        let registry = self.registry_mut();
        registry.register_value("maxDiscountPercentage", stats.max_label());
        registry.register_value("minDiscountPercentage", stats.min_label());
        registry.register_value("discountRange", stats.range_label());
        registry.register_value("hasDiscount", stats.has_discount_flag());
        registry.register_value("discountedCount", stats.discounted_count.to_string());
        registry.register_value("avgDiscount", stats.average_label());
    }
}
