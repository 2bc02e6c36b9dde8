//! Storefront records consumed by the variable registry.
//!
//! These mirror the subset of the Shopify Admin payloads that templates can
//! reference. Prices arrive either as JSON numbers or as decimal strings
//! (`"19.99"`), so they are normalised to `f64` on deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of characters kept from a collection description
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// A purchasable variant of a product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Variant {
    /// Selling price
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,

    /// Original price before discount (optional)
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub compare_at_price: Option<f64>,
}

impl Variant {
    pub fn new(price: f64, compare_at_price: Option<f64>) -> Self {
        Self {
            price,
            compare_at_price,
        }
    }
}

/// A storefront product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub product_type: String,

    #[serde(default)]
    pub vendor: String,

    /// Product description as HTML (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// The variant that prices the product in listings
    pub fn first_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }
}

/// A product collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub title: String,

    /// Collection description as HTML (optional)
    #[serde(default, alias = "description", skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
}

/// Store-wide data used for store-level variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub domain: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Format a price as `$X.XX`, rounding half a cent away from zero
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0 + 0.5).floor();
    let rounded = if cents == 0.0 {
        0.0
    } else {
        cents.copysign(amount) / 100.0
    };
    format!("${:.2}", rounded)
}

/// Remove anything that looks like an HTML tag (`<...>`).
///
/// An unterminated `<` is kept as text.
pub fn strip_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        output.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = &rest[open..];
                break;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Truncate to `max_chars` characters, appending `...` when anything was cut
pub fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn into_amount(self) -> Option<f64> {
        match self {
            RawPrice::Number(n) => Some(n),
            RawPrice::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(raw.and_then(RawPrice::into_amount).unwrap_or(0.0))
}

fn deserialize_optional_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(raw.and_then(RawPrice::into_amount))
}
