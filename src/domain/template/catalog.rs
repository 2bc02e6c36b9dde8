//! Static catalog of template variables, grouped for editor pickers.
//!
//! This is reference data for the admin UI; it is not derived from any
//! registry and lists syntax snippets for conditionals and modifiers too.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableCategory {
    pub category: &'static str,
    pub variables: &'static [VariableInfo],
}

const fn var(name: &'static str, description: &'static str) -> VariableInfo {
    VariableInfo { name, description }
}

static CATEGORIES: [VariableCategory; 7] = [
    VariableCategory {
        category: "basic",
        variables: &[
            var("year", "Current year"),
            var("month", "Current month name"),
            var("season", "Current season (Spring, Summer, Fall, Winter)"),
        ],
    },
    VariableCategory {
        category: "store",
        variables: &[
            var("storeName", "Store name"),
            var("storeDomain", "Store domain"),
            var("storeEmail", "Store contact email"),
            var("totalProducts", "Number of products in the store"),
            var("collectionsCount", "Number of collections in the store"),
        ],
    },
    VariableCategory {
        category: "product",
        variables: &[
            var("productTitle", "Product title"),
            var("productType", "Product type"),
            var("productVendor", "Product vendor"),
            var("productPrice", "Price of the first variant"),
            var("comparePrice", "Compare-at price of the first variant"),
        ],
    },
    VariableCategory {
        category: "collection",
        variables: &[
            var("collectionTitle", "Collection title"),
            var("collectionDescription", "Collection description (plain text, 100 chars)"),
            var("collectionCount", "Number of products in the collection"),
        ],
    },
    VariableCategory {
        category: "discount",
        variables: &[
            var("maxDiscountPercentage", "Highest discount, e.g. 50%"),
            var("minDiscountPercentage", "Lowest discount, e.g. 10%"),
            var("discountRange", "Discount range, e.g. 10-50%"),
            var("hasDiscount", "Set when any product is discounted"),
            var("discountedCount", "Number of discounted products"),
            var("avgDiscount", "Average discount, e.g. 25%"),
        ],
    },
    VariableCategory {
        category: "conditionals",
        variables: &[
            var("{{if hasDiscount}}...{{endif}}", "Show text only when a variable is set"),
            var(
                "{{if hasDiscount}}...{{else}}...{{endif}}",
                "Choose between two texts",
            ),
            var(
                "{{if discountedCount > 5}}...{{endif}}",
                "Numeric comparison (> or <)",
            ),
            var(
                "{{if productType == \"Shoes\"}}...{{endif}}",
                "Text equality",
            ),
        ],
    },
    VariableCategory {
        category: "modifiers",
        variables: &[
            var("{{variable:uppercase}}", "UPPERCASE the value"),
            var("{{variable:lowercase}}", "lowercase the value"),
            var("{{variable:number}}", "Print the value as a plain number"),
        ],
    },
];

/// All known variables grouped by category
pub fn get_all_variables_by_category() -> &'static [VariableCategory] {
    &CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{OverrideData, TemplateParser};

    #[test]
    fn test_categories_in_order() {
        let names: Vec<&str> = get_all_variables_by_category()
            .iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(
            names,
            vec!["basic", "store", "product", "collection", "discount", "conditionals", "modifiers"]
        );
    }

    #[test]
    fn test_basic_variables_are_builtins() {
        let parser = TemplateParser::new();
        let basic = &get_all_variables_by_category()[0];
        for info in basic.variables {
            let value = parser.resolve(info.name, &OverrideData::new());
            assert!(!value.is_empty(), "{} missing", info.name);
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(get_all_variables_by_category()).unwrap();
        assert_eq!(json[4]["category"], "discount");
        assert_eq!(json[4]["variables"][0]["name"], "maxDiscountPercentage");
    }
}
