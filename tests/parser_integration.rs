//! End-to-end rendering tests
//!
//! These tests drive the parser through its public API the way the HTTP
//! layer does: register storefront data, then render templates.

use chrono::{Datelike, Local};
use serde_json::Value;

use meta_template_service::discount::compute_discounts;
use meta_template_service::shop::{Collection, Product, StoreData, Variant};
use meta_template_service::template::{
    get_variable_names, month_name, season_for_month, OverrideData, TemplateParser,
};

fn product(title: &str, price: f64, compare_at: Option<f64>) -> Product {
    Product {
        title: title.to_string(),
        product_type: "Apparel".to_string(),
        vendor: "Acme".to_string(),
        body_html: None,
        variants: vec![Variant::new(price, compare_at)],
    }
}

fn overrides(pairs: &[(&str, &str)]) -> OverrideData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}

// =============================================================================
// Variable Resolution
// =============================================================================

mod resolution_tests {
    use super::*;

    #[test]
    fn test_unknown_variables_render_empty_and_are_stable() {
        let parser = TemplateParser::new();
        let template = "Best {{nothing}} deals {{ missing:uppercase }}!";

        let first = parser.parse(template, &OverrideData::new());
        assert_eq!(first, "Best  deals !");

        let second = parser.parse(&first, &OverrideData::new());
        assert_eq!(second, first);
    }

    #[test]
    fn test_override_precedence_even_when_empty() {
        let mut parser = TemplateParser::new();
        parser.register_product(&product("Registered Tee", 10.0, None));

        for value in ["", "0", "Override Tee"] {
            let data = overrides(&[("productTitle", value)]);
            assert_eq!(parser.resolve("productTitle", &data), value);
            assert_eq!(parser.parse("{{productTitle}}", &data), value);
        }
    }

    #[test]
    fn test_override_does_not_mutate_registry() {
        let mut parser = TemplateParser::new();
        parser.register_value("storeName", "Acme");

        let data = overrides(&[("storeName", "Other")]);
        assert_eq!(parser.parse("{{storeName}}", &data), "Other");
        assert_eq!(parser.parse("{{storeName}}", &OverrideData::new()), "Acme");
    }

    #[test]
    fn test_builtin_time_variables() {
        let parser = TemplateParser::new();
        let now = Local::now();

        let rendered = parser.parse("{{season}} {{year}}", &OverrideData::new());
        assert_eq!(
            rendered,
            format!("{} {}", season_for_month(now.month0()), now.year())
        );
    }

    #[test]
    fn test_month_modifiers() {
        let parser = TemplateParser::new();
        let month = month_name(Local::now().month0());

        assert_eq!(
            parser.parse("{{month:uppercase}}", &OverrideData::new()),
            month.to_uppercase()
        );
        assert_eq!(
            parser.parse("{{month:lowercase}}", &OverrideData::new()),
            month.to_lowercase()
        );
    }
}

// =============================================================================
// Discounts
// =============================================================================

mod discount_tests {
    use super::*;

    #[test]
    fn test_discount_aggregation() {
        let mut parser = TemplateParser::new();
        parser.register_discounts(&[
            product("A", 80.0, Some(100.0)),
            product("B", 60.0, Some(120.0)),
            product("C", 30.0, Some(30.0)),
        ]);

        let empty = OverrideData::new();
        assert_eq!(parser.resolve("maxDiscountPercentage", &empty), "50%");
        assert_eq!(parser.resolve("minDiscountPercentage", &empty), "20%");
        assert_eq!(parser.resolve("discountRange", &empty), "20-50%");
        assert_eq!(parser.resolve("hasDiscount", &empty), "true");
        assert_eq!(parser.resolve("discountedCount", &empty), "2");
    }

    #[test]
    fn test_no_discount_defaults() {
        for products in [vec![], vec![product("A", 25.0, Some(25.0))]] {
            let mut parser = TemplateParser::new();
            parser.register_discounts(&products);

            let empty = OverrideData::new();
            assert_eq!(parser.resolve("maxDiscountPercentage", &empty), "0%");
            assert_eq!(parser.resolve("hasDiscount", &empty), "");
            assert_eq!(parser.resolve("discountRange", &empty), "0%");
            assert_eq!(parser.resolve("avgDiscount", &empty), "0%");
        }
    }

    #[test]
    fn test_compute_discounts_matches_registered_values() {
        let products = vec![product("A", 75.0, Some(100.0)), product("B", 45.0, Some(50.0))];
        let stats = compute_discounts(&products);

        let mut parser = TemplateParser::new();
        parser.register_discounts(&products);

        assert_eq!(
            parser.resolve("discountRange", &OverrideData::new()),
            stats.range_label()
        );
        assert_eq!(stats.range_label(), "10-25%");
    }
}

// =============================================================================
// Conditionals
// =============================================================================

mod conditional_tests {
    use super::*;

    #[test]
    fn test_sale_branching() {
        let template = "{{if hasDiscount}}ON SALE!{{else}}Regular Price{{endif}}";

        let mut on_sale = TemplateParser::new();
        on_sale.register_discounts(&[product("A", 50.0, Some(100.0))]);
        assert_eq!(on_sale.parse(template, &OverrideData::new()), "ON SALE!");

        let mut regular = TemplateParser::new();
        regular.register_discounts(&[product("A", 50.0, None)]);
        assert_eq!(regular.parse(template, &OverrideData::new()), "Regular Price");
    }

    #[test]
    fn test_nested_variables_in_collection_template() {
        let mut parser = TemplateParser::new();
        let collection = Collection {
            title: "Summer Sale".to_string(),
            body_html: None,
        };
        parser.register_collection(&collection, &[product("Towel", 60.0, Some(100.0))]);

        let output = parser.parse(
            "{{if hasDiscount}}Save up to {{maxDiscountPercentage}} on {{collectionTitle}}!{{else}}Shop our {{collectionTitle}}{{endif}}",
            &OverrideData::new(),
        );
        assert_eq!(output, "Save up to 40% on Summer Sale!");
    }

    #[test]
    fn test_comparison_operators() {
        let parser = TemplateParser::new();
        let data = overrides(&[("testValue", "25")]);

        assert_eq!(
            parser.parse("{{if testValue > 20}}Greater{{else}}Smaller{{endif}}", &data),
            "Greater"
        );
        assert_eq!(
            parser.parse("{{if testValue == 25}}Equal{{else}}NotEqual{{endif}}", &data),
            "Equal"
        );
    }

    #[test]
    fn test_non_numeric_comparison_is_false() {
        let parser = TemplateParser::new();
        let data = overrides(&[("testValue", "lots")]);

        assert_eq!(
            parser.parse("{{if testValue > 1}}a{{else}}b{{endif}}", &data),
            "b"
        );
        assert_eq!(
            parser.parse("{{if testValue < 1}}a{{else}}b{{endif}}", &data),
            "b"
        );
    }

    #[test]
    fn test_store_level_template() {
        let mut parser = TemplateParser::new();
        parser.register_store(&StoreData {
            name: "Acme Outfitters".to_string(),
            domain: "acme.example".to_string(),
            email: "hi@acme.example".to_string(),
            products: (0..12).map(|i| product(&format!("P{}", i), 10.0, Some(20.0))).collect(),
            collections: vec![Collection::default()],
        });

        let output = parser.parse(
            "{{storeName:uppercase}} | {{if totalProducts > 10}}{{totalProducts}} products, {{discountRange}} off{{else}}Small shop{{endif}}",
            &OverrideData::new(),
        );
        assert_eq!(output, "ACME OUTFITTERS | 12 products, 50% off");
    }

    #[test]
    fn test_malformed_conditional_left_in_place() {
        let parser = TemplateParser::with_store_name("Acme");
        let output = parser.parse("{{if hasDiscount}}Sale at {{storeName}}", &OverrideData::new());
        assert_eq!(output, "Sale at Acme");
    }
}

// =============================================================================
// Introspection
// =============================================================================

mod introspection_tests {
    use super::*;

    #[test]
    fn test_variable_name_extraction() {
        let mut names =
            get_variable_names("Shop our {{collectionTitle}} and save {{maxDiscountPercentage}}!");
        names.sort();
        assert_eq!(names, vec!["collectionTitle", "maxDiscountPercentage"]);
    }

    #[test]
    fn test_variable_names_are_distinct() {
        let names = get_variable_names("{{a}} {{a:uppercase}} {{if a > 1}}{{b}}{{endif}}");
        assert_eq!(names, vec!["a", "b"]);
    }
}
