//! Template rendering: conditional blocks first, then variable tokens.

use super::condition::Condition;
use super::modifier::Modifier;
use super::registry::{OverrideData, VariableRegistry, DEFAULT_STORE_NAME};
use super::scanner::{conditional_blocks, replace_spans, tokens};

/// Renders meta templates against a registry of variables.
///
/// A parser is meant to be built for one request, filled with the request's
/// store/collection/product data, used to render, and dropped.
#[derive(Debug)]
pub struct TemplateParser {
    registry: VariableRegistry,
}

impl Default for TemplateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateParser {
    /// Create a parser with the built-in variables and the default store name
    pub fn new() -> Self {
        Self::with_store_name(DEFAULT_STORE_NAME)
    }

    /// Create a parser whose `storeName` defaults to `store_name`
    pub fn with_store_name(store_name: impl Into<String>) -> Self {
        Self {
            registry: VariableRegistry::with_builtins(store_name),
        }
    }

    pub(crate) fn registry_mut(&mut self) -> &mut VariableRegistry {
        &mut self.registry
    }

    /// Register a custom resolver
    pub fn register_custom<F>(&mut self, name: impl Into<String>, resolver: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.registry.register(name, resolver);
    }

    /// Register a fixed value
    pub fn register_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.registry.register_value(name, value);
    }

    /// Resolve a single variable, honouring `data` overrides
    pub fn resolve(&self, name: &str, data: &OverrideData) -> String {
        self.registry.resolve(name, data)
    }

    /// Render `template`. Never fails; unknown variables become empty strings
    /// and malformed blocks are left as text.
    pub fn parse(&self, template: &str, data: &OverrideData) -> String {
        if template.is_empty() {
            return String::new();
        }

        let resolved = self.resolve_conditionals(template, data);
        let rendered = self.substitute_variables(&resolved, data);

        tracing::debug!(
            template_len = template.len(),
            rendered_len = rendered.len(),
            variables = self.registry.len(),
            "Template rendered"
        );

        rendered
    }

    fn resolve_conditionals(&self, template: &str, data: &OverrideData) -> String {
        let blocks = conditional_blocks(template);
        if blocks.is_empty() {
            return template.to_string();
        }

        replace_spans(template, &blocks, |block| {
            let condition = Condition::parse(block.condition);
            let holds = condition.evaluate(&self.registry, data);
            tracing::trace!(variable = condition.variable(), holds, "Conditional evaluated");

            if holds {
                block.then_branch.to_string()
            } else {
                block.else_branch.unwrap_or_default().to_string()
            }
        })
    }

    fn substitute_variables(&self, text: &str, data: &OverrideData) -> String {
        let found = tokens(text);
        if found.is_empty() {
            return text.to_string();
        }

        replace_spans(text, &found, |token| {
            let (name, modifier) = match token.content.split_once(':') {
                Some((name, modifier)) => (name.trim(), Some(modifier.trim())),
                None => (token.content.trim(), None),
            };

            let value = self.registry.resolve(name, data);
            match modifier {
                Some(modifier) => Modifier::parse(modifier).apply(value),
                None => value,
            }
        })
    }
}

/// Distinct variable names referenced by a template, in first-seen order.
///
/// Covers plain tokens (the part before `:`) and `{{if ...}}` heads (the
/// identifier before any comparison operator). `{{else}}` and `{{endif}}` are
/// skipped.
pub fn get_variable_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for token in tokens(template) {
        let content = token.content.trim();
        if content == "else" || content == "endif" {
            continue;
        }

        let name = match conditional_head(content) {
            Some(condition) => condition
                .split(['>', '<', '='])
                .next()
                .unwrap_or_default()
                .trim(),
            None => content.split(':').next().unwrap_or_default().trim(),
        };

        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// The condition of an `if <condition>` token content, if it is one
fn conditional_head(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("if")?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn data(pairs: &[(&str, &str)]) -> OverrideData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn test_parse_empty_template() {
        let parser = TemplateParser::new();
        assert_eq!(parser.parse("", &OverrideData::new()), "");
    }

    #[test]
    fn test_parse_plain_text() {
        let parser = TemplateParser::new();
        assert_eq!(parser.parse("No variables here", &OverrideData::new()), "No variables here");
    }

    #[test]
    fn test_parse_builtin_store_name() {
        let parser = TemplateParser::with_store_name("Acme");
        assert_eq!(parser.parse("Welcome to {{storeName}}", &OverrideData::new()), "Welcome to Acme");
    }

    #[test]
    fn test_parse_unknown_variables_vanish() {
        let parser = TemplateParser::new();
        let once = parser.parse("A{{foo}}B{{ bar:uppercase }}C", &OverrideData::new());
        assert_eq!(once, "ABC");
        assert_eq!(parser.parse(&once, &OverrideData::new()), once);
    }

    #[test]
    fn test_parse_trims_names_and_modifiers() {
        let mut parser = TemplateParser::new();
        parser.register_value("productTitle", "Trail Shoe");

        let output = parser.parse("{{ productTitle : uppercase }}", &OverrideData::new());
        assert_eq!(output, "TRAIL SHOE");
    }

    #[test]
    fn test_parse_override_data() {
        let mut parser = TemplateParser::new();
        parser.register_value("productTitle", "Registered");

        let output = parser.parse("{{productTitle}}", &data(&[("productTitle", "Override")]));
        assert_eq!(output, "Override");
        assert_eq!(parser.resolve("productTitle", &OverrideData::new()), "Registered");
    }

    #[test]
    fn test_parse_conditional_branches() {
        let parser = TemplateParser::new();
        let template = "{{if hasDiscount}}ON SALE!{{else}}Regular Price{{endif}}";

        assert_eq!(parser.parse(template, &data(&[("hasDiscount", "true")])), "ON SALE!");
        assert_eq!(parser.parse(template, &data(&[("hasDiscount", "")])), "Regular Price");
        assert_eq!(parser.parse(template, &OverrideData::new()), "Regular Price");
    }

    #[test]
    fn test_parse_conditional_without_else_false() {
        let parser = TemplateParser::new();
        assert_eq!(parser.parse("A{{if missing}}B{{endif}}C", &OverrideData::new()), "AC");
    }

    #[test]
    fn test_parse_false_string_is_truthy() {
        let parser = TemplateParser::new();
        let output = parser.parse(
            "{{if flag}}yes{{else}}no{{endif}}",
            &data(&[("flag", "false")]),
        );
        assert_eq!(output, "yes");
    }

    #[test]
    fn test_parse_comparisons() {
        let parser = TemplateParser::new();
        let values = data(&[("testValue", "25")]);

        assert_eq!(
            parser.parse("{{if testValue > 20}}Greater{{else}}Smaller{{endif}}", &values),
            "Greater"
        );
        assert_eq!(
            parser.parse("{{if testValue < 20}}Smaller{{else}}Greater{{endif}}", &values),
            "Greater"
        );
        assert_eq!(
            parser.parse("{{if testValue == 25}}Equal{{else}}NotEqual{{endif}}", &values),
            "Equal"
        );
        assert_eq!(
            parser.parse("{{if testValue == \"25\"}}Equal{{else}}NotEqual{{endif}}", &values),
            "Equal"
        );
    }

    #[test]
    fn test_parse_variables_inside_branches() {
        let mut parser = TemplateParser::new();
        parser.register_value("collectionTitle", "Summer Sale");
        parser.register_value("maxDiscountPercentage", "40%");
        parser.register_value("hasDiscount", "true");

        let output = parser.parse(
            "{{if hasDiscount}}Save up to {{maxDiscountPercentage}} on {{collectionTitle}}!{{else}}Shop our {{collectionTitle}}{{endif}}",
            &OverrideData::new(),
        );
        assert_eq!(output, "Save up to 40% on Summer Sale!");
    }

    #[test]
    fn test_parse_multiple_conditionals() {
        let parser = TemplateParser::new();
        let output = parser.parse(
            "{{if a}}A{{endif}}-{{if b}}B{{else}}notB{{endif}}",
            &data(&[("a", "1")]),
        );
        assert_eq!(output, "A-notB");
    }

    #[test]
    fn test_parse_unterminated_conditional_is_text() {
        let parser = TemplateParser::new();
        let output = parser.parse("{{if a}}dangling {{storeName}}", &data(&[("a", "1")]));
        // The head is substituted as an (unknown) variable in the second pass
        assert_eq!(output, "dangling Your Store");
    }

    #[test]
    fn test_parse_nested_conditional_not_supported() {
        let parser = TemplateParser::new();
        let output = parser.parse(
            "{{if a}}x{{if b}}y{{endif}}z{{endif}}",
            &data(&[("a", "1"), ("b", "1")]),
        );
        // Inner head and trailing endif fall through to variable substitution
        assert_eq!(output, "xyz");
    }

    #[test]
    fn test_branches_are_not_rescanned_for_conditionals() {
        let parser = TemplateParser::new();
        let values = data(&[("a", "1"), ("snippet", "{{if a}}no{{endif}}")]);
        let output = parser.parse("{{if a}}{{snippet}}{{endif}}", &values);
        assert_eq!(output, "{{if a}}no{{endif}}");
    }

    #[test]
    fn test_parse_modifiers() {
        let mut parser = TemplateParser::new();
        parser.register_value("price", "25.50");
        parser.register_value("title", "Summer Sale");

        let empty = OverrideData::new();
        assert_eq!(parser.parse("{{price:number}}", &empty), "25.5");
        assert_eq!(parser.parse("{{title:lowercase}}", &empty), "summer sale");
        assert_eq!(parser.parse("{{title:shout}}", &empty), "Summer Sale");
        assert_eq!(parser.parse("{{title:date(YYYY)}}", &empty), "Summer Sale");
    }

    #[test]
    fn test_register_custom() {
        let mut parser = TemplateParser::new();
        parser.register_custom("greeting", || "hello".to_string());
        assert_eq!(parser.parse("{{greeting}}", &OverrideData::new()), "hello");
    }

    #[test]
    fn test_get_variable_names() {
        let names = get_variable_names("Shop our {{collectionTitle}} and save {{maxDiscountPercentage}}!");
        assert_eq!(names, vec!["collectionTitle", "maxDiscountPercentage"]);
    }

    #[test]
    fn test_get_variable_names_with_conditionals_and_modifiers() {
        let names = get_variable_names(
            "{{if discountedCount > 3}}{{productTitle:uppercase}}{{else}}{{ productTitle }}{{endif}} {{if productType == 'Shoes'}}x{{endif}} {{if hasDiscount}}y{{endif}}",
        );
        assert_eq!(
            names,
            vec!["discountedCount", "productTitle", "productType", "hasDiscount"]
        );
    }

    #[test]
    fn test_get_variable_names_empty() {
        assert!(get_variable_names("").is_empty());
        assert!(get_variable_names("{{else}}{{endif}}").is_empty());
    }
}
