//! Variable registry: variable name to value resolver.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Local};
use serde_json::Value;

use super::modifier::format_number;

/// Store name used until a store is registered
pub const DEFAULT_STORE_NAME: &str = "Your Store";

/// Produces the current value of a variable
pub type Resolver = Box<dyn Fn() -> String + Send + Sync>;

/// Per-call values that take precedence over registered resolvers.
///
/// Values stay as JSON until they are used, so `false`, `0` and `null` read
/// as unset in `{{if}}` while rendering as text when substituted.
pub type OverrideData = HashMap<String, Value>;

/// Name → resolver table owned by a single parser
pub struct VariableRegistry {
    resolvers: HashMap<String, Resolver>,
}

impl VariableRegistry {
    /// Create a registry with no resolvers at all
    pub fn empty() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Create a registry seeded with the built-in variables
    pub fn with_builtins(store_name: impl Into<String>) -> Self {
        let mut registry = Self::empty();

        registry.register("year", || Local::now().year().to_string());
        registry.register("month", || month_name(Local::now().month0()).to_string());
        registry.register("season", || season_for_month(Local::now().month0()).to_string());
        registry.register_value("storeName", store_name);

        registry
    }

    /// Register a resolver, replacing any previous one with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, resolver: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.resolvers.insert(name.into(), Box::new(resolver));
    }

    /// Register a fixed value
    pub fn register_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        self.register(name, move || value.clone());
    }

    /// Resolve a variable to text.
    ///
    /// A key present in `data` wins even when its value is empty. Unknown
    /// names resolve to an empty string.
    pub fn resolve(&self, name: &str, data: &OverrideData) -> String {
        match data.get(name) {
            Some(value) => value_to_string(value),
            None => self.resolve_registered(name),
        }
    }

    /// Whether `name` counts as set for `{{if name}}`.
    ///
    /// Override values use JSON truthiness; registered values are set when
    /// non-empty.
    pub fn is_truthy(&self, name: &str, data: &OverrideData) -> bool {
        match data.get(name) {
            Some(value) => value_is_truthy(value),
            None => !self.resolve_registered(name).is_empty(),
        }
    }

    fn resolve_registered(&self, name: &str) -> String {
        match self.resolvers.get(name) {
            Some(resolver) => resolver(),
            None => {
                tracing::trace!(variable = %name, "Unknown template variable");
                String::new()
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    /// Registered variable names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.resolvers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::with_builtins(DEFAULT_STORE_NAME)
    }
}

impl fmt::Debug for VariableRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableRegistry")
            .field("variables", &self.names())
            .finish()
    }
}

/// Text form of an override value.
///
/// Strings are taken verbatim and `null` is empty. Numbers print in their
/// shortest form (`25.0` is `"25"`). Arrays and objects print as JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Truthiness of an override value: `null`, `false`, `0` and `""` are unset
fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Season for a zero-based month index (northern hemisphere)
pub fn season_for_month(month0: u32) -> &'static str {
    match month0 {
        2..=4 => "Spring",
        5..=7 => "Summer",
        8..=10 => "Fall",
        _ => "Winter",
    }
}

/// English month name for a zero-based month index
pub fn month_name(month0: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS[(month0 % 12) as usize]
}
