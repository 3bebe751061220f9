//! Template registry
//!
//! Provides [`TemplateRegistry`], an immutable id → template map built once at
//! startup through [`TemplateRegistryBuilder`]. Lookups are O(1) and
//! side-effect-free; iteration follows registration order.

use crate::error::{RegistryError, RegistryResult};
use crate::template::{Category, TemplateEntry, TemplateSummary};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Config key whose example value replaces the default only when non-null
pub const DISPLAY_KEY: &str = "display";

/// Builder collecting template registrations
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    templates: IndexMap<String, TemplateEntry>,
}

impl TemplateRegistryBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template
    ///
    /// # Errors
    /// - `RegistryError::InvalidTemplate` if the id is empty or contains `:`
    ///   (it could never be addressed by a link)
    /// - `RegistryError::DuplicateTemplate` if the id is already registered
    pub fn register(&mut self, entry: TemplateEntry) -> RegistryResult<&mut Self> {
        if entry.id.is_empty() {
            return Err(RegistryError::invalid_template("", "empty template id"));
        }
        if entry.id.contains(':') {
            return Err(RegistryError::invalid_template(
                entry.id,
                "template id must not contain ':'",
            ));
        }
        if self.templates.contains_key(&entry.id) {
            return Err(RegistryError::DuplicateTemplate(entry.id));
        }
        self.templates.insert(entry.id.clone(), entry);
        Ok(self)
    }

    /// Decode and register a JSON template definition
    ///
    /// # Errors
    /// Returns `RegistryError::Definition` for malformed JSON, otherwise the
    /// errors of [`register`](Self::register).
    pub fn register_json(&mut self, source_name: &str, json: &str) -> RegistryResult<&mut Self> {
        let entry: TemplateEntry = serde_json::from_str(json)
            .map_err(|e| RegistryError::definition(source_name, e))?;
        self.register(entry)
    }

    /// Freeze into an immutable registry
    #[must_use]
    pub fn build(self) -> TemplateRegistry {
        tracing::debug!(templates = self.templates.len(), "template registry built");
        TemplateRegistry {
            templates: Arc::new(self.templates),
        }
    }
}

/// Immutable catalog of artifact templates
///
/// Cheap to clone; clones share the same frozen map.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Arc<IndexMap<String, TemplateEntry>>,
}

impl TemplateRegistry {
    /// Start a new registration pass
    #[inline]
    #[must_use]
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::new()
    }

    /// Registry containing the templates shipped with this crate
    ///
    /// # Errors
    /// Returns an error if a bundled definition fails to decode or register.
    pub fn with_builtins() -> RegistryResult<Self> {
        let mut builder = Self::builder();
        crate::builtin::register_builtins(&mut builder)?;
        Ok(builder.build())
    }

    /// Get template by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TemplateEntry> {
        self.templates.get(id)
    }

    /// Get template by id or fail with `TemplateNotFound`
    ///
    /// # Errors
    /// Returns `RegistryError::TemplateNotFound` if absent.
    pub fn require(&self, id: &str) -> RegistryResult<&TemplateEntry> {
        self.get(id)
            .ok_or_else(|| RegistryError::TemplateNotFound(id.to_string()))
    }

    /// Check if template exists
    #[inline]
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// All templates in registration order
    pub fn all(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.templates.values()
    }

    /// Templates of one category, in registration order
    #[must_use]
    pub fn by_category(&self, category: &Category) -> Vec<&TemplateEntry> {
        self.templates
            .values()
            .filter(|t| &t.category == category)
            .collect()
    }

    /// Summaries grouped by category, categories in first-seen order
    #[must_use]
    pub fn grouped(&self) -> IndexMap<Category, Vec<TemplateSummary>> {
        let mut grouped: IndexMap<Category, Vec<TemplateSummary>> = IndexMap::new();
        for template in self.templates.values() {
            grouped
                .entry(template.category.clone())
                .or_default()
                .push(template.summary());
        }
        grouped
    }

    /// Default configuration of a template
    #[inline]
    #[must_use]
    pub fn config(&self, id: &str) -> Option<&Value> {
        self.get(id).map(|t| &t.default_config)
    }

    /// Named example of a template
    #[inline]
    #[must_use]
    pub fn example(&self, id: &str, example: &str) -> Option<&Value> {
        self.get(id).and_then(|t| t.example(example))
    }

    /// Example names of a template (empty if unknown)
    #[must_use]
    pub fn example_names(&self, id: &str) -> Vec<&str> {
        self.get(id).map(TemplateEntry::example_names).unwrap_or_default()
    }

    /// Resolve the effective configuration for a template and optional example
    ///
    /// Example fields override default fields. The default `display` object
    /// is kept unless the example sets a non-null `display` of its own.
    ///
    /// # Errors
    /// - `RegistryError::TemplateNotFound` if `id` is absent
    /// - `RegistryError::ExampleNotFound` if `example` is given but unknown
    pub fn resolve_config(&self, id: &str, example: Option<&str>) -> RegistryResult<Value> {
        let template = self.require(id)?;
        match example {
            None => Ok(template.default_config.clone()),
            Some(name) => {
                let overlay = template
                    .example(name)
                    .ok_or_else(|| RegistryError::example_not_found(id, name))?;
                Ok(merge_example(&template.default_config, overlay))
            }
        }
    }

    /// Number of registered templates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Shallow-merge an example over a default configuration
///
/// Non-object defaults are replaced by the example outright; a null example
/// leaves the default untouched.
#[must_use]
pub fn merge_example(default: &Value, example: &Value) -> Value {
    match (default, example) {
        (_, Value::Null) => default.clone(),
        (Value::Object(base), Value::Object(overlay)) => {
            let mut merged = base.clone();
            for (key, value) in overlay {
                if key == DISPLAY_KEY && value.is_null() {
                    continue;
                }
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn calculator() -> TemplateEntry {
        TemplateEntry::new(
            "unit-converter",
            "calculators",
            json!({
                "title": "Temperature Converter",
                "inputs": [{ "name": "celsius" }],
                "display": { "showFormula": true }
            }),
        )
        .with_name("Unit Converter")
        .with_example(
            "distance",
            json!({ "title": "Distance Converter", "inputs": [{ "name": "meters" }] }),
        )
        .with_example(
            "speed",
            json!({ "title": "Speed Converter", "display": { "showFormula": false } }),
        )
        .with_example("nulled", json!({ "display": null }))
    }

    fn registry() -> TemplateRegistry {
        let mut builder = TemplateRegistry::builder();
        builder
            .register(calculator())
            .unwrap()
            .register(TemplateEntry::new("line-chart", "plots", json!({ "title": "Line" })))
            .unwrap();
        builder.build()
    }

    #[test]
    fn registry_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.has("line-chart"));
        assert!(!registry.has("pie-chart"));
        assert_eq!(registry.get("unit-converter").unwrap().category, Category::Calculators);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut builder = TemplateRegistry::builder();
        builder.register(calculator()).unwrap();
        let err = builder.register(calculator()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTemplate(id) if id == "unit-converter"));
    }

    #[test]
    fn unaddressable_ids_rejected() {
        let mut builder = TemplateRegistry::builder();
        let empty = TemplateEntry::new("", "plots", json!({}));
        let colon = TemplateEntry::new("a:b", "plots", json!({}));
        assert!(builder.register(empty).is_err());
        assert!(builder.register(colon).is_err());
    }

    #[test]
    fn resolve_default_config() {
        let config = registry().resolve_config("line-chart", None).unwrap();
        assert_eq!(config, json!({ "title": "Line" }));
    }

    #[test]
    fn example_overrides_and_keeps_display() {
        let config = registry()
            .resolve_config("unit-converter", Some("distance"))
            .unwrap();
        assert_eq!(
            config,
            json!({
                "title": "Distance Converter",
                "inputs": [{ "name": "meters" }],
                "display": { "showFormula": true }
            })
        );
    }

    #[test]
    fn explicit_example_display_wins() {
        let config = registry()
            .resolve_config("unit-converter", Some("speed"))
            .unwrap();
        assert_eq!(config["display"], json!({ "showFormula": false }));
    }

    #[test]
    fn null_example_display_keeps_default() {
        let config = registry()
            .resolve_config("unit-converter", Some("nulled"))
            .unwrap();
        assert_eq!(config["display"], json!({ "showFormula": true }));
    }

    #[test]
    fn resolve_errors() {
        let registry = registry();
        assert!(matches!(
            registry.resolve_config("pie-chart", None),
            Err(RegistryError::TemplateNotFound(_))
        ));
        assert!(matches!(
            registry.resolve_config("line-chart", Some("weekly")),
            Err(RegistryError::ExampleNotFound { .. })
        ));
    }

    #[test]
    fn by_category_and_grouping() {
        let registry = registry();
        let plots = registry.by_category(&Category::Plots);
        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].id, "line-chart");

        let grouped = registry.grouped();
        let categories: Vec<_> = grouped.keys().map(Category::as_str).collect();
        assert_eq!(categories, vec!["calculators", "plots"]);
    }

    #[test]
    fn example_helpers() {
        let registry = registry();
        assert_eq!(
            registry.example_names("unit-converter"),
            vec!["distance", "speed", "nulled"]
        );
        assert!(registry.example_names("pie-chart").is_empty());
        assert!(registry.example("unit-converter", "speed").is_some());
        assert_eq!(registry.config("line-chart").unwrap()["title"], "Line");
    }

    #[test]
    fn register_json_reports_source() {
        let mut builder = TemplateRegistry::builder();
        let err = builder.register_json("broken.json", "{ not json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn merge_non_object_default() {
        assert_eq!(merge_example(&json!(null), &json!({ "a": 1 })), json!({ "a": 1 }));
        assert_eq!(merge_example(&json!({ "a": 1 }), &json!(null)), json!({ "a": 1 }));
    }
}
