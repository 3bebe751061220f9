//! Template records
//!
//! A [`TemplateEntry`] is both the registration interface (decoded from the
//! JSON definition an author supplies) and the immutable registry record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

/// Template category
///
/// The four known categories map to artifact kinds; any other label is kept
/// verbatim and resolves to a markdown artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Chart templates
    Plots,
    /// Calculator templates
    Calculators,
    /// Component-backed interactive widgets
    React,
    /// Canvas-drawn widgets, also component-backed
    Canvas,
    /// Unrecognized category label
    Other(String),
}

impl Category {
    /// Category label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plots => "plots",
            Self::Calculators => "calculators",
            Self::React => "react",
            Self::Canvas => "canvas",
            Self::Other(label) => label,
        }
    }

    /// Whether templates of this category render through a component
    #[inline]
    #[must_use]
    pub fn is_component_backed(&self) -> bool {
        matches!(self, Self::React | Self::Canvas)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "plots" => Self::Plots,
            "calculators" => Self::Calculators,
            "react" => Self::React,
            "canvas" => Self::Canvas,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered artifact template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Unique template id (`bar-chart`)
    pub id: String,
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category
    pub category: Category,
    /// Optional finer grouping (`charts`, `animation`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default configuration
    #[serde(rename = "config")]
    pub default_config: Value,
    /// Named partial configurations, in authoring order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, Value>,
}

impl TemplateEntry {
    /// Create template with a default configuration and no examples
    #[must_use]
    pub fn new(id: impl Into<String>, category: impl Into<Category>, config: Value) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: category.into(),
            subcategory: None,
            description: None,
            default_config: config,
            examples: IndexMap::new(),
        }
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With named example
    #[inline]
    #[must_use]
    pub fn with_example(mut self, name: impl Into<String>, config: Value) -> Self {
        self.examples.insert(name.into(), config);
        self
    }

    /// Get example by name
    #[inline]
    #[must_use]
    pub fn example(&self, name: &str) -> Option<&Value> {
        self.examples.get(name)
    }

    /// Example names in authoring order
    #[inline]
    #[must_use]
    pub fn example_names(&self) -> Vec<&str> {
        self.examples.keys().map(String::as_str).collect()
    }

    /// Summary record for catalog listings
    #[must_use]
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Catalog listing record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Template id
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_labels() {
        assert_eq!(Category::from("plots"), Category::Plots);
        assert_eq!(Category::from("canvas"), Category::Canvas);
        assert_eq!(
            Category::from("slides"),
            Category::Other("slides".to_string())
        );
        assert_eq!(String::from(Category::Other("slides".into())), "slides");
    }

    #[test]
    fn component_backed_categories() {
        assert!(Category::React.is_component_backed());
        assert!(Category::Canvas.is_component_backed());
        assert!(!Category::Plots.is_component_backed());
    }

    #[test]
    fn decodes_definition() {
        let entry: TemplateEntry = serde_json::from_value(json!({
            "id": "bar-chart",
            "name": "Bar Chart",
            "category": "plots",
            "config": { "title": "Bar Chart Example" },
            "examples": {
                "sales": { "title": "Monthly Sales" },
                "comparison": { "title": "Product Comparison" }
            }
        }))
        .unwrap();
        assert_eq!(entry.category, Category::Plots);
        assert_eq!(entry.example_names(), vec!["sales", "comparison"]);
        assert_eq!(entry.example("sales").unwrap()["title"], "Monthly Sales");
    }

    #[test]
    fn examples_are_optional() {
        let entry: TemplateEntry = serde_json::from_value(json!({
            "id": "hello-react",
            "category": "react",
            "config": { "id": "hello-react" }
        }))
        .unwrap();
        assert!(entry.examples.is_empty());
        assert!(entry.name.is_none());
    }
}
