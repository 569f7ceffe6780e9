use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A fixed spending or income bucket with its display metadata.
///
/// Entries hold their own copy, so a definition captured at append time never
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CategoryDefinition {
    pub label: String,
    pub value: String,
    pub color: String,
    pub icon: String,
}

impl CategoryDefinition {
    fn new(label: &str, value: &str, color: &str, icon: &str) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

static DEFINITIONS: Lazy<Vec<CategoryDefinition>> = Lazy::new(|| {
    vec![
        CategoryDefinition::new("Salary", "salary", "#4caf50", "💰"),
        CategoryDefinition::new("Food", "food", "#ff9800", "🍔"),
        CategoryDefinition::new("Transport", "transport", "#03a9f4", "🚗"),
        CategoryDefinition::new("Shopping", "shopping", "#e91e63", "🛍️"),
        CategoryDefinition::new("Subscriptions", "subscriptions", "#9163CD", "🔁"),
        CategoryDefinition::new("Utilities", "utilities", "#9EB1CF", "🚰"),
        CategoryDefinition::new("Pay Bill's", "paybills", "#DB0032", "🧾"),
    ]
});

/// The static category table, in picker order.
pub fn definitions() -> &'static [CategoryDefinition] {
    &DEFINITIONS
}

/// First definition of the table; used whenever a value cannot be resolved.
pub fn default_definition() -> &'static CategoryDefinition {
    &DEFINITIONS[0]
}

/// Looks up a definition by its stable `value`.
pub fn find(value: &str) -> Option<&'static CategoryDefinition> {
    DEFINITIONS.iter().find(|definition| definition.value == value)
}

/// Resolves `value`, substituting the first definition when it is unknown.
pub fn resolve(value: &str) -> &'static CategoryDefinition {
    match find(value) {
        Some(definition) => definition,
        None => {
            tracing::debug!(value, "unknown category value, using default");
            default_definition()
        }
    }
}
