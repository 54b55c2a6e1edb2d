//! Data bound to a template during expansion

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property of the scene, bound to the loop variable inside
/// `{% for p in properties %}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Declared type, when the descriptor was parsed from a model
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Field lookup for `p.<field>` expressions
    ///
    /// Besides `name` and `type`, the UI fields are derived from the name:
    /// `outlet` (`ImageView` or `Label`), `outlet_type` (`UIImageView` or
    /// `UILabel`) and `reset` (the statement clearing the outlet).
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "type" => self.type_name.as_deref(),
            "outlet" => Some(if self.shows_image() { "ImageView" } else { "Label" }),
            "outlet_type" => Some(if self.shows_image() {
                "UIImageView"
            } else {
                "UILabel"
            }),
            "reset" => Some(if self.shows_image() {
                "image = nil"
            } else {
                "text = \"\""
            }),
            _ => None,
        }
    }

    /// Names mentioning an image or URL are displayed in an image view
    pub fn shows_image(&self) -> bool {
        let lowered = self.name.to_lowercase();
        lowered.contains("image") || lowered.contains("url")
    }

    /// `id` is an identifier, never displayed
    pub fn is_displayed(&self) -> bool {
        self.name != "id"
    }
}

impl From<&str> for PropertyDescriptor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Template context: a scene name, its ordered properties and any extra
/// global scalars
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_properties<I, P>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PropertyDescriptor>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Global scalar lookup; `name` always refers to the scene name
    pub fn scalar(&self, key: &str) -> Option<&str> {
        if key == "name" {
            return Some(&self.name);
        }
        self.vars.get(key).map(String::as_str)
    }

    /// Collection lookup for `{% for .. in <collection> %}`
    ///
    /// `properties` yields every property in order; `display_properties`
    /// skips the ones that are never shown in a view.
    pub fn collection(&self, key: &str) -> Option<Vec<&PropertyDescriptor>> {
        match key {
            "properties" => Some(self.properties.iter().collect()),
            "display_properties" => Some(
                self.properties
                    .iter()
                    .filter(|p| p.is_displayed())
                    .collect(),
            ),
            _ => None,
        }
    }
}
