//! Swift model parsing
//!
//! Turns a pasted model declaration such as
//!
//! ```text
//! struct Conversation {
//!     let id: Int
//!     let name: String
//!     let avatarURL: String?
//! }
//! ```
//!
//! into an ordered property list for scene templates.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, ScenegenError};
use crate::template::PropertyDescriptor;

static MODEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:struct|class)\s+(\w+)[^{]*\{([^}]*)").expect("model regex is valid")
});

static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:let|var)\s+(\w+)\s*:\s*(.+)$").expect("property regex is valid")
});

/// Declared type of a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyType(String);

impl PropertyType {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(type_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_optional(&self) -> bool {
        self.0.ends_with('?')
    }

    pub fn is_array(&self) -> bool {
        self.0.ends_with(']') || self.0.ends_with("]?")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub property_type: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub name: String,
    pub properties: Vec<Property>,
}

impl Model {
    /// Name of a variable holding one model value (`UserProfile` → `userProfile`)
    pub fn variable_name(&self) -> String {
        camel_case(&self.name)
    }

    /// Template descriptors, in declaration order
    pub fn descriptors(&self) -> Vec<PropertyDescriptor> {
        self.properties
            .iter()
            .map(|p| PropertyDescriptor::new(&p.name).with_type(p.property_type.as_str()))
            .collect()
    }
}

/// Parse the first `struct`/`class` declaration in `text`
///
/// Stored properties are `let`/`var` lines; default values and trailing
/// `//` comments are stripped from the type.
pub fn parse_model(text: &str) -> Result<Model> {
    let caps = MODEL_RE.captures(text).ok_or_else(|| {
        ScenegenError::ModelParseError("no struct or class declaration found".to_string())
    })?;

    let name = caps[1].to_string();
    let block = caps.get(2).map_or("", |m| m.as_str());

    let properties = PROPERTY_RE
        .captures_iter(block)
        .map(|c| Property {
            name: c[1].to_string(),
            property_type: PropertyType::new(clean_type(&c[2])),
        })
        .collect();

    Ok(Model { name, properties })
}

/// Lower-case the leading capital of a type name
///
/// A leading acronym is lowered as a whole, except for the capital that
/// starts the next word: `URLItem` → `urlItem`, `ID` → `id`.
pub fn camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let upper_run = chars.iter().take_while(|c| c.is_ascii_uppercase()).count();
    let lowered = match upper_run {
        n if n <= 1 || n == chars.len() => n,
        n => n - 1,
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < lowered { c.to_ascii_lowercase() } else { *c })
        .collect()
}

fn clean_type(raw: &str) -> &str {
    let end = [raw.find("//"), raw.find('=')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(raw.len());
    raw[..end].trim()
}
