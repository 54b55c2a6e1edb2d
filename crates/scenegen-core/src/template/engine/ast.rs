//! Parsed template representation

use std::fmt;

/// Dotted identifier path such as `name` or `p.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprPath {
    segments: Vec<String>,
}

impl ExprPath {
    /// Parse a dotted path; every segment must be an identifier
    pub(crate) fn parse(expr: &str) -> Option<Self> {
        let segments: Vec<String> = expr.split('.').map(str::to_string).collect();
        if segments.iter().all(|s| is_identifier(s)) {
            Some(Self { segments })
        } else {
            None
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ExprPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// `{{ path }}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub path: ExprPath,
    pub line: usize,
}

/// `{% for var in collection %} body {% endfor %}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    pub var: String,
    pub collection: String,
    pub body: Vec<Node>,
    pub line: usize,
}

/// A template node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(String),
    Placeholder(Placeholder),
    Loop(Loop),
}

/// ASCII identifier: letter or `_`, then letters, digits or `_`
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
