//! Template engine implementation

mod ast;
mod parse;
mod scope;
mod tokenize;

use crate::template::context::Context;
use crate::template::error::TemplateError;
use std::str::FromStr;

pub use ast::{ExprPath, Loop, Node, Placeholder};
use scope::Scope;

/// A parsed template, reusable across contexts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template text
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate` for unbalanced `{% for %}`/`{% endfor %}`,
    /// unclosed `{{`/`{%` delimiters, unknown directives and invalid
    /// expressions.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            nodes: parse::parse(text)?,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Expand against a context
    pub fn expand(&self, context: &Context) -> Result<String, TemplateError> {
        let mut scope = Scope::new(context);
        let mut output = String::new();
        expand_nodes(&self.nodes, &mut scope, &mut output)?;
        Ok(output)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

fn expand_nodes<'a>(
    nodes: &'a [Node],
    scope: &mut Scope<'a>,
    output: &mut String,
) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Literal(text) => output.push_str(text),
            Node::Placeholder(placeholder) => {
                let value = scope.resolve(&placeholder.path).ok_or_else(|| {
                    TemplateError::UnboundVariable {
                        path: placeholder.path.to_string(),
                        line: placeholder.line,
                    }
                })?;
                output.push_str(value);
            }
            Node::Loop(block) => {
                let items = scope.collection(&block.collection).ok_or_else(|| {
                    TemplateError::UnboundVariable {
                        path: block.collection.clone(),
                        line: block.line,
                    }
                })?;
                for item in items {
                    scope.push(&block.var, item);
                    let result = expand_nodes(&block.body, scope, output);
                    scope.pop();
                    result?;
                }
            }
        }
    }
    Ok(())
}

/// Template expander for scene templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExpander;

impl TemplateExpander {
    /// Create a new template expander
    pub fn new() -> Self {
        Self
    }

    /// Parse and expand a template in one step
    ///
    /// The result is all-or-nothing: on error no partial output is returned.
    pub fn expand(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        Template::parse(template)?.expand(context)
    }
}

/// Convenience function to expand a template
pub fn expand(template: &str, context: &Context) -> Result<String, TemplateError> {
    TemplateExpander::new().expand(template, context)
}

#[cfg(test)]
mod tests;
