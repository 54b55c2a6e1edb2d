//! Build the node tree from the token stream, matching loop blocks

use super::ast::{is_identifier, ExprPath, Loop, Node, Placeholder};
use super::tokenize::{TokenKind, TokenStream};
use crate::template::error::TemplateError;

/// A `{% for %}` whose `{% endfor %}` has not been seen yet
struct OpenLoop {
    var: String,
    collection: String,
    line: usize,
    body: Vec<Node>,
}

/// Parse template text into nodes
///
/// Nested loops are tracked with an explicit stack; the innermost open
/// loop receives new nodes.
pub(crate) fn parse(src: &str) -> Result<Vec<Node>, TemplateError> {
    let mut root = Vec::new();
    let mut open: Vec<OpenLoop> = Vec::new();

    for token in TokenStream::new(src) {
        let token = token?;
        let line = token.line;

        let node = match token.kind {
            TokenKind::Text(text) => Node::Literal(text.to_string()),
            TokenKind::Placeholder { expr } => {
                let path = ExprPath::parse(expr).ok_or_else(|| {
                    TemplateError::malformed(format!("invalid expression `{}`", expr), line)
                })?;
                Node::Placeholder(Placeholder { path, line })
            }
            TokenKind::ForStart { var, collection } => {
                if !is_identifier(var) {
                    return Err(TemplateError::malformed(
                        format!("invalid loop variable `{}`", var),
                        line,
                    ));
                }
                if !is_identifier(collection) {
                    return Err(TemplateError::malformed(
                        format!("invalid collection name `{}`", collection),
                        line,
                    ));
                }
                open.push(OpenLoop {
                    var: var.to_string(),
                    collection: collection.to_string(),
                    line,
                    body: Vec::new(),
                });
                continue;
            }
            TokenKind::ForEnd => {
                let closed = open.pop().ok_or_else(|| {
                    TemplateError::malformed("`{% endfor %}` without matching `{% for %}`", line)
                })?;
                Node::Loop(Loop {
                    var: closed.var,
                    collection: closed.collection,
                    body: closed.body,
                    line: closed.line,
                })
            }
        };

        match open.last_mut() {
            Some(parent) => parent.body.push(node),
            None => root.push(node),
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(TemplateError::malformed(
            format!(
                "`{{% for {} in {} %}}` is never closed with `{{% endfor %}}`",
                unclosed.var, unclosed.collection
            ),
            unclosed.line,
        ));
    }

    Ok(root)
}
