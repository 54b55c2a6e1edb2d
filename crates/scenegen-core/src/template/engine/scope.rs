//! Scope chain for expression lookup

use super::ast::ExprPath;
use crate::template::context::{Context, PropertyDescriptor};

/// Loop-local binding
struct Frame<'a> {
    var: &'a str,
    item: &'a PropertyDescriptor,
}

/// Global context plus one frame per active loop, innermost last
pub(crate) struct Scope<'a> {
    context: &'a Context,
    frames: Vec<Frame<'a>>,
}

impl<'a> Scope<'a> {
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, var: &'a str, item: &'a PropertyDescriptor) {
        self.frames.push(Frame { var, item });
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// Resolve a path to its string value
    ///
    /// The innermost binding named like the head of the path wins. A loop
    /// variable on its own is not a scalar and does not resolve.
    pub fn resolve(&self, path: &ExprPath) -> Option<&'a str> {
        let (head, rest) = path.segments().split_first()?;

        if let Some(frame) = self.frames.iter().rev().find(|f| f.var == head.as_str()) {
            return match rest {
                [field] => frame.item.field(field),
                _ => None,
            };
        }

        match rest {
            [] => self.context.scalar(head),
            _ => None,
        }
    }

    pub fn collection(&self, name: &str) -> Option<Vec<&'a PropertyDescriptor>> {
        self.context.collection(name)
    }
}
