//! Tokenization for template engine
//!
//! Provides O(n) tokenization using a state machine.

use crate::template::error::TemplateError;

/// Tag delimiter family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delim {
    /// `{{ ... }}`
    Expr,
    /// `{% ... %}`
    Stmt,
}

impl Delim {
    /// Second byte of an opening delimiter (`{{` or `{%`)
    fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Delim::Expr),
            b'%' => Some(Delim::Stmt),
            _ => None,
        }
    }

    /// First byte of the closing delimiter (`}}` or `%}`)
    fn close_lead(self) -> u8 {
        match self {
            Delim::Expr => b'}',
            Delim::Stmt => b'%',
        }
    }

    pub(crate) fn open(self) -> &'static str {
        match self {
            Delim::Expr => "{{",
            Delim::Stmt => "{%",
        }
    }

    pub(crate) fn close(self) -> &'static str {
        match self {
            Delim::Expr => "}}",
            Delim::Stmt => "%}",
        }
    }
}

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind<'a> {
    /// Literal text between tags
    Text(&'a str),

    /// `{{ expr }}` with the trimmed expression
    Placeholder { expr: &'a str },

    /// `{% for var in collection %}`
    ForStart { var: &'a str, collection: &'a str },

    /// `{% endfor %}`
    ForEnd,
}

/// A single token with position and classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    /// Token classification
    pub kind: TokenKind<'a>,
    /// Absolute byte position where the token starts
    pub start: usize,
    /// Total length in bytes including delimiters
    pub length: usize,
    /// Line number where token starts (for error messages)
    pub line: usize,
}

/// Tokenization state machine
///
/// ```text
/// Text ──{──> SeenOpen ──{ or %──> InTag ──} or %──> SeenClose ──}──> [Yield Tag] → Text
///  │             │                   │                   │
///  │             │ (other)           │ (other)           │ (other)
///  └─────────────┴──> Text           └───────────────────┴──> InTag
/// ```
///
/// Every transition either consumes a byte or moves to a state that will,
/// so each byte is processed a bounded number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScanState {
    /// Scanning literal text that began at `start`
    Text { start: usize, line: usize },

    /// Seen a `{` that may open a tag
    SeenOpen {
        start: usize,
        line: usize,
        brace_pos: usize,
    },

    /// Inside a tag, scanning for its closing delimiter
    InTag {
        delim: Delim,
        start: usize,
        content_start: usize,
        line: usize,
    },

    /// Seen the first byte of a closing delimiter
    SeenClose {
        delim: Delim,
        start: usize,
        content_start: usize,
        close_pos: usize,
        line: usize,
    },

    /// Input exhausted or an error was reported
    Done,
}

/// Iterator over tokens in a template string
///
/// Yields `Err` once for an unclosed or unrecognised tag and stops.
pub(crate) struct TokenStream<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    /// Current line number
    line: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            state: ScanState::Text { start: 0, line: 1 },
            line: 1,
        }
    }

    fn text_token(&self, start: usize, end: usize, line: usize) -> Token<'a> {
        Token {
            kind: TokenKind::Text(&self.src[start..end]),
            start,
            length: end - start,
            line,
        }
    }

    /// Classify tag content into a TokenKind
    fn classify(
        &self,
        delim: Delim,
        content: &'a str,
        line: usize,
    ) -> Result<TokenKind<'a>, TemplateError> {
        match delim {
            Delim::Expr => {
                let expr = content.trim();
                if expr.is_empty() {
                    return Err(TemplateError::malformed("empty placeholder `{{ }}`", line));
                }
                Ok(TokenKind::Placeholder { expr })
            }
            Delim::Stmt => {
                let words: Vec<&'a str> = content.split_whitespace().collect();
                match words.as_slice() {
                    ["for", var, "in", collection] => Ok(TokenKind::ForStart {
                        var: *var,
                        collection: *collection,
                    }),
                    ["endfor"] => Ok(TokenKind::ForEnd),
                    ["for", ..] => Err(TemplateError::malformed(
                        format!(
                            "invalid loop header `{{% {} %}}`: expected `{{% for <var> in <collection> %}}`",
                            content.trim()
                        ),
                        line,
                    )),
                    [] => Err(TemplateError::malformed("empty directive `{% %}`", line)),
                    [other, ..] => Err(TemplateError::malformed(
                        format!("unsupported directive `{}`", other),
                        line,
                    )),
                }
            }
        }
    }

    /// Flush whatever is pending when the input runs out
    fn finish(&mut self) -> Option<Result<Token<'a>, TemplateError>> {
        match std::mem::replace(&mut self.state, ScanState::Done) {
            ScanState::Text { start, line } | ScanState::SeenOpen { start, line, .. } => {
                if start < self.bytes.len() {
                    Some(Ok(self.text_token(start, self.bytes.len(), line)))
                } else {
                    None
                }
            }
            ScanState::InTag { delim, line, .. } | ScanState::SeenClose { delim, line, .. } => {
                Some(Err(TemplateError::malformed(
                    format!("unclosed `{}`: expected `{}`", delim.open(), delim.close()),
                    line,
                )))
            }
            ScanState::Done => None,
        }
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == ScanState::Done {
                return None;
            }
            if self.pos >= self.bytes.len() {
                return self.finish();
            }

            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state {
                ScanState::Text { start, line } => {
                    if byte == b'{' {
                        self.state = ScanState::SeenOpen {
                            start,
                            line,
                            brace_pos: self.pos,
                        };
                    } else if byte == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }
                ScanState::SeenOpen {
                    start,
                    line,
                    brace_pos,
                } => match Delim::from_open(byte) {
                    Some(delim) => {
                        self.state = ScanState::InTag {
                            delim,
                            start: brace_pos,
                            content_start: self.pos + 1,
                            line: self.line,
                        };
                        self.pos += 1;
                        if brace_pos > start {
                            return Some(Ok(self.text_token(start, brace_pos, line)));
                        }
                    }
                    // Lone `{`, reprocess this byte as text
                    None => self.state = ScanState::Text { start, line },
                },
                ScanState::InTag {
                    delim,
                    start,
                    content_start,
                    line,
                } => {
                    if byte == delim.close_lead() {
                        self.state = ScanState::SeenClose {
                            delim,
                            start,
                            content_start,
                            close_pos: self.pos,
                            line,
                        };
                    } else if byte == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }
                ScanState::SeenClose {
                    delim,
                    start,
                    content_start,
                    close_pos,
                    line,
                } => {
                    if byte == b'}' {
                        self.pos += 1;
                        self.state = ScanState::Text {
                            start: self.pos,
                            line: self.line,
                        };
                        let content = &self.src[content_start..close_pos];
                        return Some(match self.classify(delim, content, line) {
                            Ok(kind) => Ok(Token {
                                kind,
                                start,
                                length: self.pos - start,
                                line,
                            }),
                            Err(e) => {
                                self.state = ScanState::Done;
                                Err(e)
                            }
                        });
                    }
                    // Not a closing delimiter after all, reprocess inside the tag
                    self.state = ScanState::InTag {
                        delim,
                        start,
                        content_start,
                        line,
                    };
                }
                ScanState::Done => return None,
            }
        }
    }
}

/// Test-only step counter for O(n) performance verification
///
/// Thread-local so parallel tests do not interfere.
#[cfg(test)]
pub(crate) mod test_counter {
    use std::cell::Cell;

    thread_local! {
        static TEST_STEP_COUNTER: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn reset() {
        TEST_STEP_COUNTER.with(|c| c.set(0));
    }

    pub(crate) fn get() -> usize {
        TEST_STEP_COUNTER.with(|c| c.get())
    }

    pub(crate) fn inc() {
        TEST_STEP_COUNTER.with(|c| c.set(c.get() + 1));
    }
}
