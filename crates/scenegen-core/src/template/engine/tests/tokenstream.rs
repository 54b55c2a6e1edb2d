//! Unit tests for TokenStream

use super::tokenize::{ScanState, TokenKind, TokenStream};

fn kinds(text: &str) -> Vec<TokenKind<'_>> {
    TokenStream::new(text)
        .map(|t| t.expect("tokenization should succeed").kind)
        .collect()
}

#[test]
fn test_scan_state_is_copy() {
    let state = ScanState::Text { start: 0, line: 1 };
    let copied = state;
    assert_eq!(state, copied);
    assert_ne!(state, ScanState::Done);
}

#[test]
fn test_tokenstream_single_placeholder() {
    let text = "Hello {{ name }} world";
    let tokens: Vec<_> = TokenStream::new(text).map(Result::unwrap).collect();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Text("Hello "));
    assert_eq!(tokens[1].kind, TokenKind::Placeholder { expr: "name" });
    assert_eq!(tokens[1].start, 6);
    assert_eq!(tokens[1].length, "{{ name }}".len());
    assert_eq!(tokens[2].kind, TokenKind::Text(" world"));
}

#[test]
fn test_tokenstream_plain_text() {
    assert_eq!(kinds("no tags here"), vec![TokenKind::Text("no tags here")]);
}

#[test]
fn test_tokenstream_empty_input() {
    assert!(kinds("").is_empty());
}

#[test]
fn test_tokenstream_adjacent_tags() {
    assert_eq!(
        kinds("{{a}}{{b}}"),
        vec![
            TokenKind::Placeholder { expr: "a" },
            TokenKind::Placeholder { expr: "b" },
        ]
    );
}

#[test]
fn test_tokenstream_loop_tags() {
    assert_eq!(
        kinds("{% for p in properties %}x{% endfor %}"),
        vec![
            TokenKind::ForStart {
                var: "p",
                collection: "properties",
            },
            TokenKind::Text("x"),
            TokenKind::ForEnd,
        ]
    );
}

#[test]
fn test_tokenstream_trailing_lone_brace() {
    assert_eq!(kinds("end {"), vec![TokenKind::Text("end {")]);
}

#[test]
fn test_tokenstream_triple_brace() {
    // `{{{` opens at the first pair; the third brace belongs to the expression
    let result: Vec<_> = TokenStream::new("{{{ name }}").collect();
    assert_eq!(result.len(), 1);
    assert!(result[0].is_ok());
    assert_eq!(
        result[0].as_ref().unwrap().kind,
        TokenKind::Placeholder { expr: "{ name" }
    );
}

#[test]
fn test_tokenstream_percent_inside_statement() {
    // A `%` not followed by `}` does not close a statement
    let result: Vec<_> = TokenStream::new("{% for p in properties %%}").collect();
    assert_eq!(result.len(), 1);
    assert!(result[0].is_err());
}

#[test]
fn test_tokenstream_line_numbers() {
    let text = "line1\n{{ a }}\nline3\n{% endfor %}";
    let tokens: Vec<_> = TokenStream::new(text).map(Result::unwrap).collect();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 2, 4]);
}

#[test]
fn test_tokenstream_unclosed_reports_once() {
    let results: Vec<_> = TokenStream::new("ok {{ broken").collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn test_tokenstream_stops_after_bad_directive() {
    let results: Vec<_> = TokenStream::new("{% include x %} {{ a }}").collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}
