//! Error handling tests for template engine

use super::helpers::{context_with, profile_context};
use super::*;

#[test]
fn test_error_loop_variable_outside_loop() {
    let context = context_with("Profile", &["email"]);
    let result = expand("Value: {{ p.name }}", &context);
    match result {
        Err(TemplateError::UnboundVariable { path, line }) => {
            assert_eq!(path, "p.name");
            assert_eq!(line, 1);
        }
        other => panic!("Expected UnboundVariable error, got {:?}", other),
    }
}

#[test]
fn test_error_unknown_global() {
    let context = profile_context();
    let result = expand("line1\nline2 {{ nmae }}", &context);
    assert_eq!(
        result,
        Err(TemplateError::UnboundVariable {
            path: "nmae".to_string(),
            line: 2,
        })
    );
}

#[test]
fn test_error_unknown_field() {
    let context = context_with("Profile", &["email"]);
    let result = expand("{% for p in properties %}{{ p.label }}{% endfor %}", &context);
    match result {
        Err(TemplateError::UnboundVariable { path, .. }) => assert_eq!(path, "p.label"),
        other => panic!("Expected UnboundVariable error, got {:?}", other),
    }
}

#[test]
fn test_error_missing_type_is_unbound() {
    let context = context_with("Profile", &["email"]);
    let result = expand("{% for p in properties %}{{ p.type }}{% endfor %}", &context);
    assert!(matches!(result, Err(TemplateError::UnboundVariable { .. })));
}

#[test]
fn test_error_loop_variable_as_scalar() {
    let context = context_with("Profile", &["email"]);
    let result = expand("{% for p in properties %}{{ p }}{% endfor %}", &context);
    assert!(matches!(result, Err(TemplateError::UnboundVariable { .. })));
}

#[test]
fn test_error_binding_does_not_leak_after_loop() {
    let context = context_with("Profile", &["email"]);
    let result = expand("{% for p in properties %}{% endfor %}{{ p.name }}", &context);
    assert!(matches!(result, Err(TemplateError::UnboundVariable { .. })));
}

#[test]
fn test_error_unknown_collection() {
    let context = context_with("Profile", &["email"]);
    let result = expand("\n{% for p in fields %}{% endfor %}", &context);
    assert_eq!(
        result,
        Err(TemplateError::UnboundVariable {
            path: "fields".to_string(),
            line: 2,
        })
    );
}

#[test]
fn test_error_unclosed_for() {
    let context = context_with("Profile", &["email"]);
    let result = expand("a\n{% for p in properties %}{{ p.name }}", &context);
    match result {
        Err(TemplateError::MalformedTemplate { message, line }) => {
            assert!(message.contains("never closed"));
            assert_eq!(line, 2);
        }
        other => panic!("Expected MalformedTemplate error, got {:?}", other),
    }
}

#[test]
fn test_error_unclosed_for_with_empty_collection() {
    // Structure is checked before evaluation, even if the loop never runs
    let context = context_with("Profile", &[]);
    let result = expand("{% for p in properties %}", &context);
    assert!(matches!(result, Err(TemplateError::MalformedTemplate { .. })));
}

#[test]
fn test_error_endfor_without_for() {
    let context = profile_context();
    let result = expand("{{ name }}{% endfor %}", &context);
    match result {
        Err(TemplateError::MalformedTemplate { message, .. }) => {
            assert!(message.contains("without matching"));
        }
        other => panic!("Expected MalformedTemplate error, got {:?}", other),
    }
}

#[test]
fn test_error_unclosed_placeholder() {
    let context = profile_context();
    let result = expand("Value: {{ name", &context);
    match result {
        Err(TemplateError::MalformedTemplate { message, .. }) => {
            assert!(message.contains("unclosed `{{`"));
        }
        other => panic!("Expected MalformedTemplate error, got {:?}", other),
    }
}

#[test]
fn test_error_unclosed_directive() {
    let context = profile_context();
    let result = expand("{% for p in properties", &context);
    assert!(matches!(result, Err(TemplateError::MalformedTemplate { .. })));
}

#[test]
fn test_error_empty_placeholder() {
    let context = profile_context();
    let result = expand("{{  }}", &context);
    assert!(matches!(result, Err(TemplateError::MalformedTemplate { .. })));
}

#[test]
fn test_error_invalid_expression() {
    let context = profile_context();
    for template in ["{{ name | upper }}", "{{ p..name }}", "{{ 1name }}", "{{ .name }}"] {
        let result = expand(template, &context);
        assert!(
            matches!(result, Err(TemplateError::MalformedTemplate { .. })),
            "{} should be malformed",
            template
        );
    }
}

#[test]
fn test_error_unsupported_directive() {
    let context = profile_context();
    let result = expand("{% if name %}x{% endif %}", &context);
    match result {
        Err(TemplateError::MalformedTemplate { message, .. }) => {
            assert!(message.contains("unsupported directive `if`"));
        }
        other => panic!("Expected MalformedTemplate error, got {:?}", other),
    }
}

#[test]
fn test_error_malformed_loop_header() {
    let context = profile_context();
    for template in [
        "{% for p properties %}{% endfor %}",
        "{% for in properties %}{% endfor %}",
        "{% for p in %}{% endfor %}",
        "{% for p.x in properties %}{% endfor %}",
    ] {
        let result = expand(template, &context);
        assert!(
            matches!(result, Err(TemplateError::MalformedTemplate { .. })),
            "{} should be malformed",
            template
        );
    }
}

#[test]
fn test_error_line_counts_multiline_tags() {
    let context = profile_context();
    let result = expand("{{\nname\n}}\n{{ missing }}", &context);
    assert_eq!(result.unwrap_err().line(), 4);
}

#[test]
fn test_error_display() {
    let err = TemplateError::UnboundVariable {
        path: "p.name".to_string(),
        line: 3,
    };
    assert_eq!(err.to_string(), "Unbound variable 'p.name' at line 3");

    let err = TemplateError::MalformedTemplate {
        message: "unclosed `{{`: expected `}}`".to_string(),
        line: 7,
    };
    assert_eq!(
        err.to_string(),
        "Malformed template at line 7: unclosed `{{`: expected `}}`"
    );
}
