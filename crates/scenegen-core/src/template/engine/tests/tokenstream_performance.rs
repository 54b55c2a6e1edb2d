//! O(n) performance verification for TokenStream

use super::tokenize::TokenStream;

fn with_step_counter<F: FnOnce()>(f: F) -> usize {
    use crate::template::engine::tokenize::test_counter;
    test_counter::reset();
    f();
    test_counter::get()
}

fn steps_for(text: &str) -> usize {
    with_step_counter(|| {
        let stream = TokenStream::new(text);
        for token in stream {
            token.unwrap();
        }
    })
}

#[test]
fn test_tokenstream_steps_are_linear() {
    let make = |n: usize| {
        (0..n)
            .map(|i| format!("let v{i} = {{{{ name }}}} {{% for p in properties %}}{{{{ p.name }}}}{{% endfor %}}\n"))
            .collect::<String>()
    };

    for n in [10, 100, 1000] {
        let text = make(n);
        let steps = steps_for(&text);
        // Each byte is visited once, plus at most one reprocess per lone delimiter byte
        assert!(
            steps <= text.len() * 2,
            "{} steps for {} bytes is not linear",
            steps,
            text.len()
        );
        assert!(steps >= text.len());
    }
}

#[test]
fn test_tokenstream_pathological_braces() {
    // Many lone braces must not cause backtracking
    let text = "{ ".repeat(10_000);
    let steps = steps_for(&text);
    assert!(steps <= text.len() * 2);
}
