#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: scan a source and render each token as a short string.
///
/// Text runs show as `T(..)`, tags as `<sigil>(content)`.
fn scan(source: &str) -> Vec<String> {
    Scanner::new(source)
        .map(|token| match token.expect("scan succeeds") {
            RawToken::Text(span) => format!("T({})", span.slice(source)),
            RawToken::Tag(tag) => format!("{:?}({})", tag.sigil, tag.content.slice(source)),
        })
        .collect()
}

fn scan_err(source: &str) -> ScanError {
    Scanner::new(source)
        .find_map(Result::err)
        .expect("scan fails")
}

#[test]
fn test_plain_text() {
    assert_eq!(scan("hello world"), vec!["T(hello world)"]);
    assert!(scan("").is_empty());
}

#[test]
fn test_every_sigil() {
    assert_eq!(
        scan("{{a}}{{{b}}}{{&c}}{{#d}}{{^e}}{{/f}}{{!g}}{{>h}}"),
        vec![
            "Escaped(a)",
            "Triple(b)",
            "Ampersand(c)",
            "Section(d)",
            "Inverted(e)",
            "Close(f)",
            "Comment(g)",
            "Partial(h)",
        ]
    );
}

#[test]
fn test_content_is_trimmed() {
    assert_eq!(scan("{{  name\t}}"), vec!["Escaped(name)"]);
    assert_eq!(scan("{{# list }}"), vec!["Section(list)"]);
    assert_eq!(scan("{{{ body }}}"), vec!["Triple(body)"]);
}

#[test]
fn test_text_between_tags() {
    assert_eq!(
        scan("<h1>{{title}}</h1>"),
        vec!["T(<h1>)", "Escaped(title)", "T(</h1>)"]
    );
}

#[test]
fn test_spans_cover_whole_tag() {
    let source = "ab{{{ x }}}cd";
    let tokens: Vec<RawToken> = Scanner::new(source).map(|t| t.expect("ok")).collect();
    assert_eq!(tokens[1].span(), Span::new(2, 11));
    assert_eq!(tokens[1].span().slice(source), "{{{ x }}}");
}

#[test]
fn test_comment_may_span_lines() {
    assert_eq!(scan("{{! one\ntwo }}x"), vec!["Comment(one\ntwo)", "T(x)"]);
}

#[test]
fn test_delimiter_change_applies_afterwards() {
    assert_eq!(
        scan("{{=<% %>=}}Hello <%name%> {{literal}}"),
        vec![
            "Delimiters(<% %>)",
            "T(Hello )",
            "Escaped(name)",
            "T( {{literal}})",
        ]
    );
}

#[test]
fn test_delimiter_change_round_trip() {
    let mut scanner = Scanner::new("{{=| |=}}|a||={{ }}=|{{b}}");
    let mut contents = Vec::new();
    for token in scanner.by_ref() {
        if let RawToken::Tag(tag) = token.expect("ok") {
            contents.push(tag.sigil);
        }
    }
    assert_eq!(
        contents,
        vec![Sigil::Delimiters, Sigil::Escaped, Sigil::Delimiters, Sigil::Escaped]
    );
    assert!(scanner.delimiters().is_default());
}

#[test]
fn test_custom_initial_delimiters() {
    let delimiters = Delimiters::new("[[", "]]").expect("valid");
    let source = "[[x]] {{y}}";
    let tokens: Vec<_> = Scanner::with_delimiters(source, delimiters)
        .map(|t| t.expect("ok"))
        .collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1], RawToken::Text(Span::new(5, 11)));
}

#[test]
fn test_unclosed_tag() {
    let err = scan_err("abc {{name");
    assert_eq!(
        err,
        ScanError::UnclosedTag {
            span: Span::new(4, 10),
            expected: "}}".to_owned(),
        }
    );
}

#[test]
fn test_unclosed_triple_expects_brace() {
    let err = scan_err("{{{name}}");
    assert!(matches!(err, ScanError::UnclosedTag { ref expected, .. } if expected == "}}}"));
}

#[test]
fn test_malformed_delimiter_change() {
    assert!(matches!(
        scan_err("{{=<%=}}"),
        ScanError::InvalidDelimiters {
            reason: DelimiterChangeError::Arity(1),
            ..
        }
    ));
    assert!(matches!(
        scan_err("{{=a b c=}}"),
        ScanError::InvalidDelimiters {
            reason: DelimiterChangeError::Arity(3),
            ..
        }
    ));
}

#[test]
fn test_fused_after_error() {
    let mut scanner = Scanner::new("{{a");
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert!(scanner.next().is_none());
}

proptest! {
    /// Sources without `{` scan to a single text token equal to the source.
    #[test]
    fn text_without_braces_is_one_token(source in "[^{]{1,64}") {
        let tokens: Vec<RawToken> = Scanner::new(&source).map(|t| t.expect("ok")).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].span().slice(&source), source.as_str());
    }

    /// Token spans tile the source exactly, in order.
    #[test]
    fn spans_tile_source(parts in proptest::collection::vec("[a-z ]{0,6}", 1..8)) {
        let source = parts.join("{{x}}");
        let mut end = 0;
        for token in Scanner::new(&source) {
            let span = token.expect("ok").span();
            prop_assert_eq!(span.start, end);
            end = span.end;
        }
        prop_assert_eq!(end as usize, source.len());
    }
}
