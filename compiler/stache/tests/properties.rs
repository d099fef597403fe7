#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{obj, render, Value};
use proptest::prelude::*;

proptest! {
    /// Text without an opening delimiter is its own rendering.
    #[test]
    fn literal_text_renders_to_itself(text in "[^{]*") {
        prop_assert_eq!(render(&text, &obj([])), text);
    }

    /// A list section renders its body once per element, in order.
    #[test]
    fn sections_render_once_per_element(items in prop::collection::vec("[a-z]{0,6}", 0..12)) {
        let data = obj([(
            "xs",
            Value::List(items.iter().map(|item| item.as_str().into()).collect()),
        )]);
        let expected: String = items.iter().map(|item| format!("[{item}]")).collect();
        prop_assert_eq!(render("{{#xs}}[{{.}}]{{/xs}}", &data), expected);
    }

    /// Interpolating a value never yields a reserved character unescaped.
    #[test]
    fn escaped_output_has_no_markup(text in ".*") {
        let rendered = render("{{v}}", &obj([("v", text.as_str().into())]));
        prop_assert!(!rendered.contains(['<', '>', '"', '\'']));
    }
}
