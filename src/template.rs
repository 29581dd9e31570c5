// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! HTML shell of the reference page.
//!
//! Values are interpolated as-is. Only the serialized configuration goes
//! through [`escape_quotes`] before it reaches the template.

/// Replaces every double quote with `&quot;` so the value fits inside a
/// double-quoted HTML attribute.
///
/// No other character is touched. `<`, `>`, `&` and `'` pass through
/// unchanged.
///
/// # Example
///
/// ```
/// use scalar_reference::escape_quotes;
///
/// assert_eq!(escape_quotes(r#"{"theme":"moon"}"#), "{&quot;theme&quot;:&quot;moon&quot;}");
/// ```
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Interpolates the page values into the HTML shell.
pub(crate) fn render_page(
    title: &str,
    custom_css: &str,
    configuration: &str,
    content: &str,
    cdn: &str
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <title>{title}</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <style>{custom_css}</style>
  </head>
  <body>
    <script id="api-reference" type="application/json" data-configuration="{configuration}">{content}</script>
    <script src="{cdn}"></script>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{escape_quotes, render_page};

    proptest! {
        #[test]
        fn escaping_only_touches_quotes(input in "[ -%'-~\n]{0,64}") {
            let escaped = escape_quotes(&input);
            prop_assert!(!escaped.contains('"'));
            prop_assert_eq!(escaped.replace("&quot;", "\""), input.clone());
            let quotes = input.matches('"').count();
            prop_assert_eq!(escaped.len(), input.len() + quotes * 5);
        }
    }

    #[test]
    fn escape_leaves_markup_characters_alone() {
        assert_eq!(escape_quotes("<a href='x'>&</a>"), "<a href='x'>&</a>");
        assert_eq!(escape_quotes(r#""""#), "&quot;&quot;");
        assert_eq!(escape_quotes(""), "");
    }

    #[test]
    fn render_page_keeps_structural_order() {
        let html = render_page(
            "Title",
            "body { margin: 0; }",
            "{&quot;theme&quot;:&quot;moon&quot;}",
            "openapi: 3.1.0",
            "https://cdn.example.com/widget.js"
        );

        let positions: Vec<usize> = [
            "<!DOCTYPE html>",
            "<title>Title</title>",
            "<meta charset=\"utf-8\" />",
            "<meta name=\"viewport\"",
            "<style>body { margin: 0; }</style>",
            "<body>",
            "data-configuration=\"{&quot;theme&quot;:&quot;moon&quot;}\">openapi: 3.1.0</script>",
            "<script src=\"https://cdn.example.com/widget.js\"></script>"
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
