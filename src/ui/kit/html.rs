/// Escapes text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Joins class names, skipping empty ones.
pub fn classes<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().filter(|n| !n.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<img src="x" onerror='a&b'>"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;a&amp;b&#39;&gt;"
        );
        assert_eq!(escape("data:image/png;base64,AA+/=="), "data:image/png;base64,AA+/==");
    }

    #[test]
    fn classes_skip_empty_names() {
        assert_eq!(classes(["btn", "", "btn-primary"]), "btn btn-primary");
    }
}
