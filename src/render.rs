//! Placeholder rendering for the built-in pages.

static TEMPLATES: &[(&str, &str)] = &[
    ("login", include_str!("../tpls/login.html")),
    ("signup", include_str!("../tpls/signup.html")),
    ("home", include_str!("../tpls/home.html")),
];

/// Renders the named template, substituting `{{ name }}` placeholders from
/// `data`.
///
/// A placeholder with no matching entry renders as the empty string, and an
/// unknown template name renders as empty text.
pub fn render(name: &str, data: &[(&str, &str)]) -> String {
    let Some((_, tpl)) = TEMPLATES.iter().find(|(n, _)| *n == name) else {
        return String::new();
    };
    substitute(tpl, data)
}

fn substitute(tpl: &str, data: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(tpl.len());
    let mut rest = tpl;
    while let Some(start) = rest.find("{{") {
        // An opening brace with no closing pair stays literal.
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        out.push_str(&rest[..start]);
        let placeholder = rest[start + 2..start + 2 + len].trim();
        if let Some((_, value)) = data.iter().find(|(k, _)| *k == placeholder) {
            out.push_str(value);
        }
        rest = &rest[start + 2 + len + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_placeholders() {
        let out = substitute("hello {{ name }}!", &[("name", "alice")]);
        assert_eq!(out, "hello alice!");
    }

    #[test]
    fn unknown_placeholder_renders_empty() {
        let out = substitute("[{{ missing }}]", &[]);
        assert_eq!(out, "[]");
    }

    #[test]
    fn unclosed_placeholder_stays_literal() {
        let out = substitute("a {{ b", &[("b", "c")]);
        assert_eq!(out, "a {{ b");
    }

    #[test]
    fn unknown_template_is_empty_text() {
        assert_eq!(render("nope", &[]), "");
    }

    #[test]
    fn known_templates_render() {
        let out = render("login", &[("username", "alice"), ("msg", "nope")]);
        assert!(out.contains("alice"));
        assert!(out.contains("nope"));
        assert!(!out.contains("{{"));
    }
}
