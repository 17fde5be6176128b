//! Markup preparation before injection

use crate::config::InjectionPolicy;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SCRIPT_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid script element regex")
});

static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script\b[^>]*>").expect("valid script tag regex"));

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#)
        .expect("valid event handler regex")
});

static SCRIPT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(href|src|action)\s*=\s*(?:"\s*javascript:[^"]*"|'\s*javascript:[^']*')"#)
        .expect("valid script url regex")
});

/// Apply the injection policy to fetched markup
pub fn prepare_markup(markup: &str, policy: InjectionPolicy) -> Cow<'_, str> {
    match policy {
        InjectionPolicy::Trusted => Cow::Borrowed(markup),
        InjectionPolicy::StripScripts => Cow::Owned(strip_scripts(markup)),
    }
}

/// Remove script elements, stray script tags, inline event handlers and
/// `javascript:` URLs. Everything else is left untouched.
pub fn strip_scripts(markup: &str) -> String {
    let without_elements = SCRIPT_ELEMENT.replace_all(markup, "");
    let without_tags = SCRIPT_TAG.replace_all(&without_elements, "");
    let without_handlers = EVENT_HANDLER.replace_all(&without_tags, "");
    SCRIPT_URL
        .replace_all(&without_handlers, r##"${1}="#""##)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_is_verbatim() {
        let markup = "<h1 onclick=\"x()\">Hi</h1><script>alert(1)</script>";
        assert!(matches!(
            prepare_markup(markup, InjectionPolicy::Trusted),
            Cow::Borrowed(m) if m == markup
        ));
    }

    #[test]
    fn test_strips_script_elements() {
        let markup = "<p>a</p><SCRIPT type=\"module\">\nimport x from 'y';\n</script ><p>b</p>";
        assert_eq!(strip_scripts(markup), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_strips_unclosed_script_tag() {
        assert_eq!(strip_scripts("<p>a</p><script src=\"/x.js\">"), "<p>a</p>");
    }

    #[test]
    fn test_strips_event_handlers() {
        assert_eq!(
            strip_scripts(r#"<img src="/a.png" onerror="steal()"><button onClick='go()' class="b">Go</button>"#),
            r#"<img src="/a.png"><button class="b">Go</button>"#
        );
    }

    #[test]
    fn test_neutralizes_javascript_urls() {
        assert_eq!(
            strip_scripts(r#"<a href="javascript:void(0)">x</a><a href="/about">y</a>"#),
            r##"<a href="#">x</a><a href="/about">y</a>"##
        );
    }

    #[test]
    fn test_binding_directives_survive() {
        let markup = r#"<nav v-scope="allPagesComponent()"><a v-for="p in pages" :href="p.url">{{ p.title }}</a></nav>"#;
        assert_eq!(strip_scripts(markup), markup);
    }
}
