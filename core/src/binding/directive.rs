//! Minimal `v-scope` directive binder

use super::{Binder, Binding, MountedApp, ReactiveApp};
use crate::dom::MountPoint;
use crate::error::{BindingError, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SCOPE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*(?:\((.*)\))?$").expect("valid scope call regex")
});

const SCOPE_ATTRIBUTE: &str = "v-scope";

/// Elements whose content is raw text, never markup
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// A `v-scope` attribute on a start tag
struct ScopeAttribute<'a> {
    /// The attribute as written, e.g. `v-scope="name()"`
    directive: &'a str,
    expression: &'a str,
}

/// Collect the `v-scope` attributes of every start tag in document order.
///
/// Comments, text content and the bodies of raw text elements are skipped.
fn scope_attributes(markup: &str) -> Result<Vec<ScopeAttribute<'_>>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = markup[pos..].find('<') {
        let start = pos + offset;
        let rest = &markup[start..];

        if let Some(comment) = rest.strip_prefix("<!--") {
            pos = match comment.find("-->") {
                Some(end) => start + 4 + end + 3,
                None => markup.len(),
            };
            continue;
        }

        if !rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            pos = start + 1;
            continue;
        }

        let (tag, end) = scan_start_tag(markup, start + 1, &mut found)?;
        pos = end;

        if RAW_TEXT_ELEMENTS
            .iter()
            .any(|raw| tag.eq_ignore_ascii_case(raw))
        {
            let closing = format!("</{}", tag.to_ascii_lowercase());
            pos = match markup[pos..].to_ascii_lowercase().find(&closing) {
                Some(offset) => pos + offset,
                None => markup.len(),
            };
        }
    }

    Ok(found)
}

/// Scan one start tag whose name begins at `pos`, collecting its `v-scope`
/// attribute. Returns the tag name and the position just past the tag.
fn scan_start_tag<'a>(
    markup: &'a str,
    pos: usize,
    found: &mut Vec<ScopeAttribute<'a>>,
) -> Result<(&'a str, usize)> {
    let name_end = scan_until(markup, pos, |c| c.is_whitespace() || c == '>' || c == '/');
    let tag = &markup[pos..name_end];
    let mut pos = name_end;

    loop {
        pos = scan_until(markup, pos, |c| !c.is_whitespace());
        let rest = &markup[pos..];
        if rest.is_empty() {
            return Ok((tag, pos));
        }
        if rest.starts_with('>') {
            return Ok((tag, pos + 1));
        }
        if rest.starts_with('/') {
            pos += 1;
            continue;
        }

        let attr_start = pos;
        let attr_end = scan_until(markup, pos, |c| {
            c.is_whitespace() || c == '=' || c == '>' || c == '/'
        });
        let is_scope = markup[attr_start..attr_end].eq_ignore_ascii_case(SCOPE_ATTRIBUTE);
        pos = scan_until(markup, attr_end, |c| !c.is_whitespace());

        // Attribute without a value
        if !markup[pos..].starts_with('=') {
            continue;
        }

        pos = scan_until(markup, pos + 1, |c| !c.is_whitespace());
        let value_rest = &markup[pos..];
        let (value, value_end) = match value_rest.chars().next() {
            Some(quote @ ('"' | '\'')) => match value_rest[1..].find(quote) {
                Some(len) => (&value_rest[1..1 + len], pos + len + 2),
                None if is_scope => {
                    return Err(BindingError::Malformed {
                        directive: markup[attr_start..].chars().take(40).collect(),
                        message: "unterminated attribute value".to_string(),
                    }
                    .into());
                }
                None => return Ok((tag, markup.len())),
            },
            _ => {
                let end = scan_until(markup, pos, |c| c.is_whitespace() || c == '>');
                (&markup[pos..end], end)
            }
        };

        if is_scope {
            found.push(ScopeAttribute {
                directive: &markup[attr_start..value_end],
                expression: value.trim(),
            });
        }
        pos = value_end;
    }
}

/// Position of the first char at or after `pos` matching `stop`, or the end
fn scan_until(markup: &str, pos: usize, stop: impl Fn(char) -> bool) -> usize {
    markup[pos..]
        .find(stop)
        .map_or(markup.len(), |offset| pos + offset)
}

/// Binder that finds `v-scope="component()"` attributes on start tags and
/// gives each one freshly created state from the named component.
///
/// An empty `v-scope=""` opens an anonymous scope and binds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectiveBinder;

impl DirectiveBinder {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, directive: &str, expression: &str, app: &ReactiveApp) -> Result<Binding> {
        let captures = SCOPE_CALL
            .captures(expression)
            .ok_or_else(|| BindingError::Malformed {
                directive: directive.to_string(),
                message: "expected a component name or a call like name()".to_string(),
            })?;

        let name = &captures[1];
        if let Some(args) = captures.get(2) {
            if !args.as_str().trim().is_empty() {
                return Err(BindingError::Malformed {
                    directive: directive.to_string(),
                    message: format!("component '{}' takes no arguments", name),
                }
                .into());
            }
        }

        let state = app
            .create_state(name)
            .ok_or_else(|| BindingError::UnknownComponent {
                name: name.to_string(),
                directive: directive.to_string(),
            })??;

        Ok(Binding {
            component: name.to_string(),
            directive: directive.to_string(),
            state,
        })
    }
}

impl Binder for DirectiveBinder {
    fn mount(&self, root: &dyn MountPoint, app: &ReactiveApp) -> Result<MountedApp> {
        let markup = root.inner_html()?;

        let mut bindings = Vec::new();
        for attribute in scope_attributes(&markup)? {
            if attribute.expression.is_empty() {
                continue;
            }

            let binding = self.resolve(attribute.directive, attribute.expression, app)?;
            debug!("Bound {} on #{}", binding.component, root.id());
            bindings.push(binding);
        }

        Ok(MountedApp::new(root.id(), bindings))
    }

    fn binder_name(&self) -> &str {
        "v-scope"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::error::Error;
    use crate::viewmodel::StaticViewModels;
    use std::sync::Arc;

    fn mount(markup: &str) -> Result<MountedApp> {
        let document = Document::with_container("content");
        let root = document.mount_point("content").unwrap();
        root.set_inner_html(markup).unwrap();

        let app = ReactiveApp::from_view_models(Arc::new(StaticViewModels));
        app.mount(&root, &DirectiveBinder::new())
    }

    #[test]
    fn test_plain_markup_mounts_without_bindings() {
        let mounted = mount("<h1>Welcome</h1>").unwrap();
        assert_eq!(mounted.mount_point, "content");
        assert!(mounted.bindings.is_empty());
    }

    #[test]
    fn test_binds_both_components_in_document_order() {
        let mounted = mount(
            r#"<nav v-scope="allPagesComponent()"><a v-for="p in pages">{{ p.title }}</a></nav>
               <main v-scope='singlePageComponent'><h1>{{ pageTitle }}</h1></main>"#,
        )
        .unwrap();

        assert_eq!(
            mounted.components(),
            vec!["allPagesComponent", "singlePageComponent"]
        );
        assert_eq!(mounted.bindings[0].state["pages"][0]["url"], "/home");
        assert_eq!(mounted.bindings[1].state["pageTitle"], "Home");
    }

    #[test]
    fn test_each_scope_gets_its_own_state() {
        let mounted = mount(
            r#"<ul v-scope="allPagesComponent()"></ul><ol v-scope="allPagesComponent()"></ol>"#,
        )
        .unwrap();
        assert_eq!(mounted.bindings.len(), 2);
        assert_eq!(mounted.bindings[0].state, mounted.bindings[1].state);
    }

    #[test]
    fn test_empty_scope_is_anonymous() {
        let mounted = mount(r#"<div v-scope=""><span>static</span></div>"#).unwrap();
        assert!(mounted.bindings.is_empty());
    }

    #[test]
    fn test_unknown_component_fails() {
        let err = mount(r#"<div v-scope="commentsComponent()"></div>"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Binding(BindingError::UnknownComponent { ref name, .. }) if name == "commentsComponent"
        ));
    }

    #[test]
    fn test_arguments_are_rejected() {
        let err = mount(r#"<div v-scope="allPagesComponent(1)"></div>"#).unwrap_err();
        assert!(matches!(err, Error::Binding(BindingError::Malformed { .. })));
    }

    #[test]
    fn test_expression_must_be_a_call() {
        let err = mount(r#"<div v-scope="{ count: 0 }"></div>"#).unwrap_err();
        assert!(matches!(err, Error::Binding(BindingError::Malformed { .. })));
    }

    #[test]
    fn test_unterminated_directive_fails() {
        let err = mount(r#"<div v-scope="allPagesComponent()></div>"#).unwrap_err();
        assert!(matches!(err, Error::Binding(BindingError::Malformed { .. })));
    }

    #[test]
    fn test_prefixed_attribute_is_not_a_directive() {
        let mounted = mount(r#"<div data-v-scope="legacyWidget()">kept</div>"#).unwrap();
        assert!(mounted.bindings.is_empty());
    }

    #[test]
    fn test_directive_in_text_content_is_ignored() {
        let mounted =
            mount(r#"<pre>Use v-scope="myComponent()" on an element</pre>"#).unwrap();
        assert!(mounted.bindings.is_empty());
    }

    #[test]
    fn test_commented_out_directive_is_ignored() {
        let mounted = mount(
            r#"<!-- <div v-scope="oldNav()"> --><h1 v-scope="singlePageComponent()">Hi</h1>"#,
        )
        .unwrap();
        assert_eq!(mounted.components(), vec!["singlePageComponent"]);
    }

    #[test]
    fn test_script_body_is_ignored() {
        let mounted =
            mount(r#"<script>const t = '<div v-scope="inlineWidget()">';</script>"#).unwrap();
        assert!(mounted.bindings.is_empty());
    }

    #[test]
    fn test_directive_after_other_attributes() {
        let mounted = mount(
            r#"<a title="a > b" class=nav v-scope="allPagesComponent()" hidden>x</a>"#,
        )
        .unwrap();
        assert_eq!(mounted.components(), vec!["allPagesComponent"]);
        assert_eq!(
            mounted.bindings[0].directive,
            r#"v-scope="allPagesComponent()""#
        );
    }
}
