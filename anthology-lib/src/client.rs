//! Client construction, rule resolution, and result extraction.

use std::collections::HashMap;

use crate::error::{AnthologyError, Result};
use crate::metadata::{self, Config};
use crate::style::selector::{self, BuiltSelector, ExtractOptions};
use crate::style::sheet::{Declaration, Rule, RuleSource, StyleRule};

/// A resolved query: both selector forms, the winning property/value pair,
/// and the matched rule itself.
#[derive(Debug, Clone)]
pub struct AnthologyRule {
    pub shorthand: String,
    pub adjective: String,
    pub options: ExtractOptions,
    pub selector: String,
    pub selector_escaped: String,
    pub property: String,
    pub value: String,
    pub rule: StyleRule,
}

/// Client over one generated stylesheet.
///
/// Construction decodes the metadata sentinel eagerly; the config and the
/// top-level rule list are cached on the instance and never mutated, so
/// every extraction is a fresh scan over immutable data.
#[derive(Debug, Clone)]
pub struct AnthologyClient {
    config: Config,
    rules: Vec<Rule>,
}

impl AnthologyClient {
    /// Build a client from one rule source. Fails immediately when the
    /// source exposes no rules or carries no metadata.
    pub fn new(source: RuleSource) -> Result<Self> {
        let (config, rules) = metadata::decode(source)?;
        Ok(AnthologyClient { config, rules })
    }

    /// Build a client from the first candidate source that carries the
    /// metadata sentinel.
    pub fn discover(candidates: Vec<RuleSource>) -> Result<Self> {
        let source = candidates
            .into_iter()
            .find(metadata::has_metadata)
            .ok_or(AnthologyError::SourceUnavailable)?;
        Self::new(source)
    }

    /// Breakpoints configured for this instance of the generator.
    pub fn breakpoints(&self) -> &HashMap<String, String> {
        &self.config.breakpoints
    }

    /// The full decoded generator configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a query to the rule the generator emitted for it.
    ///
    /// With a breakpoint modifier, the first container whose condition
    /// contains the configured fragment is searched with the breakpoint
    /// segment suppressed, and it wins or the query fails: there is no
    /// fallback to later containers once one is eligible. Without a
    /// breakpoint (or when no container is eligible) the top-level style
    /// rules are scanned with the full selector.
    pub fn extract(
        &self,
        shorthand: &str,
        adjective: &str,
        options: ExtractOptions,
    ) -> Result<AnthologyRule> {
        if let Some(name) = options.breakpoint.as_deref() {
            // An unmapped name yields no fragment, so no container is
            // ever eligible for it.
            let eligible = self.config.breakpoints.get(name).and_then(|fragment| {
                self.rules.iter().find_map(|rule| match rule {
                    Rule::Container(container)
                        if container.condition_text.contains(fragment.as_str()) =>
                    {
                        Some(container)
                    }
                    _ => None,
                })
            });

            if let Some(container) = eligible {
                log::debug!(
                    "searching container {:?} for breakpoint {:?}",
                    container.condition_text,
                    name
                );
                let built = selector::build(shorthand, adjective, &options, &self.config, true);
                return match find_style_rule(container.children.iter(), &built.escaped) {
                    Some(rule) => Ok(assemble(shorthand, adjective, options, built, rule)),
                    None => Err(AnthologyError::RuleNotFound {
                        selector: built.escaped,
                    }),
                };
            }
        }

        let built = selector::build(shorthand, adjective, &options, &self.config, false);
        match find_style_rule(self.rules.iter(), &built.escaped) {
            Some(rule) => Ok(assemble(shorthand, adjective, options, built, rule)),
            None => Err(AnthologyError::RuleNotFound {
                selector: built.escaped,
            }),
        }
    }

    /// Shortcut: the matched rule's declarations.
    pub fn extract_style(
        &self,
        shorthand: &str,
        adjective: &str,
        options: ExtractOptions,
    ) -> Result<Vec<Declaration>> {
        Ok(self.extract(shorthand, adjective, options)?.rule.declarations)
    }

    /// Shortcut: the unescaped selector.
    pub fn extract_selector(
        &self,
        shorthand: &str,
        adjective: &str,
        options: ExtractOptions,
    ) -> Result<String> {
        Ok(self.extract(shorthand, adjective, options)?.selector)
    }

    /// Shortcut: the escaped selector.
    pub fn extract_selector_escaped(
        &self,
        shorthand: &str,
        adjective: &str,
        options: ExtractOptions,
    ) -> Result<String> {
        Ok(self.extract(shorthand, adjective, options)?.selector_escaped)
    }

    /// Shortcut: the first declared property name.
    pub fn extract_property(
        &self,
        shorthand: &str,
        adjective: &str,
        options: ExtractOptions,
    ) -> Result<String> {
        Ok(self.extract(shorthand, adjective, options)?.property)
    }

    /// Shortcut: the first declared property's value.
    pub fn extract_value(
        &self,
        shorthand: &str,
        adjective: &str,
        options: ExtractOptions,
    ) -> Result<String> {
        Ok(self.extract(shorthand, adjective, options)?.value)
    }
}

/// First style rule whose selector text contains the escaped selector.
/// Containment, not equality: the generator may append pseudo-class
/// suffixes after the semantic part, so a built selector also matches
/// rules it is a textual prefix of.
fn find_style_rule<'a>(
    mut rules: impl Iterator<Item = &'a Rule>,
    escaped: &str,
) -> Option<&'a StyleRule> {
    rules.find_map(|rule| match rule {
        Rule::Style(style) if style.selector_text.contains(escaped) => Some(style),
        _ => None,
    })
}

fn assemble(
    shorthand: &str,
    adjective: &str,
    options: ExtractOptions,
    built: BuiltSelector,
    rule: &StyleRule,
) -> AnthologyRule {
    // Generated rules always carry at least one declaration; an empty
    // block projects as empty property/value rather than an error.
    let (property, value) = rule
        .first_declaration()
        .map(|decl| (decl.property.clone(), decl.value.clone()))
        .unwrap_or_default();

    AnthologyRule {
        shorthand: shorthand.to_string(),
        adjective: adjective.to_string(),
        options,
        selector: built.selector,
        selector_escaped: built.escaped,
        property,
        value,
        rule: rule.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::METADATA_SELECTOR;
    use crate::style::sheet::ContainerRule;

    const SENTINEL_CONTENT: &str = r#""{\"config\":{\"separator\":\"-\",\"important-tag\":\"i\",\"theme-tag\":\"t-\",\"responsive-tag\":\"r-\",\"breakpoints\":{\"medium\":\"(min-width: 768px)\",\"large\":\"(min-width: 1024px)\"}}}""#;

    fn sentinel_rule() -> Rule {
        style_rule(METADATA_SELECTOR, "content", SENTINEL_CONTENT)
    }

    fn style_rule(selector: &str, property: &str, value: &str) -> Rule {
        Rule::Style(StyleRule::new(
            selector.to_string(),
            vec![Declaration {
                property: property.to_string(),
                value: value.to_string(),
            }],
        ))
    }

    fn container(condition: &str, children: Vec<Rule>) -> Rule {
        Rule::Container(ContainerRule {
            condition_text: condition.to_string(),
            children,
        })
    }

    fn client(rules: Vec<Rule>) -> AnthologyClient {
        let mut all = vec![sentinel_rule()];
        all.extend(rules);
        AnthologyClient::new(RuleSource::new(all)).unwrap()
    }

    fn breakpoint(name: &str) -> ExtractOptions {
        ExtractOptions {
            breakpoint: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_flat_extraction_returns_first_declaration() {
        let client = client(vec![style_rule(".bg-red", "background", "red")]);
        let rule = client
            .extract("bg", "red", ExtractOptions::default())
            .unwrap();
        assert_eq!(rule.selector, "bg-red");
        assert_eq!(rule.selector_escaped, "bg-red");
        assert_eq!(rule.property, "background");
        assert_eq!(rule.value, "red");
        assert_eq!(rule.rule.selector_text, ".bg-red");
    }

    #[test]
    fn test_breakpoint_prefers_nested_rule_over_top_level() {
        let client = client(vec![
            style_rule(".bg-red", "background", "blue"),
            container(
                "(min-width: 768px)",
                vec![style_rule(".bg-red", "background", "red")],
            ),
        ]);
        let rule = client.extract("bg", "red", breakpoint("medium")).unwrap();
        assert_eq!(rule.value, "red");
        // The condition encodes the breakpoint, so the selector drops it.
        assert_eq!(rule.selector, "bg-red");
    }

    #[test]
    fn test_first_eligible_container_wins_or_fails() {
        let client = client(vec![
            container(
                "(min-width: 768px)",
                vec![style_rule(".other", "color", "green")],
            ),
            container(
                "(min-width: 768px)",
                vec![style_rule(".bg-red", "background", "red")],
            ),
            style_rule(".bg-red-r-medium", "background", "red"),
        ]);
        let err = client.extract("bg", "red", breakpoint("medium")).unwrap_err();
        assert!(matches!(err, AnthologyError::RuleNotFound { .. }));
    }

    #[test]
    fn test_no_eligible_container_falls_through_to_flat_scan() {
        // Containers exist but none matches the "large" fragment, so the
        // full selector (breakpoint segment included) scans the top level.
        let client = client(vec![
            container(
                "(min-width: 768px)",
                vec![style_rule(".bg-red", "background", "red")],
            ),
            style_rule(".bg-red-r-large", "background", "pink"),
        ]);
        let rule = client.extract("bg", "red", breakpoint("large")).unwrap();
        assert_eq!(rule.selector, "bg-red-r-large");
        assert_eq!(rule.value, "pink");
    }

    #[test]
    fn test_unmapped_breakpoint_name_never_matches() {
        let client = client(vec![
            container(
                "(min-width: 768px)",
                vec![style_rule(".bg-red", "background", "red")],
            ),
            style_rule(".bg-red", "background", "red"),
        ]);
        let err = client.extract("bg", "red", breakpoint("huge")).unwrap_err();
        assert!(matches!(
            err,
            AnthologyError::RuleNotFound { ref selector } if selector == "bg-red-r-huge"
        ));
    }

    #[test]
    fn test_containment_matches_textual_prefixes() {
        // Preserved quirk: a selector without a pseudo segment matches a
        // rule that carries one, because matching is substring based.
        let client = client(vec![style_rule(".bg-red-hover:hover", "background", "red")]);
        let rule = client
            .extract("bg", "red", ExtractOptions::default())
            .unwrap();
        assert_eq!(rule.rule.selector_text, ".bg-red-hover:hover");
    }

    #[test]
    fn test_theme_and_important_segments() {
        let client = client(vec![
            style_rule(".bg-red", "background", "red"),
            style_rule(".bg-red-i", "background", "red"),
            style_rule(".bg-red-t-dark", "background", "maroon"),
        ]);

        let important = ExtractOptions {
            important: true,
            ..Default::default()
        };
        assert_eq!(
            client.extract("bg", "red", important).unwrap().selector,
            "bg-red-i"
        );

        let themed = ExtractOptions {
            theme: Some("dark".to_string()),
            ..Default::default()
        };
        let rule = client.extract("bg", "red", themed).unwrap();
        assert_eq!(rule.selector, "bg-red-t-dark");
        assert_eq!(rule.value, "maroon");
    }

    #[test]
    fn test_shortcuts_project_single_fields() {
        let client = client(vec![style_rule(".bg-red", "background", "red")]);
        let options = ExtractOptions::default;

        assert_eq!(
            client.extract_selector("bg", "red", options()).unwrap(),
            "bg-red"
        );
        assert_eq!(
            client
                .extract_selector_escaped("bg", "red", options())
                .unwrap(),
            "bg-red"
        );
        assert_eq!(
            client.extract_property("bg", "red", options()).unwrap(),
            "background"
        );
        assert_eq!(client.extract_value("bg", "red", options()).unwrap(), "red");
        assert_eq!(
            client.extract_style("bg", "red", options()).unwrap(),
            vec![Declaration {
                property: "background".to_string(),
                value: "red".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_declaration_block_projects_empty_fields() {
        let client = client(vec![Rule::Style(StyleRule::new(
            ".bg-red".to_string(),
            vec![],
        ))]);
        let rule = client
            .extract("bg", "red", ExtractOptions::default())
            .unwrap();
        assert_eq!(rule.property, "");
        assert_eq!(rule.value, "");
    }

    #[test]
    fn test_discover_picks_first_compatible_candidate() {
        let plain = RuleSource::new(vec![style_rule(".unrelated", "color", "green")]);
        let tagged = RuleSource::new(vec![
            sentinel_rule(),
            style_rule(".bg-red", "background", "red"),
        ]);

        let client = AnthologyClient::discover(vec![plain, tagged]).unwrap();
        assert_eq!(
            client
                .extract_value("bg", "red", ExtractOptions::default())
                .unwrap(),
            "red"
        );

        let err = AnthologyClient::discover(vec![]).unwrap_err();
        assert!(matches!(err, AnthologyError::SourceUnavailable));
    }

    #[test]
    fn test_breakpoints_accessor_exposes_config_map() {
        let client = client(vec![]);
        assert_eq!(
            client.breakpoints().get("large").map(String::as_str),
            Some("(min-width: 1024px)")
        );
    }
}
