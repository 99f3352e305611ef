//! Decoding of the generator configuration smuggled into the stylesheet.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{AnthologyError, Result};
use crate::style::sheet::{Rule, RuleSource};

/// Selector of the sentinel rule that carries the generator configuration
/// as its `content` value.
pub const METADATA_SELECTOR: &str = "-anthology-metadata::before";

/// Configuration the generator used when emitting the stylesheet.
///
/// Decoded exactly once per client and never mutated afterwards. Keys are
/// the generator's kebab-case names.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub separator: String,
    #[serde(rename = "important-tag")]
    pub important_tag: String,
    #[serde(rename = "theme-tag")]
    pub theme_tag: String,
    #[serde(rename = "responsive-tag")]
    pub responsive_tag: String,
    /// Breakpoint name => media-condition fragment, e.g.
    /// "medium" => "(min-width: 768px)".
    pub breakpoints: HashMap<String, String>,
}

/// The blob nests the config under a `config` key.
#[derive(Debug, Deserialize)]
struct Metadata {
    config: Config,
}

/// Decode the configuration out of a rule source and hand back the
/// top-level rule list for the client to cache.
///
/// The `content` value is a JSON string whose content is itself a
/// JSON-encoded document, so it is decoded twice. The double decode is the
/// generator's encoding contract, not an artifact.
pub fn decode(source: RuleSource) -> Result<(Config, Vec<Rule>)> {
    let rules = source.rules.ok_or(AnthologyError::SourceUnavailable)?;

    // Sentinel lookup stays at the top level; containers are never entered.
    let sentinel = rules
        .iter()
        .find_map(|rule| match rule {
            Rule::Style(style) if style.selector_text == METADATA_SELECTOR => Some(style),
            _ => None,
        })
        .ok_or(AnthologyError::MetadataMissing)?;

    let content = sentinel
        .declarations
        .iter()
        .find(|decl| decl.property == "content")
        .map(|decl| decl.value.as_str())
        .ok_or(AnthologyError::MetadataMissing)?;

    let inner: String = serde_json::from_str(content)?;
    let metadata: Metadata = serde_json::from_str(&inner)?;

    log::debug!(
        "decoded anthology config: separator={:?}, {} breakpoints",
        metadata.config.separator,
        metadata.config.breakpoints.len()
    );

    Ok((metadata.config, rules))
}

/// True if the source exposes a top-level rule list containing the
/// metadata sentinel.
pub fn has_metadata(source: &RuleSource) -> bool {
    source.rules.as_deref().is_some_and(|rules| {
        rules.iter().any(|rule| {
            matches!(rule, Rule::Style(style) if style.selector_text == METADATA_SELECTOR)
        })
    })
}

/// Pure filter over candidate sources, keeping only those that carry the
/// sentinel rule. This replaces any implicit "all sheets in the host"
/// global: callers enumerate candidates, the client never does.
pub fn compatible_sources(sources: Vec<RuleSource>) -> Vec<RuleSource> {
    sources.into_iter().filter(has_metadata).collect()
}
