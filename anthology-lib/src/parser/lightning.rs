//! Boundary adapter: LightningCSS stylesheet text into the owned rule model.
//!
//! The core never sees host- or parser-specific shapes; everything is
//! normalized here into `RuleSource` and the resolver works on that alone.

use lightningcss::error::PrinterError;
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::{style::StyleRule as LightningStyleRule, CssRule};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use lightningcss::traits::ToCss;

use crate::error::{AnthologyError, Result};
use crate::style::sheet::{ContainerRule, Declaration, Rule, RuleSource, StyleRule};

/// Parse raw CSS text into a fully-owned rule source, in document order.
///
/// Style rules map to `Rule::Style`; `@media` blocks map to one
/// `Rule::Container` each, keeping their style children only (a single
/// nesting level, matching what the resolver traverses). Other at-rules
/// carry nothing the client ever queries and are skipped.
pub fn parse_rule_source(css_text: &str) -> Result<RuleSource> {
    let sheet = LightningStyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e| AnthologyError::Parse(e.kind.to_string()))?;

    let mut rules = Vec::new();
    for rule in &sheet.rules.0 {
        match rule {
            CssRule::Style(style_rule) => {
                rules.push(Rule::Style(convert_style_rule(style_rule)?));
            }
            CssRule::Media(media_rule) => {
                let condition_text = media_rule
                    .query
                    .to_css_string(PrinterOptions::default())
                    .map_err(printer_error)?;

                let mut children = Vec::new();
                for inner_rule in &media_rule.rules.0 {
                    if let CssRule::Style(style_rule) = inner_rule {
                        children.push(Rule::Style(convert_style_rule(style_rule)?));
                    }
                }

                rules.push(Rule::Container(ContainerRule {
                    condition_text,
                    children,
                }));
            }
            _ => {}
        }
    }

    log::debug!("normalized {} top-level rules", rules.len());
    Ok(RuleSource::new(rules))
}

/// Print a single style rule's selectors and declarations back to owned
/// strings. Normal declarations come before `!important` ones, preserving
/// each group's source order.
fn convert_style_rule(style_rule: &LightningStyleRule<'_>) -> Result<StyleRule> {
    let mut selectors = Vec::new();
    for selector in &style_rule.selectors.0 {
        selectors.push(
            selector
                .to_css_string(PrinterOptions::default())
                .map_err(printer_error)?,
        );
    }

    let block = &style_rule.declarations;
    let mut declarations = Vec::new();
    for property in block.declarations.iter().chain(&block.important_declarations) {
        declarations.push(Declaration {
            property: property.property_id().name().to_string(),
            value: property
                .value_to_css_string(PrinterOptions::default())
                .map_err(printer_error)?,
        });
    }

    Ok(StyleRule::new(selectors.join(", "), declarations))
}

fn printer_error(e: PrinterError) -> AnthologyError {
    AnthologyError::Parse(e.to_string())
}
