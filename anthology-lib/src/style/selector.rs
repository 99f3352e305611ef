//! Canonical selector composition from semantic tokens and modifiers.

use crate::metadata::Config;
use crate::style::escape::escape;

/// Optional modifiers for an extraction query. Absence means "no modifier".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub important: bool,
    pub theme: Option<String>,
    /// A breakpoint NAME; validity against `Config::breakpoints` is a
    /// resolver-time concern, never checked here.
    pub breakpoint: Option<String>,
    pub pseudo: Option<String>,
}

/// A composed selector in raw and escaped form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSelector {
    pub selector: String,
    pub escaped: String,
}

/// Compose the canonical selector for a query.
///
/// Segment order is fixed regardless of how options were set:
/// `shorthand SEP adjective [SEP important-tag] [SEP theme-tag+theme]
/// [SEP responsive-tag+breakpoint] [SEP pseudo]`.
///
/// `suppress_breakpoint` drops the breakpoint segment; the resolver sets
/// it when matching inside a condition-gated container, where the
/// condition itself encodes the breakpoint.
pub fn build(
    shorthand: &str,
    adjective: &str,
    options: &ExtractOptions,
    config: &Config,
    suppress_breakpoint: bool,
) -> BuiltSelector {
    let sep = config.separator.as_str();

    let mut selector = format!("{}{}{}", shorthand, sep, adjective);
    if options.important {
        selector.push_str(sep);
        selector.push_str(&config.important_tag);
    }
    if let Some(theme) = &options.theme {
        selector.push_str(sep);
        selector.push_str(&config.theme_tag);
        selector.push_str(theme);
    }
    if let Some(breakpoint) = &options.breakpoint {
        if !suppress_breakpoint {
            selector.push_str(sep);
            selector.push_str(&config.responsive_tag);
            selector.push_str(breakpoint);
        }
    }
    if let Some(pseudo) = &options.pseudo {
        selector.push_str(sep);
        selector.push_str(pseudo);
    }

    let escaped = escape(&selector);
    BuiltSelector { selector, escaped }
}
