// src/style/sheet.rs (the fully-owned, host-independent rule model)
use std::fmt;

/// A fully-owned rule source: the ordered top-level rule list of one
/// stylesheet, normalized from whatever host representation existed.
///
/// `rules` is `None` when the host sheet exposed no enumerable rule list
/// at all (the cross-origin case); decoding such a source fails with
/// `SourceUnavailable` rather than pretending the sheet was empty.
#[derive(Debug, Clone)]
pub struct RuleSource {
    pub rules: Option<Vec<Rule>>,
}

impl RuleSource {
    /// A source wrapping an enumerable rule list.
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSource { rules: Some(rules) }
    }

    /// A source whose host exposed no rule list.
    pub fn unavailable() -> Self {
        RuleSource { rules: None }
    }
}

/// A rule in document order. Only one nesting level is ever traversed:
/// containers hold style rules, never further containers of interest.
#[derive(Debug, Clone)]
pub enum Rule {
    Style(StyleRule),
    Container(ContainerRule),
}

impl Rule {
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            Rule::Style(style) => Some(style),
            Rule::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerRule> {
        match self {
            Rule::Style(_) => None,
            Rule::Container(container) => Some(container),
        }
    }
}

/// A plain style rule: selector text plus its declarations in source order.
#[derive(Debug, Clone)]
pub struct StyleRule {
    /// e.g. `.bg\:red`, `-anthology-metadata::before`
    pub selector_text: String,
    /// Each declaration is property => value, e.g. "background" => "red".
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(selector_text: String, declarations: Vec<Declaration>) -> Self {
        StyleRule {
            selector_text,
            declarations,
        }
    }

    /// The first declared property/value pair, if any.
    pub fn first_declaration(&self) -> Option<&Declaration> {
        self.declarations.first()
    }
}

/// A condition-gated rule group, e.g. an `@media` block.
#[derive(Debug, Clone)]
pub struct ContainerRule {
    /// e.g. "(min-width: 768px)"
    pub condition_text: String,
    pub children: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selector: {}", self.selector_text)?;
        for decl in &self.declarations {
            writeln!(f, "  {}: {}", decl.property, decl.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for ContainerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Condition: {}", self.condition_text)?;
        for child in &self.children {
            if let Rule::Style(style) = child {
                write!(f, "  {}", style)?;
            }
        }
        Ok(())
    }
}
