//! Client for stylesheets produced by the Anthology generator.
//!
//! The generator smuggles its configuration into the stylesheet as the
//! `content` of a sentinel rule. This crate decodes that configuration and
//! resolves semantic queries ("background, red, important, medium
//! breakpoint") back to the concrete rule the generator emitted for that
//! combination, including rules nested inside media-query containers.

pub mod client;
pub mod error;
pub mod metadata;
pub mod parser;
pub mod style;

pub use client::{AnthologyClient, AnthologyRule};
pub use error::{AnthologyError, Result};
pub use metadata::{compatible_sources, Config, METADATA_SELECTOR};
pub use parser::lightning::parse_rule_source;
pub use style::selector::{BuiltSelector, ExtractOptions};
pub use style::sheet::{ContainerRule, Declaration, Rule, RuleSource, StyleRule};
