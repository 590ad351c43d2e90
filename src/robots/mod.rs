//! Robots.txt directive parser and re-serialization model
//!
//! This module is the core of Crawlgate: a small text-protocol state machine
//! that ingests a raw robots.txt-formatted document (fetched from a remote
//! source, contents untrusted) and produces a structured, semantically
//! faithful rule set suitable for direct re-emission as robots.txt.
//!
//! The pipeline is tokenizer, group accumulator, rule set builder:
//! - `tokenizer` splits raw text into trimmed `key: value` directives
//! - `group` folds the directive stream into ordered user-agent groups
//! - `rule_set` finalizes groups into the public [`RuleSet`] shape
//!
//! Parsing is deliberately permissive: malformed lines, unknown directive
//! keys, and unparseable crawl-delay values are silently dropped, never
//! raised as errors. Robots.txt producers in the wild are frequently
//! non-conformant, so strict validation would reject documents that every
//! major crawler accepts.

mod group;
mod rule_set;
mod tokenizer;

pub use rule_set::{OneOrMany, Rule, RuleSet};
pub use tokenizer::{tokenize, Directive};

use group::GroupAccumulator;

/// Parses a raw robots.txt document into a structured [`RuleSet`].
///
/// This is a total function: it never fails, regardless of input. Empty or
/// unrecognizable input produces the allow-all default rule set.
///
/// # Example
///
/// ```
/// use crawlgate::robots::{parse_robots_txt, OneOrMany};
///
/// let rules = parse_robots_txt("User-agent: *\nDisallow: /admin");
/// assert_eq!(rules.rules.len(), 1);
/// assert_eq!(rules.rules[0].user_agent, OneOrMany::One("*".to_string()));
/// ```
pub fn parse_robots_txt(raw: &str) -> RuleSet {
    let mut accumulator = GroupAccumulator::new();
    for directive in tokenize(raw) {
        accumulator.apply(&directive);
    }
    accumulator.finish()
}
