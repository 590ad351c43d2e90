//! Finalized rule set types and robots.txt rendering
//!
//! The accumulator works with plain lists internally; the types here are the
//! public, collapsed shape: any list-valued field with exactly one element is
//! stored as that scalar, and empty lists are omitted entirely.

use std::fmt::Write;

/// A string field that is either a single value or an ordered list.
///
/// Robots metadata collapses singleton lists to scalars (a group with one
/// `User-agent` line carries a scalar agent, one with several carries a
/// list). Ordering of list entries is preserve-as-encountered and must not
/// be changed: downstream longest-match interpretation depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Collapses a list into the scalar/list union.
    ///
    /// Returns `None` for an empty list (the field is absent, not empty),
    /// `One` for a singleton, and `Many` otherwise.
    pub fn from_list(mut items: Vec<String>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => Some(OneOrMany::One(items.remove(0))),
            _ => Some(OneOrMany::Many(items)),
        }
    }

    /// Iterates the contained values in order, scalar or list alike.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
        .map(String::as_str)
    }

    /// Number of contained values (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One finalized crawler-policy group: one or more user agents sharing a
/// block of allow/disallow paths and an optional crawl delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub user_agent: OneOrMany,
    pub allow: Option<OneOrMany>,
    pub disallow: Option<OneOrMany>,
    pub crawl_delay: Option<f64>,
}

impl Rule {
    /// The synthetic wildcard rule: allow everything, no special policy.
    pub fn allow_all() -> Self {
        Rule {
            user_agent: OneOrMany::One("*".to_string()),
            allow: None,
            disallow: None,
            crawl_delay: None,
        }
    }
}

/// The complete structured output of parsing a robots.txt document.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    /// Ordered rule groups; never empty (defaults to a single wildcard rule)
    pub rules: Vec<Rule>,
    /// Document-level sitemap references, in encounter order
    pub sitemap: Option<OneOrMany>,
    /// Document-level host directive; first occurrence wins
    pub host: Option<String>,
}

impl RuleSet {
    /// The default rule set used for empty or absent robots content:
    /// a single wildcard-allow-all rule, no sitemap, no host.
    pub fn allow_all() -> Self {
        RuleSet {
            rules: vec![Rule::allow_all()],
            sitemap: None,
            host: None,
        }
    }

    /// Builds a rule set from finalized accumulator output, substituting the
    /// allow-all default when zero groups were produced.
    pub fn from_parts(
        rules: Vec<Rule>,
        sitemaps: Vec<String>,
        host: Option<String>,
    ) -> Self {
        let rules = if rules.is_empty() {
            vec![Rule::allow_all()]
        } else {
            rules
        };
        RuleSet {
            rules,
            sitemap: OneOrMany::from_list(sitemaps),
            host,
        }
    }

    /// Renders the rule set back to robots.txt text.
    ///
    /// One directive per line, groups separated by blank lines, document-level
    /// `Sitemap:` and `Host:` lines last. This is the response body served
    /// for `/robots.txt`.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for agent in rule.user_agent.iter() {
                let _ = writeln!(out, "User-agent: {}", agent);
            }
            if let Some(allow) = &rule.allow {
                for path in allow.iter() {
                    let _ = writeln!(out, "Allow: {}", path);
                }
            }
            if let Some(disallow) = &rule.disallow {
                for path in disallow.iter() {
                    let _ = writeln!(out, "Disallow: {}", path);
                }
            }
            if let Some(delay) = rule.crawl_delay {
                let _ = writeln!(out, "Crawl-delay: {}", delay);
            }
        }

        if let Some(sitemap) = &self.sitemap {
            out.push('\n');
            for url in sitemap.iter() {
                let _ = writeln!(out, "Sitemap: {}", url);
            }
        }
        if let Some(host) = &self.host {
            if self.sitemap.is_none() {
                out.push('\n');
            }
            let _ = writeln!(out, "Host: {}", host);
        }

        out
    }
}
