//! Group accumulator state machine
//!
//! Folds the directive stream into an ordered sequence of user-agent groups.
//! A group boundary is only detectable retroactively: robots.txt allows
//! several consecutive `User-agent` lines to share one directive block, so a
//! new group starts when a `user-agent` directive appears *after* directives
//! were already attached to the current group. This lookahead-free streaming
//! rule reproduces that without buffering the whole document.

use crate::robots::rule_set::{OneOrMany, Rule, RuleSet};
use crate::robots::tokenizer::Directive;

/// The mutable, at-most-one-live accumulator for the group being built.
///
/// Non-empty only while at least one `user-agent` directive has been seen
/// since the last flush; directives accumulated without an agent are
/// discarded at flush time.
#[derive(Debug, Default)]
struct PendingGroup {
    agents: Vec<String>,
    allow: Vec<String>,
    disallow: Vec<String>,
    crawl_delay: Option<f64>,
}

impl PendingGroup {
    /// True once any non-agent directive has been attached to this group.
    fn has_directives(&self) -> bool {
        !self.allow.is_empty() || !self.disallow.is_empty() || self.crawl_delay.is_some()
    }
}

/// Streaming accumulator over the whole token stream.
///
/// Holds the single pending group plus the document-level `sitemap` and
/// `host` accumulators, which are not scoped to any group.
#[derive(Debug, Default)]
pub struct GroupAccumulator {
    pending: PendingGroup,
    rules: Vec<Rule>,
    sitemaps: Vec<String>,
    host: Option<String>,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one directive, in stream order.
    ///
    /// Unrecognized keys are ignored silently, keeping the parser forward
    /// compatible with directives it does not model.
    pub fn apply(&mut self, directive: &Directive) {
        match directive.key.as_str() {
            "user-agent" => {
                if self.pending.has_directives() && !self.pending.agents.is_empty() {
                    self.flush();
                }
                self.pending.agents.push(directive.value.clone());
            }
            "allow" => self.pending.allow.push(directive.value.clone()),
            "disallow" => self.pending.disallow.push(directive.value.clone()),
            "crawl-delay" => {
                // Unparseable values leave the field unset, not zeroed
                if let Ok(delay) = directive.value.parse::<f64>() {
                    if !delay.is_nan() {
                        self.pending.crawl_delay = Some(delay);
                    }
                }
            }
            "sitemap" => self.sitemaps.push(directive.value.clone()),
            "host" => {
                if self.host.is_none() {
                    self.host = Some(directive.value.clone());
                }
            }
            _ => {}
        }
    }

    /// Finalizes the pending group into an immutable [`Rule`] and resets the
    /// accumulator state.
    ///
    /// A group that never saw a `user-agent` directive is discarded: its
    /// accumulated allow/disallow/crawl-delay entries belong to no agent and
    /// are dropped with it.
    fn flush(&mut self) {
        let group = std::mem::take(&mut self.pending);
        let Some(user_agent) = OneOrMany::from_list(group.agents) else {
            return;
        };
        self.rules.push(Rule {
            user_agent,
            allow: OneOrMany::from_list(group.allow),
            disallow: OneOrMany::from_list(group.disallow),
            crawl_delay: group.crawl_delay,
        });
    }

    /// Flushes the last pending group unconditionally and produces the
    /// final [`RuleSet`], substituting the allow-all default when the stream
    /// produced zero groups.
    pub fn finish(mut self) -> RuleSet {
        self.flush();
        RuleSet::from_parts(self.rules, self.sitemaps, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::tokenize;

    fn parse(raw: &str) -> RuleSet {
        let mut accumulator = GroupAccumulator::new();
        for directive in tokenize(raw) {
            accumulator.apply(&directive);
        }
        accumulator.finish()
    }

    #[test]
    fn test_singleton_fields_collapse_to_scalars() {
        let rules = parse("User-agent: *\nAllow: /public");
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(rules.rules[0].user_agent, OneOrMany::One("*".to_string()));
        assert_eq!(
            rules.rules[0].allow,
            Some(OneOrMany::One("/public".to_string()))
        );
        assert_eq!(rules.rules[0].disallow, None);
    }

    #[test]
    fn test_consecutive_agents_form_one_group() {
        let rules = parse("User-agent: a\nUser-agent: b\nDisallow: /x");
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(
            rules.rules[0].user_agent,
            OneOrMany::Many(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            rules.rules[0].disallow,
            Some(OneOrMany::One("/x".to_string()))
        );
    }

    #[test]
    fn test_new_agent_after_directives_splits_group() {
        let rules = parse("User-agent: a\nDisallow: /x\nUser-agent: b\nDisallow: /y");
        assert_eq!(rules.rules.len(), 2);
        assert_eq!(rules.rules[0].user_agent, OneOrMany::One("a".to_string()));
        assert_eq!(
            rules.rules[0].disallow,
            Some(OneOrMany::One("/x".to_string()))
        );
        assert_eq!(rules.rules[1].user_agent, OneOrMany::One("b".to_string()));
        assert_eq!(
            rules.rules[1].disallow,
            Some(OneOrMany::One("/y".to_string()))
        );
    }

    #[test]
    fn test_crawl_delay_after_split_starts_fresh() {
        let rules = parse("User-agent: a\nCrawl-delay: 5\nUser-agent: b\nDisallow: /y");
        assert_eq!(rules.rules[0].crawl_delay, Some(5.0));
        assert_eq!(rules.rules[1].crawl_delay, None);
    }

    #[test]
    fn test_empty_input_defaults_to_allow_all() {
        let rules = parse("");
        assert_eq!(rules.rules, vec![Rule::allow_all()]);
        assert_eq!(rules.sitemap, None);
        assert_eq!(rules.host, None);

        let rules = parse("   \n \r\n  ");
        assert_eq!(rules.rules, vec![Rule::allow_all()]);
    }

    #[test]
    fn test_no_user_agent_still_collects_sitemap() {
        let rules = parse("Sitemap: https://x/sitemap.xml");
        assert_eq!(rules.rules, vec![Rule::allow_all()]);
        assert_eq!(
            rules.sitemap,
            Some(OneOrMany::One("https://x/sitemap.xml".to_string()))
        );
    }

    #[test]
    fn test_directives_before_first_agent_attach_to_it() {
        // No flush happens when the agent list is still empty, so directives
        // seen before the first user-agent line join its group
        let rules = parse("Disallow: /orphan\nUser-agent: a\nDisallow: /x");
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(
            rules.rules[0].disallow,
            Some(OneOrMany::Many(vec![
                "/orphan".to_string(),
                "/x".to_string()
            ]))
        );
    }

    #[test]
    fn test_agentless_document_discards_directives() {
        let rules = parse("Disallow: /orphan\nAllow: /other");
        assert_eq!(rules.rules, vec![Rule::allow_all()]);
    }

    #[test]
    fn test_multiple_sitemaps_accumulate_in_order() {
        let rules = parse("Sitemap: https://x/a.xml\nSitemap: https://x/b.xml");
        assert_eq!(
            rules.sitemap,
            Some(OneOrMany::Many(vec![
                "https://x/a.xml".to_string(),
                "https://x/b.xml".to_string()
            ]))
        );
    }

    #[test]
    fn test_first_host_wins() {
        let rules = parse("Host: https://first\nHost: https://second");
        assert_eq!(rules.host, Some("https://first".to_string()));
    }

    #[test]
    fn test_invalid_crawl_delay_ignored() {
        let rules = parse("User-agent: *\nCrawl-delay: abc\nDisallow: /x");
        assert_eq!(rules.rules[0].crawl_delay, None);
        assert_eq!(
            rules.rules[0].disallow,
            Some(OneOrMany::One("/x".to_string()))
        );
    }

    #[test]
    fn test_nan_crawl_delay_ignored() {
        let rules = parse("User-agent: *\nCrawl-delay: NaN");
        assert_eq!(rules.rules[0].crawl_delay, None);
    }

    #[test]
    fn test_later_crawl_delay_overwrites_in_same_group() {
        let rules = parse("User-agent: *\nCrawl-delay: 5\nCrawl-delay: 10");
        assert_eq!(rules.rules[0].crawl_delay, Some(10.0));
    }

    #[test]
    fn test_fractional_crawl_delay() {
        let rules = parse("User-agent: *\nCrawl-delay: 2.5");
        assert_eq!(rules.rules[0].crawl_delay, Some(2.5));
    }

    #[test]
    fn test_unknown_directives_ignored() {
        let rules = parse("User-agent: *\nClean-param: ref\nDisallow: /x");
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(
            rules.rules[0].disallow,
            Some(OneOrMany::One("/x".to_string()))
        );
    }

    #[test]
    fn test_key_case_insensitive_values_untouched() {
        let upper = parse("USER-AGENT: GoogleBot\nDISALLOW: /Admin");
        let lower = parse("user-agent: GoogleBot\ndisallow: /Admin");
        assert_eq!(upper, lower);
        assert_eq!(
            upper.rules[0].user_agent,
            OneOrMany::One("GoogleBot".to_string())
        );
        assert_eq!(
            upper.rules[0].disallow,
            Some(OneOrMany::One("/Admin".to_string()))
        );
    }

    #[test]
    fn test_ordering_preserved_within_group() {
        let rules = parse("User-agent: *\nDisallow: /b\nDisallow: /a\nDisallow: /c");
        assert_eq!(
            rules.rules[0].disallow,
            Some(OneOrMany::Many(vec![
                "/b".to_string(),
                "/a".to_string(),
                "/c".to_string()
            ]))
        );
    }
}
