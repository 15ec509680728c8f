//! News keyword rules.
//!
//! Rules are checked in precedence order across all snippets; the first rule
//! that matches any snippet wins.

use std::sync::LazyLock;

use regex::Regex;

use continuum_core::models::NarrativeRole;

macro_rules! news_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

news_pattern!(RE_AI, r"(?i)\bai\b");
news_pattern!(RE_AI_THREAT, r"(?i)\b(?:threat|competition|disruption)");
news_pattern!(RE_COMPETITOR, r"(?i)\bcompetitor|\bmarket share\b");
news_pattern!(RE_VALUATION, r"(?i)\b(?:valuation|multiple|expensive)");
news_pattern!(RE_EARNINGS, r"(?i)\b(?:earnings|guidance|revenue)");

/// Outcome of a matched news rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSignal {
    pub rule: NewsRule,
    pub primary: NarrativeRole,
    /// The moat hypothesis is contradicted outright.
    pub contradicts_moat: bool,
}

/// Keyword rules in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NewsRule {
    AiThreat,
    Competitor,
    Valuation,
    Earnings,
}

impl NewsRule {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::AiThreat => "AI threat",
            Self::Competitor => "competitor / market share",
            Self::Valuation => "valuation",
            Self::Earnings => "earnings / guidance",
        }
    }
}

fn matches(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(text))
}

fn rule_for(text: &str) -> Option<NewsRule> {
    if matches(&RE_AI, text) && matches(&RE_AI_THREAT, text) {
        Some(NewsRule::AiThreat)
    } else if matches(&RE_COMPETITOR, text) {
        Some(NewsRule::Competitor)
    } else if matches(&RE_VALUATION, text) {
        Some(NewsRule::Valuation)
    } else if matches(&RE_EARNINGS, text) {
        Some(NewsRule::Earnings)
    } else {
        None
    }
}

/// Classify a set of news snippets. `None` when no rule matches.
pub fn classify(snippets: &[String]) -> Option<NewsSignal> {
    let rule = snippets.iter().filter_map(|s| rule_for(s)).min()?;
    let (primary, contradicts_moat) = match rule {
        NewsRule::AiThreat => (NarrativeRole::Competition, true),
        NewsRule::Competitor => (NarrativeRole::Competition, false),
        NewsRule::Valuation => (NarrativeRole::Valuation, false),
        NewsRule::Earnings => (NarrativeRole::Growth, false),
    };
    Some(NewsSignal {
        rule,
        primary,
        contradicts_moat,
    })
}
