use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use crate::config::constants::{
    EMAIL_GREETING_PENALTY, EMAIL_HASH_LENGTH, EMAIL_LINK_PENALTY, EMAIL_PATTERN_PENALTY,
    EMAIL_REPLY_TO_PENALTY,
};
use crate::enums::verdict::Verdict;
use crate::errors::{PhishGuardError, PhishGuardResult};
use crate::helpers::fingerprint::{capture_timestamp, content_fingerprint};
use crate::structs::check_outcome::{weighted, CheckOutcome};
use crate::structs::config::email_rules_config::EmailRulesConfig;
use crate::structs::config::pattern_category::PatternCategory;
use crate::structs::email_analysis::EmailAnalysis;
use crate::structs::score_card::{isolated, ScoreCard};

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^\s<>"']+|www\.[^\s<>"']+"#).expect("link pattern is valid")
});

// Header values run to the end of the line; no RFC 5322 unfolding.
static FROM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)From:\s*(.+)").expect("from pattern is valid")
});

static REPLY_TO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Reply-To:\s*(.+)").expect("reply-to pattern is valid")
});

#[derive(Debug, Clone)]
struct CompiledCategory {
    name: String,
    pattern: Regex,
}

/// Scores raw email text (headers and body) for phishing language.
#[derive(Debug, Clone)]
pub struct EmailAnalyzer {
    categories: Vec<CompiledCategory>,
    greeting: Option<Regex>,
}

impl EmailAnalyzer {
    pub fn new(rules: &EmailRulesConfig) -> PhishGuardResult<Self> {
        let categories = rules
            .patterns
            .iter()
            .map(compile_category)
            .collect::<PhishGuardResult<Vec<_>>>()?;

        let greeting = if rules.greetings.is_empty() {
            None
        } else {
            Some(compile_greeting(&rules.greetings)?)
        };

        Ok(Self { categories, greeting })
    }

    pub fn analyze(&self, email_text: &str) -> EmailAnalysis {
        log::info!("📧 Analyzing email ({} bytes)...", email_text.len());

        let email_hash = content_fingerprint(email_text, EMAIL_HASH_LENGTH);
        let mut card = ScoreCard::new();

        let (patterns, patterns_found) = isolated("patterns", || self.check_patterns(email_text))
            .unwrap_or_default();
        card.apply(patterns);

        let (links, links_found) = isolated("links", || check_links(email_text)).unwrap_or_default();
        card.apply(links);

        card.run("reply_to", || check_reply_to(email_text));
        card.run("greeting", || self.check_greeting(email_text));

        let (risk_score, findings) = card.into_parts();
        let verdict = Verdict::for_email_score(risk_score);
        log::debug!("Email {email_hash} scored {risk_score} ({verdict})");

        EmailAnalysis {
            email_hash,
            timestamp: capture_timestamp(),
            risk_score,
            verdict,
            findings,
            links_found,
            patterns_found,
        }
    }

    /// One entry per category with at least one hit, in category order.
    fn check_patterns(&self, email_text: &str) -> (CheckOutcome, Vec<String>) {
        let mut outcome = CheckOutcome::none();

        for category in &self.categories {
            let count = category.pattern.find_iter(email_text).count();
            if count == 0 {
                continue;
            }
            outcome.score = outcome.score.saturating_add(weighted(count, EMAIL_PATTERN_PENALTY));
            outcome.findings.push(format!("{}: {} instances", category.name, count));
        }

        let patterns_found = outcome.findings.clone();
        (outcome, patterns_found)
    }

    fn check_greeting(&self, email_text: &str) -> CheckOutcome {
        match &self.greeting {
            Some(pattern) if pattern.is_match(email_text) => {
                CheckOutcome::flag(EMAIL_GREETING_PENALTY, "Generic greeting used")
            }
            _ => CheckOutcome::none(),
        }
    }
}

fn compile_category(category: &PatternCategory) -> PhishGuardResult<CompiledCategory> {
    if category.name.trim().is_empty() {
        return Err(PhishGuardError::pattern_error("<unnamed>", "category name is empty"));
    }
    if category.terms.is_empty() || category.terms.iter().any(|t| t.trim().is_empty()) {
        return Err(PhishGuardError::pattern_error(&category.name, "terms must be non-empty"));
    }

    let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation(&category.terms)))
        .case_insensitive(true)
        .build()
        .map_err(|e| PhishGuardError::pattern_error(&category.name, &e.to_string()))?;

    Ok(CompiledCategory {
        name: category.name.clone(),
        pattern,
    })
}

fn compile_greeting(greetings: &[String]) -> PhishGuardResult<Regex> {
    RegexBuilder::new(&format!("Dear (?:{})", alternation(greetings)))
        .case_insensitive(true)
        .build()
        .map_err(|e| PhishGuardError::pattern_error("greetings", &e.to_string()))
}

fn alternation(terms: &[String]) -> String {
    terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|")
}

pub fn extract_links(email_text: &str) -> Vec<String> {
    LINK_PATTERN
        .find_iter(email_text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn check_links(email_text: &str) -> (CheckOutcome, Vec<String>) {
    let links = extract_links(email_text);
    if links.is_empty() {
        return (CheckOutcome::none(), links);
    }

    let outcome = CheckOutcome::flag(
        weighted(links.len(), EMAIL_LINK_PENALTY),
        format!("Found {} URLs in email", links.len()),
    );
    (outcome, links)
}

fn first_header<'a>(pattern: &Regex, email_text: &'a str) -> Option<&'a str> {
    pattern
        .captures(email_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Raw string comparison: `"A" <a@x>` and `a@x` are considered different.
pub fn check_reply_to(email_text: &str) -> CheckOutcome {
    match (first_header(&FROM_PATTERN, email_text), first_header(&REPLY_TO_PATTERN, email_text)) {
        (Some(from), Some(reply_to)) if from != reply_to => {
            CheckOutcome::flag(EMAIL_REPLY_TO_PENALTY, "From and Reply-To addresses don't match")
        }
        _ => CheckOutcome::none(),
    }
}
