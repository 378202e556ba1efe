//! Keyword-based FAQ responder.
//!
//! Answers visitor questions about the banner's owner by walking an ordered
//! rule table. Matching is case-insensitive substring search.

mod rules;

use tracing::debug;

pub use rules::{Rule, BUILTIN_RULES, FALLBACK, OWNER};

/// Answers questions using a rule table.
///
/// Tries rules in order; the first match wins, otherwise the fallback menu
/// is returned.
#[derive(Debug, Clone)]
pub struct Responder {
    owner: String,
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl Responder {
    /// Create with the built-in rules.
    pub fn builtin(owner: impl Into<String>) -> Self {
        Self::with_rules(owner, BUILTIN_RULES.to_vec(), FALLBACK)
    }

    /// Create with specific rules (for testing).
    pub fn with_rules(owner: impl Into<String>, rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self {
            owner: owner.into(),
            rules,
            fallback,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The first rule matching `question`, if any.
    pub fn find_rule(&self, question: &str) -> Option<&Rule> {
        let lower = question.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lower))
    }

    /// Answer `question`.
    pub fn respond(&self, question: &str) -> String {
        let template = match self.find_rule(question) {
            Some(rule) => {
                debug!(topic = rule.topic, "faq rule matched");
                rule.answer
            }
            None => {
                debug!("no faq rule matched");
                self.fallback
            }
        };
        template.replace(OWNER, &self.owner)
    }
}
