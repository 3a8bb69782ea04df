//! Response rules
//!
//! An ordered list of (keyword set, reply) pairs evaluated by a single generic
//! matcher. Rules are data, not code, so the table is testable on its own.

use rand::Rng;
use std::time::Duration;

/// One scripted rule
///
/// Matches when the case-folded input contains any keyword as a substring.
/// Keywords are stored lowercase.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Ordered rule table with a fallback that matches anything
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<ResponseRule>,
    fallback: &'static str,
}

impl RuleBook {
    pub fn new(rules: Vec<ResponseRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Answer an input
    ///
    /// Case-folds the input, then walks the rules in declaration order; the
    /// first rule with any matching keyword wins. Keyword sets may overlap, so
    /// list order is the tie-break. Total: unmatched input gets the fallback.
    pub fn respond(&self, input: &str) -> &'static str {
        let folded = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| folded.contains(kw)))
            .map(|rule| rule.reply)
            .unwrap_or(self.fallback)
    }
}

/// How long the assistant pretends to type before a reply surfaces
///
/// Uniform 1-2 seconds. This is a scheduling decision made by the caller; the
/// engine itself stays synchronous.
pub fn typing_delay() -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(1000..2000))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> RuleBook {
        RuleBook::new(
            vec![
                ResponseRule {
                    keywords: &["experience", "work"],
                    reply: "the experience answer",
                },
                ResponseRule {
                    keywords: &["work", "skills"],
                    reply: "the skills answer",
                },
            ],
            "the fallback answer",
        )
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(book().respond("tell me about your skills"), "the skills answer");
    }

    #[test]
    fn test_substring_not_word_match() {
        // "homework" contains "work"; the engine deliberately does not tokenize
        assert_eq!(book().respond("homework"), "the experience answer");
    }

    #[test]
    fn test_input_is_case_folded() {
        assert_eq!(book().respond("MY EXPERIENCE"), "the experience answer");
    }

    #[test]
    fn test_overlap_resolved_by_rule_order() {
        // "work" appears in both rules; the first one in the list wins
        assert_eq!(book().respond("work"), "the experience answer");
    }

    #[test]
    fn test_fallback_is_total() {
        assert_eq!(book().respond("zzz"), "the fallback answer");
        assert_eq!(book().respond(""), "the fallback answer");
    }

    #[test]
    fn test_portfolio_experience_question() {
        let book = crate::content::rule_book();
        let reply = book.respond("Tell me about Rafa experience");
        assert!(reply.contains("8 years of experience"));
    }

    #[test]
    fn test_portfolio_greeting() {
        let book = crate::content::rule_book();
        assert!(book.respond("hello").contains("virtual assistant"));
    }

    #[test]
    fn test_typing_delay_bounds() {
        for _ in 0..50 {
            let d = typing_delay();
            assert!(d >= Duration::from_millis(1000));
            assert!(d < Duration::from_millis(2000));
        }
    }
}
