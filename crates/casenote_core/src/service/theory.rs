//! Canned legal-theory responses.
//!
//! A fixed keyword table is scanned in priority order; the first keyword
//! found anywhere in the prompt (ignoring case) selects the response.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub const IMMUNITY_RESPONSE: &str =
    "Sovereign immunity only applies unless you can show statutory violations.";
pub const CONSPIRACY_RESPONSE: &str =
    "Prove shared intent, agreement, and overt act. Don't guess — prove.";
pub const DEFAULT_RESPONSE: &str =
    "No hallucinations. Stick to the statutes. Play devil’s advocate, but anchor it in law.";

/// Category selected by the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TheoryTopic {
    Immunity,
    Conspiracy,
    General,
}

impl TheoryTopic {
    pub fn response(self) -> &'static str {
        match self {
            Self::Immunity => IMMUNITY_RESPONSE,
            Self::Conspiracy => CONSPIRACY_RESPONSE,
            Self::General => DEFAULT_RESPONSE,
        }
    }
}

// Priority order: earlier entries win when several keywords occur.
static KEYWORD_TABLE: Lazy<Vec<(Regex, TheoryTopic)>> = Lazy::new(|| {
    [
        ("immunity", TheoryTopic::Immunity),
        ("conspiracy", TheoryTopic::Conspiracy),
    ]
    .into_iter()
    .map(|(keyword, topic)| {
        let matcher = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .expect("valid keyword regex");
        (matcher, topic)
    })
    .collect()
});

/// Returns the topic whose keyword appears first in table order.
pub fn classify_theory_topic(text: &str) -> TheoryTopic {
    KEYWORD_TABLE
        .iter()
        .find(|(matcher, _)| matcher.is_match(text))
        .map_or(TheoryTopic::General, |(_, topic)| *topic)
}

/// Returns the canned response for a theory prompt.
pub fn classify_theory(text: &str) -> &'static str {
    classify_theory_topic(text).response()
}

#[cfg(test)]
mod tests {
    use super::{classify_theory_topic, TheoryTopic};

    #[test]
    fn immunity_outranks_conspiracy() {
        assert_eq!(
            classify_theory_topic("a conspiracy to claim immunity"),
            TheoryTopic::Immunity
        );
    }

    #[test]
    fn keyword_inside_a_longer_word_still_matches() {
        assert_eq!(
            classify_theory_topic("co-conspiracy theory"),
            TheoryTopic::Conspiracy
        );
    }

    #[test]
    fn empty_prompt_gets_default() {
        assert_eq!(classify_theory_topic(""), TheoryTopic::General);
    }
}
