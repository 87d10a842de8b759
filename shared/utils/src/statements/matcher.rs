//! Statement Matchers
//!
//! Finds H-, P- and EUH-statements in normalized text. A run of codes joined
//! by `+` is reported as one compound statement.

use hazcode_models::{StatementCategory, StatementSet};
use regex::Regex;
use std::sync::LazyLock;

static H_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"H[0-9]{3}(?:\s*\+\s*H[0-9]{3})*").expect("H pattern is valid")
});

static P_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"P[0-9]{3}(?:\s*\+\s*P[0-9]{3})*").expect("P pattern is valid")
});

static EUH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"EUH[0-9]{3}(?:\s*\+\s*EUH[0-9]{3})*").expect("EUH pattern is valid")
});

/// A category's pattern plus the prefix that must not directly precede a match
struct StatementMatcher {
    category: StatementCategory,
    pattern: &'static LazyLock<Regex>,
    excluded_prefix: Option<&'static str>,
}

static HAZARD: StatementMatcher = StatementMatcher {
    category: StatementCategory::Hazard,
    pattern: &H_PATTERN,
    // the H of an EUH code is not a hazard statement
    excluded_prefix: Some("EU"),
};

static PRECAUTIONARY: StatementMatcher = StatementMatcher {
    category: StatementCategory::Precautionary,
    pattern: &P_PATTERN,
    excluded_prefix: None,
};

static SUPPLEMENTAL: StatementMatcher = StatementMatcher {
    category: StatementCategory::Supplemental,
    pattern: &EUH_PATTERN,
    excluded_prefix: None,
};

impl StatementMatcher {
    fn find_all(&self, text: &str) -> StatementSet {
        let mut statements = StatementSet::new(self.category);
        let mut pos = 0;

        while let Some(m) = self.pattern.find_at(text, pos) {
            let rejected = self
                .excluded_prefix
                .is_some_and(|prefix| text[..m.start()].ends_with(prefix));

            if rejected {
                // Matches start with an ASCII letter, so the next byte is a char boundary
                pos = m.start() + 1;
                continue;
            }

            statements.insert(m.as_str());
            pos = m.end();
        }

        statements
    }
}

/// Hazard statements (`H315`, `H300 + H310`), excluding the tail of EUH codes
pub fn match_h(text: &str) -> StatementSet {
    HAZARD.find_all(text)
}

/// Precautionary statements (`P280`, `P305 + P351 + P338`)
pub fn match_p(text: &str) -> StatementSet {
    PRECAUTIONARY.find_all(text)
}

/// EU supplemental hazard statements (`EUH066`)
pub fn match_euh(text: &str) -> StatementSet {
    SUPPLEMENTAL.find_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statements(set: &StatementSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_simple_hazard_statements() {
        let text = "H315: Verursacht Hautreizungen. H319: Verursacht schwere Augenreizung. H335: Kann die Atemwege reizen.";
        assert_eq!(statements(&match_h(text)), vec!["H315", "H319", "H335"]);
    }

    #[test]
    fn test_hazard_skips_euh_codes() {
        let text = "Ergänzende Gefahrenhinweise EUH061 EUH066 H225";
        assert_eq!(statements(&match_h(text)), vec!["H225"]);
        assert_eq!(statements(&match_euh(text)), vec!["EUH061", "EUH066"]);
    }

    #[test]
    fn test_hazard_after_rejected_euh_compound() {
        // The EUH run is rejected as a whole; the H code inside it is found on rescan
        let text = "EUH001 + H315";
        assert_eq!(statements(&match_h(text)), vec!["H315"]);
    }

    #[test]
    fn test_compound_statements_are_atomic() {
        let text = "P261 P302 + P352 P305 + P351 + P338 P280";
        assert_eq!(
            statements(&match_p(text)),
            vec!["P261", "P302 + P352", "P305 + P351 + P338", "P280"]
        );
    }

    #[test]
    fn test_duplicates_removed() {
        let text = "H315 H319 H315 H319 H315";
        assert_eq!(statements(&match_h(text)), vec!["H315", "H319"]);
    }

    #[test]
    fn test_digit_count() {
        assert!(match_h("H31 only").is_empty());
        assert_eq!(statements(&match_h("H3155")), vec!["H315"]);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert!(match_h("h315").is_empty());
        assert!(match_p("p280").is_empty());
        assert!(match_euh("euh066").is_empty());
    }

    #[test]
    fn test_no_matches() {
        let set = match_p("Sicherheitsdatenblatt ohne Hinweise");
        assert!(set.is_empty());
        assert_eq!(set.category, StatementCategory::Precautionary);
    }
}
