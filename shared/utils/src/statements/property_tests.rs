//! Property-based tests for statement extraction

use proptest::prelude::*;

use hazcode_models::SheetInput;

use super::{format_batch, match_h, match_p, normalize, process_all};

prop_compose! {
    fn arb_code(prefix: &'static str)(digits in 0..1000u32) -> String {
        format!("{}{:03}", prefix, digits)
    }
}

prop_compose! {
    /// Whitespace as it appears around `+` in extracted PDF text
    fn arb_gap()(gap in "[ \n\r\t]{0,3}") -> String {
        gap
    }
}

prop_compose! {
    fn arb_sheet_text()(text in "[A-Z0-9a-z :.+\n\r\t]{0,120}") -> String {
        text
    }
}

prop_compose! {
    /// H codes numbered 500 and up mixed with EUH codes numbered below 500
    fn arb_mixed_codes()(
        tokens in prop::collection::vec((any::<bool>(), 0..500u32, any::<bool>()), 0..8)
    ) -> String {
        let mut text = String::new();
        for (i, (is_euh, number, joined)) in tokens.into_iter().enumerate() {
            if i > 0 {
                text.push_str(if joined { "+" } else { " " });
            }
            if is_euh {
                text.push_str(&format!("EUH{:03}", number));
            } else {
                text.push_str(&format!("H{:03}", number + 500));
            }
        }
        text
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalizing twice gives the same text as normalizing once
    #[test]
    fn prop_normalize_idempotent(text in arb_sheet_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized text has no line breaks left
    #[test]
    fn prop_normalize_single_line(text in arb_sheet_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.contains('\n'));
        prop_assert!(!normalized.contains('\r'));
    }

    /// No hazard statement is ever built from the tail of an EUH code
    #[test]
    fn prop_h_never_takes_euh_tail(text in arb_mixed_codes()) {
        let normalized = normalize(&text);
        for statement in match_h(&normalized).iter() {
            for code in statement.split(" + ") {
                let number: u32 = code.trim_start_matches('H').parse().unwrap();
                prop_assert!(number >= 500, "{} taken from an EUH code in {:?}", code, normalized);
            }
        }
    }

    /// Compounds come out joined by exactly " + " whatever the input spacing
    #[test]
    fn prop_compound_spacing(
        first in arb_code("P"),
        second in arb_code("P"),
        before in arb_gap(),
        after in arb_gap(),
    ) {
        let text = format!("{}{}+{}{}", first, before, after, second);
        let expected = format!("{} + {}", first, second);

        let statements = match_p(&normalize(&text));
        prop_assert_eq!(statements.statements, vec![expected]);
    }

    /// Found lines precede not-found lines, each group in input order
    #[test]
    fn prop_found_lines_first(found_flags in prop::collection::vec(any::<bool>(), 0..8)) {
        let inputs: Vec<SheetInput> = found_flags
            .iter()
            .enumerate()
            .map(|(i, found)| {
                let text = if *found { "H315" } else { "nichts" };
                SheetInput::from_file(format!("sheet{}.pdf", i), text)
            })
            .collect();

        let output = format_batch(&process_all(&inputs));
        let labels: Vec<usize> = output
            .lines()
            .filter_map(|line| line.split('\t').next())
            .filter_map(|label| label.trim_start_matches("sheet").trim_end_matches(".pdf").parse().ok())
            .collect();

        let mut expected: Vec<usize> = (0..found_flags.len()).filter(|i| found_flags[*i]).collect();
        expected.extend((0..found_flags.len()).filter(|i| !found_flags[*i]));
        prop_assert_eq!(labels, expected);
    }
}
