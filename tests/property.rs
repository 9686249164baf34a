//! Property tests for identifier validation and block resolution

use depline::domain::{is_valid_identifier, resolve_lines};
use proptest::prelude::*;

proptest! {
    #[test]
    fn alphabetic_tokens_up_to_twenty_chars_pass(token in "[A-Za-z]{1,20}") {
        prop_assert!(is_valid_identifier(&token));
    }

    #[test]
    fn longer_tokens_fail(token in "[A-Za-z]{21,40}") {
        prop_assert!(!is_valid_identifier(&token));
    }

    #[test]
    fn tokens_containing_non_letters_fail(token in "[A-Za-z]{0,5}[0-9_ .:-][A-Za-z]{0,5}") {
        prop_assert!(!is_valid_identifier(&token));
    }

    #[test]
    fn root_only_blocks_resolve_to_the_first_identifier(
        ids in prop::collection::vec("[A-Za-z]{1,8}", 1..6)
    ) {
        let lines: Vec<String> = ids.iter().map(|id| format!("{}:", id)).collect();

        let resolved = resolve_lines(lines.iter().map(String::as_str)).unwrap();
        prop_assert_eq!(resolved, vec![ids[0].clone()]);
    }

    #[test]
    fn single_chain_resolves_leaf_first(ids in prop::collection::hash_set("[a-z]{4,8}", 3..6)) {
        // Distinct identifiers chained x0 -> x1 -> ... -> xn resolve to the
        // exact reverse of the chain.
        let ids: Vec<String> = ids.into_iter().collect();
        let mut lines = Vec::new();
        for pair in ids.windows(2) {
            lines.push(format!("{}:{}", pair[0], pair[1]));
        }
        lines.push(format!("{}:", ids[ids.len() - 1]));

        let resolved = resolve_lines(lines.iter().map(String::as_str)).unwrap();

        let mut expected: Vec<String> = ids.clone();
        expected.reverse();
        prop_assert_eq!(resolved, vec![expected.join(" ")]);
    }
}
