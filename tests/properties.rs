use exec_params_fix::wrap_exec_params;
use proptest::prelude::*;

// No '.' in the alphabet, so the marker can never appear.
const PLAIN_TEXT: &str = "[a-zA-Z0-9_ ;,(){}\"\n\t]{0,200}";

proptest! {
    #[test]
    fn text_without_marker_is_unchanged(text in PLAIN_TEXT) {
        prop_assert_eq!(wrap_exec_params(&text), text.as_str());
    }

    #[test]
    fn single_call_is_wrapped_in_place(
        prefix in "[a-z0-9_ ;{}\n]{0,40}",
        query in "[A-Za-z0-9 $=*,]{1,30}",
        args in "[a-z_][a-z0-9_, ]{0,20}",
        suffix in "[a-z0-9_ ;{}\n]{0,40}",
    ) {
        let input = format!("{prefix}tx.exec(\"{query}\", {args}){suffix}");
        let expected = format!("{prefix}tx.exec(\"{query}\", pqxx::params({args})){suffix}");
        prop_assert_eq!(wrap_exec_params(&input), expected.as_str());
    }

    #[test]
    fn every_call_is_wrapped_independently(
        first in "[a-z_][a-z0-9_]{0,10}",
        second in "[a-z_][a-z0-9_, ]{0,10}",
        between in "[a-z0-9 ;\n]{0,30}",
    ) {
        let input = format!("tx.exec(\"A\", {first});{between}tx.exec(\"B\", {second});");
        let expected = format!(
            "tx.exec(\"A\", pqxx::params({first}));{between}tx.exec(\"B\", pqxx::params({second}));"
        );
        prop_assert_eq!(wrap_exec_params(&input), expected.as_str());
    }
}
