//! Property-based tests for the toggle engine.
//!
//! These tests use proptest to generate PHP and YAML inputs and verify that
//! toggling twice gives back the original text, and that escaped variables
//! only ever match themselves.

#[cfg(test)]
mod proptest_tests {
    use crate::address::{escape_php_variable, SettingAddress};
    use crate::engine::{apply_block, toggle_line, toggle_many, BlockMode, LineChange};
    use crate::matcher::block::COMMENTED_BLOCK;
    use crate::matcher::SettingsLocalBlock;
    use crate::merge::yaml::{bool_at, parse_document, toggle_twig_debug};
    use proptest::prelude::*;
    use regex::Regex;

    /// Lines that can never assign a `$settings` value.
    fn noise_line() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 =;<>?()]{0,30}"
    }

    /// One setting line, active or commented out with `# `.
    fn setting_line() -> impl Strategy<Value = (String, bool)> {
        (
            "[ \t]{0,4}",
            prop::bool::ANY,
            "'[a-z.]{1,20}'",
        )
            .prop_map(|(indent, commented, value)| {
                let marker = if commented { "# " } else { "" };
                (
                    format!(
                        "{}{}$settings['cache']['bins']['render'] = {};",
                        indent, marker, value
                    ),
                    commented,
                )
            })
    }

    fn render() -> SettingAddress {
        SettingAddress::new(["cache", "bins", "render"]).unwrap()
    }

    // ============================================================================
    // single-line toggle property tests
    // ============================================================================

    proptest! {
        /// Property: toggling a setting twice restores the file byte for byte
        #[test]
        fn toggle_twice_is_identity(
            before in prop::collection::vec(noise_line(), 0..5),
            (line, _) in setting_line(),
            after in prop::collection::vec(noise_line(), 0..5),
            line_ending in prop_oneof![Just("\n"), Just("\r\n")],
        ) {
            let mut lines = before;
            lines.push(line);
            lines.extend(after);
            let text = lines.join(line_ending) + line_ending;

            let (once, _) = toggle_line(&text, &render()).unwrap();
            let (twice, _) = toggle_line(&once, &render()).unwrap();
            prop_assert_eq!(twice, text);
        }

        /// Property: the reported change follows the line's starting state
        #[test]
        fn toggle_reports_direction((line, commented) in setting_line()) {
            let (_, change) = toggle_line(&line, &render()).unwrap();
            if commented {
                prop_assert_eq!(change, LineChange::Uncommented("#"));
            } else {
                prop_assert_eq!(change, LineChange::CommentedOut);
            }
        }

        /// Property: a file without the setting is never changed
        #[test]
        fn absent_setting_leaves_text(lines in prop::collection::vec(noise_line(), 0..10)) {
            let text = lines.join("\n");
            let addresses = vec![render(), SettingAddress::new(["cache", "bins", "page"]).unwrap()];
            prop_assert_eq!(toggle_many(&text, &addresses).unwrap(), text);
        }
    }

    // ============================================================================
    // escaping property tests
    // ============================================================================

    proptest! {
        /// Property: an escaped variable matches exactly its own text
        #[test]
        fn escaped_variable_matches_itself(keys in prop::collection::vec("[!-~]{1,12}", 1..4)) {
            let address = SettingAddress::new(keys).unwrap();
            let var = address.php_variable();
            let re = Regex::new(&format!("^{}$", escape_php_variable(&var))).unwrap();

            prop_assert!(re.is_match(&var));
            let longer = format!("{}x", var);
            prop_assert!(!re.is_match(&longer));
        }
    }

    // ============================================================================
    // block and Twig property tests
    // ============================================================================

    proptest! {
        /// Property: toggling the inclusion block twice restores the file
        #[test]
        fn block_toggle_twice_is_identity(
            prefix in "[a-z ;\n]{0,40}",
            suffix in "[a-z ;\n]{0,40}",
        ) {
            let block = SettingsLocalBlock::default();
            let text = format!("{}{}{}", prefix, COMMENTED_BLOCK, suffix);

            let once = apply_block(&text, &block, BlockMode::Toggle).unwrap();
            let twice = apply_block(&once.text, &block, BlockMode::Toggle).unwrap();
            prop_assert_eq!(twice.text, text);
        }

        /// Property: toggling Twig debug twice restores both flags
        #[test]
        fn twig_toggle_twice_restores_flags(debug in prop::bool::ANY, auto_reload in prop::bool::ANY) {
            let yaml = format!(
                "parameters:\n  twig.config:\n    debug: {}\n    auto_reload: {}\n",
                debug, auto_reload
            );

            let (once, config) = toggle_twig_debug(&yaml, "twig.config").unwrap();
            prop_assert_eq!(config.debug, !debug);
            let (twice, _) = toggle_twig_debug(&once, "twig.config").unwrap();

            let doc = parse_document(&twice).unwrap();
            prop_assert_eq!(bool_at(&doc, &["parameters", "twig.config", "debug"]), Some(debug));
            prop_assert_eq!(
                bool_at(&doc, &["parameters", "twig.config", "auto_reload"]),
                Some(auto_reload)
            );
        }
    }
}
