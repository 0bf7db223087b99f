#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(rules) = alb_path_metrics::fuzzing::rules_from_json_input(input) {
            for rule in rules.rules() {
                debug_assert!(!rule.host().is_empty());
                debug_assert!(!rule.route().is_empty());
                if let Some(method) = rule.method() {
                    debug_assert_eq!(method, method.to_ascii_uppercase());
                }
            }
        }
    }
});
