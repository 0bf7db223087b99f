#![no_main]

use libfuzzer_sys::fuzz_target;

const RULES: &str = r#"[
    {"host": "example.com", "path": "^/api/", "route": "api"},
    {"host": "example.com", "path": "^/", "route": "root", "method": "get"}
]"#;

fuzz_target!(|data: &[u8]| {
    let Some((&limits, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let Ok(rules) = alb_path_metrics::fuzzing::rules_from_json_input(RULES) else {
        return;
    };
    let max_batch_size = usize::from(limits & 0x0f);
    let max_values = usize::from(limits >> 4);
    let result =
        alb_path_metrics::fuzzing::aggregate_lines_input(&rules, text, max_batch_size, max_values);
    if max_batch_size == 0 || max_values == 0 {
        debug_assert!(result.is_err());
    } else {
        debug_assert!(result.is_ok());
    }
});
