#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = alb_path_metrics::fuzzing::apply_config_from_toml(input);
    }
});
