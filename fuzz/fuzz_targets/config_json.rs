#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = alb_path_metrics::fuzzing::apply_config_from_json(data);
});
